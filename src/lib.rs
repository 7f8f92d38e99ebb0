// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod ledger;
pub mod models;
pub mod summary;
pub mod utils;
pub mod commands;
