// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{Side, Transaction};

/// The three figures shown under the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub purchases: Decimal,
    pub sales: Decimal,
    pub fees: Decimal,
}

pub fn totals(rows: &[Transaction]) -> Totals {
    let mut t = Totals::default();
    for row in rows {
        match row.side {
            Side::Purchase => t.purchases += row.total,
            Side::Sale => t.sales += row.total,
        }
        t.fees += row.fee;
    }
    t
}
