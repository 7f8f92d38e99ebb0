// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::show;
use crate::ledger;
use crate::models::Transaction;
use crate::utils::{parse_class, parse_date, parse_decimal, parse_side};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let date = match m.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let company = m.get_one::<String>("company").unwrap();
    let side = parse_side(m.get_one::<String>("type").unwrap())?;
    let class = parse_class(m.get_one::<String>("category").unwrap())?;
    let quantity = *m.get_one::<u32>("quantity").unwrap();
    let price = parse_decimal(m.get_one::<String>("price").unwrap())?;
    let fee = parse_decimal(m.get_one::<String>("fee").unwrap())?;

    let tx = Transaction::new(date, company, side, class, quantity, price, fee)?;

    // The file is always this year's, even when --date falls in another year.
    let dir = ledger::export_dir(m.get_one::<String>("dir").map(|s| s.as_str()))?;
    let path = ledger::ledger_path(&dir, ledger::active_year());
    ledger::append(&path, tx)?;
    println!(
        "Saved: {}",
        path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    );

    let rows = ledger::load_all(&path)?;
    show::render(&rows);
    Ok(())
}
