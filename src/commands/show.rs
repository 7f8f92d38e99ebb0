// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger;
use crate::models::Transaction;
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let dir = ledger::export_dir(m.get_one::<String>("dir").map(|s| s.as_str()))?;
    let year = m
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(ledger::active_year);
    let path = ledger::ledger_path(&dir, year);

    // A broken file degrades to "nothing to show", it never takes the
    // process down.
    let rows = match ledger::load_all(&path) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Could not load ledger: {}", e);
            return Ok(());
        }
    };
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        render(&rows);
    }
    Ok(())
}

/// Table in insertion order plus the three totals lines.
pub fn render(rows: &[Transaction]) {
    if rows.is_empty() {
        println!("No transactions recorded yet.");
        return;
    }
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.format("%d-%m-%Y").to_string(),
                r.company.clone(),
                r.side.to_string(),
                r.class.to_string(),
                r.quantity.to_string(),
                format!("{:.2}", r.price),
                format!("{:.2}", r.fee),
                format!("{:.2}", r.total),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Date", "Company", "Type", "Category", "Quantity", "Price", "Fee", "Total"],
            table_rows,
        )
    );
    let t = summary::totals(rows);
    println!("Total Purchases: {}", fmt_money(&t.purchases));
    println!("Total Sales: {}", fmt_money(&t.sales));
    println!("Total Fees: {}", fmt_money(&t.fees));
}
