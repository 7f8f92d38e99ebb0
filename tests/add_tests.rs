// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tempfile::tempdir;
use tradebook::{cli, commands::add, ledger};

fn run_add(args: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    if let Some(("add", sub)) = matches.subcommand() {
        add::handle(sub)
    } else {
        panic!("no add subcommand");
    }
}

#[test]
fn add_appends_one_record_with_exact_total() {
    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();
    run_add(&[
        "tradebook", "add",
        "--dir", &dir_str,
        "--date", "2025-03-01",
        "--company", "ACME AG",
        "--type", "purchase",
        "--category", "equity-fund",
        "--quantity", "3",
        "--price", "10.10",
        "--fee", "0.25",
    ])
    .unwrap();

    let path = ledger::ledger_path(dir.path(), ledger::active_year());
    let rows = ledger::load_all(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].company, "ACME AG");
    assert_eq!(rows[0].quantity, 3);
    assert_eq!(rows[0].total, "30.55".parse::<Decimal>().unwrap());
}

#[test]
fn fee_defaults_to_zero() {
    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();
    run_add(&[
        "tradebook", "add",
        "--dir", &dir_str,
        "--company", "ACME",
        "--type", "sale",
        "--category", "bond",
        "--quantity", "2",
        "--price", "4.50",
    ])
    .unwrap();

    let path = ledger::ledger_path(dir.path(), ledger::active_year());
    let rows = ledger::load_all(&path).unwrap();
    assert_eq!(rows[0].fee, Decimal::ZERO);
    assert_eq!(rows[0].total, "9.00".parse::<Decimal>().unwrap());
}

#[test]
fn whitespace_company_is_rejected_without_writing() {
    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();
    let res = run_add(&[
        "tradebook", "add",
        "--dir", &dir_str,
        "--company", "   ",
        "--type", "purchase",
        "--category", "equity",
        "--quantity", "1",
        "--price", "1.00",
    ]);
    assert!(res.is_err());

    let path = ledger::ledger_path(dir.path(), ledger::active_year());
    assert!(!path.exists());
    assert!(ledger::load_all(&path).unwrap().is_empty());
}

#[test]
fn file_year_is_pinned_to_the_run_year_not_the_date() {
    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();
    run_add(&[
        "tradebook", "add",
        "--dir", &dir_str,
        "--date", "2020-05-05",
        "--company", "Old Trade",
        "--type", "purchase",
        "--category", "mixed-fund",
        "--quantity", "1",
        "--price", "1.00",
    ])
    .unwrap();

    let pinned = ledger::ledger_path(dir.path(), ledger::active_year());
    assert!(pinned.exists());
    assert!(!ledger::ledger_path(dir.path(), 2020).exists());

    let rows = ledger::load_all(&pinned).unwrap();
    assert_eq!(rows[0].date.to_string(), "2020-05-05");
}
