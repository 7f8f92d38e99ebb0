// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

const CATEGORIES: [&str; 7] = [
    "equity",
    "equity-fund",
    "bond",
    "bond-fund",
    "mixed-fund",
    "other-security",
    "other-fund",
];

fn dir_arg() -> Arg {
    Arg::new("dir")
        .long("dir")
        .help("Export directory (defaults to the platform data dir)")
}

pub fn build_cli() -> Command {
    Command::new("tradebook")
        .about("Securities transaction entry and yearly ledger")
        .subcommand(
            Command::new("add")
                .about("Record one purchase or sale into this year's ledger")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Transaction date, YYYY-MM-DD (defaults to today)"),
                )
                .arg(Arg::new("company").long("company").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .value_parser(["purchase", "sale"]),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .required(true)
                        .value_parser(CATEGORIES),
                )
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .required(true)
                        .value_parser(value_parser!(u32).range(1..)),
                )
                .arg(Arg::new("price").long("price").required(true))
                .arg(Arg::new("fee").long("fee").default_value("0"))
                .arg(dir_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Display recorded transactions and summary totals")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .help("Ledger year (defaults to the current year)"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue))
                .arg(dir_arg()),
        )
        .subcommand(
            Command::new("path")
                .about("Print the ledger file path for the active year")
                .arg(dir_arg()),
        )
}
