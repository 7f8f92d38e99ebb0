// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tradebook::{cli, commands, ledger};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("add", sub)) => commands::add::handle(sub)?,
        Some(("show", sub)) => commands::show::handle(sub)?,
        Some(("path", sub)) => {
            let dir = ledger::export_dir(sub.get_one::<String>("dir").map(|s| s.as_str()))?;
            println!(
                "{}",
                ledger::ledger_path(&dir, ledger::active_year()).display()
            );
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
