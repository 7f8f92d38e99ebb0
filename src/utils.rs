// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::models::{SecurityClass, Side};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_side(s: &str) -> Result<Side> {
    match s.to_lowercase().as_str() {
        "purchase" => Ok(Side::Purchase),
        "sale" => Ok(Side::Sale),
        _ => Err(anyhow::anyhow!("Unknown type '{}' (use purchase|sale)", s)),
    }
}

pub fn parse_class(s: &str) -> Result<SecurityClass> {
    match s.to_lowercase().as_str() {
        "equity" => Ok(SecurityClass::Equity),
        "equity-fund" => Ok(SecurityClass::EquityFund),
        "bond" => Ok(SecurityClass::Bond),
        "bond-fund" => Ok(SecurityClass::BondFund),
        "mixed-fund" => Ok(SecurityClass::MixedFund),
        "other-security" => Ok(SecurityClass::OtherSecurity),
        "other-fund" => Ok(SecurityClass::OtherFund),
        _ => Err(anyhow::anyhow!(
            "Unknown category '{}' (use equity|equity-fund|bond|bond-fund|mixed-fund|other-security|other-fund)",
            s
        )),
    }
}

/// Two decimal places with the currency symbol, e.g. `€12.50`.
pub fn fmt_money(d: &Decimal) -> String {
    format!("€{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
