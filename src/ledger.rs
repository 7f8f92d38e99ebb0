// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Datelike;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Transaction;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.tradebook", "Tradebook", "tradebook"));

const LEDGER_STEM: &str = "securities_ledger";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger file '{path}' appears to be open in another program; close it and retry")]
    Locked { path: PathBuf },
    #[error("could not parse ledger file: {0}")]
    Malformed(csv::Error),
    #[error("ledger I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves the export directory (explicit override, or the platform data
/// dir) and creates it if absent.
pub fn export_dir(override_dir: Option<&str>) -> Result<PathBuf> {
    let dir = match override_dir {
        Some(d) => PathBuf::from(d),
        None => ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?
            .data_dir()
            .to_path_buf(),
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create export dir {}", dir.display()))?;
    Ok(dir)
}

/// The calendar year the program runs in. File identity is pinned to this,
/// not to each transaction's own date.
pub fn active_year() -> i32 {
    chrono::Local::now().year()
}

pub fn ledger_path(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("{}_{}.csv", LEDGER_STEM, year))
}

/// Reads the whole year file in order. A missing file is an empty ledger,
/// not an error.
pub fn load_all(path: &Path) -> Result<Vec<Transaction>, LedgerError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error(e, path)),
    };
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        rows.push(rec.map_err(|e| csv_error(e, path))?);
    }
    Ok(rows)
}

/// Appends one record: full read, push, full rewrite. The rewrite goes
/// through a sibling temp file plus rename so prior rows survive a failed
/// write.
pub fn append(path: &Path, tx: Transaction) -> Result<(), LedgerError> {
    let mut rows = load_all(path)?;
    rows.push(tx);

    let tmp = path.with_extension("csv.tmp");
    if let Err(e) = write_rows(&tmp, &rows) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path).map_err(|e| io_error(e, path))?;
    Ok(())
}

fn write_rows(tmp: &Path, rows: &[Transaction]) -> Result<(), LedgerError> {
    let file = File::create(tmp).map_err(|e| io_error(e, tmp))?;
    let mut wtr = csv::Writer::from_writer(file);
    for row in rows {
        wtr.serialize(row).map_err(|e| csv_error(e, tmp))?;
    }
    wtr.flush().map_err(|e| io_error(e, tmp))?;
    Ok(())
}

fn io_error(e: std::io::Error, path: &Path) -> LedgerError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        LedgerError::Locked {
            path: path.to_path_buf(),
        }
    } else {
        LedgerError::Io(e)
    }
}

fn csv_error(e: csv::Error, path: &Path) -> LedgerError {
    if !e.is_io_error() {
        return LedgerError::Malformed(e);
    }
    match e.into_kind() {
        csv::ErrorKind::Io(ioe) => io_error(ioe, path),
        _ => LedgerError::Io(std::io::Error::other("csv I/O error")),
    }
}
