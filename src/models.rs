// Copyright (c) 2025 Tradebook Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a transaction bought or sold the security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Purchase,
    Sale,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Purchase => "Purchase",
            Side::Sale => "Sale",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security class of the traded instrument. Closed set; the ledger file
/// stores the hyphenated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityClass {
    Equity,
    #[serde(rename = "Equity-Fund")]
    EquityFund,
    Bond,
    #[serde(rename = "Bond-Fund")]
    BondFund,
    #[serde(rename = "Mixed-Fund")]
    MixedFund,
    #[serde(rename = "Other-Security")]
    OtherSecurity,
    #[serde(rename = "Other-Fund")]
    OtherFund,
}

impl SecurityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityClass::Equity => "Equity",
            SecurityClass::EquityFund => "Equity-Fund",
            SecurityClass::Bond => "Bond",
            SecurityClass::BondFund => "Bond-Fund",
            SecurityClass::MixedFund => "Mixed-Fund",
            SecurityClass::OtherSecurity => "Other-Security",
            SecurityClass::OtherFund => "Other-Fund",
        }
    }
}

impl std::fmt::Display for SecurityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("company must not be empty")]
    EmptyCompany,
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("price must not be negative")]
    NegativePrice,
    #[error("fee must not be negative")]
    NegativeFee,
}

/// One recorded buy or sell. Field renames match the ledger file's column
/// headers; `total` is computed once at construction and stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Date", with = "ledger_date")]
    pub date: NaiveDate,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Type")]
    pub side: Side,
    #[serde(rename = "Category")]
    pub class: SecurityClass,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "Fee")]
    pub fee: Decimal,
    #[serde(rename = "Total")]
    pub total: Decimal,
}

impl Transaction {
    /// Validates the fields and derives the stored total
    /// (quantity x price + fee).
    pub fn new(
        date: NaiveDate,
        company: &str,
        side: Side,
        class: SecurityClass,
        quantity: u32,
        price: Decimal,
        fee: Decimal,
    ) -> Result<Self, TransactionError> {
        let company = company.trim();
        if company.is_empty() {
            return Err(TransactionError::EmptyCompany);
        }
        if quantity == 0 {
            return Err(TransactionError::ZeroQuantity);
        }
        if price < Decimal::ZERO {
            return Err(TransactionError::NegativePrice);
        }
        if fee < Decimal::ZERO {
            return Err(TransactionError::NegativeFee);
        }
        let total = Decimal::from(quantity) * price + fee;
        Ok(Transaction {
            date,
            company: company.to_string(),
            side,
            class,
            quantity,
            price,
            fee,
            total,
        })
    }
}

/// Dates in the ledger file are day-month-year text.
mod ledger_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
