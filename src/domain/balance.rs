use std::fmt;

use chrono::{DateTime, Local};
use strum::IntoEnumIterator;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock time captured once at the start of a run and shared by every
/// record exported in that run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTimestamp(Box<str>);

impl RunTimestamp {
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    pub fn from_datetime(datetime: DateTime<Local>) -> Self {
        Self(datetime.format(TIMESTAMP_FORMAT).to_string().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Columns of the balances sheet, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum BalanceColumn {
    Timestamp,
    Asset,
    #[strum(serialize = "Account ID")]
    AccountId,
    Balance,
    Reserved,
}

pub fn header_row() -> Vec<String> {
    BalanceColumn::iter().map(|column| column.to_string()).collect()
}

/// One (asset, account) balance as reported by the exchange. Amounts keep the
/// exchange's exact decimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRecord {
    pub timestamp: RunTimestamp,
    pub asset: String,
    pub account_id: String,
    pub balance: String,
    pub reserved: String,
}

impl BalanceRecord {
    pub fn cell(&self, column: BalanceColumn) -> &str {
        match column {
            BalanceColumn::Timestamp => self.timestamp.as_str(),
            BalanceColumn::Asset => &self.asset,
            BalanceColumn::AccountId => &self.account_id,
            BalanceColumn::Balance => &self.balance,
            BalanceColumn::Reserved => &self.reserved,
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        BalanceColumn::iter()
            .map(|column| self.cell(column).to_owned())
            .collect()
    }
}

impl fmt::Display for BalanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Asset: {}, Account ID: {}, Balance: {}, Reserved: {}",
            self.asset, self.account_id, self.balance, self.reserved
        )
    }
}
