use std::time::Duration;

use thiserror::Error;

use crate::domain::balance::{BalanceRecord, RunTimestamp};

#[derive(Error, Debug)]
pub enum ExchangeUseCasesError {
    #[error("Failed to fetch balances from {0}")]
    FetchBalancesError(&'static str),
    #[error("Fetching balances from {exchange} exceeded the {deadline:?} deadline")]
    Timeout {
        exchange: &'static str,
        deadline: Duration,
    },
}

#[async_trait::async_trait]
pub trait ExchangeUseCases: Send + Sync {
    fn exchange_name(&self) -> &'static str;

    /// Lists every balance on the account, stamping each record with `timestamp`.
    async fn fetch_balances(
        &self,
        timestamp: &RunTimestamp,
    ) -> error_stack::Result<Vec<BalanceRecord>, ExchangeUseCasesError>;
}
