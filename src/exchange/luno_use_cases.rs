use std::time::Duration;

use error_stack::{report, ResultExt};
use tracing::instrument;

use crate::domain::balance::{BalanceRecord, RunTimestamp};

use super::{
    luno::client::{GetBalancesRequest, GetBalancesResponse, LunoClient},
    use_cases::{ExchangeUseCases, ExchangeUseCasesError},
};

/// Upper bound for the whole balance listing, connection included.
pub const FETCH_DEADLINE: Duration = Duration::new(10, 0);

#[derive(Debug)]
pub struct LunoUseCases {
    client: LunoClient,
    deadline: Duration,
}

impl LunoUseCases {
    pub fn new(client: LunoClient, deadline: Duration) -> Self {
        Self { client, deadline }
    }
}

fn records_from_response(
    response: &GetBalancesResponse,
    timestamp: &RunTimestamp,
) -> Vec<BalanceRecord> {
    response
        .balances()
        .iter()
        .map(|balance| BalanceRecord {
            timestamp: timestamp.clone(),
            asset: balance.asset.clone(),
            account_id: balance.account_id.clone(),
            balance: balance.balance.clone(),
            reserved: balance.reserved.clone(),
        })
        .collect()
}

#[async_trait::async_trait]
impl ExchangeUseCases for LunoUseCases {
    fn exchange_name(&self) -> &'static str {
        "Luno"
    }

    #[instrument(skip(self), name = "LunoUseCases::fetch_balances")]
    async fn fetch_balances(
        &self,
        timestamp: &RunTimestamp,
    ) -> error_stack::Result<Vec<BalanceRecord>, ExchangeUseCasesError> {
        let request = GetBalancesRequest::default();

        let response = tokio::time::timeout(self.deadline, self.client.get_balances(&request))
            .await
            .map_err(|_| {
                report!(ExchangeUseCasesError::Timeout {
                    exchange: self.exchange_name(),
                    deadline: self.deadline,
                })
            })?
            .change_context(ExchangeUseCasesError::FetchBalancesError(
                self.exchange_name(),
            ))?;

        for balance in response.balances() {
            if balance.unconfirmed.parse::<f64>().is_ok_and(|amount| amount != 0.0) {
                tracing::debug!(
                    "{} account {} has {} unconfirmed",
                    balance.asset,
                    balance.account_id,
                    balance.unconfirmed
                );
            }
        }

        let records = records_from_response(&response, timestamp);
        for record in &records {
            tracing::info!("{}", record);
        }

        Ok(records)
    }
}
