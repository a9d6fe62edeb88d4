use std::{fmt, sync::Arc};

use error_stack::ResultExt;
use tracing::instrument;

use crate::{
    domain::{
        balance::{header_row, BalanceRecord, RunTimestamp},
        balance_repository::BalanceRepository,
        routine::{Routine, RoutineError},
    },
    exchange::use_cases::ExchangeUseCases,
};

/// Fetches every balance from one exchange and appends them to the repository
/// as a single batch.
pub struct ExportBalancesRoutine {
    routine_name: String,
    exchange: Arc<dyn ExchangeUseCases>,
    repository: Arc<dyn BalanceRepository>,
}

impl fmt::Debug for ExportBalancesRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportBalancesRoutine")
            .field("routine_name", &self.routine_name)
            .finish()
    }
}

impl ExportBalancesRoutine {
    pub fn new(
        exchange: Arc<dyn ExchangeUseCases>,
        repository: Arc<dyn BalanceRepository>,
    ) -> Self {
        Self {
            routine_name: format!("{} Balances", exchange.exchange_name()),
            exchange,
            repository,
        }
    }
}

// The header goes in front only when the target holds no rows at all.
fn rows_to_append(existing_rows: usize, records: &[BalanceRecord]) -> Vec<Vec<String>> {
    let header = (existing_rows == 0).then(header_row);
    header
        .into_iter()
        .chain(records.iter().map(BalanceRecord::to_row))
        .collect()
}

#[async_trait::async_trait]
impl Routine for ExportBalancesRoutine {
    fn name(&self) -> &str {
        self.routine_name.as_str()
    }

    #[instrument(skip(self), name = "ExportBalancesRoutine::run")]
    async fn run(&self) -> error_stack::Result<usize, RoutineError> {
        let timestamp = RunTimestamp::now();

        tracing::trace!("{}: ☁️  Getting balances from exchange", self.name());
        let records = self
            .exchange
            .fetch_balances(&timestamp)
            .await
            .change_context(RoutineError::FetchBalances(self.exchange.exchange_name()))?;

        tracing::trace!("{}: 📋 Checking existing rows", self.name());
        let existing_rows = self
            .repository
            .count_existing_rows()
            .await
            .change_context(RoutineError::SaveBalances)?;

        let rows = rows_to_append(existing_rows, &records);
        if existing_rows == 0 {
            tracing::debug!("{}: Sheet is empty, writing header", self.name());
        }

        tracing::trace!("{}: 📝 Appending {} rows", self.name(), rows.len());
        self.repository
            .append_rows(rows)
            .await
            .change_context(RoutineError::SaveBalances)?;

        Ok(records.len())
    }
}
