use std::sync::Arc;

use error_stack::ResultExt;
use google_sheets4::api::ValueRange;

use crate::domain::balance_repository::{BalanceRepository, BalanceRepositoryError};

use super::{
    ranges, spreadsheet_manager::SpreadsheetManager, value_range_factory::ValueRangeFactory,
};

pub struct SpreadsheetBalanceRepository {
    pub spreadsheet_manager: Arc<SpreadsheetManager>,
    range: &'static str,
}

impl SpreadsheetBalanceRepository {
    pub fn new(spreadsheet_manager: Arc<SpreadsheetManager>) -> Self {
        Self {
            spreadsheet_manager,
            range: ranges::balances::RW_HISTORY,
        }
    }
}

#[async_trait::async_trait]
impl BalanceRepository for SpreadsheetBalanceRepository {
    async fn count_existing_rows(&self) -> error_stack::Result<usize, BalanceRepositoryError> {
        let rows = self
            .spreadsheet_manager
            .read_range(self.range)
            .await
            .change_context(BalanceRepositoryError::FetchExistingRowsError)?;

        Ok(rows.len())
    }

    async fn append_rows(
        &self,
        rows: Vec<Vec<String>>,
    ) -> error_stack::Result<(), BalanceRepositoryError> {
        let response = self
            .spreadsheet_manager
            .append_range(self.range, ValueRange::from_table(&rows))
            .await
            .change_context(BalanceRepositoryError::AppendRowsError)?;

        if let Some(updates) = response.updates {
            tracing::debug!(
                "Appended {} rows to {}",
                updates.updated_rows.unwrap_or_default(),
                updates.updated_range.as_deref().unwrap_or(self.range)
            );
        }

        Ok(())
    }
}
