use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceRepositoryError {
    #[error("Failed to read existing rows from repository")]
    FetchExistingRowsError,
    #[error("Failed to append rows to repository")]
    AppendRowsError,
}

#[async_trait::async_trait]
pub trait BalanceRepository: Send + Sync {
    /// Counts the rows already present in the target range. Zero means the
    /// header has not been written yet.
    async fn count_existing_rows(&self) -> error_stack::Result<usize, BalanceRepositoryError>;

    /// Appends `rows` after the last row of data in a single call.
    async fn append_rows(
        &self,
        rows: Vec<Vec<String>>,
    ) -> error_stack::Result<(), BalanceRepositoryError>;
}
