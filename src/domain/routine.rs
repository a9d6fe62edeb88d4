use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutineError {
    #[error("Error getting {0} balances")]
    FetchBalances(&'static str),
    #[error("Error saving balances to Google Sheets")]
    SaveBalances,
}

#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;

    /// Runs the routine once, returning how many balance rows were exported.
    async fn run(&self) -> error_stack::Result<usize, RoutineError>;
}
