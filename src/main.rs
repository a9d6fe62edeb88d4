mod config;
mod domain;
mod exchange;
mod prettyprint;
mod routines;
mod sheets;

use std::{io::IsTerminal, process::ExitCode, sync::Arc};

use error_stack::ResultExt;
use thiserror::Error;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    config::app_config::AppConfig,
    domain::{balance_repository::BalanceRepository, routine::Routine},
    exchange::{
        luno::factory::LunoFactory,
        luno_use_cases::{LunoUseCases, FETCH_DEADLINE},
        use_cases::ExchangeUseCases,
    },
    prettyprint::PrettyFormatter,
    routines::export_balances_routine::ExportBalancesRoutine,
    sheets::{
        spreadsheet_balance_repository::SpreadsheetBalanceRepository,
        spreadsheet_manager::SpreadsheetManager,
    },
};

#[derive(Error, Debug)]
enum AppError {
    #[error("Error loading configuration from the environment")]
    Config,
    #[error("Error preparing Google Sheets client")]
    SheetsSetup,
    #[error("Error preparing Luno client")]
    LunoSetup,
    #[error("Error exporting balances")]
    Export,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    match run().await {
        Ok(exported) => {
            info!(exported, "Successfully saved balances to Google Sheets");
            ExitCode::SUCCESS
        }
        Err(report) => {
            error!("{:?}", report);
            ExitCode::FAILURE
        }
    }
}

#[instrument]
async fn run() -> error_stack::Result<usize, AppError> {
    let config = AppConfig::from_env().change_context(AppError::Config)?;

    // Credentials are loaded before the exchange is queried so a bad key file
    // never throws away fetched balances.
    let spreadsheet_manager = Arc::new(
        SpreadsheetManager::new(config.sheets.clone())
            .await
            .change_context(AppError::SheetsSetup)?,
    );
    let repository: Arc<dyn BalanceRepository> =
        Arc::new(SpreadsheetBalanceRepository::new(spreadsheet_manager));

    let luno_client = LunoFactory::new(config.luno.clone())
        .create()
        .change_context(AppError::LunoSetup)?;
    let exchange: Arc<dyn ExchangeUseCases> =
        Arc::new(LunoUseCases::new(luno_client, FETCH_DEADLINE));

    let routine = ExportBalancesRoutine::new(exchange, repository);
    tracing::debug!("Running {}", routine.name());

    routine.run().await.change_context(AppError::Export)
}

fn setup_tracing() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("luno_balance_sheets", tracing::Level::INFO),
        )
        .with(stderr_layer)
        .init();
}
