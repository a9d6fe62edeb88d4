use std::fmt::Debug;

use error_stack::ResultExt;
use google_sheets4::{
    api::{AppendValuesResponse, ValueRange},
    Sheets,
};
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use crate::config::sheets_config::SpreadsheetConfig;

use super::{
    auth,
    http_client::{self, HttpsConnector},
};

/// Lets the API parse cells as if typed by a user (numbers become numbers).
const USER_ENTERED: &str = "USER_ENTERED";

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Failed to read credentials file")]
    FailedToReadCredentials,
    #[error("Failed to create Google Sheets authenticator")]
    FailedToBuildAuthenticator,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("Failed to append to range")]
    FailedToAppendRange,
}

impl SpreadsheetManager {
    /// Reads the service account key before any HTTP client is built, so a bad
    /// credentials path fails without touching the network.
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(
        config: SpreadsheetConfig,
    ) -> error_stack::Result<Self, SpreadsheetManagerError> {
        let secret = auth::read_service_account_key(&config.priv_key).await?;

        let client = http_client::http_client();
        let auth = auth::auth(secret, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    /// Returns the rows present in `range`. A range with no data yields no rows.
    #[instrument]
    pub async fn read_range(
        &self,
        range: &str,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetManagerError> {
        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        Ok(value_range.values.unwrap_or_default())
    }

    #[instrument(skip(value_range))]
    pub async fn append_range(
        &self,
        range: &str,
        value_range: ValueRange,
    ) -> error_stack::Result<AppendValuesResponse, SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_append(value_range, &self.config.spreadsheet_id, range)
            .value_input_option(USER_ENTERED)
            .doit()
            .await
            .map(|(_, response)| response)
            .change_context(SpreadsheetManagerError::FailedToAppendRange)
            .attach_printable_lazy(|| format!("Failed to append to range {}", range))
    }
}
