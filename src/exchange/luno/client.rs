use std::{fmt, time::Duration};

use error_stack::{report, Report, ResultExt};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::luno_config::LunoConfig;

pub const LUNO_BASE_URL: &str = "https://api.luno.com";
const BALANCE_PATH: &str = "/api/1/balance";
const USER_AGENT: &str = concat!("luno-balance-sheets/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum LunoClientError {
    #[error("Failed to build Luno HTTP client")]
    BuildClient,
    #[error("Request to Luno failed")]
    Request,
    #[error("Luno API returned HTTP {status} ({code})")]
    Api { status: u16, code: String },
    #[error("Failed to decode Luno response")]
    Decode,
}

/// Parameters of the balance listing. An empty `assets` list returns every
/// account on the key.
#[derive(Debug, Default, Clone)]
pub struct GetBalancesRequest {
    pub assets: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub account_id: String,
    pub asset: String,
    pub balance: String,
    pub reserved: String,
    #[serde(default)]
    pub unconfirmed: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct GetBalancesResponse {
    #[serde(default)]
    balance: Option<Vec<AccountBalance>>,
}

impl GetBalancesResponse {
    pub fn balances(&self) -> &[AccountBalance] {
        self.balance.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Default)]
struct LunoErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_code: String,
}

pub struct LunoClient {
    http: reqwest::Client,
    base_url: Box<str>,
    api_key: Box<str>,
    api_secret: Box<str>,
}

impl fmt::Debug for LunoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LunoClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish()
    }
}

impl LunoClient {
    pub fn new(
        config: &LunoConfig,
        timeout: Duration,
    ) -> error_stack::Result<Self, LunoClientError> {
        Self::with_base_url(config, timeout, LUNO_BASE_URL)
    }

    pub fn with_base_url(
        config: &LunoConfig,
        timeout: Duration,
        base_url: impl Into<Box<str>>,
    ) -> error_stack::Result<Self, LunoClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .change_context(LunoClientError::BuildClient)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    #[instrument(name = "LunoClient::get_balances")]
    pub async fn get_balances(
        &self,
        request: &GetBalancesRequest,
    ) -> error_stack::Result<GetBalancesResponse, LunoClientError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), BALANCE_PATH);
        let query = request
            .assets
            .iter()
            .map(|asset| ("assets", asset.as_str()))
            .collect::<Vec<_>>();

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .query(&query)
            .send()
            .await
            .change_context(LunoClientError::Request)
            .attach_printable_lazy(|| format!("GET {}", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .change_context(LunoClientError::Request)?;
        tracing::trace!("Luno responded with HTTP {}", status);

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body)
            .change_context(LunoClientError::Decode)
            .attach_printable_lazy(|| format!("Response body: {}", body))
    }
}

fn api_error(status: StatusCode, body: &str) -> Report<LunoClientError> {
    let parsed = serde_json::from_str::<LunoErrorBody>(body).unwrap_or_default();
    let code = if parsed.error_code.is_empty() {
        "unknown".to_string()
    } else {
        parsed.error_code
    };
    let message = if parsed.error.is_empty() {
        body.to_string()
    } else {
        parsed.error
    };

    report!(LunoClientError::Api {
        status: status.as_u16(),
        code,
    })
    .attach_printable(message)
}
