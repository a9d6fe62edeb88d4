use std::time::Duration;

use crate::config::luno_config::LunoConfig;

use super::client::{LunoClient, LunoClientError};

pub const REQUEST_TIMEOUT: Duration = Duration::new(10, 0);

pub struct LunoFactory {
    luno_config: LunoConfig,
}

impl LunoFactory {
    pub fn new(luno_config: LunoConfig) -> Self {
        Self { luno_config }
    }

    pub fn create(&self) -> error_stack::Result<LunoClient, LunoClientError> {
        LunoClient::new(&self.luno_config, REQUEST_TIMEOUT)
    }
}
