use std::fmt;

#[derive(serde::Deserialize, Clone)]
pub struct LunoConfig {
    pub api_key: Box<str>,
    pub api_secret: Box<str>,
}

impl fmt::Debug for LunoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LunoConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
