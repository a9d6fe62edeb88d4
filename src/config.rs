pub mod app_config;
pub mod luno_config;
pub mod sheets_config;
