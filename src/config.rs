use anyhow::{anyhow, Result};
use std::env;

pub const DEFAULT_SHEET_RANGE: &str = "Sheet1!A2:B50";

/// Process-wide settings, read once at startup and passed into each
/// component's constructor.
#[derive(Debug, Clone)]
pub struct Config {
    pub alloy_api_key: String,
    pub connection_id: String,
    pub sheet_id: String,
    pub sheet_range: String,
    pub slack_webhook_url: String,
    /// Whether the run starts by appending the demo row.
    pub append_demo_row: bool,
}

impl Config {
    /// Builds the configuration from the process environment, loading a
    /// `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            alloy_api_key: require("ALLOY_API_KEY")?,
            connection_id: require("GOOGLE_SHEET_CONNECTION_ID")?,
            sheet_id: require("GOOGLE_SHEET_ID")?,
            sheet_range: env::var("GOOGLE_SHEET_RANGE")
                .unwrap_or_else(|_| DEFAULT_SHEET_RANGE.to_string()),
            slack_webhook_url: require("SLACK_WEBHOOK_URL")?,
            append_demo_row: env::var("APPEND_DEMO_ROW")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key).map_err(|_| anyhow!("Missing required environment variable: {}", key))
}
