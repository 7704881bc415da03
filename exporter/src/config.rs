use crate::error::{Error, Result};
use crate::youtube_api::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

/// Export metadata for every video a YouTube channel has uploaded.
///
/// Every option can also be given through the environment (or a `.env` file).
#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// YouTube Data API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Handle of the channel to export
    #[arg(long, env = "CHANNEL_HANDLE", default_value = "MrBeast")]
    pub channel_handle: String,

    /// Directory the dated export file is written to
    #[arg(long, env = "OUTPUT_DIR", default_value = "./data")]
    pub output_dir: PathBuf,

    /// Root of the YouTube Data API
    #[arg(long, env = "YOUTUBE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("channel_handle", &self.channel_handle)
            .field("output_dir", &self.output_dir)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>, channel_handle: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            channel_handle: channel_handle.into(),
            output_dir: PathBuf::from("./data"),
            api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidConfig("API key is empty".to_string()));
        }
        if self.channel_handle.trim().is_empty() {
            return Err(Error::InvalidConfig("channel handle is empty".to_string()));
        }
        Ok(())
    }
}
