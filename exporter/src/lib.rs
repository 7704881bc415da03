//! Export metadata for every video a YouTube channel has uploaded.
//!
//! An export runs four stages strictly in order, each awaiting the previous one:
//!
//! 1. [`pipeline::resolve_uploads_playlist`] finds the channel's uploads playlist,
//! 2. [`pipeline::enumerate_video_ids`] pages through it,
//! 3. [`pipeline::extract_video_records`] fetches metadata in batches of
//!    [`youtube_api::MAX_RESULTS`],
//! 4. [`output::write_records`] writes the dated JSON file.
//!
//! Any failure aborts the export; no file is written unless every remote stage succeeded.

use jiff::civil::Date;
use std::path::PathBuf;
use tracing::instrument;

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod youtube_api;

pub use config::Config;
pub use error::{Error, RemoteFailure, Result};
pub use pipeline::VideoRecord;
use youtube_api::YouTubeClient;

/// Runs a full export for `config.channel_handle` and returns the path of the file written.
///
/// `date` names the output file; callers normally pass today's local date.
#[instrument(skip(config, http), fields(handle = %config.channel_handle))]
pub async fn run(config: &Config, http: reqwest::Client, date: Date) -> Result<PathBuf> {
    config.validate()?;

    let client = YouTubeClient::new(config.api_key.clone(), http)
        .with_base_url(config.api_base_url.as_str());

    let playlist_id = pipeline::resolve_uploads_playlist(&client, &config.channel_handle).await?;
    let video_ids = pipeline::enumerate_video_ids(&client, &playlist_id).await?;
    let records = pipeline::extract_video_records(&client, &video_ids).await?;
    let path = output::write_records(&config.output_dir, date, &records).await?;

    tracing::info!(videos = records.len(), path = %path.display(), "export complete");
    Ok(path)
}
