//! The three remote stages of an export: find the channel's uploads playlist, list every video
//! in it, then fetch metadata for those videos in batches.

use crate::error::{Error, Result};
use crate::youtube_api::{MAX_RESULTS, Video, YouTubeClient, batches};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tokio_stream::StreamExt;
use tracing::instrument;

/// Metadata for one uploaded video, as written to the export file.
///
/// Counters are kept as the decimal strings the API returns them as. A counter the uploader has
/// hidden is `None` and serializes as `null`; the key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    /// RFC 3339, as the API returned it.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// ISO 8601 duration, e.g. `PT15M33S`.
    pub duration: String,
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        Self {
            video_id: video.id,
            title: video.snippet.title,
            published_at: video.snippet.published_at,
            duration: video.content_details.duration,
            view_count: video.statistics.view_count,
            like_count: video.statistics.like_count,
            comment_count: video.statistics.comment_count,
        }
    }
}

/// Returns the id of the playlist holding every video uploaded by the channel with `handle`.
///
/// Makes exactly one `channels.list` request. If several channels come back, the first wins.
#[instrument(skip(client))]
pub async fn resolve_uploads_playlist(client: &YouTubeClient, handle: &str) -> Result<String> {
    let channels = client.list_channels_by_handle(handle).await?;

    let Some(channel) = channels.items.into_iter().next() else {
        return Err(Error::ChannelNotFound {
            handle: handle.to_string(),
        });
    };

    let playlist_id = channel.content_details.related_playlists.uploads;
    tracing::info!(channel_id = %channel.id, %playlist_id, "resolved uploads playlist");
    Ok(playlist_id)
}

/// Lists the id of every video in `playlist_id`, in playlist order.
///
/// Pages are fetched one at a time until a page arrives without a cursor. If any page fails,
/// nothing is returned.
#[instrument(skip(client))]
pub async fn enumerate_video_ids(client: &YouTubeClient, playlist_id: &str) -> Result<Vec<String>> {
    let video_ids: Vec<String> = client
        .list_playlist_video_ids(playlist_id)
        .collect::<Result<_>>()
        .await?;

    tracing::info!(videos = video_ids.len(), "enumerated playlist");
    Ok(video_ids)
}

/// Fetches a [`VideoRecord`] for each of `video_ids`.
///
/// Ids are de-duplicated (first occurrence wins) and then requested in order, [`MAX_RESULTS`]
/// per call. Records follow the order of `video_ids`, whatever order the API answers in. Videos
/// the API doesn't return, for example because they have since been made private, are logged
/// and skipped. If any batch fails, nothing is returned.
#[instrument(skip_all, fields(requested = video_ids.len()))]
pub async fn extract_video_records(
    client: &YouTubeClient,
    video_ids: &[String],
) -> Result<Vec<VideoRecord>> {
    let unique = dedup_preserving_order(video_ids);
    if unique.len() != video_ids.len() {
        tracing::warn!(
            duplicates = video_ids.len() - unique.len(),
            "dropping duplicate video ids"
        );
    }

    let mut records = Vec::with_capacity(unique.len());
    for (i, batch) in batches(&unique, MAX_RESULTS).enumerate() {
        let response = client.list_videos(batch).await?;
        let mut returned: HashMap<String, Video> = response
            .items
            .into_iter()
            .map(|video| (video.id.clone(), video))
            .collect();

        let mut missing = Vec::new();
        for id in batch {
            match returned.remove(id) {
                Some(video) => records.push(VideoRecord::from(video)),
                None => missing.push(id.as_str()),
            }
        }
        if !missing.is_empty() {
            tracing::warn!(batch = i, ?missing, "videos not returned by the API");
        }
    }

    tracing::info!(records = records.len(), "extracted video metadata");
    Ok(records)
}

fn dedup_preserving_order(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
