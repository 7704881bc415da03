//! Core YouTube Data API client: API-key authentication and the list endpoints the export uses.

use crate::error::{Error, RemoteFailure, Result};
use crate::youtube_api::{
    channels::ChannelListResponse,
    playlist_items::PlaylistItemListResponse,
    types::{MAX_RESULTS, Page, PagedStream},
    videos::VideoListResponse,
};
use serde::de::DeserializeOwned;
use tokio_stream::Stream;
use tracing::instrument;

/// Where the public YouTube Data API v3 lives.
pub const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3";

/// Client for the read-only, API-key-authenticated parts of the YouTube Data API v3.
///
/// Every request carries the API key as the `key` query parameter. The key never appears in
/// logs or error messages.
#[derive(Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    client: reqwest::Client,
    api_key: String,
    /// Endpoint paths such as `channels` are appended to this, separated by `/`.
    base_url: String,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Creates a client for the public API endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - A YouTube Data API key
    /// * `client` - Shared HTTP client for making API requests
    pub fn new(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different API root, such as a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Issues a `GET` against `path` and decodes the JSON body.
    ///
    /// Non-success statuses and transport failures become [`Error::RemoteRequest`]. A success
    /// whose body doesn't decode as `R` becomes [`Error::MalformedResponse`].
    #[instrument(skip(self, query), level = tracing::Level::TRACE)]
    async fn get<R>(&self, endpoint: &'static str, path: &str, query: &[(&str, &str)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let remote = |e: reqwest::Error| Error::RemoteRequest {
            endpoint,
            // the URL holds the API key
            source: RemoteFailure::Transport(e.without_url()),
        };

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(remote)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::debug!(endpoint, %status, "request rejected");
            return Err(Error::RemoteRequest {
                endpoint,
                source: RemoteFailure::Status { status, body },
            });
        }

        let body = response.bytes().await.map_err(remote)?;
        serde_json::from_slice(&body).map_err(|source| Error::MalformedResponse { endpoint, source })
    }

    /// Looks up channels by their handle (e.g. `MrBeast`, with or without the leading `@`).
    ///
    /// Requests only the `contentDetails` part, which carries the uploads playlist.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn list_channels_by_handle(&self, handle: &str) -> Result<ChannelListResponse> {
        let query_params = [("part", "contentDetails"), ("forHandle", handle)];

        let channels: ChannelListResponse = self
            .get("channels.list", "channels", &query_params)
            .await?;

        tracing::debug!(
            total_results = channels.page_info.total_results,
            returned_items = channels.items.len(),
            "fetched channels"
        );

        Ok(channels)
    }

    /// Fetches one page of a playlist's items.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - The playlist to list
    /// * `max_results` - Maximum number of items to return (1-50)
    /// * `page_token` - Cursor from the previous page, `None` for the first page
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    pub async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: usize,
        page_token: Option<String>,
    ) -> Result<PlaylistItemListResponse> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "contentDetails"),
            ("maxResults", max_results_string.as_str()),
            ("playlistId", playlist_id),
        ];

        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let page: PlaylistItemListResponse = self
            .get("playlistItems.list", "playlistItems", &query_params)
            .await?;

        tracing::debug!(
            total_results = page.page_info.total_results,
            returned_items = page.items.len(),
            has_next_page = page.next_page_token.is_some(),
            "fetched playlist items"
        );

        Ok(page)
    }

    /// Returns a stream of the id of every video in a playlist, in playlist order.
    ///
    /// Pages of [`MAX_RESULTS`] items are requested one at a time as the stream is consumed.
    pub fn list_playlist_video_ids<'a>(
        &'a self,
        playlist_id: &'a str,
    ) -> impl Stream<Item = Result<String>> + use<'a> {
        PagedStream::new(move |page_token| async move {
            let page = self
                .list_playlist_items(playlist_id, MAX_RESULTS, page_token)
                .await?;
            Ok(Page {
                items: page
                    .items
                    .into_iter()
                    .map(|item| item.content_details.video_id)
                    .collect(),
                next_page_token: page.next_page_token,
            })
        })
    }

    /// Fetches snippet, content details, and statistics for up to [`MAX_RESULTS`] videos in one
    /// call.
    ///
    /// Ids that don't resolve to a visible video are left out of the response rather than
    /// reported as errors.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(requested = video_ids.len()))]
    pub async fn list_videos(&self, video_ids: &[String]) -> Result<VideoListResponse> {
        debug_assert!(video_ids.len() <= MAX_RESULTS);
        let joined = video_ids.join(",");
        let query_params = [
            ("part", "contentDetails,snippet,statistics"),
            ("id", joined.as_str()),
        ];

        let videos: VideoListResponse = self.get("videos.list", "videos", &query_params).await?;

        tracing::debug!(returned_items = videos.items.len(), "fetched videos");

        Ok(videos)
    }
}
