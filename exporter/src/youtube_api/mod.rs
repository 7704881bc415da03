//! YouTube Data API v3 client library.
//!
//! Only the read-only, API-key-authenticated endpoints needed to walk a channel's uploads are
//! covered:
//!
//! - [`YouTubeClient::list_channels_by_handle`] (`channels.list`) to find a channel's uploads
//!   playlist,
//! - [`YouTubeClient::list_playlist_video_ids`] (`playlistItems.list`, paginated) to enumerate
//!   the videos in it,
//! - [`YouTubeClient::list_videos`] (`videos.list`) to fetch metadata for up to
//!   [`MAX_RESULTS`] videos per call.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use tokio_stream::StreamExt;
//! use youtube_upload_export::youtube_api::YouTubeClient;
//!
//! # async fn example() -> youtube_upload_export::Result<()> {
//! let client = YouTubeClient::new("my-api-key", reqwest::Client::new());
//! let mut ids = std::pin::pin!(client.list_playlist_video_ids("UUX6OQ3DkcsbYNE6H8uQQuVA"));
//! while let Some(id) = ids.next().await {
//!     println!("video: {}", id?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod playlist_items;
pub mod types;
pub mod videos;

pub use client::{DEFAULT_BASE_URL, YouTubeClient};
pub use types::{MAX_RESULTS, Page, PageInfo, PagedStream, batches};

pub use channels::{Channel, ChannelListResponse};
pub use playlist_items::{PlaylistItem, PlaylistItemListResponse};
pub use videos::{Video, VideoListResponse, VideoStatistics};
