//! YouTube PlaylistItems API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlistItems.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: VecDeque<PlaylistItem>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Cursor for the next page. Absent on the last page.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlistItem` resource, as returned with `part=contentDetails`.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemContentDetails {
    /// The ID that YouTube uses to uniquely identify the video the item refers to.
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_page_with_cursor() {
        let body = serde_json::json!({
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "EAAaBlBUOkNESQ",
            "items": [
                { "id": "a", "contentDetails": { "videoId": "vid1", "videoPublishedAt": "2024-01-01T00:00:00Z" } },
                { "id": "b", "contentDetails": { "videoId": "vid2" } }
            ],
            "pageInfo": { "totalResults": 3, "resultsPerPage": 2 }
        });
        let page: PlaylistItemListResponse = serde_json::from_value(body).unwrap();
        let ids: Vec<_> = page
            .items
            .iter()
            .map(|item| item.content_details.video_id.as_str())
            .collect();
        assert_eq!(ids, ["vid1", "vid2"]);
        assert_eq!(page.next_page_token.as_deref(), Some("EAAaBlBUOkNESQ"));
    }

    #[test]
    fn last_page_has_no_cursor() {
        let body = serde_json::json!({
            "items": [{ "contentDetails": { "videoId": "vid3" } }],
            "pageInfo": { "totalResults": 3, "resultsPerPage": 2 }
        });
        let page: PlaylistItemListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_page_token, None);
    }
}
