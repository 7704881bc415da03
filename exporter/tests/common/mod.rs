//! An in-process stand-in for the YouTube Data API.
//!
//! Every request is recorded so tests can assert on how many calls were made and with which
//! query parameters. Responses come from a per-test handler.

#![allow(dead_code)]

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode, body};
use serde_json::{Value, json};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use youtube_upload_export::youtube_api::YouTubeClient;

pub const API_KEY: &str = "test-api-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Last path segment, i.e. `channels`, `playlistItems` or `videos`.
    pub endpoint: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The comma-separated `id` filter of a `videos` request, split apart.
    pub fn video_ids(&self) -> Vec<String> {
        self.param("id")
            .map(|ids| ids.split(',').map(String::from).collect())
            .unwrap_or_default()
    }
}

type Handler = dyn Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync;

pub struct MockApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub async fn start(
        handler: impl Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync + 'static,
    ) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind to localhost");
        let addr = listener.local_addr().expect("get local address");
        let handler: Arc<Handler> = Arc::new(handler);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((conn, _)) = listener.accept().await {
                let handler = Arc::clone(&handler);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<body::Incoming>| {
                        let handler = Arc::clone(&handler);
                        let recorded = Arc::clone(&recorded);
                        async move {
                            let request = RecordedRequest {
                                endpoint: req
                                    .uri()
                                    .path()
                                    .rsplit('/')
                                    .next()
                                    .unwrap_or_default()
                                    .to_string(),
                                params: form_urlencoded::parse(
                                    req.uri().query().unwrap_or("").as_bytes(),
                                )
                                .into_owned()
                                .collect(),
                            };
                            let (status, body) = handler(&request);
                            recorded.lock().unwrap().push(request);

                            let mut response =
                                Response::new(Full::<Bytes>::from(body.to_string()));
                            *response.status_mut() = status;
                            response
                                .headers_mut()
                                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                            Ok::<_, Infallible>(response)
                        }
                    });
                    let _ = hyper::server::conn::http1::Builder::new()
                        .serve_connection(hyper_util::rt::TokioIo::new(conn), service)
                        .await;
                });
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/youtube/v3", self.addr)
    }

    pub fn client(&self) -> YouTubeClient {
        YouTubeClient::new(API_KEY, reqwest::Client::new()).with_base_url(self.base_url())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, endpoint: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.endpoint == endpoint)
            .collect()
    }
}

pub fn channels_response(uploads: &[&str]) -> Value {
    let items: Vec<Value> = uploads
        .iter()
        .enumerate()
        .map(|(i, uploads)| {
            json!({
                "kind": "youtube#channel",
                "id": format!("UC{i}"),
                "contentDetails": { "relatedPlaylists": { "likes": "", "uploads": uploads } }
            })
        })
        .collect();
    json!({
        "kind": "youtube#channelListResponse",
        "pageInfo": { "totalResults": items.len(), "resultsPerPage": 5 },
        "items": items
    })
}

pub fn playlist_page(video_ids: &[&str], next_page_token: Option<&str>) -> Value {
    let items: Vec<Value> = video_ids
        .iter()
        .map(|id| json!({ "kind": "youtube#playlistItem", "contentDetails": { "videoId": id } }))
        .collect();
    let mut page = json!({
        "kind": "youtube#playlistItemListResponse",
        "pageInfo": { "totalResults": 0, "resultsPerPage": 50 },
        "items": items
    });
    if let Some(token) = next_page_token {
        page["nextPageToken"] = json!(token);
    }
    page
}

/// A `videos.list` item with every counter present.
pub fn video_item(id: &str) -> Value {
    json!({
        "kind": "youtube#video",
        "id": id,
        "snippet": {
            "publishedAt": "2024-06-01T16:00:00Z",
            "title": format!("Video {id}"),
            "channelId": "UC0"
        },
        "contentDetails": { "duration": "PT12M1S" },
        "statistics": {
            "viewCount": "1000",
            "likeCount": "100",
            "favoriteCount": "0",
            "commentCount": "10"
        }
    })
}

pub fn videos_response(items: Vec<Value>) -> Value {
    json!({
        "kind": "youtube#videoListResponse",
        "pageInfo": { "totalResults": items.len(), "resultsPerPage": items.len() },
        "items": items
    })
}

/// Answers a `videos` request with a full item for every requested id.
pub fn echo_videos(request: &RecordedRequest) -> (StatusCode, Value) {
    let items = request.video_ids().iter().map(|id| video_item(id)).collect();
    (StatusCode::OK, videos_response(items))
}

pub fn not_found() -> (StatusCode, Value) {
    (
        StatusCode::NOT_FOUND,
        json!({ "error": { "code": 404, "message": "not found" } }),
    )
}
