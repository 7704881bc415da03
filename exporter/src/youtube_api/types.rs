//! Paging and batching shared by the list endpoints.

use crate::error::Result;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll, ready};
use tokio_stream::Stream;

/// The largest `maxResults` the Data API accepts, and the largest number of ids `videos.list`
/// takes in one `id` filter.
pub const MAX_RESULTS: usize = 50;

/// One page of a list response: its items and the cursor for the page after it.
#[derive(Debug)]
pub struct Page<T> {
    pub items: VecDeque<T>,
    pub next_page_token: Option<String>,
}

type PageFuture<'a, F, T> = Pin<Box<dyn Future<Output = Result<(F, Page<T>)>> + Send + 'a>>;

/// A stream over every item of a paginated list endpoint.
///
/// Pages are fetched lazily and strictly one after another: the request for page `n + 1` is
/// only issued once page `n` has been fully yielded and the stream is polled again. Iteration
/// ends when a page arrives without a `nextPageToken`. The first failed page ends the stream
/// after yielding the error.
pub struct PagedStream<'a, T, F> {
    buffered: VecDeque<T>,
    in_flight: Option<PageFuture<'a, F, T>>,
}

impl<'a, T, F, Fut> PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    /// Creates a stream whose pages come from `fetcher`.
    ///
    /// `fetcher` is called with `None` for the first page and with the previous page's cursor
    /// after that.
    pub fn new(fetcher: F) -> Self {
        Self {
            buffered: VecDeque::new(),
            in_flight: Some(Self::fetch(fetcher, None)),
        }
    }

    fn fetch(fetcher: F, page_token: Option<String>) -> PageFuture<'a, F, T> {
        Box::pin(async move {
            let page = fetcher(page_token).await?;
            Ok((fetcher, page))
        })
    }
}

// Nothing is ever pinned in place: the in-flight future is already boxed.
impl<T, F> Unpin for PagedStream<'_, T, F> {}

impl<'a, T, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Page<T>>> + Send + 'a,
{
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(item) = this.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            let Some(in_flight) = this.in_flight.as_mut() else {
                return Poll::Ready(None);
            };

            match ready!(in_flight.as_mut().poll(cx)) {
                Ok((fetcher, page)) => {
                    this.in_flight = page
                        .next_page_token
                        .map(|token| Self::fetch(fetcher, Some(token)));
                    this.buffered.extend(page.items);
                }
                Err(e) => {
                    this.in_flight = None;
                    return Poll::Ready(Some(Err(e)));
                }
            }
        }
    }
}

/// Splits `items` into consecutive, non-overlapping runs of at most `size` elements.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn batches<T>(items: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(size)
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}
