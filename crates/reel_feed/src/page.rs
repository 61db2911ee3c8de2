use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cursor::FeedCursor;

pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 50;

/// Clamp a caller-supplied page size into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
/// Out-of-range values are adjusted silently, never rejected.
pub fn clamp_page_size(limit: i64) -> i64 {
    limit.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// The two attributes pagination orders by. Payload fields pass through the
/// paginator untouched.
pub trait FeedItem {
    fn feed_id(&self) -> &str;
    fn feed_created_at(&self) -> DateTime<Utc>;
}

/// One bounded page of the feed. `next_cursor` is `None` on the final page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

/// A storage backend the pagination policy runs against.
///
/// Implementations return up to `fetch_limit` items already ordered by
/// `(created_at DESC, id DESC)` and already filtered by the boundary
/// predicate `created_at < cursor.created_at OR (created_at =
/// cursor.created_at AND id < cursor.id)`. With no boundary, the newest
/// items are returned. Everything else (probe row, slicing, cursor
/// issuance) lives in [`fetch_page`] so the comparison logic exists once,
/// not once per backend.
#[async_trait]
pub trait FeedSource {
    type Item: FeedItem + Send;
    type Error: Send;

    async fn fetch_after(
        &self,
        boundary: Option<&FeedCursor>,
        fetch_limit: i64,
    ) -> Result<Vec<Self::Item>, Self::Error>;
}

/// Fetch one page of the feed.
///
/// The requested `limit` is clamped to `[1, 50]`. A malformed cursor is
/// logged and ignored, degrading to the first page rather than erroring.
/// One extra row beyond the page is probed to decide whether a next page
/// exists; the returned cursor always encodes the last *returned* item.
///
/// This is a pure read: no duplicates across a pagination sequence, rows
/// inserted after a cursor was issued stay invisible to that sequence, and
/// a finite store always terminates with `next_cursor = None`. Rows deleted
/// behind an outstanding cursor can still cause gaps; the feed does not
/// attempt snapshot isolation.
pub async fn fetch_page<S>(
    source: &S,
    limit: i64,
    cursor: Option<&str>,
) -> Result<FeedPage<S::Item>, S::Error>
where
    S: FeedSource + Sync,
{
    let limit = clamp_page_size(limit);

    let boundary = cursor.and_then(|raw| match FeedCursor::parse(raw) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring malformed feed cursor {:?}, serving first page: {}", raw, e);
            None
        }
    });

    let mut items = source.fetch_after(boundary.as_ref(), limit + 1).await?;

    let has_more = items.len() as i64 > limit;
    items.truncate(limit as usize);

    let next_cursor = if has_more {
        items.last().map(|item| FeedCursor::for_item(item).encode())
    } else {
        None
    };

    Ok(FeedPage { items, next_cursor })
}
