use async_trait::async_trait;
use std::convert::Infallible;

use crate::cursor::FeedCursor;
use crate::page::{FeedItem, FeedSource};

/// An in-memory feed backend.
///
/// An explicit instance with a caller-defined lifecycle: construct it once
/// and hand out references, the same way the relational backend hands out
/// its pool. Insert order does not matter; the total order is imposed at
/// read time, matching how the relational backend sorts per query.
#[derive(Debug, Clone, Default)]
pub struct MemFeedStore<T> {
    items: Vec<T>,
}

impl<T: FeedItem + Clone> MemFeedStore<T> {
    pub fn new() -> Self {
        MemFeedStore { items: Vec::new() }
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl<T> FeedSource for MemFeedStore<T>
where
    T: FeedItem + Clone + Send + Sync,
{
    type Item = T;
    type Error = Infallible;

    async fn fetch_after(
        &self,
        boundary: Option<&FeedCursor>,
        fetch_limit: i64,
    ) -> Result<Vec<Self::Item>, Self::Error> {
        let mut candidates: Vec<T> = self
            .items
            .iter()
            .filter(|item| match boundary {
                Some(cursor) => {
                    item.feed_created_at() < cursor.created_at
                        || (item.feed_created_at() == cursor.created_at
                            && item.feed_id() < cursor.id.as_str())
                }
                None => true,
            })
            .cloned()
            .collect();

        candidates.sort_by(|a, b| {
            b.feed_created_at()
                .cmp(&a.feed_created_at())
                .then_with(|| b.feed_id().cmp(a.feed_id()))
        });
        candidates.truncate(fetch_limit.max(0) as usize);

        Ok(candidates)
    }
}
