use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CursorError;
use crate::page::FeedItem;

const CURSOR_SEPARATOR: &str = "::";

/// A resumable position in the feed's total order `(created_at DESC, id DESC)`.
///
/// The wire form is `"<RFC 3339 timestamp>::<id>"`, issued from the last item
/// of a page and round-tripped verbatim by clients. The timestamp is encoded
/// with microsecond precision so no two rows that differ in the store can
/// collapse onto the same boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCursor {
    pub created_at: DateTime<Utc>,
    pub id: String,
}

impl FeedCursor {
    pub fn for_item<T: FeedItem + ?Sized>(item: &T) -> Self {
        FeedCursor {
            created_at: item.feed_created_at(),
            id: item.feed_id().to_string(),
        }
    }

    /// Render the opaque wire form handed back to clients as `nextCursor`.
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}",
            self.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            CURSOR_SEPARATOR,
            self.id
        )
    }

    /// Decode a client-supplied cursor. Callers decide the failure policy;
    /// the feed falls back to the first page rather than rejecting.
    pub fn parse(raw: &str) -> Result<Self, CursorError> {
        let (timestamp, id) = raw
            .split_once(CURSOR_SEPARATOR)
            .ok_or(CursorError::MalformedCursor)?;

        if id.is_empty() {
            return Err(CursorError::MalformedCursor);
        }

        let created_at = DateTime::parse_from_rfc3339(timestamp)?.with_timezone(&Utc);

        Ok(FeedCursor {
            created_at,
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cursor_round_trip() {
        let cursor = FeedCursor {
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 12, 30, 45).unwrap()
                + chrono::Duration::microseconds(123456),
            id: "video-42".to_string(),
        };

        let encoded = cursor.encode();
        let decoded = FeedCursor::parse(&encoded).unwrap();

        assert_eq!(decoded, cursor);
    }

    #[test]
    fn test_cursor_preserves_sub_second_precision() {
        let cursor = FeedCursor {
            created_at: Utc.timestamp_micros(1_700_000_000_000_001).unwrap(),
            id: "a".to_string(),
        };

        let decoded = FeedCursor::parse(&cursor.encode()).unwrap();
        assert_eq!(decoded.created_at, cursor.created_at);
    }

    #[test]
    fn test_id_may_contain_separator() {
        // only the first "::" splits; the id is taken verbatim after it
        let raw = "2024-03-07T12:30:45.000000Z::odd::id";
        let cursor = FeedCursor::parse(raw).unwrap();
        assert_eq!(cursor.id, "odd::id");
    }

    #[test]
    fn test_malformed_cursor_is_rejected() {
        assert!(FeedCursor::parse("garbage").is_err());
        assert!(FeedCursor::parse("not-a-timestamp::video-1").is_err());
        assert!(FeedCursor::parse("2024-03-07T12:30:45Z::").is_err());
        assert!(FeedCursor::parse("").is_err());
    }
}
