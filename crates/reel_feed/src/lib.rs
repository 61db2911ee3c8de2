pub mod cursor;
pub mod error;
pub mod mem;
pub mod page;

pub use cursor::FeedCursor;
pub use error::CursorError;
pub use mem::MemFeedStore;
pub use page::{fetch_page, clamp_page_size, FeedItem, FeedPage, FeedSource, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
