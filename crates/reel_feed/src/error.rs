use thiserror::Error;

#[derive(Error, Debug)]
pub enum CursorError {
    #[error("Cursor is not in '<timestamp>::<id>' form")]
    MalformedCursor,

    #[error("Failed to parse cursor timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}
