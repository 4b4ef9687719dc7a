use core::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CursorError {
    #[error("Requested {requested} bytes at offset {offset}, but only {remaining} remain")]
    Truncated {
        offset: usize,
        requested: usize,
        remaining: usize,
    },
    #[error("Text field of {len} bytes at offset {offset} is not valid utf-8: {source}")]
    MalformedText {
        offset: usize,
        len: usize,
        source: Utf8Error,
    },
}

impl From<CursorError> for u32 {
    fn from(e: CursorError) -> u32 {
        match e {
            CursorError::Truncated { .. } => 17001,
            CursorError::MalformedText { .. } => 17002,
        }
    }
}
