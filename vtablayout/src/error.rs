//! Tab layout error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Tab index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Illegal state: {0}")]
    IllegalState(String),
}

impl TabError {
    pub(crate) fn empty_strip() -> Self {
        TabError::IllegalState("tab strip is empty".to_string())
    }
}
