// ~/quote-widget/src/error.rs

use thiserror::Error;

/// Failure of a single host window-manager capability.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[cfg(windows)]
    #[error("{op} failed: {source}")]
    Os {
        op: &'static str,
        #[source]
        source: windows::core::Error,
    },

    #[error("{op} was refused by the window manager")]
    Refused { op: &'static str },
}

impl HostError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Quote cache read/write failures. Callers treat them as a cache miss.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Remote quote lookup failures. Callers substitute the fallback text.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("quote response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("quote response has no usable entry")]
    Empty,
}
