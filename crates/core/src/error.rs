// Error types for pagecheck-core

use std::path::PathBuf;

use thiserror::Error;

pub use chromiumoxide::error::CdpError;

/// Result type alias for pagecheck-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the browser
#[derive(Debug, Error)]
pub enum Error {
    /// The Chromium process could not be started
    ///
    /// Common causes: no Chromium/Chrome binary on PATH, insufficient
    /// permissions, or a sandbox the process cannot enter.
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// Navigation failed or timed out under the driver's timeout
    #[error("navigation to '{url}' failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: CdpError,
    },

    /// No element matched the locator
    #[error("element not found: {locator}")]
    ElementNotFound { locator: String },

    /// More than one element matched a locator that requires exactly one
    ///
    /// Clicking an arbitrary match would make the outcome depend on DOM
    /// order, so an ambiguous locator is always an error.
    #[error("{locator} matched {count} elements, expected exactly 1")]
    AmbiguousLocator { locator: String, count: usize },

    /// The element matched but cannot receive the interaction
    #[error("{locator} is not actionable: {reason}")]
    NotActionable { locator: String, reason: String },

    /// Dispatching the interaction failed after the element resolved
    #[error("click on {locator} failed: {source}")]
    Interaction {
        locator: String,
        #[source]
        source: CdpError,
    },

    /// In-page JavaScript evaluation failed
    #[error("javascript evaluation failed: {0}")]
    Evaluation(String),

    /// Screenshot capture or write failed
    #[error("screenshot to '{}' failed: {source}", path.display())]
    Screenshot {
        path: PathBuf,
        #[source]
        source: CdpError,
    },

    /// Driver-level error without more specific context
    #[error(transparent)]
    Cdp(#[from] CdpError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the underlying driver operation timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Cdp(source) => matches!(source, CdpError::Timeout),
            Error::Navigation { source, .. }
            | Error::Interaction { source, .. }
            | Error::Screenshot { source, .. } => matches!(source, CdpError::Timeout),
            _ => false,
        }
    }
}
