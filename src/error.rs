// Error type shared by the library modules. The binary wraps these in
// `anyhow` at the top level; keeping them typed here lets the tests and
// the interrupt handling match on the concrete failure.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    /// The id text could not be coerced to an integer.
    #[error("invalid literal for poem id: '{raw}'")]
    InvalidId { raw: String },

    /// Input ended while a prompt was still waiting for an answer.
    #[error("input closed before the entry was complete")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A filesystem operation on `path` failed.
    #[error("{action} '{}'", .path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid poem JSON")]
    Json(#[from] serde_json::Error),
}

impl EntryError {
    /// True when the failure came from a user interrupt (Ctrl-C while a
    /// prompt had the terminal in raw mode).
    pub fn is_interrupt(&self) -> bool {
        matches!(self, EntryError::Io(e) if e.kind() == std::io::ErrorKind::Interrupted)
    }

    /// Attach the path of the file or directory an io error came from.
    pub fn file(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| EntryError::File { action, path, source }
    }
}

/// Interrupt check at the binary boundary, where errors arrive wrapped
/// in `anyhow`.
pub fn is_interrupt(err: &anyhow::Error) -> bool {
    err.downcast_ref::<EntryError>()
        .map_or(false, EntryError::is_interrupt)
}

pub type Result<T> = std::result::Result<T, EntryError>;
