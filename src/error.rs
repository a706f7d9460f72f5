//! Error type shared by the journal's data layer.

use std::path::PathBuf;

/// Errors raised by the store, the lifemoji cache and journal operations.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// The commit store does not exist yet.
    #[error("Please initialize your life first. Run 'life init'.")]
    NotInitialized,

    /// `init` was run against an existing store.
    #[error("Your life had been initialized. Start commit now!")]
    AlreadyInitialized,

    /// The commit store is not a valid JSON commit list.
    #[error("Commit store at {} is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The cached lifemoji file could not be parsed.
    #[error("Lifemoji cache at {} is corrupt: {source}. Run 'life lifemojis --refresh'.", path.display())]
    CorruptCache {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No commit id contains the requested fragment.
    #[error("Commit id does not exist: '{0}'")]
    CommitNotFound(String),

    /// A required command argument was not supplied.
    #[error("Please specify the {0}.")]
    MissingArgument(&'static str),

    /// The lifemoji vocabulary could not be downloaded.
    #[error("Network connection not found - {0}")]
    NetworkUnavailable(String),

    /// The static viewer could not be written.
    #[error("Could not export website: {0}")]
    ExportFailed(String),

    /// A commit date that does not parse as a timestamp.
    #[error("Invalid date '{0}'. Use YYYY-MM-DD, optionally followed by a time.")]
    InvalidDate(String),

    /// A lifemoji that is not part of the vocabulary.
    #[error("Unknown lifemoji '{0}'. Run 'life lifemojis' to see the choices.")]
    UnknownLifemoji(String),

    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mentions_fragment() {
        let err = JournalError::CommitNotFound("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_missing_argument_message() {
        let err = JournalError::MissingArgument("commit id");
        assert_eq!(err.to_string(), "Please specify the commit id.");
    }

    #[test]
    fn test_network_unavailable_message() {
        let err = JournalError::NetworkUnavailable("connection refused".to_string());
        assert!(err.to_string().starts_with("Network connection not found"));
    }
}
