//! Error types for assembly operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for assembly operations.
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Errors that can occur during catalog population or assembly.
///
/// All errors are terminal for the current call: assembly is deterministic,
/// so retrying without fixing the catalog or configuration reproduces the
/// identical failure.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Requested part ID absent from the catalog.
    #[error("part '{id}' not found in catalog")]
    UnknownPart {
        /// The missing part ID.
        id: String,
    },

    /// Requested anchor name absent on a part. This is an authoring error
    /// in the anchor data, not a runtime condition to recover from.
    #[error("anchor '{anchor}' not found on part '{part_id}'")]
    MissingAnchor {
        /// The part that was searched.
        part_id: String,
        /// The missing anchor name.
        anchor: String,
    },

    /// Part with the given ID already exists in the catalog.
    #[error("part '{id}' already exists in catalog")]
    DuplicatePart {
        /// The duplicate part ID.
        id: String,
    },

    /// Repetition count cannot be satisfied by the candidate anchor set.
    #[error("cannot place {requested} repeated element(s): only {available} candidate anchor(s)")]
    InvalidCount {
        /// The requested repetition count.
        requested: usize,
        /// The number of candidate anchors available.
        available: usize,
    },

    /// Malformed catalog data.
    #[error("invalid catalog data: {message}")]
    CatalogParse {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error while reading a catalog file.
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssemblyError::UnknownPart {
            id: "stand".to_string(),
        };
        assert_eq!(err.to_string(), "part 'stand' not found in catalog");

        let err = AssemblyError::MissingAnchor {
            part_id: "stand".to_string(),
            anchor: "leg".to_string(),
        };
        assert_eq!(err.to_string(), "anchor 'leg' not found on part 'stand'");

        let err = AssemblyError::InvalidCount {
            requested: 12,
            available: 10,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("10"));
    }
}
