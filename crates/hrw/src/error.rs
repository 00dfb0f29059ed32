//! Error types for the ranking library.

use thiserror::Error;

/// Result type alias for the ranking library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while ranking nodes.
///
/// Digesting and weighting are infallible; only argument validation on the
/// ranking entry points can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// More nodes were requested than were supplied.
    #[error("invalid argument: requested top {requested} of {available} nodes")]
    InvalidArgument { requested: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::InvalidArgument {
            requested: 6,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: requested top 6 of 5 nodes"
        );
    }
}
