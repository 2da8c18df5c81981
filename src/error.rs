//! Error types for selvage.

/// Errors from the pattern table.
///
/// The slicing and builtin-predicate APIs are total and never produce these;
/// only [`PatternSet`](crate::PatternSet) registration and lookup can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registered pattern failed to compile.
    #[error("invalid pattern for '{name}': {source}")]
    InvalidPattern {
        /// The name the pattern was registered under.
        name: String,
        /// The underlying regex compile error.
        #[source]
        source: regex::Error,
    },

    /// Lookup of a format name that was never registered.
    #[error("unknown format: '{0}'")]
    UnknownFormat(String),
}

/// Result type for selvage operations.
pub type Result<T> = std::result::Result<T, Error>;
