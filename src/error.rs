//! Crate-wide error taxonomy.
//!
//! Every failure this toolkit raises at its own decision points is a variant
//! of [`Error`]. Failures raised by caller-supplied functions are never
//! caught or reinterpreted; they propagate through `Result` plumbing
//! unchanged.

use std::fmt;

/// The conditions this toolkit can raise on its own behalf.
///
/// # Examples
///
/// ```rust
/// use pliers::error::Error;
///
/// let error = Error::IndexOutOfRange { index: 5, length: 3 };
/// assert_eq!(error.to_string(), "index 5 out of range for sequence of length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A callable received an incompatible argument count.
    ///
    /// `received` counts every supplied argument, positional and keyword.
    ArityMismatch {
        /// Number of positional arguments the callable declares.
        expected: usize,
        /// Whether the callable accepts extra positional arguments.
        variadic: bool,
        /// Number of arguments actually supplied.
        received: usize,
    },
    /// A callable's arity could not be determined and no override was given.
    SignatureUnavailable,
    /// A memoization key could not be derived from the supplied arguments.
    UnhashableArguments,
    /// Indexed lookup past the end of a sequence.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of elements the sequence actually produced.
        length: usize,
    },
    /// Keyed lookup into a mapping that does not contain the key.
    KeyNotFound {
        /// The missing key, rendered for diagnostics.
        key: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch {
                expected,
                variadic,
                received,
            } => {
                if *variadic {
                    write!(
                        formatter,
                        "arity mismatch: expected at least {expected} arguments, received {received}"
                    )
                } else {
                    write!(
                        formatter,
                        "arity mismatch: expected {expected} arguments, received {received}"
                    )
                }
            }
            Self::SignatureUnavailable => {
                write!(
                    formatter,
                    "signature unavailable: callable declares no arity and no override was given"
                )
            }
            Self::UnhashableArguments => {
                write!(
                    formatter,
                    "memoization key could not be derived from the supplied arguments"
                )
            }
            Self::IndexOutOfRange { index, length } => {
                write!(
                    formatter,
                    "index {index} out of range for sequence of length {length}"
                )
            }
            Self::KeyNotFound { key } => write!(formatter, "key not found: {key}"),
        }
    }
}

impl std::error::Error for Error {}
