use thiserror::Error;

use crate::metadata::token::Token;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most of these never reach the caller of the high-level API. Nullability decoding is
/// best-effort: a failed transform is logged and degrades to the untransformed type, and a
/// missing name degrades to an empty string. The variants exist so the lower layers can report
/// *why* they gave up, which the fallible entry points (e.g.
/// [`crate::metadata::nullability::AnnotationResolver::try_transform`]) expose.
///
/// # Error Categories
///
/// ## Metadata Errors
/// - [`Error::Malformed`] - Metadata supplied by the source is inconsistent
/// - [`Error::TypeNotFound`] - A referenced type row is unknown to the source
///
/// ## Annotation Errors
/// - [`Error::FlagCountMismatch`] - Flag sequence does not fit the type tree
/// - [`Error::RecursionLimit`] - Type tree nesting exceeded the configured depth
///
/// # Examples
///
/// ```rust
/// use nullscope::Error;
///
/// let err = Error::FlagCountMismatch { expected: 2, actual: 1 };
/// match err {
///     Error::FlagCountMismatch { expected, actual } => {
///         assert!(expected != actual);
///     }
///     e => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The metadata is damaged and could not be interpreted.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A nullable flag sequence does not line up with the type it should annotate.
    ///
    /// `expected` is the number of reference-kind nodes in the type tree, `actual` the
    /// number of flags supplied. Callers of the high-level API never see this, the
    /// transform is abandoned and the original type is kept.
    #[error("Nullable flag count mismatch - expected {expected}, got {actual}")]
    FlagCountMismatch {
        /// Reference-kind nodes in the type tree
        expected: usize,
        /// Flags in the sequence
        actual: usize,
    },

    /// Failed to find type in the metadata source.
    ///
    /// The associated [`Token`] identifies which type was not found.
    #[error("Failed to find type - {0}")]
    TypeNotFound(Token),

    /// Recursion limit reached.
    ///
    /// To prevent stack overflow on hostile metadata, the depth of type trees walked by the
    /// transform is bounded. The associated value shows the limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}
