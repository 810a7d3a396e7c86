use thiserror::Error;

/// Errors surfaced by the safe fontconfig binding.
///
/// Native-call failures are reported at the call site that detected
/// them and are never retried; the failure conventions differ per
/// fontconfig function (boolean sentinel, null pointer, cursor done
/// marker) and each wrapper checks the one its function documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fontconfig call returned its documented failure sentinel.
    /// `operation` names the C entry point that failed.
    #[error("fontconfig call failed: {operation}")]
    NativeCallFailure { operation: &'static str },

    /// The shared library could not be loaded or a symbol was missing.
    #[error("failed to load fontconfig: {0}")]
    LibraryLoad(String),

    /// A raw library discriminant did not map to any known variant.
    #[error("type mismatch: expected {expected}, found raw value {found}")]
    TypeMismatch { expected: &'static str, found: i32 },

    /// A string argument could not cross the C boundary, typically
    /// because of an interior NUL byte.
    #[error("invalid string argument: {0}")]
    InvalidString(String),
}

/// Result type alias for fontconfig operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn native(operation: &'static str) -> Self {
        Error::NativeCallFailure { operation }
    }

    /// Whether the caller can reasonably continue after this error.
    ///
    /// Native-call failures are recoverable (the wrapped objects stay
    /// valid); load and argument errors are not tied to any live
    /// native state either. Ownership bookkeeping violations are not
    /// represented here at all: those are programmer errors and panic.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::NativeCallFailure { .. } => true,
            Error::LibraryLoad(_) => false,
            Error::TypeMismatch { .. } => false,
            Error::InvalidString(_) => false,
        }
    }
}

impl From<std::ffi::NulError> for Error {
    fn from(err: std::ffi::NulError) -> Self {
        Error::InvalidString(err.to_string())
    }
}
