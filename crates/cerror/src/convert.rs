use std::io;

use crate::error::Cause;
use crate::{CResult, Error, ErrorType, Location};

/// Maps `io::ErrorKind` to the closest category.
fn io_error_type(kind: io::ErrorKind) -> ErrorType {
    match kind {
        io::ErrorKind::NotFound         => ErrorType::NOT_FOUND,
        io::ErrorKind::AlreadyExists    => ErrorType::ALREADY_EXIST,
        io::ErrorKind::PermissionDenied => ErrorType::FORBIDDEN,
        io::ErrorKind::InvalidInput     => ErrorType::VALIDATION,
        io::ErrorKind::InvalidData      => ErrorType::VALIDATION,
        _                               => ErrorType::INTERNAL,
    }
}

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for Error {
    /// Classify an `io::Error` by its kind.
    ///
    /// The message names only the kind (`"io: entity not found"`); the OS
    /// text lives on the wrapped io error, where `raw_os_error()` stays
    /// reachable by downcasting. A chain walk prints each text once.
    #[track_caller]
    fn from(err: io::Error) -> Self {
        let error_type = io_error_type(err.kind());
        let message = format!("io: {}", err.kind());
        Error::build_at(Location::caller(), error_type, message, Some(Cause::from(err)))
    }
}

// ── ResultExt — wrapping on Results ───────────────────────────────

/// Extension trait for wrapping the error of any `Result`.
///
/// ```
/// use cerror::{ErrorType, ResultExt};
///
/// fn read_config() -> cerror::CResult<String> {
///     std::fs::read_to_string("/definitely/not/here.toml")
///         .wrap_err(ErrorType::INTERNAL, "reading config")
/// }
///
/// let err = read_config().unwrap_err();
/// assert_eq!(err.to_string(), "reading config");
/// assert!(err.wrapped().is_some());
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with a category and a message.
    fn wrap_err(self, error_type: ErrorType, msg: &str) -> CResult<T>;

    /// Like [`wrap_err`](Self::wrap_err), building the message only on error.
    fn wrap_err_with<F>(self, error_type: ErrorType, msg: F) -> CResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    // `match` instead of `map_err`: closures can't be #[track_caller].
    #[track_caller]
    fn wrap_err(self, error_type: ErrorType, msg: &str) -> CResult<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(error_type.wrap(e, msg)),
        }
    }

    #[track_caller]
    fn wrap_err_with<F>(self, error_type: ErrorType, msg: F) -> CResult<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(error_type.wrap(e, msg())),
        }
    }
}
