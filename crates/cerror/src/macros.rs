/// Create an error with a formatted message.
///
/// The recorded location is the macro invocation site.
///
/// ```
/// use cerror::{newf, ErrorType};
/// let err = newf!(ErrorType::NOT_FOUND, "user {} not found", 42);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! newf {
    ($error_type:expr, $($arg:tt)+) => {
        $crate::ErrorType::newf($error_type, ::core::format_args!($($arg)+))
    };
}

/// Wrap a cause with a formatted message.
///
/// ```
/// use cerror::{wrapf, ErrorType};
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let err = wrapf!(io, ErrorType::INTERNAL, "saving {}", "report.csv");
/// assert_eq!(err.to_string(), "saving report.csv");
/// assert_eq!(err.wrapped().unwrap().to_string(), "disk full");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $error_type:expr, $($arg:tt)+) => {
        $crate::ErrorType::wrapf($error_type, $cause, ::core::format_args!($($arg)+))
    };
}

/// Early-return an error if a condition is false.
///
/// ```ignore
/// ensure!(qty > 0, ErrorType::VALIDATION, "quantity must be positive, got {}", qty);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err($crate::newf!($error_type, $($arg)+));
        }
    };
}
