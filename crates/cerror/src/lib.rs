//! # cerror — Categorized Error
//!
//! Errors tagged with a semantic category, stamped with the call site that
//! built them, optionally wrapping a cause and carrying key/value context.
//!
//! ## Design
//!
//! - [`ErrorType`] is a `u32` tag. Seven categories are registered with a
//!   canonical name and a default description; any other code still renders
//!   (description → name → decimal code).
//! - [`Error`] is built only through methods on a tag: `new`, `newf`, `wrap`,
//!   `wrapf` (plus `wrap_opt` / `wrapf_opt` for an absent cause). It is
//!   immutable once handed out; wrapping allocates a new outer node.
//! - Every constructor is `#[track_caller]`, so `file()` / `line()` point at
//!   the code that called the library, not at the library.
//! - `Display` is the message and nothing else. Category, location, context
//!   and chain are read through accessors.
//!
//! ## Quick Start
//!
//! ```rust
//! use cerror::{newf, CResult, ErrorType, ResultExt};
//!
//! fn find_user(id: u32) -> CResult<String> {
//!     Err(newf!(ErrorType::NOT_FOUND, "user {} not found", id)
//!         .with_context("table", "users"))
//! }
//!
//! fn handler(id: u32) -> CResult<String> {
//!     find_user(id).wrap_err(ErrorType::INTERNAL, "loading profile")
//! }
//!
//! let err = handler(7).unwrap_err();
//! assert_eq!(err.to_string(), "loading profile");
//! assert_eq!(err.error_type(), ErrorType::INTERNAL);
//!
//! let cause = err.find_type(ErrorType::NOT_FOUND).unwrap();
//! assert_eq!(cause.to_string(), "user 7 not found");
//! assert_eq!(cause.context_value("table"), Some("users"));
//! ```
//!
//! ## Feature Flags
//!
//! | Flag            | Effect |
//! |-----------------|--------|
//! | `backtrace`     | Captures `std::backtrace::Backtrace` on construction |
//! | `metrics`       | Per-ErrorType AtomicU64 counters, Prometheus dump |
//! | `debug-logging` | Traces every construction through [`ktrace!`] |
//!
//! Without `debug-logging` the library never prints.

mod error_type;
mod location;
mod error;
mod chain;
#[macro_use]
mod macros;
mod convert;

pub(crate) mod env;
pub mod klog;

#[cfg(feature = "metrics")]
pub mod metrics;

// ── Public API ────────────────────────────────────────────────────

pub use error_type::{ErrorType, VALIDATION_ERROR_MESSAGE};
pub use location::Location;
pub use error::{Cause, Error};
pub use chain::{error_type_of, Chain};
pub use convert::ResultExt;

/// Convenience Result alias.
pub type CResult<T> = Result<T, Error>;
