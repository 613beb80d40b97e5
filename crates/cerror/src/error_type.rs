//! Category tags and their registry.
//!
//! An [`ErrorType`] is a plain `u32` code. Names and descriptions live in two
//! static tables; any code missing from them still renders:
//!
//! ```text
//! description(t) ──miss──▶ name(t) ──miss──▶ t.code() as decimal
//! ```
//!
//! # Registered codes
//!
//! | Code | Constant        | Name           |
//! |------|-----------------|----------------|
//! | `0`  | `NO_TYPE`       | `NoType`       |
//! | `1`  | `INTERNAL`      | `Internal`     |
//! | `2`  | `VALIDATION`    | `Validation`   |
//! | `3`  | `NOT_FOUND`     | `NotFound`     |
//! | `4`  | `ALREADY_EXIST` | `AlreadyExist` |
//! | `5`  | `UNAUTHORIZED`  | `Unauthorized` |
//! | `6`  | `FORBIDDEN`     | `Forbidden`    |
//!
//! Codes `7+` are free for applications; they get the numeric fallback.

use std::borrow::Cow;

/// Default message for validation errors, shared with the `Validation`
/// description.
pub const VALIDATION_ERROR_MESSAGE: &str = "several validation errors occurred";

/// Semantic category of an [`Error`](crate::Error).
///
/// Equality, ordering and hashing are by code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ErrorType(u32);

impl ErrorType {
    /// Error without a category.
    pub const NO_TYPE: ErrorType = ErrorType(0);
    /// Unexpected or system fault.
    pub const INTERNAL: ErrorType = ErrorType(1);
    /// Caller input failed a check.
    pub const VALIDATION: ErrorType = ErrorType(2);
    pub const NOT_FOUND: ErrorType = ErrorType(3);
    pub const ALREADY_EXIST: ErrorType = ErrorType(4);
    pub const UNAUTHORIZED: ErrorType = ErrorType(5);
    pub const FORBIDDEN: ErrorType = ErrorType(6);

    /// Every registered category, in code order.
    pub const ALL: [ErrorType; 7] = [
        Self::NO_TYPE,
        Self::INTERNAL,
        Self::VALIDATION,
        Self::NOT_FOUND,
        Self::ALREADY_EXIST,
        Self::UNAUTHORIZED,
        Self::FORBIDDEN,
    ];

    /// Build a tag from a raw code. Unregistered codes are allowed.
    ///
    /// ```
    /// use cerror::ErrorType;
    /// const CONFLICT: ErrorType = ErrorType::from_code(409);
    /// assert_eq!(CONFLICT.name(), "409");
    /// ```
    #[inline]
    pub const fn from_code(code: u32) -> Self {
        Self(code)
    }

    /// Raw code.
    #[inline]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Canonical short name, or the decimal code if unregistered.
    pub fn name(self) -> Cow<'static, str> {
        match lookup(NAMES, self) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.0.to_string()),
        }
    }

    /// Default human-readable description, falling back to [`name`](Self::name).
    pub fn description(self) -> Cow<'static, str> {
        match lookup(DESCRIPTIONS, self) {
            Some(desc) => Cow::Borrowed(desc),
            None => self.name(),
        }
    }

    /// True if the code has a registered name.
    #[inline]
    pub fn is_registered(self) -> bool {
        lookup(NAMES, self).is_some()
    }
}

// ── Registry tables ───────────────────────────────────────────────

static NAMES: &[(ErrorType, &str)] = &[
    (ErrorType::NO_TYPE, "NoType"),
    (ErrorType::INTERNAL, "Internal"),
    (ErrorType::VALIDATION, "Validation"),
    (ErrorType::NOT_FOUND, "NotFound"),
    (ErrorType::ALREADY_EXIST, "AlreadyExist"),
    (ErrorType::UNAUTHORIZED, "Unauthorized"),
    (ErrorType::FORBIDDEN, "Forbidden"),
];

static DESCRIPTIONS: &[(ErrorType, &str)] = &[
    (ErrorType::NO_TYPE, "unrecognized error occurred"),
    (ErrorType::INTERNAL, "internal error occurred"),
    (ErrorType::VALIDATION, VALIDATION_ERROR_MESSAGE),
    (ErrorType::NOT_FOUND, "not found error occurred"),
    (ErrorType::ALREADY_EXIST, "already exist error occurred"),
    (ErrorType::UNAUTHORIZED, "unauthorized error occurred"),
    (ErrorType::FORBIDDEN, "forbidden error occurred"),
];

#[inline]
fn lookup(table: &'static [(ErrorType, &'static str)], t: ErrorType) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == t).map(|(_, v)| *v)
}

// ── Conversions ───────────────────────────────────────────────────

impl From<u32> for ErrorType {
    #[inline]
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<ErrorType> for u32 {
    #[inline]
    fn from(t: ErrorType) -> Self {
        t.0
    }
}

impl Default for ErrorType {
    fn default() -> Self {
        Self::NO_TYPE
    }
}

impl core::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name())
    }
}

impl core::fmt::Debug for ErrorType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", self.name(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_names() {
        let expected = [
            "NoType",
            "Internal",
            "Validation",
            "NotFound",
            "AlreadyExist",
            "Unauthorized",
            "Forbidden",
        ];
        for (t, name) in ErrorType::ALL.iter().zip(expected) {
            assert_eq!(t.name(), name);
            assert!(t.is_registered());
        }
    }

    #[test]
    fn registered_descriptions() {
        assert_eq!(ErrorType::NO_TYPE.description(), "unrecognized error occurred");
        assert_eq!(ErrorType::INTERNAL.description(), "internal error occurred");
        assert_eq!(ErrorType::VALIDATION.description(), VALIDATION_ERROR_MESSAGE);
        assert_eq!(ErrorType::NOT_FOUND.description(), "not found error occurred");
        assert_eq!(ErrorType::ALREADY_EXIST.description(), "already exist error occurred");
        assert_eq!(ErrorType::UNAUTHORIZED.description(), "unauthorized error occurred");
        assert_eq!(ErrorType::FORBIDDEN.description(), "forbidden error occurred");
    }

    #[test]
    fn unregistered_name_is_decimal() {
        let t = ErrorType::from_code(42);
        assert!(!t.is_registered());
        assert_eq!(t.name(), "42");
        assert_eq!(ErrorType::from_code(u32::MAX).name(), u32::MAX.to_string());
    }

    #[test]
    fn unregistered_description_falls_back_to_name() {
        for code in [7, 100, 9999, u32::MAX] {
            let t = ErrorType::from_code(code);
            assert_eq!(t.description(), t.name());
            assert!(!t.description().is_empty());
        }
    }

    #[test]
    fn lookups_are_stable() {
        for t in ErrorType::ALL.into_iter().chain([ErrorType::from_code(77)]) {
            assert_eq!(t.name(), t.name());
            assert_eq!(t.description(), t.description());
        }
    }

    #[test]
    fn codes_match_constants() {
        for (i, t) in ErrorType::ALL.iter().enumerate() {
            assert_eq!(t.code(), i as u32);
            assert_eq!(ErrorType::from(i as u32), *t);
            assert_eq!(u32::from(*t), i as u32);
        }
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", ErrorType::NOT_FOUND), "NotFound");
        assert_eq!(format!("{:?}", ErrorType::NOT_FOUND), "NotFound(3)");
        assert_eq!(format!("{}", ErrorType::from_code(12)), "12");
        assert_eq!(format!("{:?}", ErrorType::from_code(12)), "12(12)");
    }

    #[test]
    fn default_is_no_type() {
        assert_eq!(ErrorType::default(), ErrorType::NO_TYPE);
    }
}
