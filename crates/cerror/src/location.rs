//! Source location of the code that constructed an error.

use std::panic;

/// File, line and column of a constructor's caller.
///
/// Captured through `#[track_caller]`: every public constructor and every
/// internal helper on the way to [`Location::caller`] carries the attribute,
/// so the recorded frame is the first one outside this crate's API.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Location {
    /// Location of the nearest caller that is not `#[track_caller]`.
    ///
    /// ```
    /// use cerror::Location;
    /// let loc = Location::caller();
    /// assert_eq!(loc.line(), line!() - 1);
    /// ```
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(panic::Location::caller())
    }

    /// Build a location by hand. Mostly for conversions that have no
    /// meaningful call site.
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static panic::Location<'static>> for Location {
    fn from(loc: &'static panic::Location<'static>) -> Self {
        Self {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

impl core::fmt::Debug for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn nested() -> Location {
        Location::caller()
    }

    #[test]
    fn caller_is_this_line() {
        let (loc, line) = (Location::caller(), line!());
        assert_eq!(loc.line(), line);
        assert_eq!(loc.file(), file!());
    }

    #[test]
    fn track_caller_skips_helpers() {
        let (loc, line) = (nested(), line!());
        assert_eq!(loc.line(), line);
    }

    #[test]
    fn display_format() {
        let loc = Location::new("src/db.rs", 12, 5);
        assert_eq!(format!("{}", loc), "src/db.rs:12:5");
        assert_eq!(format!("{:?}", loc), "src/db.rs:12:5");
    }

    #[test]
    fn copy_semantics() {
        let a = Location::new("a.rs", 1, 1);
        let b = a;
        assert_eq!(a, b);
    }
}
