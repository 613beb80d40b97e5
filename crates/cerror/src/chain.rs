//! Walking a cause chain without knowing its concrete types.

use std::error::Error as StdError;

use crate::{Error, ErrorType};

/// Iterator over an error and its transitive `source()`s, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Category of any error: its [`ErrorType`] if it is a `cerror::Error`,
/// `NO_TYPE` otherwise.
///
/// ```
/// use cerror::{error_type_of, ErrorType};
///
/// let err = ErrorType::FORBIDDEN.new("nope");
/// assert_eq!(error_type_of(&err), ErrorType::FORBIDDEN);
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
/// assert_eq!(error_type_of(&io), ErrorType::NO_TYPE);
/// ```
pub fn error_type_of(err: &(dyn StdError + 'static)) -> ErrorType {
    match err.downcast_ref::<Error>() {
        Some(e) => e.error_type(),
        None => ErrorType::NO_TYPE,
    }
}
