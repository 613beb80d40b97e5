use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

use crate::chain::Chain;
use crate::{ErrorType, Location};

/// Boxed cause stored beneath a wrapping error.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Categorized error value.
///
/// Carries a message, an [`ErrorType`], the [`Location`] of the code that
/// built it, an optional wrapped cause and optional key/value context.
///
/// Built only through the constructors on [`ErrorType`]:
///
/// ```
/// use cerror::ErrorType;
///
/// let missing = ErrorType::NOT_FOUND.new("user 7 missing");
/// let err = ErrorType::INTERNAL.wrap(missing, "lookup failed");
///
/// assert_eq!(err.to_string(), "lookup failed");
/// assert_eq!(err.error_type(), ErrorType::INTERNAL);
/// assert_eq!(err.wrapped().unwrap().to_string(), "user 7 missing");
/// ```
///
/// There are no `&mut self` methods. Context is attached with the consuming
/// [`with_context`](Error::with_context) builder before the value is handed
/// out; wrapping always allocates a new node and never touches the cause.
///
/// `Display` writes the message and nothing else. Category, location and
/// chain are reachable only through accessors.
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    message:    String,
    error_type: ErrorType,
    location:   Location,
    wrapped:    Option<Cause>,
    context:    Option<BTreeMap<String, String>>,

    #[cfg(feature = "backtrace")]
    backtrace:  Option<String>,
}

// ── Constructors ──────────────────────────────────────────────────

#[allow(clippy::new_ret_no_self)]
impl ErrorType {
    /// Create an error of this type with a literal message.
    ///
    /// ```
    /// use cerror::ErrorType;
    /// let err = ErrorType::VALIDATION.new("x");
    /// assert_eq!(err.to_string(), "x");
    /// assert_eq!(err.line(), line!() - 2);
    /// ```
    #[track_caller]
    pub fn new(self, msg: impl Into<String>) -> Error {
        Error::build(self, msg.into(), None)
    }

    /// Create an error of this type with a formatted message.
    ///
    /// Prefer the [`newf!`](crate::newf) macro.
    #[track_caller]
    pub fn newf(self, args: fmt::Arguments<'_>) -> Error {
        Error::build(self, render(args), None)
    }

    /// Create an error of this type on top of `cause`.
    ///
    /// Anything convertible into a boxed `std::error::Error` is accepted:
    /// another [`Error`], foreign errors, `String`, `&str`.
    #[track_caller]
    pub fn wrap<E>(self, cause: E, msg: impl Into<String>) -> Error
    where
        E: Into<Cause>,
    {
        Error::build(self, msg.into(), Some(cause.into()))
    }

    /// Formatted variant of [`wrap`](Self::wrap).
    ///
    /// Prefer the [`wrapf!`](crate::wrapf) macro.
    #[track_caller]
    pub fn wrapf<E>(self, cause: E, args: fmt::Arguments<'_>) -> Error
    where
        E: Into<Cause>,
    {
        Error::build(self, render(args), Some(cause.into()))
    }

    /// Like [`wrap`](Self::wrap), but the cause may be absent.
    ///
    /// A `None` cause is legal; the result simply has no wrapped error.
    #[track_caller]
    pub fn wrap_opt<E>(self, cause: Option<E>, msg: impl Into<String>) -> Error
    where
        E: Into<Cause>,
    {
        Error::build(self, msg.into(), cause.map(Into::into))
    }

    /// Formatted variant of [`wrap_opt`](Self::wrap_opt).
    ///
    /// ```
    /// use cerror::ErrorType;
    /// let err = ErrorType::INTERNAL.wrapf_opt(None::<std::io::Error>, format_args!("count={}", 3));
    /// assert_eq!(err.to_string(), "count=3");
    /// assert!(err.wrapped().is_none());
    /// ```
    #[track_caller]
    pub fn wrapf_opt<E>(self, cause: Option<E>, args: fmt::Arguments<'_>) -> Error
    where
        E: Into<Cause>,
    {
        Error::build(self, render(args), cause.map(Into::into))
    }
}

/// Render format arguments without ever panicking.
///
/// `ToString` panics when a `Display` impl reports an error; here a failing
/// argument just truncates the message at that point.
fn render(args: fmt::Arguments<'_>) -> String {
    if let Some(s) = args.as_str() {
        return s.to_owned();
    }
    let mut out = String::new();
    let _ = fmt::write(&mut out, args);
    out
}

impl Error {
    #[track_caller]
    pub(crate) fn build(error_type: ErrorType, message: String, wrapped: Option<Cause>) -> Self {
        Self::build_at(Location::caller(), error_type, message, wrapped)
    }

    pub(crate) fn build_at(
        location: Location,
        error_type: ErrorType,
        message: String,
        wrapped: Option<Cause>,
    ) -> Self {
        #[cfg(feature = "metrics")]
        crate::metrics::bump(error_type);

        #[cfg(feature = "debug-logging")]
        crate::ktrace!("cerror: {:?} \"{}\" at {}", error_type, message, location);

        Self {
            inner: Box::new(Inner {
                message,
                error_type,
                location,
                wrapped,
                context: None,
                #[cfg(feature = "backtrace")]
                backtrace: capture_backtrace(),
            }),
        }
    }

    /// Attach a context entry. A repeated key keeps the last value.
    ///
    /// ```
    /// use cerror::ErrorType;
    /// let err = ErrorType::NOT_FOUND
    ///     .new("no such order")
    ///     .with_context("order_id", "A-17")
    ///     .with_context("tenant", "acme");
    /// assert_eq!(err.context_value("order_id"), Some("A-17"));
    /// ```
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner
            .context
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attach several context entries at once.
    pub fn with_contexts<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .fold(self, |err, (k, v)| err.with_context(k, v))
    }
}

#[cfg(feature = "backtrace")]
fn capture_backtrace() -> Option<String> {
    use std::backtrace::{Backtrace, BacktraceStatus};

    let bt = Backtrace::capture();
    match bt.status() {
        BacktraceStatus::Captured => Some(bt.to_string()),
        _ => None,
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl Error {
    /// The message, exactly as given at construction.
    #[inline]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    #[inline]
    pub fn error_type(&self) -> ErrorType {
        self.inner.error_type
    }

    /// True if this error (not its causes) has type `t`.
    #[inline]
    pub fn is(&self, t: ErrorType) -> bool {
        self.inner.error_type == t
    }

    /// The wrapped cause, if any.
    pub fn wrapped(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.inner.wrapped.as_deref()
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.inner.location
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.inner.location.file()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.inner.location.line()
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.inner.location.column()
    }

    pub fn context(&self) -> Option<&BTreeMap<String, String>> {
        self.inner.context.as_ref()
    }

    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.inner.context.as_ref()?.get(key).map(String::as_str)
    }

    /// Backtrace captured at construction, if `RUST_BACKTRACE` enabled it.
    #[cfg(feature = "backtrace")]
    pub fn backtrace(&self) -> Option<&str> {
        self.inner.backtrace.as_deref()
    }

    /// This error followed by every transitive `source()`.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The innermost error of the chain; `self` when nothing is wrapped.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.chain().last().unwrap_or(self)
    }

    /// The first `cerror` node in the chain whose type is `t`.
    pub fn find_type(&self, t: ErrorType) -> Option<&Error> {
        self.chain()
            .filter_map(|e| e.downcast_ref::<Error>())
            .find(|e| e.is(t))
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .wrapped
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// ── Display ───────────────────────────────────────────────────────

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.message)
    }
}

// ── Debug ─────────────────────────────────────────────────────────

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Error");
        d.field("type", &self.inner.error_type);
        d.field("message", &self.inner.message);
        d.field("location", &self.inner.location);

        if let Some(ctx) = &self.inner.context {
            d.field("context", ctx);
        }

        if let Some(cause) = &self.inner.wrapped {
            d.field("wrapped", cause);
        }

        #[cfg(feature = "backtrace")]
        if self.inner.backtrace.is_some() {
            d.field("backtrace", &"<captured>");
        }

        d.finish()
    }
}
