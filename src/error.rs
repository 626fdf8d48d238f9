//! The error type shared by every fallible operation in this crate.

use std::borrow::Cow;
use std::fmt;

/// The category of a [`DateMathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A context field was set to an unusable value.
    InvalidConfig,
    /// Civil fields did not describe a real date or time.
    InvalidComponents,
    /// The unit is not defined for the requested operation.
    UnsupportedUnit,
    /// Text could not be parsed.
    Parse,
    /// An instant or arithmetic result left the representable range.
    Range,
    /// An internal invariant failed.
    Assert,
}

/// A category of failure paired with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMathError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl DateMathError {
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates an invalid-configuration error.
    #[must_use]
    pub const fn invalid_config() -> Self {
        Self::new(ErrorKind::InvalidConfig)
    }

    /// Creates an invalid-components error.
    #[must_use]
    pub const fn invalid_components() -> Self {
        Self::new(ErrorKind::InvalidComponents)
    }

    /// Creates an unsupported-unit error.
    #[must_use]
    pub const fn unsupported_unit() -> Self {
        Self::new(ErrorKind::UnsupportedUnit)
    }

    /// Creates a parse error.
    #[must_use]
    pub const fn parse() -> Self {
        Self::new(ErrorKind::Parse)
    }

    /// Creates a range error.
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates an assertion error.
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to the error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The attached message, possibly empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for DateMathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            ErrorKind::InvalidConfig => "invalid configuration",
            ErrorKind::InvalidComponents => "invalid components",
            ErrorKind::UnsupportedUnit => "unsupported unit",
            ErrorKind::Parse => "parse error",
            ErrorKind::Range => "out of range",
            ErrorKind::Assert => "internal assertion failed",
        };
        f.write_str(label)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for DateMathError {}
