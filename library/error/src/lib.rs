pub use kind::Kind;
use std::any::Any;
pub use thiserror;
pub use thiserror::Error;

/// A `ResultError` is raised when a value is extracted from the wrong side of a `Result`
/// from the `result` library. That is, calling `unwrap` on a failure or `unwrap_error`
/// on a success.
///
/// It is the only error this workspace ever produces on its own. Any error a caller
/// places inside a failure is theirs and is never converted into a `ResultError`.
///
/// The [kind](kind::Kind) of a `ResultError` is always [NAME](ResultError::NAME), which
/// callers may rely upon to tell it apart from their own errors.
///
/// ```
/// use error::*;
///
/// let err = ResultError::unwrap_on_failure();
/// assert_eq!(err.kind(), ResultError::NAME);
/// assert_eq!(err.to_string(), "called `unwrap` on a failure value");
/// ```
#[derive(Error, Kind, Debug, Clone, PartialEq, Eq)]
#[kind("ResultError")]
#[error("{message}")]
pub struct ResultError {
    message: String,
}

impl ResultError {
    /// The stable discriminator reported by every `ResultError`.
    pub const NAME: &'static str = "ResultError";

    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error raised by `unwrap` when it is called on a failure value.
    pub fn unwrap_on_failure() -> Self {
        Self::new("called `unwrap` on a failure value")
    }

    /// The error raised by `unwrap_error` when it is called on a success value.
    pub fn unwrap_error_on_success() -> Self {
        Self::new("called `unwrap_error` on a success value")
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The text a misuse panic carries: the [NAME](ResultError::NAME) followed by the
    /// message, e.g. ``ResultError: called `unwrap` on a failure value``.
    pub fn panic_message(&self) -> String {
        format!("{}: {}", Self::NAME, self.message)
    }

    /// Recovers the `ResultError` from a caught panic payload, should the panic have been a
    /// misuse panic (see [panic_message](ResultError::panic_message)). Any other panic
    /// yields `None`.
    ///
    /// ```
    /// use error::ResultError;
    ///
    /// let err = ResultError::unwrap_on_failure();
    /// let message = err.panic_message();
    /// let caught = std::panic::catch_unwind(move || panic!("{}", message)).unwrap_err();
    /// assert_eq!(ResultError::from_panic(caught.as_ref()), Some(err));
    /// ```
    pub fn from_panic(payload: &(dyn Any + Send)) -> Option<Self> {
        let text = match payload.downcast_ref::<String>() {
            Some(text) => text.as_str(),
            None => *payload.downcast_ref::<&str>()?,
        };
        text.strip_prefix(Self::NAME)?
            .strip_prefix(": ")
            .map(Self::new)
    }
}

impl From<&str> for ResultError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ResultError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
