pub use error::ResultError;
use futures::future::BoxFuture;
use kind::Kind;
use std::convert::Infallible;


/// A Result is the outcome of a fallible computation. It is either a
/// [Success](Result::Success) holding a value of type `S` or a [Failure](Result::Failure)
/// holding an error of type `E`, and never both or neither.
///
/// Unlike [std::result::Result](std::result::Result) this type defaults its error to
/// [Infallible](std::convert::Infallible), so a computation that can never fail may simply
/// be declared as `Result<T>`.
///
/// A Result never changes once constructed. Every transformation consumes the value and
/// hands back a new one.
///
/// ```
/// use result::{failure, success, Result};
///
/// fn divide(a: f64, b: f64) -> Result<f64, String> {
///     if b == 0.0 {
///         return failure("Division by zero is not allowed".to_string());
///     }
///     success(a / b)
/// }
///
/// assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
/// assert_eq!(
///     divide(10.0, 0.0).unwrap_tuple(),
///     (None, Some("Division by zero is not allowed".to_string()))
/// );
/// ```
#[derive(Kind, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<S, E = Infallible> {
    Success(S),
    Failure(E),
}

/// The bare discriminant of a [Result](Result), without its payload.
#[derive(Kind, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Success,
    Failure,
}

/// An AsyncResult is a deferred computation that eventually resolves to a [Result](Result).
///
/// It is a plain alias of a boxed, `Send`, future. Polling, scheduling and cancellation
/// all belong to whichever executor drives it.
///
/// ```
/// use futures::FutureExt;
/// use result::{success, AsyncResult};
///
/// fn answer() -> AsyncResult<'static, u32> {
///     async { success(42) }.boxed()
/// }
///
/// assert_eq!(futures::executor::block_on(answer()).unwrap(), 42);
/// ```
pub type AsyncResult<'a, S, E = Infallible> = BoxFuture<'a, Result<S, E>>;

/// The pair of callbacks handed to [match_with](Result::match_with). Exactly one of them
/// is invoked.
pub struct Handlers<F, G> {
    pub on_success: F,
    pub on_failure: G,
}

/// Shorthand for [Result::success](Result::success).
pub fn success<S, E>(value: S) -> Result<S, E> {
    Result::Success(value)
}

/// Shorthand for [Result::failure](Result::failure).
pub fn failure<S, E>(error: E) -> Result<S, E> {
    Result::Failure(error)
}

#[track_caller]
fn raise(err: ResultError) -> ! {
    panic!("{}", err.panic_message())
}

impl<S, E> Result<S, E> {
    pub fn success(value: S) -> Self {
        Result::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Result::Failure(error)
    }

    pub fn tag(&self) -> Tag {
        match self {
            Result::Success(_) => Tag::Success,
            Result::Failure(_) => Tag::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Result::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Result::Failure(_))
    }

    /// Borrows the payload, leaving this Result in place.
    pub fn as_ref(&self) -> Result<&S, &E> {
        match self {
            Result::Success(value) => Result::Success(value),
            Result::Failure(error) => Result::Failure(error),
        }
    }

    /// Returns the success value.
    ///
    /// This PANICS if called on a failure, with the
    /// [panic message](ResultError::panic_message) of a [ResultError](ResultError). Whoever
    /// catches the panic may get the error back with [from_panic](ResultError::from_panic).
    ///
    /// ```
    /// use result::{failure, success, ResultError};
    ///
    /// assert_eq!(success::<_, ()>(5).unwrap(), 5);
    ///
    /// let caught = std::panic::catch_unwind(|| failure::<u8, _>("nope").unwrap()).unwrap_err();
    /// let err = ResultError::from_panic(caught.as_ref()).unwrap();
    /// assert_eq!(err, ResultError::unwrap_on_failure());
    /// ```
    ///
    /// See [try_unwrap](Result::try_unwrap) for a variant that does not panic.
    #[track_caller]
    pub fn unwrap(self) -> S {
        match self {
            Result::Success(value) => value,
            Result::Failure(_) => raise(ResultError::unwrap_on_failure()),
        }
    }

    /// Returns the failure error.
    ///
    /// This PANICS with the message of a [ResultError](ResultError) if called on a success. See
    /// [try_unwrap_error](Result::try_unwrap_error) for a variant that does not panic.
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Result::Success(_) => raise(ResultError::unwrap_error_on_success()),
            Result::Failure(error) => error,
        }
    }

    /// Returns the success value, or `fallback` if this is a failure.
    pub fn unwrap_or(self, fallback: S) -> S {
        match self {
            Result::Success(value) => value,
            Result::Failure(_) => fallback,
        }
    }

    /// Splits this Result into a `(value, error)` pair in which exactly one side is present.
    ///
    /// ```
    /// use result::failure;
    ///
    /// let (value, error) = failure::<u32, _>("bad input").unwrap_tuple();
    /// assert_eq!(value, None);
    /// assert_eq!(error, Some("bad input"));
    /// ```
    pub fn unwrap_tuple(self) -> (Option<S>, Option<E>) {
        match self {
            Result::Success(value) => (Some(value), None),
            Result::Failure(error) => (None, Some(error)),
        }
    }

    /// The non-panicking form of [unwrap](Result::unwrap). The misuse is returned as an
    /// `Err` instead of raised, and the failure payload is dropped.
    pub fn try_unwrap(self) -> std::result::Result<S, ResultError> {
        match self {
            Result::Success(value) => Ok(value),
            Result::Failure(_) => Err(ResultError::unwrap_on_failure()),
        }
    }

    /// The non-panicking form of [unwrap_error](Result::unwrap_error).
    pub fn try_unwrap_error(self) -> std::result::Result<E, ResultError> {
        match self {
            Result::Success(_) => Err(ResultError::unwrap_error_on_success()),
            Result::Failure(error) => Ok(error),
        }
    }

    pub fn success_value(self) -> Option<S> {
        self.unwrap_tuple().0
    }

    pub fn failure_value(self) -> Option<E> {
        self.unwrap_tuple().1
    }

    /// Applies `f` to the success value. A failure is handed back as is, with the very same
    /// error moved into the new Result, and `f` is never called.
    ///
    /// Any panic raised by `f` is not caught here.
    ///
    /// ```
    /// use result::{success, Result};
    ///
    /// let doubled: Result<i32> = success(10).map(|x| x * 2);
    /// assert_eq!(doubled.unwrap(), 20);
    /// ```
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(S) -> U,
    {
        match self {
            Result::Success(value) => Result::Success(f(value)),
            Result::Failure(error) => Result::Failure(error),
        }
    }

    /// Invokes exactly one of the two [handlers](Handlers) with the payload and returns
    /// whatever that handler returns.
    ///
    /// ```
    /// use result::{failure, Handlers, Result};
    ///
    /// let r: Result<u32, &str> = failure("timed out");
    /// let message = r.match_with(Handlers {
    ///     on_success: |n: u32| format!("got {}", n),
    ///     on_failure: |e: &str| format!("failed: {}", e),
    /// });
    /// assert_eq!(message, "failed: timed out");
    /// ```
    pub fn match_with<U, F, G>(self, handlers: Handlers<F, G>) -> U
    where
        F: FnOnce(S) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Result::Success(value) => (handlers.on_success)(value),
            Result::Failure(error) => (handlers.on_failure)(error),
        }
    }
}

impl<S, E> From<std::result::Result<S, E>> for Result<S, E> {
    fn from(result: std::result::Result<S, E>) -> Self {
        match result {
            Ok(value) => Result::Success(value),
            Err(error) => Result::Failure(error),
        }
    }
}

/// Allows handing a Result back to code built around `?`.
///
/// ```
/// use result::{failure, Result};
///
/// fn parse(input: &str) -> std::result::Result<u8, String> {
///     let checked: Result<&str, String> = if input.is_empty() {
///         failure("empty input".to_string())
///     } else {
///         Result::success(input)
///     };
///     let input = std::result::Result::from(checked)?;
///     input.parse().map_err(|_| format!("{} is not a u8", input))
/// }
///
/// assert_eq!(parse("7"), Ok(7));
/// assert_eq!(parse(""), Err("empty input".to_string()));
/// ```
impl<S, E> From<Result<S, E>> for std::result::Result<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Result::Success(value) => Ok(value),
            Result::Failure(error) => Err(error),
        }
    }
}
