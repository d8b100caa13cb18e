pub use kind_derive::*;

/// A type that implements Kind is capable of describing itself with a stable name, which
/// lets callers tell values apart without downcasting or matching on their concrete type.
///
/// This is most easily accomplished by using the Kind derive macro.
///
/// ```
/// use kind::Kind;
///
/// #[derive(Kind)]
/// struct Payload {}
///
/// #[derive(Kind)]
/// #[kind("Stable")]
/// struct RenamedInternally {}
///
/// #[derive(Kind)]
/// enum Tagged<T> {
///     Left(T),
///     Right { value: T },
///     Neither,
/// }
///
/// assert_eq!("Payload", Payload {}.kind());
/// assert_eq!("Stable", RenamedInternally {}.kind());
/// assert_eq!("Tagged::Left", Tagged::Left(1).kind());
/// assert_eq!("Tagged::Right", Tagged::Right { value: 1 }.kind());
/// let neither: Tagged<u8> = Tagged::Neither;
/// assert_eq!("Tagged::Neither", neither.kind());
/// ```
///
/// The derive macro does not work on unions. If you wish, you must implement Kind on your
/// target union yourself.
pub trait Kind {
    fn kind(&self) -> String;
}
