use std::env::VarError;

const FALLBACK: &str = "DIVIDE_FALLBACK";
const ASYNC: &str = "DIVIDE_ASYNC";

/// The fallback quotient configured under the `DIVIDE_FALLBACK` environment variable. When
/// set, a failed division prints this number instead of its failure and exits successfully.
///
/// There is NO default. An unset (or empty) variable means that failures are reported as is.
///
/// This function will PANIC if the variable is set to something that is not a number, or
/// to something that is not valid unicode.
pub fn fallback() -> Option<f64> {
    parse_fallback(present(FALLBACK, std::env::var(FALLBACK)))
}

/// Whether the division is routed through the asynchronous path, configured under the
/// `DIVIDE_ASYNC` environment variable. Defaults to `false`.
///
/// Valid values are `true` and `false` (case insensitive). This function will PANIC on
/// anything else.
pub fn use_async() -> bool {
    parse_switch(ASYNC, present(ASYNC, std::env::var(ASYNC)))
}

/// An unset variable is `None`. A variable that is set but not valid unicode is a
/// misconfiguration, and PANICS rather than being mistaken for unset.
fn present(name: &str, var: Result<String, VarError>) -> Option<String> {
    match var {
        Ok(raw) => Some(raw),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => panic!(
            "the {} environment variable must be valid unicode, got {:?}",
            name, raw
        ),
    }
}

fn parse_fallback(raw: Option<String>) -> Option<f64> {
    let raw = raw.filter(|raw| !raw.trim().is_empty())?;
    match raw.trim().parse() {
        Ok(fallback) => Some(fallback),
        Err(_) => panic!(
            "the {} environment variable must be a number, got {:?}",
            FALLBACK, raw
        ),
    }
}

fn parse_switch(name: &str, raw: Option<String>) -> bool {
    match raw.as_deref().map(str::trim).map(str::to_lowercase).as_deref() {
        None | Some("") | Some("false") => false,
        Some("true") => true,
        Some(other) => panic!(
            "the {} environment variable was set to {}. It can be one of either true or false (case insensitive)",
            name, other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_absent() {
        assert_eq!(present(FALLBACK, Err(VarError::NotPresent)), None);
        assert_eq!(
            present(FALLBACK, Ok("2".to_string())),
            Some("2".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "DIVIDE_FALLBACK environment variable must be valid unicode")]
    fn non_unicode_is_not_silently_unset() {
        let raw = std::ffi::OsString::from("not really unicode");
        present(FALLBACK, Err(VarError::NotUnicode(raw)));
    }

    #[test]
    fn no_fallback_by_default() {
        assert_eq!(parse_fallback(None), None);
        assert_eq!(parse_fallback(Some("  ".to_string())), None);
    }

    #[test]
    fn numeric_fallback() {
        assert_eq!(parse_fallback(Some("-1.5".to_string())), Some(-1.5));
        assert_eq!(parse_fallback(Some(" 0 ".to_string())), Some(0.0));
    }

    #[test]
    #[should_panic(expected = "DIVIDE_FALLBACK environment variable must be a number")]
    fn garbage_fallback() {
        parse_fallback(Some("lots".to_string()));
    }

    #[test]
    fn switch() {
        assert!(!parse_switch(ASYNC, None));
        assert!(!parse_switch(ASYNC, Some("".to_string())));
        assert!(!parse_switch(ASYNC, Some("False".to_string())));
        assert!(parse_switch(ASYNC, Some("TRUE".to_string())));
        assert!(parse_switch(ASYNC, Some(" true ".to_string())));
    }

    #[test]
    #[should_panic(expected = "DIVIDE_ASYNC environment variable was set to yes")]
    fn garbage_switch() {
        parse_switch(ASYNC, Some("yes".to_string()));
    }
}
