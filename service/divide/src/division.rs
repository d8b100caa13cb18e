use futures::FutureExt;
use result::{failure, success, AsyncResult, Result};

pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed";

pub const USAGE: &str = "usage: divide <dividend> <divisor>";

/// Divides `dividend` by `divisor`, failing with [DIVISION_BY_ZERO](DIVISION_BY_ZERO)
/// rather than producing an infinity or a NaN.
pub fn divide(dividend: f64, divisor: f64) -> Result<f64, String> {
    if divisor == 0.0 {
        return failure(DIVISION_BY_ZERO.to_string());
    }
    success(dividend / divisor)
}

/// The same division as [divide](divide), carried out on tokio's blocking pool.
///
/// Should the task itself die (it cannot, short of a panic inside `divide`) the join error is
/// reported as the failure.
pub fn divide_async(dividend: f64, divisor: f64) -> AsyncResult<'static, f64, String> {
    async move {
        match tokio::task::spawn_blocking(move || divide(dividend, divisor)).await {
            Ok(quotient) => quotient,
            Err(err) => failure(format!("the division task did not complete: {}", err)),
        }
    }
    .boxed()
}

/// Parses exactly two numeric operands out of the program arguments (program name excluded).
pub fn parse_operands<I>(args: I) -> Result<(f64, f64), String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.len() != 2 {
        return failure(USAGE.to_string());
    }
    match (parse_operand(&args[0]), parse_operand(&args[1])) {
        (Result::Success(dividend), Result::Success(divisor)) => success((dividend, divisor)),
        (Result::Failure(reason), _) | (_, Result::Failure(reason)) => failure(reason),
    }
}

fn parse_operand(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{:?} is not a number. {}", raw, USAGE))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use result::ResultError;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn ten_by_two() {
        let result = divide(10.0, 2.0);
        assert!(result.is_success());
        assert_eq!(result.unwrap(), 5.0);
    }

    #[test]
    fn ten_by_zero() {
        let result = divide(10.0, 0.0);
        assert!(result.is_failure());
        assert_eq!(
            result.unwrap_tuple(),
            (None, Some("Division by zero is not allowed".to_string()))
        );
    }

    #[test]
    fn negative_zero_is_still_zero() {
        assert_eq!(divide(1.0, -0.0).unwrap_error(), DIVISION_BY_ZERO);
    }

    #[test]
    fn unwrap_error_on_a_quotient() {
        let result = divide(10.0, 2.0);
        let caught = std::panic::catch_unwind(move || result.unwrap_error()).unwrap_err();
        let err = ResultError::from_panic(caught.as_ref())
            .expect("the panic should have been a ResultError");
        assert!(err.message().contains("unwrap_error"));
        assert!(err.message().contains("success"));
    }

    #[test]
    fn quotient_can_be_doubled() {
        assert_eq!(divide(10.0, 2.0).map(|q| q * 2.0).unwrap(), 10.0);
    }

    #[tokio::test]
    async fn async_division() {
        assert_eq!(divide_async(9.0, 3.0).await.unwrap(), 3.0);
        assert_eq!(divide_async(9.0, 0.0).await.unwrap_error(), DIVISION_BY_ZERO);
    }

    #[test]
    fn async_division_on_a_fresh_runtime() {
        let quotient = tokio_test::block_on(async {
            let runtime = tokio::runtime::Handle::current();
            runtime.spawn(divide_async(1.0, 4.0)).await
        });
        assert_eq!(quotient.unwrap().unwrap(), 0.25);
    }

    #[test]
    fn two_operands() {
        assert_eq!(
            parse_operands(args(&["10", " 2.5 "])),
            success((10.0, 2.5))
        );
    }

    #[test]
    fn wrong_arity() {
        assert_eq!(parse_operands(args(&[])).unwrap_error(), USAGE);
        assert_eq!(parse_operands(args(&["1"])).unwrap_error(), USAGE);
        assert_eq!(parse_operands(args(&["1", "2", "3"])).unwrap_error(), USAGE);
    }

    #[test]
    fn not_a_number() {
        let reason = parse_operands(args(&["ten", "2"])).unwrap_error();
        assert!(reason.starts_with("\"ten\" is not a number"));
        let reason = parse_operands(args(&["10", "two"])).unwrap_error();
        assert!(reason.starts_with("\"two\" is not a number"));
    }
}
