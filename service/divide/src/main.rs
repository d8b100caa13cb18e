mod division;
mod env;

use ansi_term::Color::{Cyan, Green, Red};
use kind::Kind;
use result::{Handlers, Result, Tag};

#[macro_use]
extern crate log;

/// Exit code for a division that failed (and had no fallback configured).
const FAILED: i32 = 1;
/// Exit code for arguments that could not be understood.
const BAD_ARGUMENTS: i32 = 2;

/// Divides the two numbers given on the command line and prints the quotient.
///
/// ```text
/// $ divide 10 2
/// 5
/// $ divide 10 0
/// Division by zero is not allowed
/// $ DIVIDE_FALLBACK=0 divide 10 0
/// 0
/// ```
///
/// See the [env](env) module for the environment variables that tweak this behavior.
#[tokio::main]
async fn main() {
    // Sets the logger to use terminal colors.
    std::env::set_var("RUST_LOG_STYLE", "always");
    env_logger::init();
    let (dividend, divisor) = match division::parse_operands(std::env::args().skip(1)) {
        Result::Success(operands) => operands,
        Result::Failure(usage) => {
            eprintln!("{}", Red.paint(usage));
            std::process::exit(BAD_ARGUMENTS);
        }
    };
    let quotient = if env::use_async() {
        debug!("Dividing {} by {} on the blocking pool", dividend, divisor);
        division::divide_async(dividend, divisor).await
    } else {
        division::divide(dividend, divisor)
    };
    info!(
        "Dividing {} by {} resolved to {}",
        dividend,
        divisor,
        Cyan.paint(quotient.kind())
    );
    std::process::exit(report(quotient, env::fallback()));
}

/// Prints the outcome of a division and returns the exit code for it.
fn report(quotient: Result<f64, String>, fallback: Option<f64>) -> i32 {
    match (quotient.tag(), fallback) {
        (Tag::Failure, Some(fallback)) => {
            if let (_, Some(reason)) = quotient.as_ref().unwrap_tuple() {
                warn!("{}, falling back to {}", reason, fallback);
            }
            println!("{}", Green.paint(quotient.unwrap_or(fallback).to_string()));
            0
        }
        _ => quotient.match_with(Handlers {
            on_success: |quotient: f64| {
                println!("{}", Green.paint(quotient.to_string()));
                0
            },
            on_failure: |reason: String| {
                eprintln!("{}", Red.paint(reason));
                FAILED
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use result::{failure, success};

    #[test]
    fn exit_codes() {
        assert_eq!(report(success(5.0), None), 0);
        assert_eq!(report(failure("nope".to_string()), None), FAILED);
    }

    #[test]
    fn fallback_turns_a_failure_into_a_success() {
        assert_eq!(report(failure("nope".to_string()), Some(0.0)), 0);
        assert_eq!(report(success(5.0), Some(0.0)), 0);
    }
}
