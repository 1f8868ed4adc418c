//! Test command presentation. The exit status never reflects check results.

use super::print_banner;
use crate::app::api::{self, AppError, CHECK_COUNT, VerifyOptions, VerifyOutcome};

pub fn run_test(verbose: bool) {
    println!();
    println!("🧪 Testing Claude Code Status Line");
    println!();

    let result = api::verify(VerifyOptions { verbose });
    if let Err(err) = &result {
        println!("❌ Checks could not run: {}", err);
    }

    let (tally, verdict) = summary(&result);
    print_banner(&tally);
    println!("{}", verdict);
}

/// Tally line and closing verdict. A run that could not start counts every check as failed.
fn summary(result: &Result<VerifyOutcome, AppError>) -> (String, &'static str) {
    let (passed, total) = match result {
        Ok(outcome) => (outcome.passed(), outcome.total()),
        Err(_) => (0, CHECK_COUNT),
    };
    let verdict = if passed == total {
        "🎉 All tests passed! Your status line is ready."
    } else {
        "⚠️  Some tests failed. Run `claude-status install` to fix issues."
    };
    (format!("Tests passed: {}/{}", passed, total), verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api::CheckResult;

    fn outcome(results: &[bool]) -> VerifyOutcome {
        VerifyOutcome {
            checks: results
                .iter()
                .map(|&passed| CheckResult { name: "check", passed, details: Vec::new() })
                .collect(),
        }
    }

    #[test]
    fn summary_counts_passed_checks() {
        let (tally, verdict) = summary(&Ok(outcome(&[true, true, false, true, true])));

        assert_eq!(tally, "Tests passed: 4/5");
        assert!(verdict.contains("Some tests failed"));
    }

    #[test]
    fn summary_celebrates_a_clean_run() {
        let (tally, verdict) = summary(&Ok(outcome(&[true; CHECK_COUNT])));

        assert_eq!(tally, "Tests passed: 5/5");
        assert!(verdict.contains("All tests passed"));
    }

    #[test]
    fn aborted_run_reports_every_check_failed() {
        let (tally, verdict) = summary(&Err(AppError::HomeDirectoryUnavailable));

        assert_eq!(tally, format!("Tests passed: 0/{}", CHECK_COUNT));
        assert!(verdict.contains("Some tests failed"));
    }
}
