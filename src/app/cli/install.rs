//! Install command presentation.

use std::path::PathBuf;

use super::{print_banner, print_list};
use crate::app::api::{self, InstallOptions, InstallOutcome, SelfTest};
use crate::domain::AppError;

pub fn run_install(force: bool, config: Option<PathBuf>) -> Result<(), AppError> {
    println!();
    println!("🚀 Claude Code Status Line Setup");
    println!();

    let report = match api::install(InstallOptions { force, config }) {
        Ok(InstallOutcome::Installed(report)) => report,
        Ok(InstallOutcome::Cancelled) => return Ok(()),
        Err(e) => {
            print_troubleshooting();
            return Err(e);
        }
    };

    print_banner("✅ Installation Complete!");
    println!("Your status line will show:");
    println!("🕐 Time | 🤖 Claude Model | 🌿 Git Branch | 💰 Daily Cost");
    println!();
    if !report.cost_tracking {
        println!("ℹ️  Cost tracking shows N/A until ccusage is installed (brew install ccusage)");
        println!();
    }
    if let SelfTest::Failed(_) = report.self_test {
        println!("⚠️  The installation test did not pass; run `claude-status test --verbose`");
        println!();
    }
    print_list(
        "📝 Next steps:",
        &[
            "Restart Claude Code to see the new status line",
            "Run `claude-status test` to verify everything works",
            "Run `claude-status config` to customize settings",
        ],
    );
    Ok(())
}

fn print_troubleshooting() {
    println!();
    print_list(
        "💡 Troubleshooting:",
        &[
            "Ensure you have admin privileges",
            "Check your internet connection",
            "Run `claude-status test` for more details",
        ],
    );
}
