use super::{print_banner, print_list};
use crate::app::api::{self, UninstallOptions, UninstallOutcome};
use crate::domain::AppError;

pub fn run_uninstall(keep_backup: bool) -> Result<(), AppError> {
    println!();
    println!("🗑️  Claude Code Status Line Uninstaller");
    println!();

    let UninstallOutcome::Completed(report) = api::uninstall(UninstallOptions { keep_backup })?
    else {
        return Ok(());
    };

    if report.removed > 0 {
        print_banner("✅ Uninstallation Complete!");
        println!("Removed {} items", report.removed);
    } else {
        print_banner("⚠️  Nothing to uninstall");
        println!("Status line was not found or already removed");
    }
    println!();

    print_list(
        "📝 Next steps:",
        &[
            "Restart Claude Code to see changes",
            "Dependencies (jq, ccusage) are still installed",
            "Run `claude-status install` to reinstall if needed",
        ],
    );
    Ok(())
}
