use crate::app::api::{self, ConfigureOptions, ConfigureOutcome};
use crate::domain::AppError;

pub fn run_config(reset: bool) -> Result<(), AppError> {
    if !reset {
        println!();
        println!("⚙️  Claude Code Status Line Configuration");
        println!();
    }

    if let ConfigureOutcome::Saved { applied: true, .. } =
        api::configure(ConfigureOptions { reset })?
    {
        println!();
        println!("Restart Claude Code to see the updated status line.");
    }
    Ok(())
}
