use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect, Select};

use crate::domain::AppError;
use crate::ports::{PrompterPort, TextValidator};

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(what: &str, err: DialoguerError) -> AppError {
    AppError::Prompt(format!("Failed to read {}: {}", what, err))
}

impl PrompterPort for DialoguerPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()
            .map_err(|err| prompt_error("confirmation", err))
    }

    fn select(
        &self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|err| prompt_error("selection", err))
    }

    fn multi_select(
        &self,
        message: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Option<Vec<usize>>, AppError> {
        MultiSelect::new()
            .with_prompt(format!("{} (Space to select, Enter to confirm)", message))
            .items(items)
            .defaults(defaults)
            .interact_opt()
            .map_err(|err| prompt_error("selection", err))
    }

    fn input(
        &self,
        message: &str,
        initial: &str,
        validate: TextValidator,
    ) -> Result<Option<String>, AppError> {
        let result = Input::<String>::new()
            .with_prompt(message)
            .default(initial.to_string())
            .validate_with(move |value: &String| validate(value))
            .interact_text();

        match result {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(prompt_error("input", err)),
        }
    }
}
