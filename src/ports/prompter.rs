use crate::domain::AppError;

/// Validation hook for free-text answers.
pub type TextValidator = fn(&str) -> Result<(), String>;

/// Port for interactive questions.
///
/// Every method returns `Ok(None)` when the user cancels the prompt.
pub trait PrompterPort {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError>;

    /// Pick one item; returns its index.
    fn select(&self, message: &str, items: &[String], default: usize)
    -> Result<Option<usize>, AppError>;

    /// Pick any number of items; returns the chosen indices.
    fn multi_select(
        &self,
        message: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Option<Vec<usize>>, AppError>;

    /// Read a line of text that must pass `validate`.
    fn input(
        &self,
        message: &str,
        initial: &str,
        validate: TextValidator,
    ) -> Result<Option<String>, AppError>;
}
