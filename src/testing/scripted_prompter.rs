use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{PrompterPort, TextValidator};

/// One scripted reply; `None` payloads simulate the user cancelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Confirm(Option<bool>),
    Select(Option<usize>),
    MultiSelect(Option<Vec<usize>>),
    Input(Option<String>),
}

/// Prompter that replays answers in order and records every question.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    pub questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: Mutex::new(answers.into()), questions: Mutex::new(Vec::new()) }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, message: &str) -> Result<Answer, AppError> {
        self.questions.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", message)))
    }
}

fn unexpected(message: &str, answer: Answer) -> AppError {
    AppError::Prompt(format!("unexpected answer {:?} for '{}'", answer, message))
}

impl PrompterPort for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> Result<Option<bool>, AppError> {
        match self.next(message)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(unexpected(message, other)),
        }
    }

    fn select(
        &self,
        message: &str,
        _items: &[String],
        _default: usize,
    ) -> Result<Option<usize>, AppError> {
        match self.next(message)? {
            Answer::Select(value) => Ok(value),
            other => Err(unexpected(message, other)),
        }
    }

    fn multi_select(
        &self,
        message: &str,
        _items: &[String],
        _defaults: &[bool],
    ) -> Result<Option<Vec<usize>>, AppError> {
        match self.next(message)? {
            Answer::MultiSelect(value) => Ok(value),
            other => Err(unexpected(message, other)),
        }
    }

    fn input(
        &self,
        message: &str,
        _initial: &str,
        validate: TextValidator,
    ) -> Result<Option<String>, AppError> {
        match self.next(message)? {
            Answer::Input(Some(value)) => {
                validate(&value).map_err(AppError::Prompt)?;
                Ok(Some(value))
            }
            Answer::Input(None) => Ok(None),
            other => Err(unexpected(message, other)),
        }
    }
}
