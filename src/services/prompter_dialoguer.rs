use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::domain::interview::{Question, Reply};
use crate::ports::Prompter;

/// Terminal prompter backed by dialoguer. Ctrl-C while a question is open
/// becomes [`Reply::Cancelled`] so the interview can abort cleanly.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, question: &Question) -> Result<Reply, AppError> {
        if let Some(note) = &question.note {
            eprintln!("{note}");
        }

        match Input::<String>::new()
            .with_prompt(question.field.prompt())
            .allow_empty(true)
            .interact_text()
        {
            Ok(answer) => Ok(Reply::Answer(answer)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Ok(Reply::Cancelled)
            }
            Err(err) => Err(AppError::config_error(format!("Failed to read answer: {err}"))),
        }
    }
}
