//! Interactive questionnaire over the interview state machine.

use crate::app::commands::generate::{GenerateOptions, render};
use crate::domain::interview::{Interview, InterviewStep};
use crate::domain::{AppError, EnsembleRequest};
use crate::ports::Prompter;
use crate::services::DialoguerPrompter;

/// Drive an interview to completion with the given prompter.
///
/// `requester` is the display name substituted when the lead answers
/// `use mine`; terminal front ends have none.
pub fn collect_request(
    prompter: &mut impl Prompter,
    requester: Option<String>,
) -> Result<EnsembleRequest, AppError> {
    let mut interview = Interview::new(requester);
    let mut step = interview.opening();
    loop {
        match step {
            InterviewStep::Question(question) => {
                let reply = prompter.ask(&question)?;
                step = interview.advance(reply);
            }
            InterviewStep::Finished(request) => return Ok(*request),
            InterviewStep::Aborted(reason) => return Err(AppError::Aborted(reason)),
        }
    }
}

/// Terminal entry point: ask for every field, then render the document.
pub fn execute(options: &GenerateOptions) -> Result<String, AppError> {
    println!("Enter ensemble information:");
    let mut prompter = DialoguerPrompter::new();
    let request = collect_request(&mut prompter, None)?;
    render(&request, options)
}
