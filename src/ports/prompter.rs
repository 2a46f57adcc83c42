use crate::domain::AppError;
use crate::domain::interview::{Question, Reply};

/// Port for putting interview questions to a requester.
pub trait Prompter {
    /// Ask one question and return the requester's reply.
    fn ask(&mut self, question: &Question) -> Result<Reply, AppError>;
}
