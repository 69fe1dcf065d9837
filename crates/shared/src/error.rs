use thiserror::Error;

/// Input field that failed validation, used by callers to move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Idea,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a movie idea before generating.")]
    EmptyIdea,
}

impl ValidationError {
    pub fn field(&self) -> RequestField {
        match self {
            ValidationError::EmptyIdea => RequestField::Idea,
        }
    }
}
