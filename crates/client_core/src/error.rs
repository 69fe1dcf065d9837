use thiserror::Error;

/// Fallback shown when the service signals failure without an error message.
pub const GENERIC_SERVICE_FAILURE: &str = "Failed to generate blueprint.";

/// Fallback shown when no response was received at all.
pub const GENERIC_NETWORK_FAILURE: &str = "An unexpected network error occurred.";

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The call never completed: connect failure, broken stream, or an
    /// undecodable success body. Not retried.
    #[error("generation service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service responded with a non-2xx status and (optionally) an
    /// application-level error message.
    #[error("generation service rejected request (status {status})")]
    Service { status: u16, message: Option<String> },
}

impl GenerateError {
    /// Message suitable for showing to the user, per the error taxonomy:
    /// transport failures get a generic line, service failures use the
    /// service-supplied text when present.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Transport(_) => GENERIC_NETWORK_FAILURE.to_string(),
            GenerateError::Service { message, .. } => message
                .clone()
                .unwrap_or_else(|| GENERIC_SERVICE_FAILURE.to_string()),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GenerateError::Transport(_))
    }
}
