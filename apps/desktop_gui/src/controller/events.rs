//! UI/backend events and error modeling for the desktop GUI controller.

use client_core::GenerateError;
use shared::protocol::BlueprintResponse;

/// Events sent from the backend worker to the UI thread. Each generation
/// cycle produces exactly one terminal event (`BlueprintReady` or
/// `GenerationFailed`), which is what lets the UI scope its loading state.
pub enum UiEvent {
    WorkerReady,
    WorkerStartupFailed(String),
    BlueprintReady(BlueprintResponse),
    GenerationFailed(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorKind {
    /// No response was received from the service.
    Transport,
    /// The service responded with an application-level failure.
    Service,
}

#[derive(Debug, Clone)]
pub struct UiError {
    kind: UiErrorKind,
    message: String,
}

impl UiError {
    pub fn from_generate(err: &GenerateError) -> Self {
        let kind = if err.is_transport() {
            UiErrorKind::Transport
        } else {
            UiErrorKind::Service
        };
        Self {
            kind,
            message: err.user_message(),
        }
    }

    pub fn kind(&self) -> UiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
