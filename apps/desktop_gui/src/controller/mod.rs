//! Controller layer: UI events, notification stack, and command orchestration.

pub mod events;
pub mod notifications;
pub mod orchestration;
