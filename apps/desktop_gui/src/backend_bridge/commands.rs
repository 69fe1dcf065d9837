//! Backend commands queued from UI to the backend worker.

use shared::protocol::GenerateBlueprintRequest;

pub enum BackendCommand {
    Generate { request: GenerateBlueprintRequest },
}
