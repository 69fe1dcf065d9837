use serde::{Deserialize, Serialize};

use crate::{domain::SceneNumber, error::ValidationError};

/// One generation request as sent to `POST /generate`. `num_scenes` stays a
/// string on the wire; the service coerces it and applies its own default when
/// the field is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateBlueprintRequest {
    pub idea: String,
    pub num_scenes: String,
    pub film_tone: String,
    pub aspect_ratio: String,
}

impl GenerateBlueprintRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            num_scenes: String::new(),
            film_tone: String::new(),
            aspect_ratio: String::new(),
        }
    }

    /// The only client-side rule: the idea must be non-empty after trimming.
    /// Every other field is the service's to judge.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idea.trim().is_empty() {
            return Err(ValidationError::EmptyIdea);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_number: SceneNumber,
    pub timeline: String,
    pub setting: String,
    pub detailed_scene: String,
    pub character_emotions: String,
    pub camera_angle: String,
    pub dialogue: String,
    pub image_tag: String,
}

/// Successful response body. `blueprint` order reflects narrative sequence and
/// must be preserved downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintResponse {
    pub movie_title: String,
    pub logline: String,
    pub blueprint: Vec<Scene>,
}

/// Failure response body on non-2xx. The `error` field is optional; absence
/// means the caller falls back to a generic message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
