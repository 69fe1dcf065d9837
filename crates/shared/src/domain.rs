use serde::{Deserialize, Serialize};

/// Scene index as assigned by the generation service. Expected to be sequential
/// within one blueprint, but never re-validated client-side; the service is the
/// authority and duplicates are rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneNumber(pub i64);

/// Defaults the generation service applies when a field is absent or empty.
pub const DEFAULT_NUM_SCENES: u32 = 5;
pub const DEFAULT_FILM_TONE: &str = "Gritty Sci-Fi";
pub const DEFAULT_ASPECT_RATIO: &str = "1.85:1 (Widescreen)";

pub const FILM_TONE_PRESETS: &[&str] = &[
    "Gritty Sci-Fi",
    "Noir Thriller",
    "Whimsical Fantasy",
    "Grounded Drama",
    "High-Octane Action",
];

pub const ASPECT_RATIO_PRESETS: &[&str] = &[
    "1.85:1 (Widescreen)",
    "2.35:1 (Anamorphic)",
    "16:9 (Broadcast)",
    "4:3 (Academy)",
];
