//! Pure rendering of a blueprint response into display-ready scene cards.
//!
//! Rendering is deterministic and total over any well-formed response: an
//! empty blueprint still yields a header with a zero count. Card identity is
//! positional; `scene_number` is displayed verbatim and never deduplicated.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use shared::{domain::SceneNumber, protocol::BlueprintResponse};
use std::fmt::Write as _;

const VISUAL_SEARCH_TEMPLATE: &str = "https://www.google.com/search?tbm=isch&q=";

/// Query-component encoding: everything except ASCII alphanumerics and
/// `-_.!~*'()` is percent-encoded, so spaces become `%20` rather than `+`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Reference-image search link derived from a scene's `image_tag`.
pub fn visual_search_url(image_tag: &str) -> String {
    format!(
        "{VISUAL_SEARCH_TEMPLATE}{}",
        utf8_percent_encode(image_tag, QUERY_ENCODE_SET)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintHeader {
    pub movie_title: String,
    pub logline: String,
    pub scene_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneCard {
    pub index: usize,
    pub scene_number: SceneNumber,
    pub timeline: String,
    pub setting: String,
    pub detailed_scene: String,
    pub character_emotions: String,
    pub camera_angle: String,
    pub dialogue: String,
    pub image_tag: String,
    pub visual_search_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlueprint {
    pub header: BlueprintHeader,
    pub cards: Vec<SceneCard>,
}

impl RenderedBlueprint {
    /// Plain-text form used by the CLI front-end.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header.movie_title);
        let _ = writeln!(out, "Logline: {}", self.header.logline);
        let _ = writeln!(out, "Scene Breakdown ({} Scenes)", self.header.scene_count);
        for card in &self.cards {
            let _ = writeln!(out);
            let _ = writeln!(out, "Scene {}", card.scene_number.0);
            let _ = writeln!(out, "  Timeline: {}", card.timeline);
            let _ = writeln!(out, "  Setting: {}", card.setting);
            let _ = writeln!(out, "  Detailed Scene: {}", card.detailed_scene);
            let _ = writeln!(out, "  Character Emotions: {}", card.character_emotions);
            let _ = writeln!(out, "  Camera Angle: {}", card.camera_angle);
            let _ = writeln!(out, "  Dialogue: \"{}\"", card.dialogue);
            let _ = writeln!(out, "  AI Visual Tag: {}", card.image_tag);
            let _ = writeln!(out, "  Storyboard Reference: {}", card.visual_search_url);
        }
        out
    }
}

/// Render a response into an ordered card sequence. All scene fields pass
/// through verbatim; the only derived field is the visual search link.
pub fn render_blueprint(response: &BlueprintResponse) -> RenderedBlueprint {
    let cards = response
        .blueprint
        .iter()
        .enumerate()
        .map(|(index, scene)| SceneCard {
            index,
            scene_number: scene.scene_number,
            timeline: scene.timeline.clone(),
            setting: scene.setting.clone(),
            detailed_scene: scene.detailed_scene.clone(),
            character_emotions: scene.character_emotions.clone(),
            camera_angle: scene.camera_angle.clone(),
            dialogue: scene.dialogue.clone(),
            image_tag: scene.image_tag.clone(),
            visual_search_url: visual_search_url(&scene.image_tag),
        })
        .collect();
    RenderedBlueprint {
        header: BlueprintHeader {
            movie_title: response.movie_title.clone(),
            logline: response.logline.clone(),
            scene_count: response.blueprint.len(),
        },
        cards,
    }
}
