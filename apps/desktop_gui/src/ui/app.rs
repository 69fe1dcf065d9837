use std::time::Instant;

use client_core::{render_blueprint, RenderedBlueprint};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{
        ASPECT_RATIO_PRESETS, DEFAULT_ASPECT_RATIO, DEFAULT_FILM_TONE, DEFAULT_NUM_SCENES,
        FILM_TONE_PRESETS,
    },
    error::RequestField,
    protocol::GenerateBlueprintRequest,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorKind, UiEvent};
use crate::controller::notifications::{NotificationStack, Severity};
use crate::controller::orchestration::dispatch_backend_command;

pub const SETTINGS_STORAGE_KEY: &str = "storyboard_director_settings";

const SUCCESS_MESSAGE: &str = "Blueprint generated successfully!";

/// One generation cycle: Idle -> Loading -> (Success | Error). Success and
/// Error both accept the next submission; only Loading blocks the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Loading,
    Success,
    Error,
}

impl GenerationPhase {
    pub fn can_submit(self) -> bool {
        self != GenerationPhase::Loading
    }
}

/// Form fields worth keeping between runs. The idea itself is deliberately
/// not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedFormSettings {
    pub num_scenes: String,
    pub film_tone: String,
    pub aspect_ratio: String,
}

impl Default for PersistedFormSettings {
    fn default() -> Self {
        Self {
            num_scenes: DEFAULT_NUM_SCENES.to_string(),
            film_tone: DEFAULT_FILM_TONE.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
        }
    }
}

pub struct StoryboardApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    idea: String,
    num_scenes: String,
    film_tone: String,
    aspect_ratio: String,

    phase: GenerationPhase,
    rendered: Option<RenderedBlueprint>,
    notifications: NotificationStack,
    focus_idea: bool,
    scroll_to_output: bool,
    status: String,
}

impl StoryboardApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted: Option<PersistedFormSettings>,
    ) -> Self {
        let settings = persisted.unwrap_or_default();
        Self {
            cmd_tx,
            ui_rx,
            idea: String::new(),
            num_scenes: settings.num_scenes,
            film_tone: settings.film_tone,
            aspect_ratio: settings.aspect_ratio,
            phase: GenerationPhase::Idle,
            rendered: None,
            notifications: NotificationStack::default(),
            focus_idea: false,
            scroll_to_output: false,
            status: "Starting backend worker...".to_string(),
        }
    }

    fn current_request(&self) -> GenerateBlueprintRequest {
        GenerateBlueprintRequest {
            idea: self.idea.clone(),
            num_scenes: self.num_scenes.clone(),
            film_tone: self.film_tone.clone(),
            aspect_ratio: self.aspect_ratio.clone(),
        }
    }

    /// Entry point for the submit intent. Rejects while a cycle is in flight
    /// (the button is also disabled, so this guard only matters for
    /// programmatic callers), validates locally, then hands the request to
    /// the worker and enters Loading.
    fn submit_generation(&mut self) {
        if !self.phase.can_submit() {
            tracing::debug!("submit ignored while a generation cycle is in flight");
            return;
        }

        let request = self.current_request();
        if let Err(err) = request.validate() {
            self.notifications.notify(err.to_string(), Severity::Error);
            match err.field() {
                RequestField::Idea => self.focus_idea = true,
            }
            return;
        }

        // Prior output belongs to the previous cycle; discard before the new
        // one begins.
        self.rendered = None;
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Generate { request },
            &mut self.notifications,
        ) {
            self.phase = GenerationPhase::Loading;
            self.status = "Generating blueprint...".to_string();
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.status = "Ready".to_string();
                }
                UiEvent::WorkerStartupFailed(message) => {
                    self.notifications.notify(&message, Severity::Error);
                    self.status = message;
                }
                UiEvent::BlueprintReady(response) => {
                    self.rendered = Some(render_blueprint(&response));
                    self.scroll_to_output = true;
                    self.notifications.notify(SUCCESS_MESSAGE, Severity::Success);
                    self.phase = GenerationPhase::Success;
                    self.status = "Blueprint ready".to_string();
                }
                UiEvent::GenerationFailed(err) => {
                    self.notifications
                        .notify(err.message().to_string(), Severity::Error);
                    self.phase = GenerationPhase::Error;
                    self.status = match err.kind() {
                        UiErrorKind::Transport => {
                            "Generation failed: service unreachable".to_string()
                        }
                        UiErrorKind::Service => "Generation failed".to_string(),
                    };
                }
            }
        }
    }

    fn show_request_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Storyboard Director");
        ui.label("Turn a movie idea into a shot-by-shot blueprint.");
        ui.add_space(8.0);

        let idea_edit = ui.add(
            egui::TextEdit::multiline(&mut self.idea)
                .hint_text("Describe your movie idea...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if self.focus_idea {
            idea_edit.request_focus();
            self.focus_idea = false;
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Scenes:");
            ui.add(egui::TextEdit::singleline(&mut self.num_scenes).desired_width(40.0))
                .on_hover_text(format!("Empty uses the service default ({DEFAULT_NUM_SCENES})"));

            ui.label("Tone:");
            egui::ComboBox::from_id_salt("film_tone")
                .selected_text(self.film_tone.clone())
                .show_ui(ui, |ui| {
                    for preset in FILM_TONE_PRESETS {
                        ui.selectable_value(&mut self.film_tone, preset.to_string(), *preset);
                    }
                });

            ui.label("Aspect:");
            egui::ComboBox::from_id_salt("aspect_ratio")
                .selected_text(self.aspect_ratio.clone())
                .show_ui(ui, |ui| {
                    for preset in ASPECT_RATIO_PRESETS {
                        ui.selectable_value(&mut self.aspect_ratio, preset.to_string(), *preset);
                    }
                });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let clicked = ui
                .add_enabled(
                    self.phase.can_submit(),
                    egui::Button::new("Generate Blueprint"),
                )
                .clicked();
            if clicked {
                self.submit_generation();
            }
            if self.phase == GenerationPhase::Loading {
                ui.spinner();
                ui.label("Summoning the director...");
            }
        });
        ui.small(egui::RichText::new(&self.status).weak());
    }

    fn show_notifications(&mut self, ctx: &egui::Context) {
        let mut offset = 12.0;
        for (index, notification) in self.notifications.active().iter().enumerate() {
            egui::Area::new(egui::Id::new(("notification", index)))
                .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, offset))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let fill = match notification.severity {
                        Severity::Success => egui::Color32::from_rgb(16, 120, 70),
                        Severity::Error => egui::Color32::from_rgb(150, 40, 40),
                    };
                    egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                        ui.colored_label(egui::Color32::WHITE, &notification.message);
                    });
                });
            offset += 36.0;
        }
    }
}

fn labeled_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.strong(format!("{label}:"));
        ui.label(value);
    });
}

fn show_blueprint(ui: &mut egui::Ui, rendered: &RenderedBlueprint, scroll_into_view: bool) {
    ui.separator();
    let title = ui.heading(&rendered.header.movie_title);
    if scroll_into_view {
        title.scroll_to_me(Some(egui::Align::Min));
    }
    labeled_row(ui, "Logline", &rendered.header.logline);
    ui.strong(format!(
        "Scene Breakdown ({} Scenes)",
        rendered.header.scene_count
    ));
    ui.add_space(6.0);

    for card in &rendered.cards {
        ui.group(|ui| {
            ui.strong(format!("Scene {}", card.scene_number.0));
            labeled_row(ui, "Timeline", &card.timeline);
            labeled_row(ui, "Setting", &card.setting);
            labeled_row(ui, "Detailed Scene", &card.detailed_scene);
            labeled_row(ui, "Character Emotions", &card.character_emotions);
            labeled_row(ui, "Camera Angle", &card.camera_angle);
            labeled_row(ui, "Dialogue", &format!("\"{}\"", card.dialogue));
            labeled_row(ui, "AI Visual Tag", &card.image_tag);
            ui.hyperlink_to("View Storyboard Reference", &card.visual_search_url);
        });
        ui.add_space(8.0);
    }
}

impl eframe::App for StoryboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.notifications.prune(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_request_form(ui);
                    let scroll_into_view = std::mem::take(&mut self.scroll_to_output);
                    if let Some(rendered) = &self.rendered {
                        show_blueprint(ui, rendered, scroll_into_view);
                    }
                });
        });

        self.show_notifications(ctx);

        // Repaint on a timer so notification expiry and worker events are
        // picked up without user input.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedFormSettings {
            num_scenes: self.num_scenes.clone(),
            film_tone: self.film_tone.clone(),
            aspect_ratio: self.aspect_ratio.clone(),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::{UiError, UiEvent};
    use client_core::GenerateError;
    use crossbeam_channel::bounded;
    use shared::domain::SceneNumber;
    use shared::protocol::{BlueprintResponse, Scene};

    struct Harness {
        app: StoryboardApp,
        cmd_rx: Receiver<BackendCommand>,
        ui_tx: Sender<UiEvent>,
    }

    fn harness() -> Harness {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        Harness {
            app: StoryboardApp::new(cmd_tx, ui_rx, None),
            cmd_rx,
            ui_tx,
        }
    }

    fn two_scene_response() -> BlueprintResponse {
        let scene = |number: i64| Scene {
            scene_number: SceneNumber(number),
            timeline: format!("00:0{number}:00"),
            setting: format!("Setting {number}"),
            detailed_scene: format!("Beat {number}"),
            character_emotions: "Unit-7: wonder".to_string(),
            camera_angle: "WIDE SHOT".to_string(),
            dialogue: "UNIT-7: Hello.".to_string(),
            image_tag: format!("tag {number}"),
        };
        BlueprintResponse {
            movie_title: "Circuits of the Heart".to_string(),
            logline: "A robot learns to love.".to_string(),
            blueprint: vec![scene(1), scene(2)],
        }
    }

    #[test]
    fn empty_idea_is_rejected_without_queueing_a_command() {
        let mut h = harness();
        h.app.idea = "   ".to_string();
        h.app.submit_generation();

        assert!(h.cmd_rx.try_recv().is_err(), "no command may be queued");
        let active = h.app.notifications.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Error);
        assert_eq!(
            active[0].message,
            "Please enter a movie idea before generating."
        );
        assert!(h.app.focus_idea, "focus returns to the idea field");
        assert_eq!(h.app.phase, GenerationPhase::Idle);
    }

    #[test]
    fn valid_idea_queues_exactly_one_command_and_enters_loading() {
        let mut h = harness();
        h.app.idea = "a robot learns to love".to_string();
        h.app.num_scenes = "2".to_string();
        h.app.submit_generation();

        assert_eq!(h.app.phase, GenerationPhase::Loading);
        let BackendCommand::Generate { request } = h.cmd_rx.try_recv().expect("one command");
        assert_eq!(request.idea, "a robot learns to love");
        assert!(h.cmd_rx.try_recv().is_err(), "exactly one command");
    }

    #[test]
    fn second_submit_while_loading_is_dropped() {
        let mut h = harness();
        h.app.idea = "first".to_string();
        h.app.submit_generation();
        assert!(h.cmd_rx.try_recv().is_ok());

        h.app.idea = "second".to_string();
        h.app.submit_generation();
        assert!(
            h.cmd_rx.try_recv().is_err(),
            "submit while Loading must not queue another command"
        );
        assert!(h.app.notifications.active().is_empty());
    }

    #[test]
    fn disconnected_worker_surfaces_error_without_entering_loading() {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(16);
        drop(cmd_rx);
        let mut app = StoryboardApp::new(cmd_tx, ui_rx, None);

        app.idea = "a valid idea".to_string();
        app.submit_generation();

        assert_eq!(
            app.phase,
            GenerationPhase::Idle,
            "loading must not be entered for a rejected command"
        );
        let active = app.notifications.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Error);
        assert!(active[0].message.contains("not running"));
    }

    #[test]
    fn full_command_queue_surfaces_error_without_entering_loading() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(16);
        cmd_tx
            .try_send(BackendCommand::Generate {
                request: GenerateBlueprintRequest::new("occupies the only slot"),
            })
            .expect("prefill command queue");
        let mut app = StoryboardApp::new(cmd_tx, ui_rx, None);

        app.idea = "a valid idea".to_string();
        app.submit_generation();

        assert_eq!(app.phase, GenerationPhase::Idle);
        let active = app.notifications.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Error);
        assert!(active[0].message.contains("full"));
    }

    #[test]
    fn successful_cycle_renders_cards_and_returns_control() {
        let mut h = harness();
        h.app.idea = "a robot learns to love".to_string();
        h.app.submit_generation();

        h.ui_tx
            .send(UiEvent::BlueprintReady(two_scene_response()))
            .expect("send event");
        h.app.process_ui_events();

        assert_eq!(h.app.phase, GenerationPhase::Success);
        assert!(h.app.phase.can_submit(), "control re-enabled after success");
        let rendered = h.app.rendered.as_ref().expect("rendered output");
        assert_eq!(rendered.cards.len(), 2);
        assert_eq!(rendered.cards[0].setting, "Setting 1");
        assert_eq!(rendered.cards[1].setting, "Setting 2");
        assert!(h.app.scroll_to_output);
        let active = h.app.notifications.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Success);
    }

    #[test]
    fn failed_cycle_surfaces_service_message_and_returns_control() {
        let mut h = harness();
        h.app.idea = "doomed idea".to_string();
        h.app.submit_generation();
        assert_eq!(h.app.phase, GenerationPhase::Loading);

        let err = GenerateError::Service {
            status: 500,
            message: Some("quota exceeded".to_string()),
        };
        h.ui_tx
            .send(UiEvent::GenerationFailed(UiError::from_generate(&err)))
            .expect("send event");
        h.app.process_ui_events();

        assert_eq!(h.app.phase, GenerationPhase::Error);
        assert!(h.app.phase.can_submit(), "control re-enabled after failure");
        assert!(h.app.rendered.is_none());
        let active = h.app.notifications.active();
        assert_eq!(active.len(), 1);
        assert!(active[0].message.contains("quota exceeded"));
    }

    #[test]
    fn new_submission_clears_previous_output_before_loading() {
        let mut h = harness();
        h.app.idea = "first run".to_string();
        h.app.submit_generation();
        h.ui_tx
            .send(UiEvent::BlueprintReady(two_scene_response()))
            .expect("send event");
        h.app.process_ui_events();
        assert!(h.app.rendered.is_some());

        h.app.idea = "second run".to_string();
        h.app.submit_generation();
        assert!(h.app.rendered.is_none(), "stale cards cleared on entry");
        assert_eq!(h.app.phase, GenerationPhase::Loading);
    }
}
