use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use session::{RunState, Settings, TickClock, VisualizerSession};
use shared::domain::SpeedLevel;

use crate::controller::events::{UiAction, UiError, UiErrorContext};
use crate::controller::orchestration::{apply_action, InputField};
use crate::ui::{bars, theme::Palette};

pub const SETTINGS_STORAGE_KEY: &str = "insertion_sort_visualizer.settings";

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Initial contents of the input field, loaded before the first frame.
    pub numbers: Option<String>,
    pub settings: Settings,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PersistedVisualizerSettings {
    pub speed_level: SpeedLevel,
}

pub struct VisualizerApp {
    session: VisualizerSession,
    input: InputField,
    clock: TickClock,
    rng: StdRng,
    palette: Palette,
    error_dialog: Option<UiError>,
}

impl VisualizerApp {
    pub fn new(startup: StartupConfig, persisted: Option<PersistedVisualizerSettings>) -> Self {
        let mut settings = startup.settings;
        if let Some(persisted) = persisted {
            settings.speed_level = persisted.speed_level;
        }

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut app = Self {
            session: VisualizerSession::from_settings(&settings),
            input: InputField::default(),
            clock: TickClock::new(),
            rng,
            palette: Palette::default(),
            error_dialog: None,
        };

        if let Some(numbers) = startup.numbers {
            app.input.text = numbers;
            if let Err(err) = app.session.load_text(&app.input.text) {
                tracing::warn!(%err, "startup numbers rejected");
                app.input.edited();
                app.error_dialog = Some(UiError::from_session(UiErrorContext::ParseInput, &err));
            }
        }
        app
    }

    fn handle(&mut self, action: UiAction) {
        if let Err(err) = apply_action(&mut self.session, &mut self.input, action, &mut self.rng) {
            tracing::warn!(
                context = ?err.context(),
                code = ?err.code(),
                message = err.message(),
                "action rejected"
            );
            self.error_dialog = Some(err);
        }
    }

    /// Ticks the session when its interval has elapsed and keeps the clock in
    /// step with the run state.
    fn drive_clock(&mut self, now: Instant) {
        let running = self.session.run_state() == RunState::Running;
        if !running {
            self.clock.disarm();
            return;
        }
        if !self.clock.is_armed() {
            self.clock.arm(now);
            return;
        }
        if self.clock.poll(now, self.session.speed().delay()) {
            self.session.tick();
        }
    }

    fn show_controls(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let active = self.session.run_state().is_active();
        let running = self.session.run_state() == RunState::Running;

        egui::TopBottomPanel::top("controls")
            .frame(
                egui::Frame::new()
                    .fill(self.palette.panel_background)
                    .inner_margin(10.0),
            )
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label("Enter numbers (comma-separated):");
                    let edit = ui.add_enabled(
                        !active,
                        egui::TextEdit::singleline(&mut self.input.text).desired_width(220.0),
                    );
                    if edit.changed() {
                        self.input.edited();
                    }

                    let sort_label = if running { "Pause" } else { "Sort" };
                    if ui.button(sort_label).clicked() {
                        actions.push(UiAction::SortPressed);
                    }
                    if ui.button("Reset").clicked() {
                        actions.push(UiAction::ResetPressed);
                    }
                    if ui
                        .add_enabled(!active, egui::Button::new("Random Numbers"))
                        .clicked()
                    {
                        actions.push(UiAction::RandomPressed);
                    }

                    ui.label("Animation Speed:");
                    let mut level = self.session.speed().get();
                    if ui
                        .add(egui::Slider::new(&mut level, SpeedLevel::MIN..=SpeedLevel::MAX))
                        .changed()
                    {
                        actions.push(UiAction::SpeedChanged(SpeedLevel::clamped(level)));
                    }
                });
            });
    }

    fn show_status(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .frame(
                egui::Frame::new()
                    .fill(self.palette.panel_background)
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(self.session.status())
                            .strong()
                            .size(14.0)
                            .color(egui::Color32::BLACK),
                    );
                });
            });
    }

    fn show_canvas(&self, ctx: &egui::Context) {
        let snapshot = self.session.snapshot();
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let area = ui.max_rect();
                bars::paint(ui.painter(), area, &snapshot, &self.palette);
            });
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(err) = &self.error_dialog else {
            return;
        };

        let mut open = true;
        let mut acknowledged = false;
        egui::Window::new(err.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(err.message());
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if acknowledged || !open {
            self.error_dialog = None;
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drive_clock(now);

        let mut actions = Vec::new();
        self.show_controls(ctx, &mut actions);
        self.show_status(ctx);
        self.show_canvas(ctx);
        self.show_error_dialog(ctx);

        for action in actions {
            self.handle(action);
        }
        self.drive_clock(now);

        if self.session.run_state() == RunState::Running {
            let delay = self.session.speed().delay();
            let wait = self.clock.time_until_next(now, delay).unwrap_or(delay);
            ctx.request_repaint_after(wait);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedVisualizerSettings {
            speed_level: self.session.speed(),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
