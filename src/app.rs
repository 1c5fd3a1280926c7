//! Main egui/eframe application state and UI orchestration.

use crate::config::AppConfig;
use crate::controller::ProjectionController;
use egui::{Color32, Context, Key, Pos2, RichText};

mod canvas;

pub struct MeterApp {
    controller: ProjectionController,
    config: AppConfig,
    last_status: Option<String>,
    /// Last pointer position forwarded to the controller, in model
    /// coordinates. Reclassification runs only when this changes, so a
    /// stationary pointer does not resubmit the same position every frame.
    last_move: Option<Pos2>,
}

impl MeterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            controller: ProjectionController::default(),
            config: AppConfig::load(),
            last_status: None,
            last_move: None,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.last_status = Some(msg.into());
    }

    fn restart(&mut self) {
        self.controller.restart();
        self.last_move = None;
        self.set_status("Restarted.");
    }

    fn step_back(&mut self) {
        if self.controller.step_back() {
            self.last_move = None;
            self.set_status("Stepped back.");
        } else {
            self.set_status("Nothing to step back.");
        }
    }

    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Use egui's built-in theme toggle so icon matches current mode.
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            if ui
                .add(egui::Button::new("Back one step").shortcut_text("Ctrl+Z"))
                .on_hover_text("Withdraw the most recent sound event (Ctrl+Z)")
                .clicked()
            {
                self.step_back();
            }
            if ui
                .add(egui::Button::new("Restart").shortcut_text("Ctrl+R"))
                .on_hover_text("Clear all sound events and start over (Ctrl+R)")
                .clicked()
            {
                self.restart();
            }
        });
    }

    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        let events = self.controller.sequence().phase().filled().div_ceil(2);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Sounds: {events}"))
                    .small()
                    .color(Color32::from_gray(180)),
            );
            if let Some(msg) = &self.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }

    fn ui_central(&mut self, ui: &mut egui::Ui) {
        // Commentary above the timeline, instruction below it, as two
        // fixed text regions so the layout never jumps between messages.
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_height(60.0);
            ui.set_width(ui.available_width());
            ui.label(self.controller.displayed_commentary());
        });
        ui.add_space(8.0);
        self.ui_canvas(ui);
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_height(40.0);
            ui.set_width(ui.available_width());
            ui.label(self.controller.displayed_instruction());
        });
    }
}

impl eframe::App for MeterApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Global hotkeys (ignored while typing in text fields)
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(Key::Z) && i.modifiers.command) {
                self.step_back();
            }
            if ctx.input(|i| i.key_pressed(Key::R) && i.modifiers.command) {
                self.restart();
            }
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_central(ui));
    }
}
