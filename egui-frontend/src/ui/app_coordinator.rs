//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling
//! the primary update loop and overall application lifecycle.
//!
//! ## Application Flow:
//! 1. Load data on first run
//! 2. Render the header (month navigation + property filter)
//! 3. Render the month grid
//! 4. Render the action sidebar once a range has been selected
//!
//! This is the main entry point that ties together all other UI modules.

use eframe::egui;

use crate::ui::app_state::HostCalendarApp;

impl eframe::App for HostCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial data on first run
        if self.ui.loading && self.calendar.calendar_month.is_none() {
            self.load_initial_data();
        }

        // Handle ESC to abandon the selection gesture
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_selection();
        }

        // Keep repainting while a message is on screen so it can be aged out
        if self.ui.error_message.is_some() || self.ui.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        // Action sidebar appears once a range selection is finalized
        if self.calendar.selection.is_complete() {
            egui::SidePanel::right("action_sidebar")
                .resizable(false)
                .default_width(280.0)
                .show(ctx, |ui| {
                    self.render_action_sidebar(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.ui.loading {
                self.render_loading_screen(ui);
                return;
            }

            self.render_header(ui);
            ui.add_space(8.0);
            self.render_messages(ui);

            let available = ui.available_rect_before_wrap();
            self.draw_calendar_section(ui, available);
        });
    }
}

impl HostCalendarApp {
    /// Simple centered spinner shown while the first snapshot loads
    fn render_loading_screen(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.add_space(10.0);
                ui.label("Loading your calendar...");
            });
        });
    }

    /// Dismissible error/success banners under the header
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;

        if let Some(error) = &self.ui.error_message {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(220, 50, 50), format!("⚠ {}", error));
                if ui.small_button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        } else if let Some(success) = &self.ui.success_message {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(46, 160, 67), format!("✔ {}", success));
                if ui.small_button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        }

        if dismissed {
            self.clear_messages();
        }
    }
}
