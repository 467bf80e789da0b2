//! # Action Sidebar Module
//!
//! The panel that appears once a date range has been selected, offering
//! the block/unblock and pricing actions for that range.
//!
//! ## Responsibilities:
//! - Summarize the selected range
//! - Block form: reason dropdown + notes
//! - Pricing form: nightly price override
//! - Surface validation and service errors without dropping the
//!   selection, so the host can fix the input and retry

use eframe::egui;
use host_calendar_backend::domain::commands::blocks::{BlockDatesCommand, UnblockDatesCommand};
use host_calendar_backend::domain::commands::pricing::{ClearPriceCommand, SetPriceCommand};
use host_calendar_backend::domain::PropertyFilter;

use crate::ui::app_state::HostCalendarApp;
use crate::ui::state::SidebarMode;

/// Deferred sidebar action, executed after the form widgets have
/// released their borrows
enum SidebarAction {
    Block,
    Unblock,
    SetPrice,
    ClearPrice,
    Cancel,
}

impl HostCalendarApp {
    /// Render the action sidebar for the current selection
    pub fn render_action_sidebar(&mut self, ui: &mut egui::Ui) {
        let Some((from, to)) = self.calendar.selection.range_bounds() else {
            return;
        };
        let nights = self.calendar.selection.selected_dates.len();

        let mut action: Option<SidebarAction> = None;

        ui.add_space(10.0);
        ui.heading("Selected dates");
        ui.label(format!("{} – {}", from.format("%b %-d"), to.format("%b %-d, %Y")));
        ui.label(format!("{} night(s)", nights));

        if self.calendar.property_filter == PropertyFilter::All {
            ui.add_space(6.0);
            ui.colored_label(
                egui::Color32::from_rgb(220, 50, 50),
                "Select a specific property to block or price these dates.",
            );
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.sidebar.mode == SidebarMode::Block, "Block")
                .clicked()
            {
                self.sidebar.mode = SidebarMode::Block;
            }
            if ui
                .selectable_label(self.sidebar.mode == SidebarMode::Pricing, "Pricing")
                .clicked()
            {
                self.sidebar.mode = SidebarMode::Pricing;
            }
        });
        ui.separator();

        match self.sidebar.mode {
            SidebarMode::Block => self.render_block_form(ui, &mut action),
            SidebarMode::Pricing => self.render_pricing_form(ui, &mut action),
        }

        ui.add_space(16.0);
        if ui.button("Cancel selection").clicked() {
            action = Some(SidebarAction::Cancel);
        }

        if let Some(action) = action {
            self.run_sidebar_action(action);
        }
    }

    fn render_block_form(&mut self, ui: &mut egui::Ui, action: &mut Option<SidebarAction>) {
        ui.label("Reason:");
        let selected_label = self
            .sidebar
            .selected_reason_id
            .as_ref()
            .and_then(|id| {
                self.calendar
                    .block_reasons
                    .iter()
                    .find(|r| &r.id == id)
                    .map(|r| r.label.clone())
            })
            .unwrap_or_else(|| "Unspecified".to_string());

        egui::ComboBox::from_id_source("block_reason")
            .selected_text(selected_label)
            .width(200.0)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(self.sidebar.selected_reason_id.is_none(), "Unspecified")
                    .clicked()
                {
                    self.sidebar.selected_reason_id = None;
                }
                for reason in &self.calendar.block_reasons {
                    let selected = self.sidebar.selected_reason_id.as_deref() == Some(&reason.id);
                    if ui.selectable_label(selected, &reason.label).clicked() {
                        self.sidebar.selected_reason_id = Some(reason.id.clone());
                    }
                }
            });

        ui.add_space(6.0);
        ui.label("Notes:");
        ui.add(
            egui::TextEdit::multiline(&mut self.sidebar.notes)
                .hint_text("Optional notes for this block")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Block dates").clicked() {
                *action = Some(SidebarAction::Block);
            }
            if ui.button("Unblock dates").clicked() {
                *action = Some(SidebarAction::Unblock);
            }
        });
    }

    fn render_pricing_form(&mut self, ui: &mut egui::Ui, action: &mut Option<SidebarAction>) {
        ui.label("Nightly price:");
        ui.horizontal(|ui| {
            ui.label("$");
            ui.add(
                egui::TextEdit::singleline(&mut self.sidebar.price_input)
                    .hint_text("0.00")
                    .desired_width(100.0),
            );
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Set price").clicked() {
                *action = Some(SidebarAction::SetPrice);
            }
            if ui.button("Clear override").clicked() {
                *action = Some(SidebarAction::ClearPrice);
            }
        });
    }

    fn run_sidebar_action(&mut self, action: SidebarAction) {
        let Some((from, to)) = self.calendar.selection.range_bounds() else {
            return;
        };
        let property = self.calendar.property_filter.clone();

        match action {
            SidebarAction::Cancel => {
                self.clear_selection();
            }

            SidebarAction::Block => {
                let notes = self.sidebar.notes.trim();
                let cmd = BlockDatesCommand {
                    property,
                    from_date: from,
                    to_date: to,
                    reason_id: self.sidebar.selected_reason_id.clone(),
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                };
                match self.backend.block_service.block_dates(cmd) {
                    Ok(result) => {
                        self.ui.set_success(result.success_message);
                        self.clear_selection();
                        self.load_calendar_data();
                    }
                    Err(e) => {
                        // Selection retained so the host can retry
                        self.ui.set_error(e.to_string());
                    }
                }
            }

            SidebarAction::Unblock => {
                let cmd = UnblockDatesCommand {
                    property,
                    from_date: from,
                    to_date: to,
                };
                match self.backend.block_service.unblock_dates(cmd) {
                    Ok(result) => {
                        self.ui.set_success(result.success_message);
                        self.clear_selection();
                        self.load_calendar_data();
                    }
                    Err(e) => {
                        self.ui.set_error(e.to_string());
                    }
                }
            }

            SidebarAction::SetPrice => {
                let price = match self.sidebar.price_input.trim().parse::<f64>() {
                    Ok(price) => price,
                    Err(_) => {
                        self.ui
                            .set_error("Enter a valid nightly price, like 450".to_string());
                        return;
                    }
                };
                let cmd = SetPriceCommand {
                    property,
                    from_date: from,
                    to_date: to,
                    price,
                };
                match self.backend.pricing_service.set_nightly_price(cmd) {
                    Ok(result) => {
                        self.ui.set_success(result.success_message);
                        self.clear_selection();
                        self.load_calendar_data();
                    }
                    Err(e) => {
                        self.ui.set_error(e.to_string());
                    }
                }
            }

            SidebarAction::ClearPrice => {
                let cmd = ClearPriceCommand {
                    property,
                    from_date: from,
                    to_date: to,
                };
                match self.backend.pricing_service.clear_nightly_price(cmd) {
                    Ok(result) => {
                        self.ui.set_success(result.success_message);
                        self.clear_selection();
                        self.load_calendar_data();
                    }
                    Err(e) => {
                        self.ui.set_error(e.to_string());
                    }
                }
            }
        }
    }
}
