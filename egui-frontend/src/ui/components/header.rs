//! # Header Module
//!
//! Month navigation and the property filter dropdown at the top of the
//! calendar page.

use eframe::egui;
use host_calendar_backend::domain::PropertyFilter;

use crate::ui::app_state::HostCalendarApp;

impl HostCalendarApp {
    /// Render the header row: month navigation on the left, property
    /// filter on the right
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.navigate_to_previous_month();
            }

            let title = format!(
                "{} {}",
                self.get_current_month_name(),
                self.calendar.selected_year
            );
            ui.label(egui::RichText::new(title).heading().strong());

            if ui.button("▶").clicked() {
                self.navigate_to_next_month();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut chosen: Option<PropertyFilter> = None;

                egui::ComboBox::from_id_source("property_filter")
                    .selected_text(self.calendar.filter_label())
                    .width(220.0)
                    .show_ui(ui, |ui| {
                        let all_selected = self.calendar.property_filter == PropertyFilter::All;
                        if ui.selectable_label(all_selected, "All listings").clicked() {
                            chosen = Some(PropertyFilter::All);
                        }

                        for property in &self.calendar.properties {
                            let filter = PropertyFilter::Property(property.id.clone());
                            let selected = self.calendar.property_filter == filter;
                            let label =
                                format!("{} · {}", property.name, property.location);
                            if ui.selectable_label(selected, label).clicked() {
                                chosen = Some(filter);
                            }
                        }
                    });

                if let Some(filter) = chosen {
                    self.set_property_filter(filter);
                }

                ui.label("Listing:");
            });
        });
    }
}
