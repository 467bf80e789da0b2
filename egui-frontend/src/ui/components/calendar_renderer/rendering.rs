//! # Calendar Renderer Module
//!
//! This module handles all calendar-related rendering for the host
//! calendar app: the Sunday-first month grid, the booking bars, block
//! badges and nightly prices on each day, and the hover/selection
//! painting.
//!
//! ## Key Functions:
//! - `draw_calendar_section()` - Day-of-week headers plus the 6x7 grid
//! - `draw_calendar_days()` - Render day cells and collect interactions
//! - `render_day_cell()` - One cell: background, day number, state content
//!
//! All day *state* comes pre-derived from the backend grid; this module
//! only decides pixels and forwards clicks and hovers to the selection
//! reducer.

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use shared::{CalendarDay, CalendarDayState};

use crate::ui::app_state::HostCalendarApp;

use super::styling::*;
use super::types::{price_label, DayCellKind, RenderConfig};

impl HostCalendarApp {
    /// Draw the day-of-week headers and the calendar grid inside the
    /// available rect
    pub fn draw_calendar_section(&mut self, ui: &mut egui::Ui, available_rect: egui::Rect) {
        let content_width = available_rect.width();
        let total_spacing = CALENDAR_CARD_SPACING * 6.0;
        let cell_width = (content_width - total_spacing) / 7.0;

        let rows = 6.0;
        let vertical_spacing = CALENDAR_CARD_SPACING * (rows - 1.0);
        let available_height_for_cells =
            available_rect.height() - HEADER_HEIGHT - vertical_spacing - 10.0;
        let cell_height = (available_height_for_cells / rows).clamp(48.0, 160.0);

        // Day headers, spaced exactly like the day cards below them
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CALENDAR_CARD_SPACING;
            let day_names = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
            for day_name in day_names.iter() {
                ui.allocate_ui_with_layout(
                    egui::vec2(cell_width, HEADER_HEIGHT),
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(*day_name)
                                    .size(HEADER_FONT_SIZE)
                                    .strong()
                                    .color(egui::Color32::DARK_GRAY),
                            )
                            .selectable(false),
                        );
                    },
                );
            }
        });

        ui.add_space(5.0);

        self.draw_calendar_days(ui, cell_width, cell_height);
    }

    /// Draw the 42 day cells in week rows and route the interactions
    /// collected on the way
    pub fn draw_calendar_days(&mut self, ui: &mut egui::Ui, cell_width: f32, cell_height: f32) {
        let days: Vec<CalendarDay> = match &self.calendar.calendar_month {
            Some(calendar_month) => calendar_month.days.clone(),
            None => {
                ui.label("No calendar data available");
                return;
            }
        };

        ui.spacing_mut().item_spacing.y = CALENDAR_CARD_SPACING;

        let mut clicked_day: Option<NaiveDate> = None;
        let mut hovered_day: Option<NaiveDate> = None;

        for week_days in days.chunks(7) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = CALENDAR_CARD_SPACING;
                for calendar_day in week_days.iter() {
                    let config = RenderConfig {
                        is_selected: self.calendar.selection.contains(calendar_day.date),
                        is_filler: !calendar_day.is_current_month,
                    };

                    let response =
                        self.render_day_cell(ui, calendar_day, cell_width, cell_height, &config);

                    if response.clicked() {
                        clicked_day = Some(calendar_day.date);
                    }
                    if response.hovered() {
                        hovered_day = Some(calendar_day.date);
                    }
                }
            });
        }

        // Route interactions after the grid is fully painted
        if let Some(date) = hovered_day {
            self.handle_calendar_day_hover(date);
        }
        if let Some(date) = clicked_day {
            self.handle_calendar_day_click(date);
        }
    }

    /// Render one day cell and return its response for click handling
    fn render_day_cell(
        &self,
        ui: &mut egui::Ui,
        day: &CalendarDay,
        width: f32,
        height: f32,
        config: &RenderConfig,
    ) -> egui::Response {
        let kind = DayCellKind::classify(day);

        let (cell_rect, response) = ui.allocate_exact_size(
            egui::vec2(width, height),
            egui::Sense::hover().union(egui::Sense::click()),
        );
        let response = if kind.is_interactive() && !config.is_filler {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        } else {
            response
        };

        // Background: selection tint wins, then today's tint, then the
        // cell treatment
        let bg_color = if config.is_selected {
            selection_fill()
        } else if day.is_today {
            today_fill()
        } else {
            kind.background_color(config.is_filler)
        };
        ui.painter()
            .rect_filled(cell_rect, egui::Rounding::same(2.0), bg_color);

        // Border: selection > today > normal
        if config.is_selected {
            ui.painter().rect_stroke(
                cell_rect,
                egui::Rounding::same(2.0),
                egui::Stroke::new(2.0, selection_border()),
            );
        } else if day.is_today {
            ui.painter().rect_stroke(
                cell_rect,
                egui::Rounding::same(2.0),
                egui::Stroke::new(2.0, today_border()),
            );
        } else {
            ui.painter().rect_stroke(
                cell_rect,
                egui::Rounding::same(2.0),
                egui::Stroke::new(0.5, kind.border_color()),
            );
        }

        // Day number, upper left
        ui.painter().text(
            cell_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            day.date.day().to_string(),
            egui::FontId::proportional(DAY_NUMBER_FONT_SIZE),
            kind.day_text_color(config.is_filler),
        );

        // State content
        match &day.state {
            CalendarDayState::Booked { guest_label, .. } => {
                self.paint_booking_bar(ui, cell_rect, kind, guest_label.as_deref());
            }
            CalendarDayState::Blocked { reason } => {
                self.paint_block_badge(ui, cell_rect, kind, reason, config.is_filler);
            }
            CalendarDayState::Past => {
                // Past days carry no annotation
            }
            CalendarDayState::Open { nightly_price } => {
                if !config.is_filler {
                    ui.painter().text(
                        cell_rect.max - egui::vec2(6.0, 4.0),
                        egui::Align2::RIGHT_BOTTOM,
                        price_label(*nightly_price),
                        egui::FontId::proportional(PRICE_FONT_SIZE),
                        kind.price_text_color(),
                    );
                }
            }
        }

        response
    }

    /// Horizontal bar across the lower half of a booked cell. Confirmed
    /// bookings are solid, pending ones outlined; the guest name appears
    /// only on the first occupied day of the span.
    fn paint_booking_bar(
        &self,
        ui: &mut egui::Ui,
        cell_rect: egui::Rect,
        kind: DayCellKind,
        guest_label: Option<&str>,
    ) {
        let bar_height = (cell_rect.height() * 0.32).clamp(14.0, 24.0);
        let bar_rect = egui::Rect::from_min_size(
            egui::pos2(
                cell_rect.left(),
                cell_rect.center().y - bar_height / 2.0,
            ),
            egui::vec2(cell_rect.width(), bar_height),
        );

        let accent = kind.accent_color();
        match kind {
            DayCellKind::BookedPending => {
                ui.painter().rect_filled(
                    bar_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
                );
                ui.painter().rect_stroke(
                    bar_rect,
                    egui::Rounding::ZERO,
                    egui::Stroke::new(1.5, accent),
                );
            }
            _ => {
                ui.painter().rect_filled(bar_rect, egui::Rounding::ZERO, accent);
            }
        }

        if let Some(name) = guest_label {
            let text_color = match kind {
                DayCellKind::BookedPending => accent,
                _ => egui::Color32::WHITE,
            };
            ui.painter().text(
                bar_rect.left_center() + egui::vec2(6.0, 0.0),
                egui::Align2::LEFT_CENTER,
                name,
                egui::FontId::proportional(BAR_FONT_SIZE),
                text_color,
            );
        }
    }

    /// Small "Blocked" badge with the reason underneath
    fn paint_block_badge(
        &self,
        ui: &mut egui::Ui,
        cell_rect: egui::Rect,
        kind: DayCellKind,
        reason: &str,
        is_filler: bool,
    ) {
        let accent = kind.accent_color();

        ui.painter().text(
            cell_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Blocked",
            egui::FontId::proportional(BAR_FONT_SIZE + 1.0),
            accent,
        );

        if !is_filler && !reason.is_empty() {
            ui.painter().text(
                cell_rect.center() + egui::vec2(0.0, BAR_FONT_SIZE + 4.0),
                egui::Align2::CENTER_CENTER,
                reason,
                egui::FontId::proportional(BAR_FONT_SIZE - 1.0),
                egui::Color32::from_rgb(150, 150, 150),
            );
        }
    }
}
