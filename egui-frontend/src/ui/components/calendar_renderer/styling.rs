//! Centralized colors and layout constants for the calendar grid.

use eframe::egui;

use super::types::DayCellKind;

/// Spacing between day cards, horizontally and vertically
pub const CALENDAR_CARD_SPACING: f32 = 4.0;

/// Height of the day-of-week header row
pub const HEADER_HEIGHT: f32 = 28.0;

pub const HEADER_FONT_SIZE: f32 = 14.0;
pub const DAY_NUMBER_FONT_SIZE: f32 = 14.0;
pub const PRICE_FONT_SIZE: f32 = 12.0;
pub const BAR_FONT_SIZE: f32 = 11.0;

/// Purple-pink tint for cells inside the selection span
pub fn selection_fill() -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(230, 190, 235, 140)
}

pub fn selection_border() -> egui::Color32 {
    egui::Color32::from_rgb(199, 112, 221)
}

/// Light yellow tint marking today's cell
pub fn today_fill() -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(255, 248, 220, 110)
}

pub fn today_border() -> egui::Color32 {
    egui::Color32::from_rgb(232, 150, 199)
}

impl DayCellKind {
    /// Background color for this cell treatment
    pub fn background_color(&self, is_filler: bool) -> egui::Color32 {
        if is_filler {
            // Dim padding days from the adjacent months
            return egui::Color32::from_rgba_unmultiplied(120, 120, 120, 60);
        }
        match self {
            DayCellKind::Past => egui::Color32::from_rgba_unmultiplied(235, 235, 235, 200),
            _ => egui::Color32::from_rgba_unmultiplied(255, 255, 255, 235),
        }
    }

    pub fn border_color(&self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(200, 200, 200, 160)
    }

    /// Day number color; past and filler days are subdued
    pub fn day_text_color(&self, is_filler: bool) -> egui::Color32 {
        if is_filler {
            return egui::Color32::from_rgb(150, 150, 150);
        }
        match self {
            DayCellKind::Past => egui::Color32::from_rgb(170, 170, 170),
            _ => egui::Color32::from_rgb(40, 40, 40),
        }
    }

    /// Accent color of the booking bar or block badge
    pub fn accent_color(&self) -> egui::Color32 {
        match self {
            DayCellKind::BookedConfirmed => egui::Color32::from_rgb(47, 129, 90),
            DayCellKind::BookedPending => egui::Color32::from_rgb(222, 168, 62),
            DayCellKind::Blocked => egui::Color32::from_rgb(120, 120, 120),
            DayCellKind::Past => egui::Color32::from_rgb(190, 190, 190),
            DayCellKind::Open => egui::Color32::from_rgb(46, 160, 67),
        }
    }

    pub fn price_text_color(&self) -> egui::Color32 {
        egui::Color32::GRAY
    }
}
