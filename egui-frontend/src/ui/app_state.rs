//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the host calendar app.
//!
//! ## Key Types:
//! - `HostCalendarApp` - Main application state struct
//!
//! ## State Management:
//! The HostCalendarApp struct holds all application state in a single
//! location: the embedded backend, the calendar/selection state, the
//! sidebar form and general UI feedback. This follows the single source
//! of truth principle for state management.

use host_calendar_backend::domain::selection::{reduce, SelectionEvent};
use host_calendar_backend::domain::PropertyFilter;
use host_calendar_backend::Backend;
use log::info;

use crate::ui::state::{CalendarState, SidebarState, UIState};

/// Main application struct for the egui host calendar
pub struct HostCalendarApp {
    pub backend: Backend,

    // Modular state
    pub calendar: CalendarState,
    pub sidebar: SidebarState,
    pub ui: UIState,
}

impl HostCalendarApp {
    /// Create a new HostCalendarApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing HostCalendarApp");

        let backend = Backend::new()?;

        Ok(Self {
            backend,
            calendar: CalendarState::new(),
            sidebar: SidebarState::new(),
            ui: UIState::new(),
        })
    }

    /// Navigate to the previous month and reload the grid
    pub fn navigate_to_previous_month(&mut self) {
        let focus = self.backend.calendar_service.navigate_previous_month();
        self.calendar.selected_month = focus.month;
        self.calendar.selected_year = focus.year;
        info!("📅 Navigated to previous month: {}/{}", focus.month, focus.year);
        self.load_calendar_data();
    }

    /// Navigate to the next month and reload the grid
    pub fn navigate_to_next_month(&mut self) {
        let focus = self.backend.calendar_service.navigate_next_month();
        self.calendar.selected_month = focus.month;
        self.calendar.selected_year = focus.year;
        info!("📅 Navigated to next month: {}/{}", focus.month, focus.year);
        self.load_calendar_data();
    }

    /// Switch the property filter. The active selection is cleared since
    /// its validity was judged under the old filter.
    pub fn set_property_filter(&mut self, filter: PropertyFilter) {
        if self.calendar.property_filter == filter {
            return;
        }
        info!("🏠 Property filter changed to {}", filter);
        self.calendar.property_filter = filter;
        self.clear_selection();
        self.load_calendar_data();
    }

    /// Route one selection event through the pure reducer, screening
    /// dates through the availability lookups
    pub fn apply_selection_event(&mut self, event: SelectionEvent) {
        let next = match (&self.calendar.availability, event) {
            // Clear never consults the availability lookups
            (None, SelectionEvent::Clear) => reduce(&self.calendar.selection, event, |_| false),
            (None, _) => return,
            (Some(index), _) => {
                let filter = &self.calendar.property_filter;
                reduce(&self.calendar.selection, event, |date| {
                    index.is_selectable(date, filter)
                })
            }
        };
        self.calendar.selection = next;
    }

    /// Drop the selection and the sidebar form that depended on it
    pub fn clear_selection(&mut self) {
        self.apply_selection_event(SelectionEvent::Clear);
        self.sidebar.clear_form();
    }

    /// Get the current month name as a string
    pub fn get_current_month_name(&self) -> String {
        self.backend
            .calendar_service
            .month_name(self.calendar.selected_month)
            .to_string()
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.ui.clear_messages();
    }
}
