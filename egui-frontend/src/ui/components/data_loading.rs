//! # Data Loading Module
//!
//! This module handles all data loading operations for the host calendar
//! app, interfacing with the backend to fetch and update application
//! state.
//!
//! ## Key Functions:
//! - `load_initial_data()` - Load reference data and the first grid on startup
//! - `load_calendar_data()` - Rebuild the grid for the focused month
//!
//! ## Data Flow:
//! 1. UI triggers a load (startup, month navigation, filter change, or a
//!    successful mutation)
//! 2. The backend fetches a fresh snapshot and derives the month grid
//! 3. The grid and availability index replace the previous ones wholesale
//! 4. Errors funnel into `UIState` as user-visible messages

use log::info;

use host_calendar_backend::domain::commands::calendar::CalendarMonthQuery;

use crate::ui::app_state::HostCalendarApp;

impl HostCalendarApp {
    /// Load reference data and the first calendar grid
    pub fn load_initial_data(&mut self) {
        info!("📊 Loading initial data");

        let host_id = self.backend.host_id.clone();
        match self.backend.property_service.list_properties(&host_id) {
            Ok(properties) => {
                self.calendar.properties = properties;
            }
            Err(e) => {
                self.ui.set_error(format!("Failed to load properties: {}", e));
            }
        }

        match self.backend.property_service.list_block_reasons() {
            Ok(reasons) => {
                self.calendar.block_reasons = reasons;
            }
            Err(e) => {
                self.ui.set_error(format!("Failed to load block reasons: {}", e));
            }
        }

        self.load_calendar_data();
        self.ui.loading = false;
    }

    /// Refetch the snapshot and regenerate the grid for the focused
    /// month. Called after navigation, filter changes, and every
    /// successful mutation - the collections are never patched in place.
    pub fn load_calendar_data(&mut self) {
        info!(
            "📅 Loading calendar data for {}/{}",
            self.calendar.selected_month, self.calendar.selected_year
        );

        let query = CalendarMonthQuery {
            month: self.calendar.selected_month,
            year: self.calendar.selected_year,
            filter: self.calendar.property_filter.clone(),
        };

        match self.backend.calendar_service.calendar_month_with_availability(
            query,
            &self.backend.property_service,
            &self.backend.host_id,
        ) {
            Ok((calendar_month, availability)) => {
                info!(
                    "📊 Loaded calendar month with {} cells for {}/{}",
                    calendar_month.days.len(),
                    self.calendar.selected_month,
                    self.calendar.selected_year
                );
                self.calendar.calendar_month = Some(calendar_month);
                self.calendar.availability = Some(availability);
            }
            Err(e) => {
                log::error!("❌ Failed to load calendar: {}", e);
                self.ui.set_error(format!("Failed to load calendar: {}", e));
                self.calendar.calendar_month = None;
                self.calendar.availability = None;
            }
        }
    }
}
