//! # Calendar State Module
//!
//! This module contains all state related to the calendar view and
//! navigation.
//!
//! ## Responsibilities:
//! - Calendar month/year navigation
//! - The generated month grid and its availability index
//! - The in-progress date-range selection
//! - The active property filter and the reference data behind it
//!
//! ## Purpose:
//! This isolates all calendar-specific state management, making it easier
//! to maintain and test calendar functionality independently.

use chrono::{Datelike, NaiveDate};
use host_calendar_backend::domain::{AvailabilityIndex, PropertyFilter, SelectionState};
use shared::{BlockReason, CalendarMonth, Property};

/// Calendar-specific state for month navigation and display
pub struct CalendarState {
    /// Currently selected month (1-12)
    pub selected_month: u32,

    /// Currently selected year
    pub selected_year: i32,

    /// Generated month grid from the backend
    pub calendar_month: Option<CalendarMonth>,

    /// Availability lookups backing the grid; replaced wholesale on refetch
    pub availability: Option<AvailabilityIndex>,

    /// In-progress or finalized date-range selection
    pub selection: SelectionState,

    /// Day the pointer was over last frame, to dispatch hover events once
    pub hovered_day: Option<NaiveDate>,

    /// Active property filter for the whole calendar page
    pub property_filter: PropertyFilter,

    /// Host's property catalog, for the filter dropdown
    pub properties: Vec<Property>,

    /// Reason directory, for the block sidebar
    pub block_reasons: Vec<BlockReason>,
}

impl CalendarState {
    /// Create new calendar state focused on the current month/year
    pub fn new() -> Self {
        let now = chrono::Local::now();

        Self {
            selected_month: now.month(),
            selected_year: now.year(),
            calendar_month: None,
            availability: None,
            selection: SelectionState::new(),
            hovered_day: None,
            property_filter: PropertyFilter::All,
            properties: Vec::new(),
            block_reasons: Vec::new(),
        }
    }

    /// Display name of the property the filter points at
    pub fn filter_label(&self) -> String {
        match &self.property_filter {
            PropertyFilter::All => "All listings".to_string(),
            PropertyFilter::Property(id) => self
                .properties
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| id.clone()),
        }
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new()
    }
}
