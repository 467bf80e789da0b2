//! Calendar domain logic for the host calendar.
//!
//! This module contains all business logic related to calendar
//! operations: building the month grid, deriving each day's display
//! state from the availability collections, and month navigation. The UI
//! only handles presentation concerns; every calendar computation and
//! business rule lives here.

use crate::domain::availability::AvailabilityIndex;
use crate::domain::commands::calendar::CalendarMonthQuery;
use crate::domain::filter::PropertyFilter;
use crate::domain::property_service::PropertyService;
use crate::services::traits::PropertyManagementApi;
use anyhow::Result;
use chrono::{Datelike, Days, NaiveDate};
use log::{info, warn};
use shared::{CalendarDay, CalendarDayState, CalendarFocusDate, CalendarMonth, Property};
use std::sync::{Arc, Mutex};

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    /// Current focus date for calendar navigation (month/year only).
    /// Kept in memory; the focus is a per-session view concern.
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    /// The grid is always 6 weeks of 7 days, padded with real dates from
    /// the adjacent months
    pub const GRID_CELLS: usize = 42;

    /// Nightly rate shown for open days under the "all listings" filter,
    /// where no single property's base rate applies
    pub const DEFAULT_DISPLAY_PRICE: f64 = 100.0;

    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate::default())),
        }
    }

    /// Get the calendar month together with its availability index -
    /// orchestrates snapshot retrieval and grid generation so the UI
    /// fetches everything for a render cycle in one call
    pub fn calendar_month_with_availability<A: PropertyManagementApi>(
        &self,
        query: CalendarMonthQuery,
        property_service: &PropertyService<A>,
        host_id: &str,
    ) -> Result<(CalendarMonth, AvailabilityIndex)> {
        info!(
            "🗓️ CALENDAR: Loading month {}/{} for {}",
            query.month, query.year, query.filter
        );

        let properties = property_service.list_properties(host_id)?;
        let snapshot = property_service.load_snapshot(host_id)?;
        info!(
            "🗓️ CALENDAR: Snapshot has {} bookings, {} blocked dates, {} custom prices",
            snapshot.bookings.len(),
            snapshot.blocked_dates.len(),
            snapshot.custom_prices.len()
        );

        let index = AvailabilityIndex::new(snapshot);
        let calendar_month =
            self.generate_calendar_month(query.month, query.year, &query.filter, &properties, &index);

        Ok((calendar_month, index))
    }

    /// Generate a month view: 42 cells, Sunday-first, row-major, with
    /// each cell annotated with its derived display state
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: i32,
        filter: &PropertyFilter,
        properties: &[Property],
        index: &AvailabilityIndex,
    ) -> CalendarMonth {
        let first_of_month = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date,
            None => {
                warn!("🗓️ CALENDAR: Invalid month {}/{}, returning empty grid", month, year);
                return CalendarMonth {
                    month,
                    year,
                    days: Vec::new(),
                };
            }
        };

        // Leading offset in a Sunday-first week, then 42 consecutive dates
        let offset = self.first_day_of_month(month, year) as u64;
        let grid_start = first_of_month
            .checked_sub_days(Days::new(offset))
            .unwrap_or(first_of_month);

        let base_price = filter
            .property_id()
            .and_then(|id| properties.iter().find(|p| p.id == id))
            .map(|p| p.base_price);

        let days = grid_start
            .iter_days()
            .take(Self::GRID_CELLS)
            .map(|date| CalendarDay {
                date,
                is_current_month: date.month() == month && date.year() == year,
                is_today: date == index.today(),
                state: self.derive_day_state(date, filter, base_price, index),
            })
            .collect();

        CalendarMonth { month, year, days }
    }

    /// Derive one cell's display state, in priority order: a booking wins
    /// over a block, a block over "past", and an open day shows its
    /// effective nightly price
    fn derive_day_state(
        &self,
        date: NaiveDate,
        filter: &PropertyFilter,
        base_price: Option<f64>,
        index: &AvailabilityIndex,
    ) -> CalendarDayState {
        if let Some(booking) = index.booking_for(date, filter) {
            // The bar is labeled with the guest name only on the first
            // occupied day of the booking's span
            let guest_label = if date == booking.check_in {
                Some(booking.guest_name.clone())
            } else {
                None
            };
            return CalendarDayState::Booked {
                booking_id: booking.id.clone(),
                status: booking.status,
                guest_label,
            };
        }

        if let Some(block) = index.block_for(date, filter) {
            return CalendarDayState::Blocked {
                reason: block.reason.clone(),
            };
        }

        if index.is_past(date) {
            return CalendarDayState::Past;
        }

        let nightly_price = index
            .custom_price_for(date, filter)
            .or(base_price)
            .unwrap_or(Self::DEFAULT_DISPLAY_PRICE);
        CalendarDayState::Open { nightly_price }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first weekday of a month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            // Invalid date, fall back to Sunday
            0
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Get the current focus date for calendar navigation
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.current_focus_date.lock().unwrap().clone()
    }

    /// Set the focus date for calendar navigation
    pub fn set_focus_date(&self, month: u32, year: i32) -> Result<CalendarFocusDate, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("Invalid month: {}. Must be between 1 and 12", month));
        }

        let new_focus_date = CalendarFocusDate { month, year };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        Ok(new_focus_date)
    }

    /// Navigate the focus to the previous month
    pub fn navigate_previous_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (prev_month, prev_year) = self.previous_month(current_focus.month, current_focus.year);

        // This never fails since previous_month returns valid values
        self.set_focus_date(prev_month, prev_year).unwrap()
    }

    /// Navigate the focus to the next month
    pub fn navigate_next_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (next_month, next_year) = self.next_month(current_focus.month, current_focus.year);

        // This never fails since next_month returns valid values
        self.set_focus_date(next_month, next_year).unwrap()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
