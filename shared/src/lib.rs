use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rental property in the host's catalog.
///
/// Owned by the property-management service; the calendar treats it as
/// read-only reference data selected via a property filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Default nightly rate, overridden per-date by `CustomPrice` records
    pub base_price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub status: PropertyStatus,
}

/// Listing status of a property in the host catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Active,
    Unlisted,
}

/// Booking ID in format: "booking::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub guest_name: String,
    /// First occupied night (inclusive)
    pub check_in: NaiveDate,
    /// Checkout day (exclusive) - the guest leaves this morning
    pub check_out: NaiveDate,
    pub guest_count: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
}

/// Lifecycle status of a booking, transitioned externally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

impl Booking {
    /// Generate a booking ID from a timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("booking::{}", epoch_millis)
    }

    /// Parse a booking ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, BookingIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "booking" {
            return Err(BookingIdError::InvalidFormat);
        }

        parts[1]
            .parse::<u64>()
            .map_err(|_| BookingIdError::InvalidTimestamp)
    }

    /// Extract the timestamp from this booking's ID
    pub fn extract_timestamp(&self) -> Result<u64, BookingIdError> {
        Self::parse_id(&self.id)
    }

    /// Whether this booking occupies the given date.
    ///
    /// Occupancy is the half-open interval `[check_in, check_out)` so the
    /// checkout day itself is not occupied. A booking whose checkout does
    /// not follow its check-in occupies nothing.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for BookingIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingIdError::InvalidFormat => write!(f, "Invalid booking ID format"),
            BookingIdError::InvalidTimestamp => write!(f, "Invalid timestamp in booking ID"),
        }
    }
}

impl std::error::Error for BookingIdError {}

/// A single date a host has taken off the market for a property.
///
/// At most one record is expected per (property_id, date); duplicates are
/// a data-quality problem tolerated on read and removed together on
/// unblock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedDate {
    pub property_id: String,
    pub date: NaiveDate,
    /// Reason label, e.g. "Maintenance" or "Owner use"
    pub reason: String,
    pub notes: Option<String>,
}

/// A per-date override of a property's base nightly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPrice {
    pub property_id: String,
    pub date: NaiveDate,
    pub price: f64,
}

/// An enumerated reason a host can pick when blocking dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockReason {
    pub id: String,
    pub label: String,
}

/// Derived display state of a single calendar day, in priority order:
/// a booking wins over a block, a block over "past", and an open day
/// shows its effective nightly price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalendarDayState {
    Booked {
        booking_id: String,
        status: BookingStatus,
        /// Guest name, present only on the first occupied day of the span
        guest_label: Option<String>,
    },
    Blocked {
        reason: String,
    },
    /// Strictly before today; never interactive
    Past,
    Open {
        nightly_price: f64,
    },
}

/// A single cell of the 42-cell month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for leading/trailing padding days from adjacent months
    pub is_current_month: bool,
    pub is_today: bool,
    pub state: CalendarDayState,
}

/// A full month view: 42 cells (6 weeks x 7 days), Sunday-first,
/// row-major, padded with real dates from the adjacent months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
}

/// The month a calendar view is currently focused on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }
}

/// Target state for a calendar mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEntryStatus {
    Blocked,
    Available,
}

/// The sole write path into the property-management service: set a date
/// span of one property to blocked or available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCalendarStatusRequest {
    pub property_id: String,
    /// First date of the span (inclusive)
    pub from_date: NaiveDate,
    /// Last date of the span (inclusive)
    pub to_date: NaiveDate,
    pub status: CalendarEntryStatus,
    pub reason_id: Option<String>,
    pub notes: Option<String>,
}

/// Service acknowledgement of a calendar mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCalendarStatusResponse {
    /// Reference minted by the service for this mutation
    pub confirmation_id: String,
    pub updated_days: u32,
}

/// Request to override the nightly rate for a date span of one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetNightlyPriceRequest {
    pub property_id: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Positive nightly amount; replaces any existing override per date
    pub price: f64,
}

/// Request to remove nightly-rate overrides for a date span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearNightlyPriceRequest {
    pub property_id: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// Service acknowledgement of a pricing mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightlyPriceResponse {
    pub confirmation_id: String,
    pub updated_days: u32,
}
