//! # Service Traits
//!
//! This module defines the abstraction over the property-management
//! service the calendar talks to. The domain layer works against this
//! trait so different backends (an in-memory dataset, a remote API
//! client) can be used interchangeably, and tests can substitute
//! recording mocks.
//!
//! Note: all operations are synchronous for the desktop-only egui app.

use anyhow::Result;
use shared::{
    BlockReason, BlockedDate, Booking, ClearNightlyPriceRequest, CustomPrice,
    NightlyPriceResponse, Property, SetCalendarStatusRequest, SetCalendarStatusResponse,
    SetNightlyPriceRequest,
};

/// The property-management service as the calendar sees it: directory
/// reads, the availability collections, and the two mutation paths.
pub trait PropertyManagementApi: Send + Sync {
    /// Properties in a host's catalog, for the filter dropdown
    fn list_properties_for_host(&self, host_id: &str) -> Result<Vec<Property>>;

    /// Reasons a host can pick when blocking dates
    fn list_block_reasons(&self) -> Result<Vec<BlockReason>>;

    /// Bookings across the host's properties
    fn list_bookings(&self, host_id: &str) -> Result<Vec<Booking>>;

    /// Host-blocked dates across the host's properties
    fn list_blocked_dates(&self, host_id: &str) -> Result<Vec<BlockedDate>>;

    /// Per-date nightly-rate overrides across the host's properties
    fn list_custom_prices(&self, host_id: &str) -> Result<Vec<CustomPrice>>;

    /// The sole write path for availability: set a date span of one
    /// property to blocked or available
    fn set_calendar_status(
        &self,
        request: &SetCalendarStatusRequest,
    ) -> Result<SetCalendarStatusResponse>;

    /// Override the nightly rate for a date span of one property
    fn set_nightly_price(&self, request: &SetNightlyPriceRequest) -> Result<NightlyPriceResponse>;

    /// Remove nightly-rate overrides for a date span of one property
    fn clear_nightly_price(
        &self,
        request: &ClearNightlyPriceRequest,
    ) -> Result<NightlyPriceResponse>;
}
