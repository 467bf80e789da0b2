//! In-memory property-management service.
//!
//! Stands in for the remote property service during desktop development
//! and in tests: a seeded single-host dataset behind a mutex whose
//! mutations actually apply, so the wholesale snapshot refetch after a
//! successful command observably reflects the change.

use crate::domain::selection::date_span;
use crate::services::traits::PropertyManagementApi;
use anyhow::{anyhow, Result};
use chrono::{Days, Local, NaiveDate};
use log::info;
use shared::{
    BlockReason, BlockedDate, Booking, BookingStatus, ClearNightlyPriceRequest, CustomPrice,
    NightlyPriceResponse, Property, PropertyStatus, SetCalendarStatusRequest,
    SetCalendarStatusResponse, SetNightlyPriceRequest,
};
use std::sync::Mutex;
use uuid::Uuid;

struct ServiceState {
    host_id: String,
    properties: Vec<Property>,
    reasons: Vec<BlockReason>,
    bookings: Vec<Booking>,
    blocked_dates: Vec<BlockedDate>,
    custom_prices: Vec<CustomPrice>,
}

pub struct InMemoryPropertyApi {
    state: Mutex<ServiceState>,
}

impl InMemoryPropertyApi {
    /// An empty single-host service, mostly useful as a test fixture base
    pub fn empty(host_id: &str) -> Self {
        Self {
            state: Mutex::new(ServiceState {
                host_id: host_id.to_string(),
                properties: Vec::new(),
                reasons: Vec::new(),
                bookings: Vec::new(),
                blocked_dates: Vec::new(),
                custom_prices: Vec::new(),
            }),
        }
    }

    /// A service preloaded with an explicit dataset
    pub fn with_dataset(
        host_id: &str,
        properties: Vec<Property>,
        reasons: Vec<BlockReason>,
        bookings: Vec<Booking>,
        blocked_dates: Vec<BlockedDate>,
        custom_prices: Vec<CustomPrice>,
    ) -> Self {
        Self {
            state: Mutex::new(ServiceState {
                host_id: host_id.to_string(),
                properties,
                reasons,
                bookings,
                blocked_dates,
                custom_prices,
            }),
        }
    }

    /// The demo catalog the desktop app starts with, anchored around the
    /// current date so the seeded bookings land in the visible month
    pub fn with_demo_data() -> Self {
        let today = Local::now().date_naive();
        let day = |offset: u64| today.checked_add_days(Days::new(offset)).unwrap_or(today);

        let properties = vec![
            Property {
                id: "P001".to_string(),
                name: "Driftwood Cottage".to_string(),
                location: "Port Haven".to_string(),
                base_price: 450.0,
                bedrooms: 3,
                bathrooms: 2,
                status: PropertyStatus::Active,
            },
            Property {
                id: "P002".to_string(),
                name: "Juniper Loft".to_string(),
                location: "Cedar Falls".to_string(),
                base_price: 310.0,
                bedrooms: 1,
                bathrooms: 1,
                status: PropertyStatus::Active,
            },
            Property {
                id: "P003".to_string(),
                name: "Harbor House".to_string(),
                location: "Port Haven".to_string(),
                base_price: 520.0,
                bedrooms: 4,
                bathrooms: 3,
                status: PropertyStatus::Unlisted,
            },
        ];

        let reasons = vec![
            BlockReason {
                id: "maintenance".to_string(),
                label: "Maintenance".to_string(),
            },
            BlockReason {
                id: "owner-use".to_string(),
                label: "Owner use".to_string(),
            },
            BlockReason {
                id: "seasonal-closure".to_string(),
                label: "Seasonal closure".to_string(),
            },
        ];

        let bookings = vec![
            Booking {
                id: Booking::generate_id(1733239800000),
                property_id: "P001".to_string(),
                guest_name: "Dana Whitfield".to_string(),
                check_in: day(2),
                check_out: day(6),
                guest_count: 4,
                total_amount: 1800.0,
                status: BookingStatus::Confirmed,
            },
            Booking {
                id: Booking::generate_id(1733412600000),
                property_id: "P002".to_string(),
                guest_name: "Marcus Oyelaran".to_string(),
                check_in: day(10),
                check_out: day(13),
                guest_count: 2,
                total_amount: 930.0,
                status: BookingStatus::Pending,
            },
        ];

        let blocked_dates = vec![BlockedDate {
            property_id: "P001".to_string(),
            date: day(20),
            reason: "Owner use".to_string(),
            notes: None,
        }];

        let custom_prices = vec![CustomPrice {
            property_id: "P001".to_string(),
            date: day(15),
            price: 600.0,
        }];

        Self::with_dataset(
            crate::DEMO_HOST_ID,
            properties,
            reasons,
            bookings,
            blocked_dates,
            custom_prices,
        )
    }
}

impl ServiceState {
    fn property_exists(&self, property_id: &str) -> bool {
        self.properties.iter().any(|p| p.id == property_id)
    }

    fn reason_label(&self, reason_id: &str) -> String {
        self.reasons
            .iter()
            .find(|r| r.id == reason_id)
            .map(|r| r.label.clone())
            .unwrap_or_else(|| reason_id.to_string())
    }

    fn block_span(&mut self, request: &SetCalendarStatusRequest, dates: &[NaiveDate]) {
        let reason = request
            .reason_id
            .as_deref()
            .map(|id| self.reason_label(id))
            .unwrap_or_else(|| "unspecified".to_string());

        for date in dates {
            // One record per (property, date): replace rather than stack
            self.blocked_dates
                .retain(|b| !(b.property_id == request.property_id && b.date == *date));
            self.blocked_dates.push(BlockedDate {
                property_id: request.property_id.clone(),
                date: *date,
                reason: reason.clone(),
                notes: request.notes.clone(),
            });
        }
    }

    fn unblock_span(&mut self, property_id: &str, dates: &[NaiveDate]) {
        // Removes duplicates for a date too, if bad data ever produced them
        self.blocked_dates
            .retain(|b| !(b.property_id == property_id && dates.contains(&b.date)));
    }
}

impl PropertyManagementApi for InMemoryPropertyApi {
    fn list_properties_for_host(&self, host_id: &str) -> Result<Vec<Property>> {
        let state = self.state.lock().unwrap();
        if state.host_id != host_id {
            return Ok(Vec::new());
        }
        Ok(state.properties.clone())
    }

    fn list_block_reasons(&self) -> Result<Vec<BlockReason>> {
        Ok(self.state.lock().unwrap().reasons.clone())
    }

    fn list_bookings(&self, host_id: &str) -> Result<Vec<Booking>> {
        let state = self.state.lock().unwrap();
        if state.host_id != host_id {
            return Ok(Vec::new());
        }
        Ok(state.bookings.clone())
    }

    fn list_blocked_dates(&self, host_id: &str) -> Result<Vec<BlockedDate>> {
        let state = self.state.lock().unwrap();
        if state.host_id != host_id {
            return Ok(Vec::new());
        }
        Ok(state.blocked_dates.clone())
    }

    fn list_custom_prices(&self, host_id: &str) -> Result<Vec<CustomPrice>> {
        let state = self.state.lock().unwrap();
        if state.host_id != host_id {
            return Ok(Vec::new());
        }
        Ok(state.custom_prices.clone())
    }

    fn set_calendar_status(
        &self,
        request: &SetCalendarStatusRequest,
    ) -> Result<SetCalendarStatusResponse> {
        let mut state = self.state.lock().unwrap();
        if !state.property_exists(&request.property_id) {
            return Err(anyhow!("Unknown property: {}", request.property_id));
        }
        if request.from_date > request.to_date {
            return Err(anyhow!(
                "Invalid range: {} > {}",
                request.from_date,
                request.to_date
            ));
        }

        let dates = date_span(request.from_date, request.to_date);
        match request.status {
            shared::CalendarEntryStatus::Blocked => state.block_span(request, &dates),
            shared::CalendarEntryStatus::Available => {
                state.unblock_span(&request.property_id, &dates)
            }
        }

        info!(
            "🛰️ SERVICE: Calendar status {:?} applied to {} date(s) of {}",
            request.status,
            dates.len(),
            request.property_id
        );

        Ok(SetCalendarStatusResponse {
            confirmation_id: Uuid::new_v4().to_string(),
            updated_days: dates.len() as u32,
        })
    }

    fn set_nightly_price(&self, request: &SetNightlyPriceRequest) -> Result<NightlyPriceResponse> {
        let mut state = self.state.lock().unwrap();
        if !state.property_exists(&request.property_id) {
            return Err(anyhow!("Unknown property: {}", request.property_id));
        }
        if request.price <= 0.0 {
            return Err(anyhow!("Nightly price must be positive"));
        }

        let dates = date_span(request.from_date, request.to_date);
        for date in &dates {
            state
                .custom_prices
                .retain(|p| !(p.property_id == request.property_id && p.date == *date));
            state.custom_prices.push(CustomPrice {
                property_id: request.property_id.clone(),
                date: *date,
                price: request.price,
            });
        }

        Ok(NightlyPriceResponse {
            confirmation_id: Uuid::new_v4().to_string(),
            updated_days: dates.len() as u32,
        })
    }

    fn clear_nightly_price(
        &self,
        request: &ClearNightlyPriceRequest,
    ) -> Result<NightlyPriceResponse> {
        let mut state = self.state.lock().unwrap();
        if !state.property_exists(&request.property_id) {
            return Err(anyhow!("Unknown property: {}", request.property_id));
        }

        let dates = date_span(request.from_date, request.to_date);
        state
            .custom_prices
            .retain(|p| !(p.property_id == request.property_id && dates.contains(&p.date)));

        Ok(NightlyPriceResponse {
            confirmation_id: Uuid::new_v4().to_string(),
            updated_days: dates.len() as u32,
        })
    }
}
