//! # Host Calendar Backend
//!
//! This backend provides direct access to the calendar domain services
//! for the egui frontend. It is deliberately synchronous:
//! - All service calls complete inline within a UI event
//! - Collections are fetched as immutable snapshots, never patched
//! - The property-management service sits behind a trait so tests can
//!   substitute recording mocks

use anyhow::Result;
use std::sync::Arc;

pub mod domain;
pub mod services;

pub use services::in_memory::InMemoryPropertyApi;

/// Host whose catalog the demo service is seeded with
pub const DEMO_HOST_ID: &str = "H001";

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub host_id: String,
    pub property_service: domain::PropertyService<InMemoryPropertyApi>,
    pub calendar_service: domain::CalendarService,
    pub block_service: domain::BlockService<InMemoryPropertyApi>,
    pub pricing_service: domain::PricingService<InMemoryPropertyApi>,
}

impl Backend {
    /// Create a new backend instance with all services wired to the
    /// seeded in-memory property-management service
    pub fn new() -> Result<Self> {
        let api = Arc::new(InMemoryPropertyApi::with_demo_data());

        let property_service = domain::PropertyService::new(api.clone());
        let calendar_service = domain::CalendarService::new();
        let block_service = domain::BlockService::new(api.clone());
        let pricing_service = domain::PricingService::new(api);

        Ok(Backend {
            host_id: DEMO_HOST_ID.to_string(),
            property_service,
            calendar_service,
            block_service,
            pricing_service,
        })
    }
}
