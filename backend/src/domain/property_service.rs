//! Property catalog and block-reason directory reads.
//!
//! Reference data the rest of the calendar depends on: the host's
//! property list for the filter dropdown, the reason list for the block
//! sidebar, and the availability snapshot the grid is derived from.

use crate::domain::availability::AvailabilitySnapshot;
use crate::services::traits::PropertyManagementApi;
use anyhow::Result;
use log::info;
use shared::{BlockReason, Property};
use std::sync::Arc;

#[derive(Clone)]
pub struct PropertyService<A: PropertyManagementApi> {
    api: Arc<A>,
}

impl<A: PropertyManagementApi> PropertyService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Properties in the host's catalog, for the filter dropdown
    pub fn list_properties(&self, host_id: &str) -> Result<Vec<Property>> {
        let properties = self.api.list_properties_for_host(host_id)?;
        info!("🏠 PROPERTIES: {} properties for host {}", properties.len(), host_id);
        Ok(properties)
    }

    /// Block reasons, for the sidebar dropdown
    pub fn list_block_reasons(&self) -> Result<Vec<BlockReason>> {
        self.api.list_block_reasons()
    }

    /// Fetch the three availability collections together. The result is
    /// treated as an immutable snapshot for the render cycle and replaced
    /// wholesale after a successful mutation.
    pub fn load_snapshot(&self, host_id: &str) -> Result<AvailabilitySnapshot> {
        Ok(AvailabilitySnapshot {
            bookings: self.api.list_bookings(host_id)?,
            blocked_dates: self.api.list_blocked_dates(host_id)?,
            custom_prices: self.api.list_custom_prices(host_id)?,
        })
    }
}
