//! Domain layer: calendar derivation, availability lookups, the
//! selection reducer and the mutation commands built on top of them.

pub mod availability;
pub mod block_service;
pub mod calendar;
pub mod commands;
pub mod filter;
pub mod pricing_service;
pub mod property_service;
pub mod selection;

pub use availability::{AvailabilityIndex, AvailabilitySnapshot};
pub use block_service::BlockService;
pub use calendar::CalendarService;
pub use filter::PropertyFilter;
pub use pricing_service::PricingService;
pub use property_service::PropertyService;
pub use selection::{SelectionEvent, SelectionState};
