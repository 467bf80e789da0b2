//! Nightly-price command handling for the sidebar's pricing action.
//!
//! Same shape as the block command: synchronous validation, one mutation
//! against the property-management service, refetch left to the caller.

use crate::domain::commands::pricing::{ClearPriceCommand, PriceUpdateResult, SetPriceCommand};
use crate::services::traits::PropertyManagementApi;
use chrono::NaiveDate;
use log::info;
use shared::{ClearNightlyPriceRequest, SetNightlyPriceRequest};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Select a specific property before changing its prices")]
    PropertyRequired,
    #[error("Invalid date range: {from} is after {to}")]
    ReversedRange { from: NaiveDate, to: NaiveDate },
    #[error("The nightly price must be greater than zero")]
    NonPositivePrice,
    #[error(transparent)]
    Service(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct PricingService<A: PropertyManagementApi> {
    api: Arc<A>,
}

impl<A: PropertyManagementApi> PricingService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Override the nightly rate for the selected span of one property
    pub fn set_nightly_price(&self, cmd: SetPriceCommand) -> Result<PriceUpdateResult, PricingError> {
        let property_id = match cmd.property.property_id() {
            Some(id) => id.to_string(),
            None => return Err(PricingError::PropertyRequired),
        };
        if cmd.from_date > cmd.to_date {
            return Err(PricingError::ReversedRange {
                from: cmd.from_date,
                to: cmd.to_date,
            });
        }
        if cmd.price <= 0.0 {
            return Err(PricingError::NonPositivePrice);
        }

        info!(
            "💲 PRICING: Setting {}..{} to {:.2} for {}",
            cmd.from_date, cmd.to_date, cmd.price, property_id
        );

        let response = self.api.set_nightly_price(&SetNightlyPriceRequest {
            property_id,
            from_date: cmd.from_date,
            to_date: cmd.to_date,
            price: cmd.price,
        })?;

        Ok(PriceUpdateResult {
            confirmation_id: response.confirmation_id,
            updated_days: response.updated_days,
            success_message: format!(
                "Updated the nightly price for {} night(s)",
                response.updated_days
            ),
        })
    }

    /// Remove nightly-rate overrides so the span falls back to the
    /// property's base rate
    pub fn clear_nightly_price(
        &self,
        cmd: ClearPriceCommand,
    ) -> Result<PriceUpdateResult, PricingError> {
        let property_id = match cmd.property.property_id() {
            Some(id) => id.to_string(),
            None => return Err(PricingError::PropertyRequired),
        };
        if cmd.from_date > cmd.to_date {
            return Err(PricingError::ReversedRange {
                from: cmd.from_date,
                to: cmd.to_date,
            });
        }

        info!(
            "💲 PRICING: Clearing overrides {}..{} for {}",
            cmd.from_date, cmd.to_date, property_id
        );

        let response = self.api.clear_nightly_price(&ClearNightlyPriceRequest {
            property_id,
            from_date: cmd.from_date,
            to_date: cmd.to_date,
        })?;

        Ok(PriceUpdateResult {
            confirmation_id: response.confirmation_id,
            updated_days: response.updated_days,
            success_message: format!(
                "Restored the base price for {} night(s)",
                response.updated_days
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::PropertyFilter;
    use shared::{
        BlockReason, BlockedDate, Booking, CustomPrice, NightlyPriceResponse, Property,
        SetCalendarStatusRequest, SetCalendarStatusResponse,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        pub price_calls: Mutex<Vec<SetNightlyPriceRequest>>,
        pub clear_calls: Mutex<Vec<ClearNightlyPriceRequest>>,
    }

    impl PropertyManagementApi for RecordingApi {
        fn list_properties_for_host(&self, _host_id: &str) -> anyhow::Result<Vec<Property>> {
            Ok(Vec::new())
        }

        fn list_block_reasons(&self) -> anyhow::Result<Vec<BlockReason>> {
            Ok(Vec::new())
        }

        fn list_bookings(&self, _host_id: &str) -> anyhow::Result<Vec<Booking>> {
            Ok(Vec::new())
        }

        fn list_blocked_dates(&self, _host_id: &str) -> anyhow::Result<Vec<BlockedDate>> {
            Ok(Vec::new())
        }

        fn list_custom_prices(&self, _host_id: &str) -> anyhow::Result<Vec<CustomPrice>> {
            Ok(Vec::new())
        }

        fn set_calendar_status(
            &self,
            _request: &SetCalendarStatusRequest,
        ) -> anyhow::Result<SetCalendarStatusResponse> {
            unreachable!("blocking is not exercised by pricing tests")
        }

        fn set_nightly_price(
            &self,
            request: &SetNightlyPriceRequest,
        ) -> anyhow::Result<NightlyPriceResponse> {
            self.price_calls.lock().unwrap().push(request.clone());
            Ok(NightlyPriceResponse {
                confirmation_id: "confirm-2".to_string(),
                updated_days: (request.to_date - request.from_date).num_days() as u32 + 1,
            })
        }

        fn clear_nightly_price(
            &self,
            request: &ClearNightlyPriceRequest,
        ) -> anyhow::Result<NightlyPriceResponse> {
            self.clear_calls.lock().unwrap().push(request.clone());
            Ok(NightlyPriceResponse {
                confirmation_id: "confirm-3".to_string(),
                updated_days: 1,
            })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_set_price_requires_concrete_property() {
        let api = Arc::new(RecordingApi::default());
        let service = PricingService::new(api.clone());

        let result = service.set_nightly_price(SetPriceCommand {
            property: PropertyFilter::All,
            from_date: date(2024, 12, 20),
            to_date: date(2024, 12, 22),
            price: 600.0,
        });

        assert!(matches!(result, Err(PricingError::PropertyRequired)));
        assert!(api.price_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_price_rejects_non_positive_amounts() {
        let api = Arc::new(RecordingApi::default());
        let service = PricingService::new(api.clone());

        for bad_price in [0.0, -25.0] {
            let result = service.set_nightly_price(SetPriceCommand {
                property: PropertyFilter::Property("P001".to_string()),
                from_date: date(2024, 12, 20),
                to_date: date(2024, 12, 22),
                price: bad_price,
            });
            assert!(matches!(result, Err(PricingError::NonPositivePrice)));
        }
        assert!(api.price_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_price_issues_one_mutation() {
        let api = Arc::new(RecordingApi::default());
        let service = PricingService::new(api.clone());

        let result = service
            .set_nightly_price(SetPriceCommand {
                property: PropertyFilter::Property("P001".to_string()),
                from_date: date(2024, 12, 24),
                to_date: date(2024, 12, 26),
                price: 600.0,
            })
            .unwrap();
        assert_eq!(result.updated_days, 3);

        let calls = api.price_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].property_id, "P001");
        assert_eq!(calls[0].price, 600.0);
    }

    #[test]
    fn test_clear_price_issues_one_mutation() {
        let api = Arc::new(RecordingApi::default());
        let service = PricingService::new(api.clone());

        service
            .clear_nightly_price(ClearPriceCommand {
                property: PropertyFilter::Property("P001".to_string()),
                from_date: date(2024, 12, 25),
                to_date: date(2024, 12, 25),
            })
            .unwrap();

        assert_eq!(api.clear_calls.lock().unwrap().len(), 1);
    }
}
