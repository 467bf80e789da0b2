//! Block/unblock command handling.
//!
//! Validation happens synchronously before any service call; the only
//! side effect is a single calendar-status mutation against the
//! property-management service. Local collections are never patched
//! here - the caller refetches the snapshot after a success.

use crate::domain::commands::blocks::{BlockDatesCommand, BlockDatesResult, UnblockDatesCommand};
use crate::services::traits::PropertyManagementApi;
use chrono::NaiveDate;
use log::{info, warn};
use shared::{CalendarEntryStatus, SetCalendarStatusRequest};
use std::sync::Arc;
use thiserror::Error;

/// Reason id used when the host submits a block without picking one
pub const DEFAULT_BLOCK_REASON: &str = "unspecified";

#[derive(Debug, Error)]
pub enum BlockError {
    /// Blocking under the "all listings" filter would mean guessing a
    /// target property; the command refuses instead.
    #[error("Select a specific property before blocking dates")]
    PropertyRequired,
    #[error("Invalid date range: {from} is after {to}")]
    ReversedRange { from: NaiveDate, to: NaiveDate },
    #[error(transparent)]
    Service(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct BlockService<A: PropertyManagementApi> {
    api: Arc<A>,
}

impl<A: PropertyManagementApi> BlockService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Block the selected date span for one concrete property.
    ///
    /// Safe to resubmit: blocking already-blocked dates is the service's
    /// duplicate-prevention concern, not ours.
    pub fn block_dates(&self, cmd: BlockDatesCommand) -> Result<BlockDatesResult, BlockError> {
        let property_id = self.require_property(cmd.property.property_id())?;
        self.require_chronological(cmd.from_date, cmd.to_date)?;

        let reason_id = cmd
            .reason_id
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BLOCK_REASON.to_string());

        info!(
            "🚫 BLOCK: Blocking {}..{} for {} (reason: {})",
            cmd.from_date, cmd.to_date, property_id, reason_id
        );

        let request = SetCalendarStatusRequest {
            property_id,
            from_date: cmd.from_date,
            to_date: cmd.to_date,
            status: CalendarEntryStatus::Blocked,
            reason_id: Some(reason_id),
            notes: cmd.notes,
        };

        let response = self.api.set_calendar_status(&request)?;
        Ok(BlockDatesResult {
            confirmation_id: response.confirmation_id,
            updated_days: response.updated_days,
            success_message: format!("Blocked {} night(s)", response.updated_days),
        })
    }

    /// Re-open a previously blocked span. Same concrete-property
    /// precondition as blocking; there is no fallback target property.
    pub fn unblock_dates(&self, cmd: UnblockDatesCommand) -> Result<BlockDatesResult, BlockError> {
        let property_id = self.require_property(cmd.property.property_id())?;
        self.require_chronological(cmd.from_date, cmd.to_date)?;

        info!(
            "✅ BLOCK: Unblocking {}..{} for {}",
            cmd.from_date, cmd.to_date, property_id
        );

        let request = SetCalendarStatusRequest {
            property_id,
            from_date: cmd.from_date,
            to_date: cmd.to_date,
            status: CalendarEntryStatus::Available,
            reason_id: None,
            notes: None,
        };

        let response = self.api.set_calendar_status(&request)?;
        Ok(BlockDatesResult {
            confirmation_id: response.confirmation_id,
            updated_days: response.updated_days,
            success_message: format!("Re-opened {} night(s)", response.updated_days),
        })
    }

    fn require_property(&self, property_id: Option<&str>) -> Result<String, BlockError> {
        match property_id {
            Some(id) => Ok(id.to_string()),
            None => {
                warn!("🚫 BLOCK: Rejected mutation under the all-listings filter");
                Err(BlockError::PropertyRequired)
            }
        }
    }

    fn require_chronological(&self, from: NaiveDate, to: NaiveDate) -> Result<(), BlockError> {
        if from > to {
            return Err(BlockError::ReversedRange { from, to });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::PropertyFilter;
    use anyhow::anyhow;
    use shared::{
        BlockReason, BlockedDate, Booking, ClearNightlyPriceRequest, CustomPrice,
        NightlyPriceResponse, Property, SetCalendarStatusResponse, SetNightlyPriceRequest,
    };
    use std::sync::Mutex;

    /// Records every mutation request; list reads return nothing.
    #[derive(Default)]
    struct RecordingApi {
        pub status_calls: Mutex<Vec<SetCalendarStatusRequest>>,
        pub fail_next: bool,
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
            request: &SetCalendarStatusRequest,
        ) -> anyhow::Result<SetCalendarStatusResponse> {
            if self.fail_next {
                return Err(anyhow!("service unavailable"));
            }
            self.status_calls.lock().unwrap().push(request.clone());
            let nights =
                (request.to_date - request.from_date).num_days() as u32 + 1;
            Ok(SetCalendarStatusResponse {
                confirmation_id: "confirm-1".to_string(),
                updated_days: nights,
            })
        }

        fn set_nightly_price(
            &self,
            _request: &SetNightlyPriceRequest,
        ) -> anyhow::Result<NightlyPriceResponse> {
            unreachable!("pricing is not exercised by block tests")
        }

        fn clear_nightly_price(
            &self,
            _request: &ClearNightlyPriceRequest,
        ) -> anyhow::Result<NightlyPriceResponse> {
            unreachable!("pricing is not exercised by block tests")
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn block_cmd(property: PropertyFilter) -> BlockDatesCommand {
        BlockDatesCommand {
            property,
            from_date: date(2024, 12, 20),
            to_date: date(2024, 12, 22),
            reason_id: Some("maintenance".to_string()),
            notes: Some("Water heater replacement".to_string()),
        }
    }

    #[test]
    fn test_all_filter_fails_validation_without_calling_service() {
        let api = Arc::new(RecordingApi::default());
        let service = BlockService::new(api.clone());

        let result = service.block_dates(block_cmd(PropertyFilter::All));

        assert!(matches!(result, Err(BlockError::PropertyRequired)));
        assert!(api.status_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_reversed_range_fails_validation_without_calling_service() {
        let api = Arc::new(RecordingApi::default());
        let service = BlockService::new(api.clone());

        let mut cmd = block_cmd(PropertyFilter::Property("P001".to_string()));
        cmd.from_date = date(2024, 12, 22);
        cmd.to_date = date(2024, 12, 20);

        let result = service.block_dates(cmd);
        assert!(matches!(result, Err(BlockError::ReversedRange { .. })));
        assert!(api.status_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_block_issues_exactly_one_mutation_with_selection_bounds() {
        let api = Arc::new(RecordingApi::default());
        let service = BlockService::new(api.clone());

        let result = service
            .block_dates(block_cmd(PropertyFilter::Property("P001".to_string())))
            .unwrap();
        assert_eq!(result.updated_days, 3);

        let calls = api.status_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.property_id, "P001");
        assert_eq!(call.from_date, date(2024, 12, 20));
        assert_eq!(call.to_date, date(2024, 12, 22));
        assert_eq!(call.status, CalendarEntryStatus::Blocked);
        assert_eq!(call.reason_id.as_deref(), Some("maintenance"));
        assert_eq!(call.notes.as_deref(), Some("Water heater replacement"));
    }

    #[test]
    fn test_missing_reason_defaults_to_unspecified() {
        let api = Arc::new(RecordingApi::default());
        let service = BlockService::new(api.clone());

        let mut cmd = block_cmd(PropertyFilter::Property("P001".to_string()));
        cmd.reason_id = None;
        service.block_dates(cmd).unwrap();

        let mut cmd = block_cmd(PropertyFilter::Property("P001".to_string()));
        cmd.reason_id = Some("   ".to_string());
        service.block_dates(cmd).unwrap();

        let calls = api.status_calls.lock().unwrap();
        assert_eq!(calls[0].reason_id.as_deref(), Some(DEFAULT_BLOCK_REASON));
        assert_eq!(calls[1].reason_id.as_deref(), Some(DEFAULT_BLOCK_REASON));
    }

    #[test]
    fn test_unblock_issues_available_mutation() {
        let api = Arc::new(RecordingApi::default());
        let service = BlockService::new(api.clone());

        let result = service
            .unblock_dates(UnblockDatesCommand {
                property: PropertyFilter::Property("P001".to_string()),
                from_date: date(2024, 12, 21),
                to_date: date(2024, 12, 21),
            })
            .unwrap();
        assert_eq!(result.updated_days, 1);

        let calls = api.status_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].status, CalendarEntryStatus::Available);
        assert_eq!(calls[0].reason_id, None);
    }

    #[test]
    fn test_unblock_requires_concrete_property_too() {
        let api = Arc::new(RecordingApi::default());
        let service = BlockService::new(api.clone());

        let result = service.unblock_dates(UnblockDatesCommand {
            property: PropertyFilter::All,
            from_date: date(2024, 12, 21),
            to_date: date(2024, 12, 21),
        });

        assert!(matches!(result, Err(BlockError::PropertyRequired)));
        assert!(api.status_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_service_failure_surfaces_as_error() {
        let api = Arc::new(RecordingApi {
            fail_next: true,
            ..Default::default()
        });
        let service = BlockService::new(api.clone());

        let result = service.block_dates(block_cmd(PropertyFilter::Property("P001".to_string())));
        assert!(matches!(result, Err(BlockError::Service(_))));
    }
}
