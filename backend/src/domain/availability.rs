//! Availability lookups over the fetched calendar collections.
//!
//! Everything here is a pure read of an immutable snapshot: the grid and
//! the sidebar ask these functions what a date means, and nothing in this
//! module performs I/O or mutation. The snapshot is replaced wholesale
//! after a successful mutation rather than patched.

use chrono::{Local, NaiveDate};
use shared::{BlockedDate, Booking, CustomPrice};

use crate::domain::filter::PropertyFilter;

/// The collections the calendar reads, fetched together from the
/// property-management service once per render cycle.
#[derive(Debug, Clone, Default)]
pub struct AvailabilitySnapshot {
    pub bookings: Vec<Booking>,
    pub blocked_dates: Vec<BlockedDate>,
    pub custom_prices: Vec<CustomPrice>,
}

/// Pure lookup functions over a snapshot, parameterized by a property
/// filter. Under `PropertyFilter::All` a record belonging to any property
/// matches, first match in collection order; callers needing per-property
/// precision must pass a concrete filter.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex {
    snapshot: AvailabilitySnapshot,
    today: NaiveDate,
}

impl AvailabilityIndex {
    /// Build an index using the local calendar date as "today"
    pub fn new(snapshot: AvailabilitySnapshot) -> Self {
        Self::with_today(snapshot, Local::now().date_naive())
    }

    /// Build an index with an explicit "today", for deterministic tests
    pub fn with_today(snapshot: AvailabilitySnapshot, today: NaiveDate) -> Self {
        Self { snapshot, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// First booking (collection order) whose half-open
    /// `[check_in, check_out)` interval contains `date` under the filter
    pub fn booking_for(&self, date: NaiveDate, filter: &PropertyFilter) -> Option<&Booking> {
        self.snapshot
            .bookings
            .iter()
            .find(|b| filter.matches(&b.property_id) && b.occupies(date))
    }

    /// The block record for `date` under the filter, if any
    pub fn block_for(&self, date: NaiveDate, filter: &PropertyFilter) -> Option<&BlockedDate> {
        self.snapshot
            .blocked_dates
            .iter()
            .find(|b| filter.matches(&b.property_id) && b.date == date)
    }

    pub fn is_blocked(&self, date: NaiveDate, filter: &PropertyFilter) -> bool {
        self.block_for(date, filter).is_some()
    }

    /// Per-date nightly override, if one exists under the filter
    pub fn custom_price_for(&self, date: NaiveDate, filter: &PropertyFilter) -> Option<f64> {
        self.snapshot
            .custom_prices
            .iter()
            .find(|p| filter.matches(&p.property_id) && p.date == date)
            .map(|p| p.price)
    }

    /// Strict date-only comparison against today; time of day never enters
    pub fn is_past(&self, date: NaiveDate) -> bool {
        date < self.today
    }

    /// Whether a date may participate in a range selection: past dates
    /// and dates occupied by a booking are off limits
    pub fn is_selectable(&self, date: NaiveDate, filter: &PropertyFilter) -> bool {
        !self.is_past(date) && self.booking_for(date, filter).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BookingStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_booking(id: &str, property_id: &str, check_in: NaiveDate, check_out: NaiveDate) -> Booking {
        Booking {
            id: id.to_string(),
            property_id: property_id.to_string(),
            guest_name: "Dana Whitfield".to_string(),
            check_in,
            check_out,
            guest_count: 2,
            total_amount: 1800.0,
            status: BookingStatus::Confirmed,
        }
    }

    fn test_block(property_id: &str, d: NaiveDate) -> BlockedDate {
        BlockedDate {
            property_id: property_id.to_string(),
            date: d,
            reason: "Maintenance".to_string(),
            notes: None,
        }
    }

    fn index(snapshot: AvailabilitySnapshot) -> AvailabilityIndex {
        AvailabilityIndex::with_today(snapshot, date(2024, 12, 15))
    }

    #[test]
    fn test_booking_occupancy_is_exclusive_of_checkout() {
        let snapshot = AvailabilitySnapshot {
            bookings: vec![test_booking(
                "booking::1",
                "P001",
                date(2024, 12, 5),
                date(2024, 12, 10),
            )],
            ..Default::default()
        };
        let idx = index(snapshot);
        let filter = PropertyFilter::Property("P001".to_string());

        for day in 5..=9 {
            assert!(
                idx.booking_for(date(2024, 12, day), &filter).is_some(),
                "12-{:02} should be occupied",
                day
            );
        }
        assert!(idx.booking_for(date(2024, 12, 10), &filter).is_none());
        assert!(idx.booking_for(date(2024, 12, 4), &filter).is_none());
    }

    #[test]
    fn test_booking_respects_property_filter() {
        let snapshot = AvailabilitySnapshot {
            bookings: vec![test_booking(
                "booking::1",
                "P001",
                date(2024, 12, 5),
                date(2024, 12, 10),
            )],
            ..Default::default()
        };
        let idx = index(snapshot);

        let other = PropertyFilter::Property("P002".to_string());
        assert!(idx.booking_for(date(2024, 12, 6), &other).is_none());

        // Aggregate view sees every property's bookings
        assert!(idx.booking_for(date(2024, 12, 6), &PropertyFilter::All).is_some());
    }

    #[test]
    fn test_all_filter_picks_first_match_in_collection_order() {
        let snapshot = AvailabilitySnapshot {
            bookings: vec![
                test_booking("booking::1", "P002", date(2024, 12, 5), date(2024, 12, 8)),
                test_booking("booking::2", "P001", date(2024, 12, 5), date(2024, 12, 8)),
            ],
            ..Default::default()
        };
        let idx = index(snapshot);

        let found = idx.booking_for(date(2024, 12, 6), &PropertyFilter::All).unwrap();
        assert_eq!(found.id, "booking::1");
    }

    #[test]
    fn test_is_blocked_and_block_reason() {
        let snapshot = AvailabilitySnapshot {
            blocked_dates: vec![test_block("P001", date(2024, 12, 21))],
            ..Default::default()
        };
        let idx = index(snapshot);
        let filter = PropertyFilter::Property("P001".to_string());

        assert!(idx.is_blocked(date(2024, 12, 21), &filter));
        assert_eq!(
            idx.block_for(date(2024, 12, 21), &filter).unwrap().reason,
            "Maintenance"
        );
        assert!(!idx.is_blocked(date(2024, 12, 22), &filter));
        assert!(!idx.is_blocked(
            date(2024, 12, 21),
            &PropertyFilter::Property("P002".to_string())
        ));
    }

    #[test]
    fn test_custom_price_lookup() {
        let snapshot = AvailabilitySnapshot {
            custom_prices: vec![CustomPrice {
                property_id: "P001".to_string(),
                date: date(2024, 12, 25),
                price: 600.0,
            }],
            ..Default::default()
        };
        let idx = index(snapshot);
        let filter = PropertyFilter::Property("P001".to_string());

        assert_eq!(idx.custom_price_for(date(2024, 12, 25), &filter), Some(600.0));
        assert_eq!(idx.custom_price_for(date(2024, 12, 24), &filter), None);
    }

    #[test]
    fn test_is_past_is_strict_and_date_only() {
        let idx = index(AvailabilitySnapshot::default());

        assert!(idx.is_past(date(2024, 12, 14)));
        assert!(!idx.is_past(date(2024, 12, 15))); // today is not past
        assert!(!idx.is_past(date(2024, 12, 16)));
    }

    #[test]
    fn test_selectable_excludes_past_and_booked() {
        let snapshot = AvailabilitySnapshot {
            bookings: vec![test_booking(
                "booking::1",
                "P001",
                date(2024, 12, 20),
                date(2024, 12, 23),
            )],
            ..Default::default()
        };
        let idx = index(snapshot);
        let filter = PropertyFilter::Property("P001".to_string());

        assert!(!idx.is_selectable(date(2024, 12, 1), &filter)); // past
        assert!(!idx.is_selectable(date(2024, 12, 21), &filter)); // booked
        assert!(idx.is_selectable(date(2024, 12, 23), &filter)); // checkout day opens up
        assert!(idx.is_selectable(date(2024, 12, 18), &filter));
    }
}
