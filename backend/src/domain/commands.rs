//! Domain-level command and query types.
//! These structs are used by services inside the domain layer; the UI
//! layer builds them from its own state and maps the results back to
//! display records.

pub mod calendar {
    use crate::domain::filter::PropertyFilter;

    /// Query for one month of the calendar grid.
    #[derive(Debug, Clone)]
    pub struct CalendarMonthQuery {
        pub month: u32,
        pub year: i32,
        pub filter: PropertyFilter,
    }
}

pub mod blocks {
    use crate::domain::filter::PropertyFilter;
    use chrono::NaiveDate;

    /// Input for blocking a date span of one property.
    #[derive(Debug, Clone)]
    pub struct BlockDatesCommand {
        /// Must name a concrete property; `All` fails validation.
        pub property: PropertyFilter,
        pub from_date: NaiveDate,
        pub to_date: NaiveDate,
        /// Reason id from the block-reason directory; defaults to "unspecified".
        pub reason_id: Option<String>,
        pub notes: Option<String>,
    }

    /// Input for re-opening a previously blocked date span.
    #[derive(Debug, Clone)]
    pub struct UnblockDatesCommand {
        pub property: PropertyFilter,
        pub from_date: NaiveDate,
        pub to_date: NaiveDate,
    }

    /// Result of a block or unblock mutation.
    #[derive(Debug, Clone)]
    pub struct BlockDatesResult {
        pub confirmation_id: String,
        pub updated_days: u32,
        pub success_message: String,
    }
}

pub mod pricing {
    use crate::domain::filter::PropertyFilter;
    use chrono::NaiveDate;

    /// Input for overriding the nightly rate on a date span.
    #[derive(Debug, Clone)]
    pub struct SetPriceCommand {
        pub property: PropertyFilter,
        pub from_date: NaiveDate,
        pub to_date: NaiveDate,
        pub price: f64,
    }

    /// Input for removing nightly-rate overrides on a date span.
    #[derive(Debug, Clone)]
    pub struct ClearPriceCommand {
        pub property: PropertyFilter,
        pub from_date: NaiveDate,
        pub to_date: NaiveDate,
    }

    /// Result of a pricing mutation.
    #[derive(Debug, Clone)]
    pub struct PriceUpdateResult {
        pub confirmation_id: String,
        pub updated_days: u32,
        pub success_message: String,
    }
}
