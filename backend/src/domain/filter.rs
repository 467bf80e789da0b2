use std::fmt;

/// Scope of a calendar read: one property, or the aggregate view across
/// the whole host catalog.
///
/// Mutating commands reject `All` outright; reads under `All` match
/// records from any property, first match in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyFilter {
    /// Aggregate "all listings" view
    All,
    /// A single concrete property
    Property(String),
}

impl PropertyFilter {
    /// Whether a record belonging to `property_id` is visible under this filter
    pub fn matches(&self, property_id: &str) -> bool {
        match self {
            PropertyFilter::All => true,
            PropertyFilter::Property(id) => id == property_id,
        }
    }

    /// The concrete property id, if this filter names one
    pub fn property_id(&self) -> Option<&str> {
        match self {
            PropertyFilter::All => None,
            PropertyFilter::Property(id) => Some(id.as_str()),
        }
    }
}

impl fmt::Display for PropertyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyFilter::All => write!(f, "all listings"),
            PropertyFilter::Property(id) => write!(f, "{}", id),
        }
    }
}
