use shared::{BookingStatus, CalendarDay, CalendarDayState};

/// Visual classification of a day cell, collapsing the derived day state
/// into the handful of treatments the renderer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCellKind {
    BookedConfirmed,
    BookedPending,
    Blocked,
    Past,
    Open,
}

impl DayCellKind {
    pub fn classify(day: &CalendarDay) -> Self {
        match &day.state {
            CalendarDayState::Booked { status, .. } => match status {
                BookingStatus::Confirmed => DayCellKind::BookedConfirmed,
                BookingStatus::Pending => DayCellKind::BookedPending,
            },
            CalendarDayState::Blocked { .. } => DayCellKind::Blocked,
            CalendarDayState::Past => DayCellKind::Past,
            CalendarDayState::Open { .. } => DayCellKind::Open,
        }
    }

    /// Whether the pointer can start or extend a selection on this cell
    pub fn is_interactive(&self) -> bool {
        matches!(self, DayCellKind::Open | DayCellKind::Blocked)
    }
}

/// Configuration for rendering one day cell
pub struct RenderConfig {
    /// Cell falls inside the current selection span
    pub is_selected: bool,
    /// Cell belongs to an adjacent month (leading/trailing padding)
    pub is_filler: bool,
}

/// Compact price label for a day cell, e.g. "$450" or "$512.50"
pub fn price_label(price: f64) -> String {
    if (price - price.round()).abs() < f64::EPSILON {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}
