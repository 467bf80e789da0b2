//! Date-range selection for the calendar grid.
//!
//! The gesture is two clicks: the first click anchors the range, moving
//! the pointer previews the span, the second click finalizes it. The
//! whole thing is a value object plus a pure reducer so the gesture can
//! be tested without any rendering framework.

use chrono::NaiveDate;

/// The in-progress or finalized date-range selection.
///
/// Invariant: `selected_dates` is always a contiguous inclusive span in
/// ascending order (possibly empty). When `is_selecting` is false and the
/// span is non-empty, it is exactly the span between the two clicks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected_dates: Vec<NaiveDate>,
    /// True between the first and second click of the gesture
    pub is_selecting: bool,
    /// First date clicked, retained until the gesture completes
    pub anchor_date: Option<NaiveDate>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chronological bounds of the current span, if any
    pub fn range_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.selected_dates.first(), self.selected_dates.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.range_bounds() {
            Some((first, last)) => first <= date && date <= last,
            None => false,
        }
    }

    /// A finalized selection ready for sidebar actions
    pub fn is_complete(&self) -> bool {
        !self.is_selecting && !self.selected_dates.is_empty()
    }
}

/// One UI event feeding the selection reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Click on a day cell
    ClickDay(NaiveDate),
    /// Pointer moved over a day cell while a selection is in progress
    HoverDay(NaiveDate),
    /// Explicit clear action
    Clear,
}

/// Apply one event to the selection, returning the next state.
///
/// `selectable` decides whether a date may participate in a selection at
/// all; the caller builds it from the availability lookups (past or
/// already-booked dates are not selectable). An event carrying an
/// unselectable date leaves the state untouched, in every phase.
pub fn reduce(
    state: &SelectionState,
    event: SelectionEvent,
    selectable: impl Fn(NaiveDate) -> bool,
) -> SelectionState {
    match event {
        SelectionEvent::Clear => SelectionState::new(),

        SelectionEvent::ClickDay(date) => {
            if !selectable(date) {
                return state.clone();
            }
            match state.anchor_date {
                // Second click: finalize the span between anchor and click
                Some(anchor) if state.is_selecting => SelectionState {
                    selected_dates: date_span(anchor, date),
                    is_selecting: false,
                    anchor_date: None,
                },
                // First click: anchor a new gesture
                _ => SelectionState {
                    selected_dates: vec![date],
                    is_selecting: true,
                    anchor_date: Some(date),
                },
            }
        }

        SelectionEvent::HoverDay(date) => {
            if !state.is_selecting || !selectable(date) {
                return state.clone();
            }
            match state.anchor_date {
                Some(anchor) => SelectionState {
                    selected_dates: date_span(anchor, date),
                    is_selecting: true,
                    anchor_date: Some(anchor),
                },
                None => state.clone(),
            }
        }
    }
}

/// Inclusive ascending span between two dates, given in either order
pub fn date_span(a: NaiveDate, b: NaiveDate) -> Vec<NaiveDate> {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    start.iter_days().take_while(|d| *d <= end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn any(_: NaiveDate) -> bool {
        true
    }

    #[test]
    fn test_date_span_either_order() {
        let forward = date_span(date(2024, 12, 20), date(2024, 12, 22));
        let backward = date_span(date(2024, 12, 22), date(2024, 12, 20));

        let expected = vec![
            date(2024, 12, 20),
            date(2024, 12, 21),
            date(2024, 12, 22),
        ];
        assert_eq!(forward, expected);
        assert_eq!(backward, expected);
    }

    #[test]
    fn test_date_span_crosses_month_boundary() {
        let span = date_span(date(2024, 12, 30), date(2025, 1, 2));
        assert_eq!(span.len(), 4);
        assert_eq!(span[0], date(2024, 12, 30));
        assert_eq!(span[3], date(2025, 1, 2));
    }

    #[test]
    fn test_first_click_anchors_selection() {
        let state = reduce(
            &SelectionState::new(),
            SelectionEvent::ClickDay(date(2024, 12, 20)),
            any,
        );

        assert!(state.is_selecting);
        assert_eq!(state.anchor_date, Some(date(2024, 12, 20)));
        assert_eq!(state.selected_dates, vec![date(2024, 12, 20)]);
    }

    #[test]
    fn test_two_clicks_produce_full_ascending_span() {
        // Range invariant: the span between two clicks, in either order,
        // is every date from min to max inclusive with no gaps.
        for (first, second) in [
            (date(2024, 12, 20), date(2024, 12, 22)),
            (date(2024, 12, 22), date(2024, 12, 20)),
        ] {
            let state = reduce(
                &SelectionState::new(),
                SelectionEvent::ClickDay(first),
                any,
            );
            let state = reduce(&state, SelectionEvent::ClickDay(second), any);

            assert!(!state.is_selecting);
            assert_eq!(state.anchor_date, None);
            assert_eq!(
                state.selected_dates,
                vec![date(2024, 12, 20), date(2024, 12, 21), date(2024, 12, 22)]
            );
            assert!(state.is_complete());
        }
    }

    #[test]
    fn test_clicking_anchor_twice_selects_single_day() {
        let state = reduce(
            &SelectionState::new(),
            SelectionEvent::ClickDay(date(2024, 12, 20)),
            any,
        );
        let state = reduce(&state, SelectionEvent::ClickDay(date(2024, 12, 20)), any);

        assert!(state.is_complete());
        assert_eq!(state.selected_dates, vec![date(2024, 12, 20)]);
    }

    #[test]
    fn test_hover_previews_span_and_reorders_endpoints() {
        let state = reduce(
            &SelectionState::new(),
            SelectionEvent::ClickDay(date(2024, 12, 20)),
            any,
        );

        // Hover after the anchor
        let state = reduce(&state, SelectionEvent::HoverDay(date(2024, 12, 23)), any);
        assert!(state.is_selecting);
        assert_eq!(state.selected_dates.len(), 4);
        assert_eq!(state.anchor_date, Some(date(2024, 12, 20)));

        // Hover before the anchor: the anchor becomes the later bound
        let state = reduce(&state, SelectionEvent::HoverDay(date(2024, 12, 18)), any);
        assert!(state.is_selecting);
        assert_eq!(
            state.selected_dates,
            vec![date(2024, 12, 18), date(2024, 12, 19), date(2024, 12, 20)]
        );
    }

    #[test]
    fn test_hover_while_idle_is_ignored() {
        let idle = SelectionState::new();
        let state = reduce(&idle, SelectionEvent::HoverDay(date(2024, 12, 23)), any);
        assert_eq!(state, idle);

        // Also ignored once a selection has been finalized
        let state = reduce(&idle, SelectionEvent::ClickDay(date(2024, 12, 20)), any);
        let done = reduce(&state, SelectionEvent::ClickDay(date(2024, 12, 21)), any);
        let hovered = reduce(&done, SelectionEvent::HoverDay(date(2024, 12, 25)), any);
        assert_eq!(hovered, done);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let idle = SelectionState::new();
        let cleared = reduce(&idle, SelectionEvent::Clear, any);
        assert_eq!(cleared, idle);
        assert!(cleared.selected_dates.is_empty());
        assert!(!cleared.is_selecting);
    }

    #[test]
    fn test_clear_resets_mid_gesture() {
        let state = reduce(
            &SelectionState::new(),
            SelectionEvent::ClickDay(date(2024, 12, 20)),
            any,
        );
        let cleared = reduce(&state, SelectionEvent::Clear, any);
        assert_eq!(cleared, SelectionState::new());
    }

    #[test]
    fn test_unselectable_dates_never_change_state() {
        let blocked = date(2024, 12, 15);
        let selectable = |d: NaiveDate| d != blocked;

        // Idle phase
        let idle = SelectionState::new();
        assert_eq!(
            reduce(&idle, SelectionEvent::ClickDay(blocked), selectable),
            idle
        );

        // Selecting phase: neither click nor hover on the bad date moves anything
        let selecting = reduce(&idle, SelectionEvent::ClickDay(date(2024, 12, 20)), selectable);
        assert_eq!(
            reduce(&selecting, SelectionEvent::ClickDay(blocked), selectable),
            selecting
        );
        assert_eq!(
            reduce(&selecting, SelectionEvent::HoverDay(blocked), selectable),
            selecting
        );
    }

    #[test]
    fn test_selection_contains_and_bounds() {
        let state = reduce(
            &SelectionState::new(),
            SelectionEvent::ClickDay(date(2024, 12, 20)),
            any,
        );
        let state = reduce(&state, SelectionEvent::ClickDay(date(2024, 12, 22)), any);

        assert_eq!(
            state.range_bounds(),
            Some((date(2024, 12, 20), date(2024, 12, 22)))
        );
        assert!(state.contains(date(2024, 12, 21)));
        assert!(!state.contains(date(2024, 12, 23)));
    }
}
