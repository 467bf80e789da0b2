//! Click and hover handling for calendar day cells, forwarding UI events
//! into the selection reducer.

use chrono::NaiveDate;
use host_calendar_backend::domain::selection::SelectionEvent;

use crate::ui::app_state::HostCalendarApp;

impl HostCalendarApp {
    /// Handle a click on a calendar day. Past and booked days are a
    /// no-op at the grid level; the reducer screens them again anyway.
    pub fn handle_calendar_day_click(&mut self, clicked_date: NaiveDate) {
        let selectable = self
            .calendar
            .availability
            .as_ref()
            .map(|index| index.is_selectable(clicked_date, &self.calendar.property_filter))
            .unwrap_or(false);

        if !selectable {
            log::debug!("📅 Ignored click on non-selectable day {}", clicked_date);
            return;
        }

        let was_selecting = self.calendar.selection.is_selecting;
        self.apply_selection_event(SelectionEvent::ClickDay(clicked_date));

        if was_selecting && self.calendar.selection.is_complete() {
            if let Some((from, to)) = self.calendar.selection.range_bounds() {
                log::info!("📅 Selection complete: {}..{}", from, to);
            }
        } else {
            log::info!("📅 Selection anchored at {}", clicked_date);
        }
    }

    /// Handle the pointer entering a day cell. Only meaningful while a
    /// selection gesture is in progress, and only dispatched once per day.
    pub fn handle_calendar_day_hover(&mut self, hovered_date: NaiveDate) {
        if self.calendar.hovered_day == Some(hovered_date) {
            return;
        }
        self.calendar.hovered_day = Some(hovered_date);

        if self.calendar.selection.is_selecting {
            self.apply_selection_event(SelectionEvent::HoverDay(hovered_date));
        }
    }
}
