//! Modular application state: calendar data and navigation, sidebar form
//! fields, and general UI feedback, each isolated in its own struct.

pub mod calendar_state;
pub mod sidebar_state;
pub mod ui_state;

pub use calendar_state::CalendarState;
pub use sidebar_state::{SidebarMode, SidebarState};
pub use ui_state::UIState;
