//! # Sidebar State Module
//!
//! Form state for the action sidebar that appears once a date range has
//! been selected: which action tab is open, the chosen block reason and
//! notes, and the raw price input.

/// Which action surface the sidebar is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Block,
    Pricing,
}

/// Sidebar form state; survives failed submissions so the host can retry
#[derive(Debug)]
pub struct SidebarState {
    pub mode: SidebarMode,

    /// Reason id chosen in the dropdown; None falls back to "unspecified"
    pub selected_reason_id: Option<String>,

    /// Free-text notes attached to a block
    pub notes: String,

    /// Raw nightly-price input, parsed on submit
    pub price_input: String,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            mode: SidebarMode::Block,
            selected_reason_id: None,
            notes: String::new(),
            price_input: String::new(),
        }
    }

    /// Reset the form after a successful submission
    pub fn clear_form(&mut self) {
        self.selected_reason_id = None;
        self.notes.clear();
        self.price_input.clear();
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}
