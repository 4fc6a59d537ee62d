#![forbid(unsafe_code)]

//! The mouse state store: one mutable record plus a bounded event log.
//!
//! All mutation goes through [`MouseState::apply`] (patch merge),
//! [`MouseState::push_log`], or [`MouseState::clear_log_and_stats`]; the
//! reducer in [`crate::tester`] never touches fields directly. The log is
//! newest-first and capped at [`MAX_LOG_ENTRIES`]: insert at the front,
//! trim from the back.

use std::collections::VecDeque;

use serde::Serialize;

/// Retention limit for the rolling event log.
pub const MAX_LOG_ENTRIES: usize = 15;

/// Latest known mouse state over the test surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseState {
    /// Last in-area coordinate, relative to the surface's top-left corner.
    /// Only meaningful for display while `mouse_in_area` is true.
    pub x: i32,
    pub y: i32,
    /// Human-readable description of the most recent left/right click.
    pub last_click: Option<String>,
    /// Name + code of the most recently pressed button.
    pub last_button_pressed: Option<String>,
    /// Name + code of the most recently released button.
    pub last_button_released: Option<String>,
    /// Signed vertical delta of the most recent wheel event; auto-resets
    /// to 0 after a fixed delay.
    pub scroll_delta_y: i32,
    /// True between a button-down and the matching button-up (or leaving
    /// the surface).
    pub is_mouse_down: bool,
    /// Monotonic count of left-button double-clicks, resettable via clear.
    pub double_click_count: u32,
    /// True while the pointer falls within the surface's bounding box.
    pub mouse_in_area: bool,
    /// Newest-first rolling log, at most [`MAX_LOG_ENTRIES`] entries.
    pub event_log: VecDeque<String>,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            last_click: None,
            last_button_pressed: None,
            last_button_released: None,
            scroll_delta_y: 0,
            is_mouse_down: false,
            double_click_count: 0,
            mouse_in_area: false,
            event_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }
}

/// Partial update merged into [`MouseState`].
///
/// `None` fields are left unchanged. Patches only ever set values; the
/// `last_*` fields become absent again only through
/// [`MouseState::clear_log_and_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub last_click: Option<String>,
    pub last_button_pressed: Option<String>,
    pub last_button_released: Option<String>,
    pub scroll_delta_y: Option<i32>,
    pub is_mouse_down: Option<bool>,
    pub mouse_in_area: Option<bool>,
}

impl MouseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a patch: named fields are replaced wholesale, the rest kept.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(click) = patch.last_click {
            self.last_click = Some(click);
        }
        if let Some(pressed) = patch.last_button_pressed {
            self.last_button_pressed = Some(pressed);
        }
        if let Some(released) = patch.last_button_released {
            self.last_button_released = Some(released);
        }
        if let Some(delta) = patch.scroll_delta_y {
            self.scroll_delta_y = delta;
        }
        if let Some(down) = patch.is_mouse_down {
            self.is_mouse_down = down;
        }
        if let Some(in_area) = patch.mouse_in_area {
            self.mouse_in_area = in_area;
        }
    }

    /// Prepend a log line, trimming the oldest entries past the cap.
    ///
    /// No deduplication, no filtering: every call lands one entry.
    pub fn push_log(&mut self, message: impl Into<String>) {
        self.event_log.push_front(message.into());
        self.event_log.truncate(MAX_LOG_ENTRIES);
    }

    /// The "Clear Log & Stats" action.
    ///
    /// Empties the log, zeroes the double-click counter, and forgets the
    /// three `last_*` fields. Position, visibility, down-state, and the
    /// scroll delta are untouched.
    pub fn clear_log_and_stats(&mut self) {
        self.event_log.clear();
        self.double_click_count = 0;
        self.last_click = None;
        self.last_button_pressed = None;
        self.last_button_released = None;
    }
}
