#![forbid(unsafe_code)]

//! Pure render projection of [`MouseState`].
//!
//! The hosting page never reads raw state; it renders a [`StateSnapshot`],
//! which bakes in the display rules (coordinates hidden while the pointer
//! is out of area, `"None"` fallbacks, scroll direction labels). Keeping
//! the projection here means every pixel of the view is decided by code
//! that runs in native tests.

use serde::Serialize;

use crate::state::MouseState;

/// Immutable, display-ready snapshot of the widget state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub x: i32,
    pub y: i32,
    pub mouse_in_area: bool,
    pub is_mouse_down: bool,
    /// `"X: 42, Y: 17"` while in area, otherwise `"Mouse outside test area"`.
    pub coordinates_label: String,
    pub last_click: String,
    pub last_button_pressed: String,
    pub last_button_released: String,
    pub scroll_delta_y: i32,
    /// `"None"`, `"Up"`, or `"Down"`.
    pub scroll_direction: &'static str,
    pub double_click_count: u32,
    /// Newest-first log lines.
    pub event_log: Vec<String>,
}

impl StateSnapshot {
    #[must_use]
    pub fn capture(state: &MouseState) -> Self {
        let coordinates_label = if state.mouse_in_area {
            format!("X: {}, Y: {}", state.x, state.y)
        } else {
            "Mouse outside test area".to_owned()
        };

        Self {
            x: state.x,
            y: state.y,
            mouse_in_area: state.mouse_in_area,
            is_mouse_down: state.is_mouse_down,
            coordinates_label,
            last_click: display_or_none(state.last_click.as_deref()),
            last_button_pressed: display_or_none(state.last_button_pressed.as_deref()),
            last_button_released: display_or_none(state.last_button_released.as_deref()),
            scroll_delta_y: state.scroll_delta_y,
            scroll_direction: scroll_direction(state.scroll_delta_y),
            double_click_count: state.double_click_count,
            event_log: state.event_log.iter().cloned().collect(),
        }
    }

    /// Serialize for the JS boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn display_or_none(value: Option<&str>) -> String {
    value.unwrap_or("None").to_owned()
}

const fn scroll_direction(delta: i32) -> &'static str {
    if delta == 0 {
        "None"
    } else if delta < 0 {
        "Up"
    } else {
        "Down"
    }
}
