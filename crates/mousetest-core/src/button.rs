#![forbid(unsafe_code)]

//! Mouse button identity and display names.

use std::fmt;

use serde::Serialize;

/// A mouse button as reported by the host's button code.
///
/// Codes follow the DOM `MouseEvent.button` convention: 0 = left,
/// 1 = middle (wheel), 2 = right. Anything else (back/forward/extra
/// buttons) is carried through as [`MouseButton::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

impl MouseButton {
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other),
        }
    }

    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
            Self::Other(code) => code,
        }
    }

    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Name plus numeric code, e.g. `"Right (Code: 2)"`.
    ///
    /// This is the string stored in the last-pressed/last-released fields.
    #[must_use]
    pub fn label(self) -> String {
        format!("{self} (Code: {})", self.code())
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Middle => f.write_str("Middle"),
            Self::Right => f.write_str("Right"),
            Self::Other(code) => write!(f, "Button {code}"),
        }
    }
}
