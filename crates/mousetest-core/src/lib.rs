#![forbid(unsafe_code)]

//! Host-agnostic mouse diagnostic engine.
//!
//! This crate is the deterministic half of the mouse tester: it owns the
//! [`MouseState`] record, the bounded event log, and the reducer that maps
//! raw pointer/wheel events to state updates. It has no platform
//! dependencies, so every behavior the widget exhibits in a browser is
//! testable natively.
//!
//! The DOM half lives in `mousetest-web`, which binds listeners on the test
//! surface, feeds [`MouseTester::handle_event`], and executes the returned
//! [`HostAction`]s (default suppression, scroll-reset timers).

pub mod button;
pub mod logging;
pub mod state;
pub mod surface;
pub mod tester;
pub mod view;

pub use button::MouseButton;
pub use state::{MAX_LOG_ENTRIES, MouseState, StatePatch};
pub use surface::{SurfacePoint, SurfaceRect};
pub use tester::{HostAction, MouseTester, PointerEvent, SCROLL_RESET_DELAY_MS};
pub use view::StateSnapshot;
