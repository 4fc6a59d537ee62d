#![forbid(unsafe_code)]

//! The pointer event reducer.
//!
//! [`MouseTester`] consumes normalized pointer/wheel events together with
//! the surface's current bounding box and folds them into [`MouseState`].
//! Side effects it cannot perform itself (suppressing the browser context
//! menu, arming the scroll-reset timer) come back as [`HostAction`]s for
//! the host to execute, so the reducer stays deterministic and directly
//! testable.
//!
//! Event delivery is single-threaded and run-to-completion: there is no
//! ordering guarantee between event kinds beyond arrival order, and no
//! state machine beyond the `is_mouse_down` / `mouse_in_area` flags.

use crate::button::MouseButton;
use crate::logging::trace;
use crate::state::{MouseState, StatePatch};
use crate::surface::SurfaceRect;

/// Delay before a wheel event's delta reads back as 0.
pub const SCROLL_RESET_DELAY_MS: u32 = 500;

/// A raw input event, normalized to client-space coordinates and DOM
/// button codes. Produced by the platform binder (`mousetest-web`) or by
/// tests directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { client_x: f64, client_y: f64 },
    ButtonDown { button: u16 },
    ButtonUp { button: u16 },
    Click { button: u16, client_x: f64, client_y: f64 },
    DoubleClick { button: u16 },
    ContextMenu { client_x: f64, client_y: f64 },
    Wheel { delta_y: f64 },
    Enter,
    Leave,
}

/// Side effects the host must execute in reaction to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Suppress the platform's default handling (browser context menu).
    SuppressDefault,
    /// Arm a one-shot timer that calls
    /// [`MouseTester::expire_scroll_delta`] with this token after the
    /// delay elapses.
    ScheduleScrollReset { token: u64, delay_ms: u32 },
}

/// Event-to-state reducer for the mouse test surface.
#[derive(Debug, Clone, Default)]
pub struct MouseTester {
    state: MouseState,
    /// Token of the most recent wheel event. A pending reset whose token
    /// no longer matches is stale and must not zero the newer delta.
    scroll_token: u64,
}

impl MouseTester {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &MouseState {
        &self.state
    }

    /// Apply one raw event against the surface's current bounding box.
    ///
    /// The box is passed per event (never cached) so layout shifts and
    /// scrolling are tolerated. Returns the host actions this event
    /// requires, in execution order.
    pub fn handle_event(&mut self, surface: SurfaceRect, event: PointerEvent) -> Vec<HostAction> {
        trace!(?event, "pointer event");
        match event {
            PointerEvent::Move { client_x, client_y } => {
                self.on_move(surface, client_x, client_y);
                Vec::new()
            }
            PointerEvent::ButtonDown { button } => {
                self.on_button_down(button);
                Vec::new()
            }
            PointerEvent::ButtonUp { button } => {
                self.on_button_up(button);
                Vec::new()
            }
            PointerEvent::Click {
                button,
                client_x,
                client_y,
            } => {
                self.on_click(surface, button, client_x, client_y);
                Vec::new()
            }
            PointerEvent::DoubleClick { button } => {
                self.on_double_click(button);
                Vec::new()
            }
            PointerEvent::ContextMenu { client_x, client_y } => {
                self.on_context_menu(surface, client_x, client_y);
                vec![HostAction::SuppressDefault]
            }
            PointerEvent::Wheel { delta_y } => {
                let token = self.on_wheel(delta_y);
                vec![HostAction::ScheduleScrollReset {
                    token,
                    delay_ms: SCROLL_RESET_DELAY_MS,
                }]
            }
            PointerEvent::Enter => {
                self.state.apply(StatePatch {
                    mouse_in_area: Some(true),
                    ..StatePatch::default()
                });
                self.state.push_log("Mouse Entered Test Area");
                Vec::new()
            }
            PointerEvent::Leave => {
                // Force the down indicator off so a press that ends
                // outside the surface can never leave it stuck.
                self.state.apply(StatePatch {
                    mouse_in_area: Some(false),
                    is_mouse_down: Some(false),
                    ..StatePatch::default()
                });
                self.state.push_log("Mouse Left Test Area");
                Vec::new()
            }
        }
    }

    /// Zero the scroll delta if `token` still names the latest wheel
    /// event. Returns whether the state changed.
    ///
    /// A stale token (a newer wheel event arrived while the timer was
    /// pending) is a no-op, so a fresh delta is never clobbered early.
    pub fn expire_scroll_delta(&mut self, token: u64) -> bool {
        if token != self.scroll_token || self.state.scroll_delta_y == 0 {
            return false;
        }
        self.state.apply(StatePatch {
            scroll_delta_y: Some(0),
            ..StatePatch::default()
        });
        true
    }

    /// The "Clear Log & Stats" user action.
    pub fn clear_log_and_stats(&mut self) {
        self.state.clear_log_and_stats();
    }

    fn on_move(&mut self, surface: SurfaceRect, client_x: f64, client_y: f64) {
        let point = surface.relative_point(client_x, client_y);
        if surface.contains(point) {
            self.state.apply(StatePatch {
                x: Some(point.x),
                y: Some(point.y),
                mouse_in_area: Some(true),
                ..StatePatch::default()
            });
        } else {
            // Keep the stale last-good coordinates; the view hides them
            // while mouse_in_area is false.
            self.state.apply(StatePatch {
                mouse_in_area: Some(false),
                ..StatePatch::default()
            });
        }
        // No log line: move events are too frequent.
    }

    fn on_button_down(&mut self, button: u16) {
        let button = MouseButton::from_code(button);
        self.state.apply(StatePatch {
            is_mouse_down: Some(true),
            last_button_pressed: Some(button.label()),
            ..StatePatch::default()
        });
        self.state.push_log(format!("Mouse Down: {button}"));
    }

    fn on_button_up(&mut self, button: u16) {
        let button = MouseButton::from_code(button);
        self.state.apply(StatePatch {
            is_mouse_down: Some(false),
            last_button_released: Some(button.label()),
            ..StatePatch::default()
        });
        self.state.push_log(format!("Mouse Up: {button}"));
    }

    fn on_click(&mut self, surface: SurfaceRect, button: u16, client_x: f64, client_y: f64) {
        if !MouseButton::from_code(button).is_left() {
            return;
        }
        let point = surface.relative_point(client_x, client_y);
        self.state.apply(StatePatch {
            last_click: Some(format!("Left Click at X:{}, Y:{}", point.x, point.y)),
            ..StatePatch::default()
        });
        self.state
            .push_log(format!("Left Click: X={}, Y={}", point.x, point.y));
    }

    fn on_double_click(&mut self, button: u16) {
        if !MouseButton::from_code(button).is_left() {
            return;
        }
        self.state.double_click_count = self.state.double_click_count.saturating_add(1);
        self.state.push_log("Double Click (Left)");
    }

    fn on_context_menu(&mut self, surface: SurfaceRect, client_x: f64, client_y: f64) {
        let point = surface.relative_point(client_x, client_y);
        self.state.apply(StatePatch {
            last_click: Some(format!("Right Click at X:{}, Y:{}", point.x, point.y)),
            ..StatePatch::default()
        });
        self.state.push_log(format!(
            "Right Click (Context Menu): X={}, Y={}",
            point.x, point.y
        ));
    }

    fn on_wheel(&mut self, delta_y: f64) -> u64 {
        let delta = round_delta(delta_y);
        self.scroll_token = self.scroll_token.wrapping_add(1);
        self.state.apply(StatePatch {
            scroll_delta_y: Some(delta),
            ..StatePatch::default()
        });
        let direction = if delta_y < 0.0 { "Up" } else { "Down" };
        self.state
            .push_log(format!("Scroll: DeltaY={delta} ({direction})"));
        self.scroll_token
    }
}

fn round_delta(delta_y: f64) -> i32 {
    let rounded = delta_y.round();
    if rounded <= f64::from(i32::MIN) {
        i32::MIN
    } else if rounded >= f64::from(i32::MAX) {
        i32::MAX
    } else {
        rounded as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> SurfaceRect {
        SurfaceRect {
            left: 0.0,
            top: 0.0,
            width: 640.0,
            height: 320.0,
        }
    }

    fn log_head(tester: &MouseTester) -> Option<&str> {
        tester.state().event_log.front().map(String::as_str)
    }

    #[test]
    fn right_button_down_records_name_and_code() {
        let mut tester = MouseTester::new();
        let actions = tester.handle_event(rect(), PointerEvent::ButtonDown { button: 2 });

        assert!(actions.is_empty());
        assert!(tester.state().is_mouse_down);
        assert_eq!(
            tester.state().last_button_pressed.as_deref(),
            Some("Right (Code: 2)")
        );
        assert_eq!(log_head(&tester), Some("Mouse Down: Right"));
    }

    #[test]
    fn left_click_records_surface_relative_coordinates() {
        let mut tester = MouseTester::new();
        tester.handle_event(
            rect(),
            PointerEvent::Click {
                button: 0,
                client_x: 42.0,
                client_y: 17.0,
            },
        );

        assert_eq!(
            tester.state().last_click.as_deref(),
            Some("Left Click at X:42, Y:17")
        );
        assert_eq!(log_head(&tester), Some("Left Click: X=42, Y=17"));
    }

    #[test]
    fn non_left_click_is_ignored() {
        let mut tester = MouseTester::new();
        tester.handle_event(
            rect(),
            PointerEvent::Click {
                button: 1,
                client_x: 10.0,
                client_y: 10.0,
            },
        );

        assert_eq!(tester.state().last_click, None);
        assert!(tester.state().event_log.is_empty());
    }

    #[test]
    fn double_click_counts_left_button_only() {
        let mut tester = MouseTester::new();
        tester.handle_event(rect(), PointerEvent::DoubleClick { button: 0 });
        tester.handle_event(rect(), PointerEvent::DoubleClick { button: 2 });
        tester.handle_event(rect(), PointerEvent::DoubleClick { button: 0 });

        assert_eq!(tester.state().double_click_count, 2);
        assert_eq!(log_head(&tester), Some("Double Click (Left)"));
    }

    #[test]
    fn context_menu_suppresses_default_and_logs_position() {
        let mut tester = MouseTester::new();
        let actions = tester.handle_event(
            rect(),
            PointerEvent::ContextMenu {
                client_x: 100.0,
                client_y: 25.0,
            },
        );

        assert_eq!(actions, vec![HostAction::SuppressDefault]);
        assert_eq!(
            tester.state().last_click.as_deref(),
            Some("Right Click at X:100, Y:25")
        );
        assert_eq!(
            log_head(&tester),
            Some("Right Click (Context Menu): X=100, Y=25")
        );
    }

    #[test]
    fn wheel_up_sets_delta_and_schedules_reset() {
        let mut tester = MouseTester::new();
        let actions = tester.handle_event(rect(), PointerEvent::Wheel { delta_y: -120.0 });

        assert_eq!(
            actions,
            vec![HostAction::ScheduleScrollReset {
                token: 1,
                delay_ms: SCROLL_RESET_DELAY_MS,
            }]
        );
        assert_eq!(tester.state().scroll_delta_y, -120);
        assert_eq!(log_head(&tester), Some("Scroll: DeltaY=-120 (Up)"));

        assert!(tester.expire_scroll_delta(1));
        assert_eq!(tester.state().scroll_delta_y, 0);
    }

    #[test]
    fn stale_scroll_reset_does_not_clobber_newer_delta() {
        let mut tester = MouseTester::new();
        tester.handle_event(rect(), PointerEvent::Wheel { delta_y: -120.0 });
        let actions = tester.handle_event(rect(), PointerEvent::Wheel { delta_y: 240.0 });

        // The first timer fires late with its original token.
        assert!(!tester.expire_scroll_delta(1));
        assert_eq!(tester.state().scroll_delta_y, 240);
        assert_eq!(log_head(&tester), Some("Scroll: DeltaY=240 (Down)"));

        let HostAction::ScheduleScrollReset { token, .. } = actions[0] else {
            panic!("wheel must schedule a reset");
        };
        assert!(tester.expire_scroll_delta(token));
        assert_eq!(tester.state().scroll_delta_y, 0);
    }

    #[test]
    fn move_outside_box_hides_but_keeps_last_coordinates() {
        let mut tester = MouseTester::new();
        tester.handle_event(
            rect(),
            PointerEvent::Move {
                client_x: 30.0,
                client_y: 40.0,
            },
        );
        assert!(tester.state().mouse_in_area);

        tester.handle_event(
            rect(),
            PointerEvent::Move {
                client_x: 900.0,
                client_y: 40.0,
            },
        );
        assert!(!tester.state().mouse_in_area);
        assert_eq!((tester.state().x, tester.state().y), (30, 40));
        // Moves never log.
        assert!(tester.state().event_log.is_empty());
    }

    #[test]
    fn leave_forces_button_up_indicator() {
        let mut tester = MouseTester::new();
        tester.handle_event(rect(), PointerEvent::ButtonDown { button: 0 });
        assert!(tester.state().is_mouse_down);

        tester.handle_event(rect(), PointerEvent::Leave);
        assert!(!tester.state().is_mouse_down);
        assert!(!tester.state().mouse_in_area);
        assert_eq!(log_head(&tester), Some("Mouse Left Test Area"));
    }

    #[test]
    fn enter_marks_pointer_in_area() {
        let mut tester = MouseTester::new();
        tester.handle_event(rect(), PointerEvent::Enter);
        assert!(tester.state().mouse_in_area);
        assert_eq!(log_head(&tester), Some("Mouse Entered Test Area"));
    }
}
