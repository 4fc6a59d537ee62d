//! End-to-end scenario fixtures for the mouse tester reducer.
//!
//! Each test drives the reducer with a realistic event sequence and checks
//! the resulting state record and log against the expected display strings.

use mousetest_core::{
    MAX_LOG_ENTRIES, MouseTester, PointerEvent, StateSnapshot, SurfaceRect,
};

fn rect() -> SurfaceRect {
    SurfaceRect {
        left: 120.0,
        top: 80.0,
        width: 640.0,
        height: 320.0,
    }
}

fn log(tester: &MouseTester) -> Vec<&str> {
    tester.state().event_log.iter().map(String::as_str).collect()
}

#[test]
fn sixteen_press_release_pairs_retain_only_fifteen_lines() {
    let mut tester = MouseTester::new();
    for _ in 0..16 {
        tester.handle_event(rect(), PointerEvent::ButtonDown { button: 0 });
        tester.handle_event(rect(), PointerEvent::ButtonUp { button: 0 });
    }

    let entries = log(&tester);
    assert_eq!(entries.len(), MAX_LOG_ENTRIES);
    // 32 events total; the newest 15 survive, newest first.
    assert_eq!(entries[0], "Mouse Up: Left");
    assert_eq!(entries[1], "Mouse Down: Left");
    assert_eq!(entries[14], "Mouse Up: Left");
}

#[test]
fn click_at_offset_surface_uses_relative_coordinates() {
    let mut tester = MouseTester::new();
    // Client (162, 97) against a surface at (120, 80) is relative (42, 17).
    tester.handle_event(
        rect(),
        PointerEvent::Click {
            button: 0,
            client_x: 162.0,
            client_y: 97.0,
        },
    );

    assert_eq!(
        tester.state().last_click.as_deref(),
        Some("Left Click at X:42, Y:17")
    );
    assert_eq!(log(&tester)[0], "Left Click: X=42, Y=17");
}

#[test]
fn drag_that_ends_outside_the_surface_recovers() {
    let mut tester = MouseTester::new();
    tester.handle_event(rect(), PointerEvent::Enter);
    tester.handle_event(
        rect(),
        PointerEvent::Move {
            client_x: 300.0,
            client_y: 200.0,
        },
    );
    tester.handle_event(rect(), PointerEvent::ButtonDown { button: 0 });
    tester.handle_event(rect(), PointerEvent::Leave);

    // The press ended off-surface: the indicator must not stay stuck.
    assert!(!tester.state().is_mouse_down);
    assert_eq!(
        log(&tester),
        vec!["Mouse Left Test Area", "Mouse Down: Left", "Mouse Entered Test Area"]
    );

    tester.handle_event(rect(), PointerEvent::Enter);
    assert!(tester.state().mouse_in_area);
}

#[test]
fn wheel_then_clear_then_snapshot_round_trip() {
    let mut tester = MouseTester::new();
    tester.handle_event(
        rect(),
        PointerEvent::Move {
            client_x: 130.0,
            client_y: 90.0,
        },
    );
    tester.handle_event(rect(), PointerEvent::Wheel { delta_y: 53.4 });
    tester.handle_event(rect(), PointerEvent::DoubleClick { button: 0 });

    assert_eq!(tester.state().scroll_delta_y, 53);
    assert_eq!(log(&tester)[1], "Scroll: DeltaY=53 (Down)");

    tester.clear_log_and_stats();
    let snapshot = StateSnapshot::capture(tester.state());

    // Clear wipes log/stats but the pointer is still where it was.
    assert!(snapshot.event_log.is_empty());
    assert_eq!(snapshot.double_click_count, 0);
    assert_eq!(snapshot.coordinates_label, "X: 10, Y: 10");
    assert_eq!(snapshot.scroll_delta_y, 53);
    assert_eq!(snapshot.scroll_direction, "Down");
}

#[test]
fn extra_buttons_use_numeric_names() {
    let mut tester = MouseTester::new();
    tester.handle_event(rect(), PointerEvent::ButtonDown { button: 4 });
    tester.handle_event(rect(), PointerEvent::ButtonUp { button: 4 });

    assert_eq!(
        tester.state().last_button_pressed.as_deref(),
        Some("Button 4 (Code: 4)")
    );
    assert_eq!(
        tester.state().last_button_released.as_deref(),
        Some("Button 4 (Code: 4)")
    );
    assert_eq!(log(&tester), vec!["Mouse Up: Button 4", "Mouse Down: Button 4"]);
}
