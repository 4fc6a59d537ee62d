#![forbid(unsafe_code)]

//! DOM listener binding for the test surface.
//!
//! All nine listeners are attached together in [`ListenerSet::bind`] and
//! removed together when the set is dropped, so a deactivated widget can
//! never leak callbacks referencing a removed surface. Handlers re-query
//! the surface's bounding box on every event; nothing about the geometry
//! is cached.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use mousetest_core::{HostAction, MouseTester, PointerEvent, StateSnapshot, SurfaceRect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent, WheelEvent};

/// State shared between the widget and its event closures.
pub(crate) struct EventContext {
    pub tester: Rc<RefCell<MouseTester>>,
    pub surface: HtmlElement,
    pub on_change: Rc<RefCell<Option<Function>>>,
}

/// Scoped acquisition of the surface's event listeners.
///
/// Holding a `ListenerSet` means the nine listeners are installed;
/// dropping it removes them all in one step.
pub(crate) struct ListenerSet {
    target: HtmlElement,
    listeners: Vec<(&'static str, Function)>,
}

impl ListenerSet {
    pub(crate) fn bind(ctx: Rc<EventContext>) -> Result<Self, JsValue> {
        let mut set = Self {
            target: ctx.surface.clone(),
            listeners: Vec::with_capacity(9),
        };

        set.add_mouse("mousemove", &ctx, |ev| PointerEvent::Move {
            client_x: f64::from(ev.client_x()),
            client_y: f64::from(ev.client_y()),
        })?;
        set.add_mouse("mousedown", &ctx, |ev| PointerEvent::ButtonDown {
            button: button_code(ev),
        })?;
        set.add_mouse("mouseup", &ctx, |ev| PointerEvent::ButtonUp {
            button: button_code(ev),
        })?;
        set.add_mouse("click", &ctx, |ev| PointerEvent::Click {
            button: button_code(ev),
            client_x: f64::from(ev.client_x()),
            client_y: f64::from(ev.client_y()),
        })?;
        set.add_mouse("dblclick", &ctx, |ev| PointerEvent::DoubleClick {
            button: button_code(ev),
        })?;
        set.add_mouse("contextmenu", &ctx, |ev| PointerEvent::ContextMenu {
            client_x: f64::from(ev.client_x()),
            client_y: f64::from(ev.client_y()),
        })?;
        set.add_mouse("mouseenter", &ctx, |_ev| PointerEvent::Enter)?;
        set.add_mouse("mouseleave", &ctx, |_ev| PointerEvent::Leave)?;

        let wheel = {
            let ctx = Rc::clone(&ctx);
            Closure::<dyn FnMut(WheelEvent)>::new(move |ev: WheelEvent| {
                dispatch(
                    &ctx,
                    PointerEvent::Wheel {
                        delta_y: ev.delta_y(),
                    },
                    Some(ev.as_ref()),
                );
            })
        };
        set.add_listener("wheel", wheel.into_js_value().unchecked_into())?;

        Ok(set)
    }

    fn add_mouse(
        &mut self,
        name: &'static str,
        ctx: &Rc<EventContext>,
        to_event: impl Fn(&MouseEvent) -> PointerEvent + 'static,
    ) -> Result<(), JsValue> {
        let ctx = Rc::clone(ctx);
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            dispatch(&ctx, to_event(&ev), Some(ev.as_ref()));
        });
        self.add_listener(name, closure.into_js_value().unchecked_into())
    }

    fn add_listener(&mut self, name: &'static str, callback: Function) -> Result<(), JsValue> {
        self.target
            .add_event_listener_with_callback(name, &callback)?;
        self.listeners.push((name, callback));
        Ok(())
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        for (name, callback) in &self.listeners {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, callback);
        }
    }
}

/// Feed one event to the engine, then execute the returned host actions
/// and notify the page.
pub(crate) fn dispatch(
    ctx: &Rc<EventContext>,
    event: PointerEvent,
    dom_event: Option<&web_sys::Event>,
) {
    let rect = surface_rect(&ctx.surface);
    let actions = ctx.tester.borrow_mut().handle_event(rect, event);
    for action in actions {
        match action {
            HostAction::SuppressDefault => {
                if let Some(ev) = dom_event {
                    ev.prevent_default();
                }
            }
            HostAction::ScheduleScrollReset { token, delay_ms } => {
                schedule_scroll_reset(ctx, token, delay_ms);
            }
        }
    }
    notify(ctx);
}

/// Current bounding box of the surface, queried fresh for this event.
pub(crate) fn surface_rect(surface: &HtmlElement) -> SurfaceRect {
    let rect = surface.get_bounding_client_rect();
    SurfaceRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Invoke the page's `onChange` callback with a fresh snapshot.
pub(crate) fn notify(ctx: &Rc<EventContext>) {
    let callback = ctx.on_change.borrow().clone();
    let Some(callback) = callback else {
        return;
    };
    let snapshot = StateSnapshot::capture(ctx.tester.borrow().state());
    if let Ok(json) = snapshot.to_json() {
        let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json));
    }
}

/// One-shot timer for the wheel delta auto-reset. The token lets a timer
/// that fires after a newer wheel event land as a no-op in the engine.
fn schedule_scroll_reset(ctx: &Rc<EventContext>, token: u64, delay_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let ctx = Rc::clone(ctx);
    let callback = Closure::once_into_js(move || {
        let expired = ctx.tester.borrow_mut().expire_scroll_delta(token);
        if expired {
            notify(&ctx);
        }
    });
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay);
}

fn button_code(ev: &MouseEvent) -> u16 {
    u16::try_from(ev.button()).unwrap_or(0)
}
