#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use mousetest_core::{MouseTester, StateSnapshot, SurfaceRect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::binder::{self, EventContext, ListenerSet};
use crate::event::parse_pointer_event;

/// Browser-facing mouse tester widget.
///
/// Construct once, [`attach`](Self::attach) to the test surface, and read
/// state through [`snapshot_json`](Self::snapshot_json) or the `onChange`
/// callback. The widget has no configuration; the page only mounts it and
/// renders the snapshots it reports.
#[wasm_bindgen]
pub struct MouseTesterWidget {
    tester: Rc<RefCell<MouseTester>>,
    on_change: Rc<RefCell<Option<Function>>>,
    surface: Option<HtmlElement>,
    listeners: Option<ListenerSet>,
}

impl Default for MouseTesterWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MouseTesterWidget {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tester: Rc::new(RefCell::new(MouseTester::new())),
            on_change: Rc::new(RefCell::new(None)),
            surface: None,
            listeners: None,
        }
    }

    /// Bind all nine listeners to the given test surface.
    ///
    /// Re-attaching moves the listener group to the new surface. Default
    /// touch gestures on the surface are disabled so pointer input is not
    /// intercepted on touch devices.
    pub fn attach(&mut self, surface: HtmlElement) -> Result<(), JsValue> {
        self.detach();
        surface.style().set_property("touch-action", "none")?;

        let ctx = Rc::new(EventContext {
            tester: Rc::clone(&self.tester),
            surface: surface.clone(),
            on_change: Rc::clone(&self.on_change),
        });
        self.listeners = Some(ListenerSet::bind(Rc::clone(&ctx))?);
        self.surface = Some(surface);
        Ok(())
    }

    /// Look up the surface by element id and attach.
    ///
    /// A missing element is a silent no-op: there is nothing to listen to.
    #[wasm_bindgen(js_name = attachById)]
    pub fn attach_by_id(&mut self, id: &str) -> Result<(), JsValue> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(());
        };
        let Some(element) = document.get_element_by_id(id) else {
            return Ok(());
        };
        let surface: HtmlElement = element
            .dyn_into()
            .map_err(|_| JsValue::from_str("surface element is not an HtmlElement"))?;
        self.attach(surface)
    }

    /// Remove the listener group. State is kept; only delivery stops.
    pub fn detach(&mut self) {
        self.listeners = None;
        self.surface = None;
    }

    /// The "Clear Log & Stats" action.
    pub fn clear(&mut self) {
        self.tester.borrow_mut().clear_log_and_stats();
        self.notify();
    }

    /// Current display-ready state as a JSON string (camelCase keys).
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        StateSnapshot::capture(self.tester.borrow().state())
            .to_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Install (or clear) the callback invoked with a snapshot JSON string
    /// after every state change.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: Option<Function>) {
        *self.on_change.borrow_mut() = callback;
    }

    /// Replay path: accept a normalized `PointerEvent`-shaped JS object
    /// (`{kind: "down", button: 2}`, `{kind: "wheel", deltaY: -120}`, …).
    ///
    /// Coordinates are resolved against the attached surface's current
    /// box, or a zero-sized box when detached.
    pub fn input(&mut self, event: JsValue) -> Result<(), JsValue> {
        let event = parse_pointer_event(&event)?;
        match &self.surface {
            Some(surface) => {
                let ctx = Rc::new(EventContext {
                    tester: Rc::clone(&self.tester),
                    surface: surface.clone(),
                    on_change: Rc::clone(&self.on_change),
                });
                binder::dispatch(&ctx, event, None);
            }
            None => {
                let rect = SurfaceRect {
                    left: 0.0,
                    top: 0.0,
                    width: 0.0,
                    height: 0.0,
                };
                // Detached replay: host actions have nothing to act on,
                // so only the state update applies.
                self.tester.borrow_mut().handle_event(rect, event);
                self.notify();
            }
        }
        Ok(())
    }

    /// Explicit teardown for JS callers: detach listeners and reset state.
    pub fn destroy(&mut self) {
        self.detach();
        *self.tester.borrow_mut() = MouseTester::new();
        *self.on_change.borrow_mut() = None;
    }
}

impl MouseTesterWidget {
    fn notify(&self) {
        let callback = self.on_change.borrow().clone();
        let Some(callback) = callback else {
            return;
        };
        if let Ok(json) = self.snapshot_json() {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json));
        }
    }
}
