#![forbid(unsafe_code)]

//! Normalized pointer-event parsing for the replay path.
//!
//! [`crate::MouseTesterWidget::input`] accepts `PointerEvent`-shaped JS
//! objects (not raw DOM events), with a `kind` discriminator and
//! client-space coordinates where relevant. This gives harnesses a way to
//! drive the widget deterministically without synthesizing DOM events.

use js_sys::Reflect;
use mousetest_core::PointerEvent;
use wasm_bindgen::prelude::*;

pub(crate) fn parse_pointer_event(event: &JsValue) -> Result<PointerEvent, JsValue> {
    let kind = get_string(event, "kind")?;
    match kind.as_str() {
        "move" | "mousemove" => Ok(PointerEvent::Move {
            client_x: get_f64(event, "clientX")?,
            client_y: get_f64(event, "clientY")?,
        }),
        "down" | "mousedown" => Ok(PointerEvent::ButtonDown {
            button: get_u16(event, "button")?,
        }),
        "up" | "mouseup" => Ok(PointerEvent::ButtonUp {
            button: get_u16(event, "button")?,
        }),
        "click" => Ok(PointerEvent::Click {
            button: get_u16(event, "button")?,
            client_x: get_f64(event, "clientX")?,
            client_y: get_f64(event, "clientY")?,
        }),
        "dblclick" => Ok(PointerEvent::DoubleClick {
            button: get_u16(event, "button")?,
        }),
        "contextmenu" => Ok(PointerEvent::ContextMenu {
            client_x: get_f64(event, "clientX")?,
            client_y: get_f64(event, "clientY")?,
        }),
        "wheel" => Ok(PointerEvent::Wheel {
            delta_y: get_f64(event, "deltaY")?,
        }),
        "enter" | "mouseenter" => Ok(PointerEvent::Enter),
        "leave" | "mouseleave" => Ok(PointerEvent::Leave),
        other => Err(JsValue::from_str(&format!("unknown event kind: {other}"))),
    }
}

fn get_string(obj: &JsValue, key: &str) -> Result<String, JsValue> {
    let v = Reflect::get(obj, &JsValue::from_str(key))?;
    if v.is_null() || v.is_undefined() {
        return Err(JsValue::from_str(&format!(
            "missing required string field: {key}"
        )));
    }
    v.as_string()
        .ok_or_else(|| JsValue::from_str(&format!("field {key} must be a string")))
}

fn get_f64(obj: &JsValue, key: &str) -> Result<f64, JsValue> {
    let v = Reflect::get(obj, &JsValue::from_str(key))?;
    let Some(n) = v.as_f64() else {
        return Err(JsValue::from_str(&format!("field {key} must be a number")));
    };
    if !n.is_finite() {
        return Err(JsValue::from_str(&format!("field {key} must be finite")));
    }
    Ok(n)
}

fn get_u16(obj: &JsValue, key: &str) -> Result<u16, JsValue> {
    let n = get_f64(obj, key)?;
    if n.fract() != 0.0 {
        return Err(JsValue::from_str(&format!(
            "field {key} must be an integer"
        )));
    }
    if n < 0.0 || n > f64::from(u16::MAX) {
        return Err(JsValue::from_str(&format!("field {key} out of range")));
    }
    Ok(n as u16)
}
