#![forbid(unsafe_code)]

//! WASM frontend for the mouse tester.
//!
//! Exposes [`MouseTesterWidget`], a `wasm-bindgen` component that binds the
//! nine pointer/wheel listeners on a host-supplied test surface, feeds the
//! deterministic engine in `mousetest-core`, and reports state to the page
//! through an `onChange` callback carrying a JSON snapshot.
//!
//! All DOM-facing modules are gated on `wasm32`; on native targets this
//! crate compiles to an empty library (the engine and its tests live in
//! `mousetest-core`).

#[cfg(target_arch = "wasm32")]
mod binder;
#[cfg(target_arch = "wasm32")]
mod event;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use widget::MouseTesterWidget;
