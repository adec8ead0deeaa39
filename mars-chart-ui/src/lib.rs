//! Shared Dioxus components and D3.js bridge for the Mars dashboards.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`, and `D3Sink`
//! - `fetch`: the browser request for the InSight weather feed
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (view buttons, slider, gas list, sol navigation, ...)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
