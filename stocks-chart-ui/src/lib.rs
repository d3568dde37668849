//! Shared Dioxus components, fetch client and D3.js bridge for the stock dashboard.
//!
//! This crate provides:
//! - `api`: the browser `fetch` call for `/admin/api/stocks`
//! - `js_bridge`: Rust wrappers for the D3.js bar chart via `js_sys::eval()`
//! - `state`: `AppState`, the dashboard state held in a Dioxus Signal
//! - `components`: RSX components (side panel, selectors, chart, etc.)

pub mod api;
pub mod js_bridge;
pub mod state;
pub mod components;
