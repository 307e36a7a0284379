//! Dioxus components for the stock price chart.
//!
//! This crate provides:
//! - `dom_bridge`: web-sys helpers that write chart markup into the mount node
//! - `state`: reactive app and chart state built on Dioxus Signals
//! - `components`: the chart component, its controls and shared RSX pieces

pub mod components;
pub mod dom_bridge;
pub mod state;
