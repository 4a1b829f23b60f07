//! Platform abstraction layer
//!
//! Browser bindings for storage, HUD and canvas. Native builds run headless
//! against `persistence::MemoryStore` and `hud::LogHud` instead.

#[cfg(target_arch = "wasm32")]
pub mod web;
