//! Media playback: the lazy visibility controller, transport state for the
//! feed players, and the browser bindings both run on.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

pub mod controller;
pub mod geometry;
mod hook;
pub mod sink;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use hook::{use_lazy_video, LazyVideo};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{defer_signal_update, spawn_settlement, spawn_ticker, Viewport, WebVideo};
pub use sink::{MediaSink, PlaybackState};
pub use transport::{format_clock, Transport, PLAYBACK_SPEEDS};
#[cfg(target_arch = "wasm32")]
pub use web::{defer_signal_update, spawn_settlement, spawn_ticker, Viewport, WebVideo};
