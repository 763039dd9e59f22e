//! Color highlight and fade effects for an interactive graph viewer.
//!
//! The host application owns the graph layout, scene setup, and camera; it
//! calls [`effects::HighlightFx`] with small batches of graph elements to
//! emphasize or de-emphasize them, either immediately or as a timed color
//! fade. The pure logic in [`core`] is target-independent and tested on the
//! host; the timer-driven glue in [`effects`] and [`timers`] is wasm-only.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod effects;
#[cfg(target_arch = "wasm32")]
pub mod timers;

pub use crate::core::*;

/// Console logger + panic hook setup. The host calls this once at startup.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}
