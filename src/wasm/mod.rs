//! WebAssembly bindings for the mc6800 emulator.
//!
//! Exposes a single-stepped 6800 over flat RAM to JavaScript. The threaded
//! [`Motorola6800`](crate::Motorola6800) is not available here, since browsers
//! drive the core from their own event loop.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6800;
