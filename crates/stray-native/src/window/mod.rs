//! Window + run loop.
//!
//! Owns the `winit` EventLoop and the single application window.

mod runtime;

pub use runtime::{AppControl, Runtime, control_for};
