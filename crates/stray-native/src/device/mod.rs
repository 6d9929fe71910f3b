//! GPU surface for the application window.
//!
//! The backend only presents a cleared frame; there is no scene rendering.

mod canvas;

pub use canvas::{Canvas, FrameStatus};
