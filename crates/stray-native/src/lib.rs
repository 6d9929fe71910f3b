//! Stray backend.
//!
//! Built as a shared library and loaded by hosts through `stray-bridge`.
//! The exported entry points live in [`exports`]; everything else is the
//! window runtime they drive.

pub mod config;
pub mod device;
pub mod exports;
pub mod window;

pub use config::RuntimeConfig;
pub use exports::{create_settings, create_stray, run_stray};
