//! Shared pieces of the Stray native boundary.
//!
//! Both the native backend (`stray-native`) and the host bridge
//! (`stray-bridge`) depend on this crate so that the two sides of the
//! C ABI are declared exactly once.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`abi`] | `SettingsNative`, `StrayNative`, `EntityNative`, symbol names, layout descriptors |
//! | [`logging`] | `init_logging`, `LoggingConfig` |

pub mod abi;
pub mod logging;

pub use abi::{EntityNative, SettingsNative, StrayNative};

/// Title used when a settings record carries no title.
pub const DEFAULT_TITLE: &str = "Stray App";
