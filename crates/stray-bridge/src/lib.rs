//! Host-side bridge to the Stray backend.
//!
//! Loads the backend shared library, resolves its three C-ABI entry points
//! and runs them in order:
//!
//! ```rust,ignore
//! // Blocks until the window is closed.
//! stray_bridge::construct("appka")?;
//! ```
//!
//! The step-wise form is available on [`NativeBridge`]:
//!
//! ```rust,ignore
//! let bridge = NativeBridge::load(&BridgeConfig::from_env())?;
//! let settings = bridge.create_settings("appka")?;
//! let app = bridge.create_stray(settings);
//! bridge.run(app);
//! ```
//!
//! Raw records never leave this crate: [`Settings`] and [`Application`] own
//! the title buffer their record points at.

mod bridge;
mod config;
mod error;
mod library;
mod records;

pub use bridge::{NativeBridge, NativeSymbols, construct, construct_with, teardown};
pub use config::{BridgeConfig, LIBRARY_ENV, LIBRARY_NAME, platform_library_name};
pub use error::{BridgeError, Result};
pub use library::NativeLibrary;
pub use records::{Application, Settings};
