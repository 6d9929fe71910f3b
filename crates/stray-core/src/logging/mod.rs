//! Logger setup shared by the backend and the host.
//!
//! The backend is loaded as a separate shared object and carries its own copy
//! of the `log` globals, so each side calls [`init_logging`] for itself.

mod init;

pub use init::{LoggingConfig, init_logging};
