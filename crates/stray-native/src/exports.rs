//! C-ABI entry points.
//!
//! Signatures must match the aliases in `stray_core::abi`. Every export runs
//! under [`guard`]; a panic or a failed run loop is logged and ends the
//! process with status 1, since nothing may unwind into the host and the
//! void-returning ABI has no way to report it.

use std::ffi::c_char;
use std::panic::{self, AssertUnwindSafe};

use stray_core::logging::{LoggingConfig, init_logging};
use stray_core::{SettingsNative, StrayNative};

use crate::config::RuntimeConfig;
use crate::window::Runtime;

/// Exit status used when an export cannot complete.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Builds a settings record. The title bytes stay owned by the caller.
#[unsafe(no_mangle)]
pub extern "C" fn create_settings(title: *const c_char) -> SettingsNative {
    guard("create_settings", || {
        init_logging(LoggingConfig::default());
        log::debug!("create_settings(title = {title:p})");
        SettingsNative::new(title)
    })
    .unwrap_or_else(|msg| fatal("create_settings", &msg))
}

/// Wraps a settings record into an application record.
#[unsafe(no_mangle)]
pub extern "C" fn create_stray(settings: SettingsNative) -> StrayNative {
    guard("create_stray", || {
        init_logging(LoggingConfig::default());
        log::debug!("create_stray(title = {:p})", settings.title);
        StrayNative::new(settings)
    })
    .unwrap_or_else(|msg| fatal("create_stray", &msg))
}

/// Opens the application window and blocks until it closes.
///
/// Failure is fatal to the process: if the event loop, window, or GPU cannot
/// be set up, or the loop panics, the error is logged and the process exits
/// with [`FAILURE_EXIT_CODE`]. This includes calling it off the main thread
/// and calling it a second time, since winit allows one event loop per
/// process.
///
/// # Safety
///
/// A non-null `app.settings.title` must point at a NUL-terminated buffer that
/// stays valid until this function returns.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn run_stray(app: StrayNative) {
    init_logging(LoggingConfig::default());

    // SAFETY: title validity is the caller's contract.
    let config = unsafe { RuntimeConfig::from_native(&app) };
    log::info!("starting \"{}\"", config.title);

    match run_outcome(guard("run_stray", || Runtime::run(config))) {
        Ok(()) => log::info!("run loop finished"),
        Err(msg) => fatal("run_stray", &msg),
    }
}

/// Runs `f`, turning a panic into its message.
fn guard<T>(export: &str, f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        format!("{export} panicked: {msg}")
    })
}

/// Flattens a guarded run loop into a single error message.
fn run_outcome(outcome: Result<anyhow::Result<()>, String>) -> Result<(), String> {
    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(format!("run loop failed: {e:#}")),
        Err(msg) => Err(msg),
    }
}

fn fatal(export: &str, msg: &str) -> ! {
    log::error!("{export}: {msg}");
    eprintln!("stray: {msg}");
    std::process::exit(FAILURE_EXIT_CODE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};
    use stray_core::abi::{CreateSettingsFn, CreateStrayFn, RunStrayFn};

    #[test]
    fn exports_match_declared_signatures() {
        let _: CreateSettingsFn = create_settings;
        let _: CreateStrayFn = create_stray;
        let _: RunStrayFn = run_stray;
    }

    #[test]
    fn settings_keep_callers_pointer() {
        let title = CString::new("Hello").unwrap();
        let settings = create_settings(title.as_ptr());
        assert_eq!(settings.title, title.as_ptr());
    }

    #[test]
    fn guard_passes_values_through() {
        assert_eq!(guard("test", || 7), Ok(7));
    }

    #[test]
    fn guard_captures_panic_message() {
        let err = guard("create_stray", || -> u8 { panic!("boom") }).unwrap_err();
        assert_eq!(err, "create_stray panicked: boom");

        let owned = guard("run_stray", || -> u8 { panic!("{} failed", "surface") }).unwrap_err();
        assert_eq!(owned, "run_stray panicked: surface failed");
    }

    #[test]
    fn failed_run_loop_is_an_error() {
        assert_eq!(run_outcome(Ok(Ok(()))), Ok(()));

        let err = run_outcome(Ok(Err(anyhow::anyhow!("no adapter").context("failed to open window"))))
            .unwrap_err();
        assert_eq!(err, "run loop failed: failed to open window: no adapter");
    }

    #[test]
    fn panicking_run_loop_is_an_error() {
        let outcome = guard("run_stray", || -> anyhow::Result<()> {
            panic!("Initializing the event loop outside of the main thread")
        });
        let err = run_outcome(outcome).unwrap_err();
        assert!(err.starts_with("run_stray panicked: Initializing the event loop"), "{err}");
    }

    #[test]
    fn stray_embeds_settings() {
        let title = CString::new("embedded").unwrap();
        let app = create_stray(create_settings(title.as_ptr()));
        let read: &CStr = unsafe { app.settings.title() }.unwrap();
        assert_eq!(read.to_str().unwrap(), "embedded");
    }
}
