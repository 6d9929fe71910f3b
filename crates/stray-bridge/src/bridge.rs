use std::ffi::CString;
use std::sync::OnceLock;

use stray_core::abi::{
    CREATE_SETTINGS_SYMBOL, CREATE_STRAY_SYMBOL, CreateSettingsFn, CreateStrayFn,
    RUN_STRAY_SYMBOL, RunStrayFn,
};

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::library::NativeLibrary;
use crate::records::{Application, Settings};

/// The three backend entry points.
#[derive(Debug, Copy, Clone)]
pub struct NativeSymbols {
    pub create_settings: CreateSettingsFn,
    pub create_stray: CreateStrayFn,
    pub run_stray: RunStrayFn,
}

impl NativeSymbols {
    /// Resolves all three entry points, failing on the first missing one.
    ///
    /// # Safety
    ///
    /// The library must export these symbols with the signatures declared in
    /// `stray_core::abi`, and the pointers must not outlive `library`.
    pub unsafe fn resolve(library: &NativeLibrary) -> Result<Self> {
        // SAFETY: forwarded to the caller.
        unsafe {
            Ok(Self {
                create_settings: library.symbol(CREATE_SETTINGS_SYMBOL)?,
                create_stray: library.symbol(CREATE_STRAY_SYMBOL)?,
                run_stray: library.symbol(RUN_STRAY_SYMBOL)?,
            })
        }
    }
}

static BRIDGE: OnceLock<NativeBridge> = OnceLock::new();

/// Typed entry point to the backend.
///
/// Field order matters: `symbols` point into `library` and are dropped first.
#[derive(Debug)]
pub struct NativeBridge {
    symbols: NativeSymbols,
    library: Option<NativeLibrary>,
}

impl NativeBridge {
    /// Returns the process-wide bridge, loading the library on first use.
    ///
    /// The first successful load wins; later calls return it regardless of
    /// `config`. A failed load caches nothing. The library is never unloaded.
    pub fn load(config: &BridgeConfig) -> Result<&'static NativeBridge> {
        if let Some(bridge) = BRIDGE.get() {
            if bridge.library_path() != Some(config.library_path.as_path()) {
                log::debug!(
                    "native library already loaded; ignoring '{}'",
                    config.library_path.display()
                );
            }
            return Ok(bridge);
        }

        let bridge = Self::open(config)?;
        Ok(BRIDGE.get_or_init(|| bridge))
    }

    /// Loads a private copy of the bridge, unloaded again when dropped.
    pub fn open(config: &BridgeConfig) -> Result<Self> {
        let library = NativeLibrary::load(&config.library_path)?;
        // SAFETY: the backend exports the declared signatures; the pointers
        // live in the same struct as the library and are dropped before it.
        let symbols = unsafe { NativeSymbols::resolve(&library)? };
        log::info!("native library loaded from '{}'", library.path().display());

        Ok(Self {
            symbols,
            library: Some(library),
        })
    }

    /// Wraps entry points that are already linked into the process.
    pub fn from_symbols(symbols: NativeSymbols) -> Self {
        Self {
            symbols,
            library: None,
        }
    }

    /// Path of the loaded library, or `None` for linked-in symbols.
    pub fn library_path(&self) -> Option<&std::path::Path> {
        self.library.as_ref().map(NativeLibrary::path)
    }

    /// Builds a settings record for `title`.
    pub fn create_settings(&self, title: &str) -> Result<Settings> {
        let title = CString::new(title).map_err(|e| BridgeError::InvalidTitle(e.nul_position()))?;

        // SAFETY: `title` is NUL-terminated and moves into the returned
        // wrapper, so the pointer stays valid as long as the record does.
        let raw = unsafe { (self.symbols.create_settings)(title.as_ptr()) };
        Ok(Settings::new(raw, title))
    }

    /// Builds an application record. The settings' title buffer moves along.
    pub fn create_stray(&self, settings: Settings) -> Application {
        // SAFETY: the record is passed by value and its title stays owned by
        // the wrapper.
        let raw = unsafe { (self.symbols.create_stray)(settings.raw()) };
        Application::new(raw, settings)
    }

    /// Runs the application. Blocks for the lifetime of the native loop.
    ///
    /// The backend cannot report failure through its void signature; if the
    /// loop cannot start or panics, it ends the process with status 1.
    pub fn run(&self, app: Application) {
        log::debug!("entering native run loop");
        // SAFETY: `app` keeps the title alive until after the call returns.
        unsafe { (self.symbols.run_stray)(app.raw()) };
        log::debug!("native run loop returned");
        drop(app);
    }
}

/// Loads the backend from [`BridgeConfig::from_env`] and runs `title`.
pub fn construct(title: &str) -> Result<()> {
    construct_with(&BridgeConfig::from_env(), title)
}

/// Loads the backend from `config`, builds the settings and application
/// records for `title`, and blocks in the native run loop.
pub fn construct_with(config: &BridgeConfig, title: &str) -> Result<()> {
    let bridge = NativeBridge::load(config)?;
    let settings = bridge.create_settings(title)?;
    let app = bridge.create_stray(settings);
    bridge.run(app);
    Ok(())
}

/// Teardown hook. Does nothing: the process-wide library stays loaded until
/// the process exits.
pub fn teardown() {
    if BRIDGE.get().is_some() {
        log::debug!("teardown: native library stays loaded until exit");
    }
}
