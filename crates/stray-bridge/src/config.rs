use std::path::{Path, PathBuf};

/// Environment variable that overrides the backend library path.
pub const LIBRARY_ENV: &str = "STRAY_NATIVE_LIB";

/// Base name of the backend library.
pub const LIBRARY_NAME: &str = "stray_native";

/// Where to find the backend library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub library_path: PathBuf,
}

impl Default for BridgeConfig {
    /// The backend next to the working directory, e.g. `./libstray_native.so`.
    fn default() -> Self {
        Self {
            library_path: Path::new(".").join(platform_library_name(LIBRARY_NAME)),
        }
    }
}

impl BridgeConfig {
    pub fn new(library_path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: library_path.into(),
        }
    }

    /// Default config, with the path taken from `STRAY_NATIVE_LIB` when set.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(LIBRARY_ENV).map(PathBuf::from))
    }

    fn from_override(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Self::new(p),
            _ => Self::default(),
        }
    }
}

/// Platform file name of a shared library, e.g. `libfoo.so` for `foo`.
pub fn platform_library_name(name: &str) -> String {
    #[cfg(target_os = "windows")]
    {
        format!("{name}.dll")
    }
    #[cfg(target_os = "macos")]
    {
        format!("lib{name}.dylib")
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        format!("lib{name}.so")
    }
}
