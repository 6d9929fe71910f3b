use winit::dpi::PhysicalSize;

use stray_core::{DEFAULT_TITLE, StrayNative};

/// Window/runtime configuration derived from an application record.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial inner size in physical pixels.
    pub initial_size: PhysicalSize<u32>,
    pub resizable: bool,
    pub always_on_top: bool,
    /// Color the window is cleared to every frame.
    pub clear_color: wgpu::Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            initial_size: PhysicalSize::new(600, 600),
            resizable: true,
            always_on_top: false,
            clear_color: wgpu::Color { r: 0.08, g: 0.08, b: 0.1, a: 1.0 },
        }
    }
}

impl RuntimeConfig {
    /// Builds a config from the record handed across the C boundary.
    ///
    /// A null title keeps the default; invalid UTF-8 is replaced lossily.
    ///
    /// # Safety
    ///
    /// A non-null `app.settings.title` must point at a NUL-terminated buffer
    /// that stays valid for the duration of this call.
    pub unsafe fn from_native(app: &StrayNative) -> Self {
        let mut config = Self::default();
        // SAFETY: forwarded to the caller.
        if let Some(title) = unsafe { app.settings.title() } {
            config.title = title.to_string_lossy().into_owned();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};
    use stray_core::SettingsNative;

    fn record(title: &CStr) -> StrayNative {
        StrayNative::new(SettingsNative::new(title.as_ptr()))
    }

    #[test]
    fn title_comes_from_record() {
        let title = CString::new("appka").unwrap();
        let config = unsafe { RuntimeConfig::from_native(&record(&title)) };
        assert_eq!(config.title, "appka");
        assert_eq!(config.initial_size, PhysicalSize::new(600, 600));
        assert!(config.resizable);
        assert!(!config.always_on_top);
    }

    #[test]
    fn null_title_falls_back_to_default() {
        let config = unsafe { RuntimeConfig::from_native(&StrayNative::default()) };
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let title = CStr::from_bytes_with_nul(b"bad \xff title\0").unwrap();
        let config = unsafe { RuntimeConfig::from_native(&record(title)) };
        assert_eq!(config.title, "bad \u{fffd} title");
    }
}
