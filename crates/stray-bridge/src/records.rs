use std::ffi::{CStr, CString};

use stray_core::{SettingsNative, StrayNative};

use crate::error::{BridgeError, Result};

/// A settings record together with the title buffer it points at.
#[derive(Debug)]
pub struct Settings {
    raw: SettingsNative,
    // Backs `raw.title` when the backend hands our pointer back.
    title_buf: CString,
}

impl Settings {
    pub(crate) fn new(raw: SettingsNative, title: CString) -> Self {
        Self { raw, title_buf: title }
    }

    pub(crate) fn raw(&self) -> SettingsNative {
        self.raw
    }

    pub(crate) fn into_title_buf(self) -> CString {
        self.title_buf
    }

    /// The title as stored in the record.
    pub fn title(&self) -> Result<&str> {
        read_title(&self.raw)?.to_str().map_err(BridgeError::InvalidUtf8)
    }

    /// The raw title bytes including the terminating NUL.
    pub fn title_bytes_with_nul(&self) -> Result<&[u8]> {
        Ok(read_title(&self.raw)?.to_bytes_with_nul())
    }
}

/// An application record, ready to run.
#[derive(Debug)]
pub struct Application {
    raw: StrayNative,
    _title: CString,
}

impl Application {
    pub(crate) fn new(raw: StrayNative, settings: Settings) -> Self {
        Self {
            raw,
            _title: settings.into_title_buf(),
        }
    }

    pub(crate) fn raw(&self) -> StrayNative {
        self.raw
    }

    /// The title carried by the embedded settings.
    pub fn title(&self) -> Result<&str> {
        read_title(&self.raw.settings)?
            .to_str()
            .map_err(BridgeError::InvalidUtf8)
    }
}

fn read_title<'a>(raw: &SettingsNative) -> Result<&'a CStr> {
    // SAFETY: the pointer is either ours (kept alive by the owning wrapper)
    // or one the backend vouches for as NUL-terminated and live.
    unsafe { raw.title() }.ok_or(BridgeError::NullTitle)
}
