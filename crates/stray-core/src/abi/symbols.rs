use std::ffi::c_char;

use super::records::{SettingsNative, StrayNative};

pub const CREATE_SETTINGS_SYMBOL: &[u8] = b"create_settings\0";
pub const CREATE_STRAY_SYMBOL: &[u8] = b"create_stray\0";
pub const RUN_STRAY_SYMBOL: &[u8] = b"run_stray\0";

pub type CreateSettingsFn = unsafe extern "C" fn(title: *const c_char) -> SettingsNative;
pub type CreateStrayFn = unsafe extern "C" fn(settings: SettingsNative) -> StrayNative;
pub type RunStrayFn = unsafe extern "C" fn(app: StrayNative);

/// Symbol name without the trailing NUL, for messages.
pub fn symbol_name(symbol: &[u8]) -> &str {
    let bytes = symbol.strip_suffix(b"\0").unwrap_or(symbol);
    std::str::from_utf8(bytes).unwrap_or("<non-utf8 symbol>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_nul_terminated() {
        for s in [CREATE_SETTINGS_SYMBOL, CREATE_STRAY_SYMBOL, RUN_STRAY_SYMBOL] {
            assert_eq!(s.last(), Some(&0));
            assert_eq!(s.iter().filter(|b| **b == 0).count(), 1);
        }
    }

    #[test]
    fn symbol_name_strips_nul() {
        assert_eq!(symbol_name(CREATE_STRAY_SYMBOL), "create_stray");
        assert_eq!(symbol_name(b"plain"), "plain");
    }
}
