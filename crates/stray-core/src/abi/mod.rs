//! C-ABI contract between the host and the native backend.
//!
//! Records are `#[repr(C)]` value types passed by value. Any mismatch between
//! these declarations and a foreign library's actual layout is undefined
//! behavior at the boundary; nothing here can detect it.

mod layout;
mod records;
mod symbols;

pub use layout::{FieldLayout, RecordLayout};
pub use records::{EntityNative, SettingsNative, StrayNative};
pub use symbols::{
    CREATE_SETTINGS_SYMBOL, CREATE_STRAY_SYMBOL, CreateSettingsFn, CreateStrayFn,
    RUN_STRAY_SYMBOL, RunStrayFn, symbol_name,
};
