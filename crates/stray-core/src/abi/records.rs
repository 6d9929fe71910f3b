use std::ffi::{CStr, c_char};
use std::mem::{align_of, offset_of, size_of};
use std::ptr;

use super::layout::{FieldLayout, RecordLayout};

/// Window settings handed from the host to the backend.
///
/// `title` points at NUL-terminated bytes owned by the caller. The record
/// never owns or frees them.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SettingsNative {
    pub title: *const c_char,
}

impl SettingsNative {
    pub fn new(title: *const c_char) -> Self {
        Self { title }
    }

    /// Borrows the title bytes, or `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// A non-null `title` must point at a NUL-terminated buffer that stays
    /// alive and unmodified for `'a`.
    pub unsafe fn title<'a>(&self) -> Option<&'a CStr> {
        if self.title.is_null() {
            None
        } else {
            // SAFETY: non-null, validity delegated to the caller.
            Some(unsafe { CStr::from_ptr(self.title) })
        }
    }

    pub fn layout() -> RecordLayout {
        RecordLayout {
            name: "SettingsNative",
            size: size_of::<Self>(),
            align: align_of::<Self>(),
            fields: vec![FieldLayout {
                name: "title",
                offset: offset_of!(Self, title),
                size: size_of::<*const c_char>(),
            }],
        }
    }
}

impl Default for SettingsNative {
    fn default() -> Self {
        Self { title: ptr::null() }
    }
}

/// The application record. Embeds its settings by value.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct StrayNative {
    pub settings: SettingsNative,
}

impl StrayNative {
    pub fn new(settings: SettingsNative) -> Self {
        Self { settings }
    }

    pub fn layout() -> RecordLayout {
        RecordLayout {
            name: "StrayNative",
            size: size_of::<Self>(),
            align: align_of::<Self>(),
            fields: vec![FieldLayout {
                name: "settings",
                offset: offset_of!(Self, settings),
                size: size_of::<SettingsNative>(),
            }],
        }
    }
}

/// An entity described by a NUL-terminated list of component ids.
///
/// Declared for layout purposes only; no export takes it.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct EntityNative {
    pub components_ids: *const c_char,
}

impl EntityNative {
    pub fn layout() -> RecordLayout {
        RecordLayout {
            name: "EntityNative",
            size: size_of::<Self>(),
            align: align_of::<Self>(),
            fields: vec![FieldLayout {
                name: "components_ids",
                offset: offset_of!(Self, components_ids),
                size: size_of::<*const c_char>(),
            }],
        }
    }
}

impl Default for EntityNative {
    fn default() -> Self {
        Self { components_ids: ptr::null() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    const PTR: usize = size_of::<*const c_char>();

    #[test]
    fn settings_is_a_single_pointer() {
        let l = SettingsNative::layout();
        assert_eq!(l.size, PTR);
        assert_eq!(l.align, align_of::<*const c_char>());
        assert_eq!(l.fields.len(), 1);
        assert_eq!(l.fields[0].name, "title");
        assert_eq!(l.fields[0].offset, 0);
    }

    #[test]
    fn stray_embeds_settings_by_value() {
        let l = StrayNative::layout();
        assert_eq!(l.size, SettingsNative::layout().size);
        assert_eq!(l.fields[0].offset, 0);
        assert_eq!(l.fields[0].size, PTR);
    }

    #[test]
    fn entity_is_a_single_pointer() {
        let l = EntityNative::layout();
        assert_eq!(l.size, PTR);
        assert_eq!(l.fields[0].name, "components_ids");
    }

    #[test]
    fn layouts_are_stable_across_queries() {
        for _ in 0..8 {
            assert_eq!(SettingsNative::layout(), SettingsNative::layout());
            assert_eq!(StrayNative::layout(), StrayNative::layout());
            assert_eq!(EntityNative::layout(), EntityNative::layout());
        }
    }

    #[test]
    fn null_title_reads_as_none() {
        let s = SettingsNative::default();
        assert!(unsafe { s.title() }.is_none());
    }

    #[test]
    fn title_reads_back_bytes() {
        let owned = CString::new("Hello").unwrap();
        let s = SettingsNative::new(owned.as_ptr());
        let t = unsafe { s.title() }.unwrap();
        assert_eq!(t.to_bytes_with_nul(), b"Hello\0");
    }
}
