//! Call sequence against the backend linked into the test binary.

use stray_bridge::{BridgeError, NativeBridge, NativeSymbols};

fn linked_bridge() -> NativeBridge {
    NativeBridge::from_symbols(NativeSymbols {
        create_settings: stray_native::create_settings,
        create_stray: stray_native::create_stray,
        run_stray: stray_native::run_stray,
    })
}

#[test]
fn title_round_trips_through_settings() {
    let bridge = linked_bridge();
    for title in ["appka", "Stray App", "", "zażółć gęślą jaźń", "tab\tand\nnewline", "🦀"] {
        let settings = bridge.create_settings(title).unwrap();
        assert_eq!(settings.title().unwrap(), title);
    }
}

#[test]
fn title_is_nul_terminated() {
    let bridge = linked_bridge();
    let settings = bridge.create_settings("Hello").unwrap();
    assert_eq!(settings.title_bytes_with_nul().unwrap(), b"Hello\0");
}

#[test]
fn interior_nul_is_rejected() {
    let bridge = linked_bridge();
    match bridge.create_settings("bad\0title") {
        Err(BridgeError::InvalidTitle(pos)) => assert_eq!(pos, 3),
        other => panic!("expected InvalidTitle, got {other:?}"),
    }
}

#[test]
fn application_carries_settings_title() {
    let bridge = linked_bridge();
    let settings = bridge.create_settings("appka").unwrap();
    let app = bridge.create_stray(settings);
    assert_eq!(app.title().unwrap(), "appka");
}

#[test]
fn linked_bridge_has_no_library_path() {
    assert!(linked_bridge().library_path().is_none());
}
