//! Integration tests for the FCPX Hacks distribution tools
//!
//! These tests verify that the packaging settings, Unicode lookup and
//! font name extraction work together without external tooling.

use fcpx_hacks_tools::dmg::{Define, DmgSettings};
use fcpx_hacks_tools::font;
use fcpx_hacks_tools::unicode::{script_extensions, MAX_CODE_POINT};

// Test the shipped settings file matches the built-in defaults
#[test]
fn test_shipped_settings_file_loads() {
    let settings = DmgSettings::load("dmg/settings.toml").expect("Failed to load dmg/settings.toml");
    let defaults = DmgSettings::default();

    assert_eq!(settings.filename, defaults.filename);
    assert_eq!(settings.volume_name, defaults.volume_name);
    assert_eq!(settings.format, defaults.format);
    assert_eq!(settings.files, defaults.files);
    assert_eq!(settings.symlinks, defaults.symlinks);
    assert_eq!(settings.icon_locations, defaults.icon_locations);
    assert_eq!(settings.window_rect, defaults.window_rect);
    assert_eq!(settings.default_view, defaults.default_view);
}

// Test settings serialization round-trip through a file
#[test]
fn test_settings_file_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut settings = DmgSettings::default();
    settings.badge_icon = Some("src/hs/fcpx-hacks/assets/fcpxhacks.icns".to_string());
    settings.save(&path).expect("Failed to save");

    let loaded = DmgSettings::load(&path).expect("Failed to load");
    assert_eq!(loaded.badge_icon, settings.badge_icon);
    assert_eq!(loaded.files, settings.files);
    assert_eq!(loaded.grid_spacing, settings.grid_spacing);
}

// Test the full define-override flow the builder wrapper uses
#[test]
fn test_define_override_flow() {
    let mut settings = DmgSettings::load("dmg/settings.toml").unwrap();
    let defines = [
        Define::parse("filename=build/nightly.dmg").unwrap(),
        Define::parse("volume_name=FCPX Hacks Nightly").unwrap(),
        Define::parse("format=UDZO").unwrap(),
    ];
    settings.apply_defines(&defines).unwrap();
    settings.validate().unwrap();

    assert_eq!(settings.filename, "build/nightly.dmg");
    assert_eq!(settings.volume_name, "FCPX Hacks Nightly");
    assert_eq!(settings.format, "UDZO");

    // The resolved settings must render for the external builder
    let json = settings.to_json().unwrap();
    assert!(json.contains("build/nightly.dmg"));
}

// Test the Script_Extensions examples pinned by the upstream data
#[test]
fn test_script_extensions_known_values() {
    assert_eq!(script_extensions(0x0341), None);
    assert_eq!(script_extensions(0x0342), Some(&["Grek"][..]));
    assert_eq!(script_extensions(0x0640).map(|set| set.len()), Some(6));
    assert_eq!(script_extensions(MAX_CODE_POINT), None);
}

// Test font name extraction against a system font when one is present.
// CI images without fonts just skip the body.
#[test]
fn test_family_name_from_system_font() {
    let candidates = [
        "/Library/Fonts/Arial Unicode.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ];

    let Some(path) = candidates.iter().find(|p| std::path::Path::new(p).exists()) else {
        eprintln!("No system font found, skipping");
        return;
    };

    let names = font::read_names(path).expect("Failed to read font names");
    assert!(!names.family.is_empty(), "family name missing in {path}");
    assert!(!names.full_name.is_empty(), "full name missing in {path}");
}

// Test that an unreadable path surfaces an error, not a panic
#[test]
fn test_font_errors_propagate() {
    assert!(font::family_name("/nonexistent/font.ttf").is_err());

    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.ttf");
    std::fs::write(&bogus, b"not a font").unwrap();
    assert!(font::family_name(&bogus).is_err());
}
