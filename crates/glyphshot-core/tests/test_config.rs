use std::io::Write;
use std::path::Path;

use glyphshot_core::config::AppConfig;
use glyphshot_core::error::GlyphError;
use glyphshot_core::overlay::OverlayMode;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.capture.region_picker.program, "slurp");
    assert_eq!(config.capture.screenshot.program, "grim");
    assert_eq!(config.ocr.command.program, "tesseract");
    assert_eq!(config.clipboard.command.program, "wl-copy");
    assert!(config.capture.copy_image);
    assert!(config.notify.enabled);
    assert_eq!(config.overlay.mode, OverlayMode::Spotlight);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = AppConfig::from_toml(
        r#"
        [ocr]
        language = "eng+deu"
        psm = 11

        [overlay]
        mode = "highlight"

        [capture]
        save_dir = "/tmp/shots"
        open_viewer = false
        "#,
    )
    .unwrap();

    assert_eq!(config.ocr.language.as_deref(), Some("eng+deu"));
    assert_eq!(config.ocr.psm, Some(11));
    assert_eq!(config.ocr.command.program, "tesseract");
    assert_eq!(config.overlay.mode, OverlayMode::Highlight);
    assert!((config.overlay.dim_alpha - 0.42).abs() < 1e-6);
    assert_eq!(config.capture.save_dir(), Path::new("/tmp/shots"));
    assert!(!config.capture.open_viewer);
    assert!(config.capture.copy_image);
}

#[test]
fn test_tool_command_with_args() {
    let config = AppConfig::from_toml(
        r##"
        [capture.region_picker]
        program = "slurp"
        args = ["-d", "-b", "#00000080"]
        "##,
    )
    .unwrap();
    assert_eq!(config.capture.region_picker.args, ["-d", "-b", "#00000080"]);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = AppConfig::from_toml("[overlay]\nmode = \"sparkles\"").unwrap_err();
    assert!(matches!(err, GlyphError::Config(_)), "got: {err}");
}

#[test]
fn test_round_trip_through_file() {
    let mut config = AppConfig::default();
    config.notify.enabled = false;
    config.ocr.language = Some("fra".into());

    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(config.to_toml().unwrap().as_bytes()).unwrap();
    f.flush().unwrap();

    let loaded = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, GlyphError::Io(_)), "got: {err}");
}
