//! Tests for loading configuration files.

use std::io::Write;

use ratatui::style::Color;
use retrace::RetraceConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[log]\nfile = \"game.log\"\nfilter = \"debug\"\n\n[theme]\no_color = \"magenta\""
    )
    .unwrap();

    let config = RetraceConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.log().file().to_str(), Some("game.log"));
    assert_eq!(config.log().filter(), "debug");

    let theme = config.theme().resolve().unwrap();
    assert_eq!(theme.o, Color::Magenta);
    assert_eq!(theme.x, Color::Blue);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = RetraceConfig::load(Some(&missing)).unwrap_err();
    assert!(err.message.contains("Failed to read"), "{err}");
}

#[test]
fn test_malformed_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[theme\nx_color = ").unwrap();
    let err = RetraceConfig::load(Some(file.path())).unwrap_err();
    assert!(err.message.contains("Failed to parse"), "{err}");
}
