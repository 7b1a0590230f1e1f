use scrawl::config::{Prefs, load_prefs, save_prefs};
use scrawl::font::FontSpec;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let prefs = load_prefs(&path).unwrap();
    assert_eq!(prefs, Prefs::default());
    assert_eq!(prefs.font(), FontSpec::default());
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    let mut prefs = Prefs::default();
    prefs.set_font(&FontSpec::new("DejaVu Sans Mono", 14));
    prefs.window_width = 120;
    prefs.window_height = 40;
    save_prefs(&path, &prefs).unwrap();

    let loaded = load_prefs(&path).unwrap();
    assert_eq!(loaded, prefs);
    assert_eq!(loaded.font(), FontSpec::new("DejaVu Sans Mono", 14));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, r#"{"font_size": 18}"#).unwrap();

    let prefs = load_prefs(&path).unwrap();
    assert_eq!(prefs.font_size, 18);
    assert_eq!(prefs.font_family, "Monospaced");
    assert_eq!(prefs.window_width, Prefs::default().window_width);
}

#[test]
fn test_malformed_file_is_an_error_not_a_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(load_prefs(&path).is_err());
}

#[test]
fn test_saved_file_is_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    save_prefs(&path, &Prefs::default()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["font_family"], "Monospaced");
    assert!(raw.ends_with('\n'));
}
