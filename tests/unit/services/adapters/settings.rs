use super::*;

#[test]
fn test_ensure_settings_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file(&path).expect("ensure settings");
    assert!(path.exists());
    assert_eq!(load_settings(&path), Some(Settings::default()));
}

#[test]
fn test_ensure_settings_file_keeps_existing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"files": {"encoding": "gbk"}}"#).expect("write");

    ensure_settings_file(&path).expect("ensure settings");
    let settings = load_settings(&path).expect("settings");
    assert_eq!(settings.files.encoding, "gbk");
}

#[test]
fn test_load_invalid_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert!(load_settings(&path).is_none());
    assert!(load_settings(&dir.path().join("missing.json")).is_none());
}
