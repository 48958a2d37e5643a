use super::*;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.files.encoding, DEFAULT_FILES_ENCODING);
    assert!(settings.language_overrides.is_empty());
}

#[test]
fn test_missing_fields_use_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("parse empty settings");
    assert_eq!(settings, Settings::default());

    let settings: Settings =
        serde_json::from_str(r#"{"files": {}}"#).expect("parse empty files section");
    assert_eq!(settings.files.encoding, DEFAULT_FILES_ENCODING);
}

#[test]
fn test_language_overrides() {
    let json = r#"{
        "files": { "encoding": "latin1" },
        "languageOverrides": { "markdown": { "encoding": "utf8bom" } }
    }"#;
    let settings: Settings = serde_json::from_str(json).expect("parse settings");

    assert_eq!(settings.files.encoding, "latin1");
    assert_eq!(
        settings.language_overrides["markdown"].encoding.as_deref(),
        Some("utf8bom")
    );
}

#[test]
fn test_serialize_skips_empty_overrides() {
    let json = serde_json::to_value(Settings::default()).expect("serialize");
    assert!(json.get("languageOverrides").is_none());
    assert_eq!(json["files"]["encoding"], DEFAULT_FILES_ENCODING);
}
