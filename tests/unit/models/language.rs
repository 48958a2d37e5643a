use super::*;

#[test]
fn from_path_maps_common_extensions() {
    let cases = [
        ("a.rs", Some(LanguageId::Rust)),
        ("a.py", Some(LanguageId::Python)),
        ("a.tsx", Some(LanguageId::TypeScript)),
        ("a.h", Some(LanguageId::Cpp)),
        ("a.md", Some(LanguageId::Markdown)),
        ("a.yml", Some(LanguageId::Yaml)),
        ("a.txt", Some(LanguageId::PlainText)),
        ("Makefile", None),
        ("a.unknown", None),
    ];
    for (path, expected) in cases {
        assert_eq!(LanguageId::from_path(Path::new(path)), expected, "{path}");
    }
}

#[test]
fn language_id_roundtrips_through_from_id() {
    for lang in [
        LanguageId::Rust,
        LanguageId::Go,
        LanguageId::Json,
        LanguageId::Shell,
        LanguageId::PlainText,
    ] {
        assert_eq!(LanguageId::from_id(lang.language_id()), Some(lang));
    }
}

#[test]
fn resolve_mode_prefers_explicit_mode() {
    let resource = Resource::untitled("/tmp/a.rs");
    assert_eq!(resolve_mode(Some("python"), &resource), "python");
    assert_eq!(resolve_mode(None, &resource), "rust");
    assert_eq!(resolve_mode(Some(""), &resource), "rust");
}

#[test]
fn resolve_mode_falls_back_to_plaintext() {
    let resource = Resource::untitled("Untitled-1");
    assert_eq!(resolve_mode(None, &resource), PLAINTEXT_MODE_ID);
}
