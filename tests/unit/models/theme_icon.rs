use super::*;

#[test]
fn test_escape_theme_icons() {
    assert_eq!(escape_theme_icons("$(zap) fast"), "\\$(zap) fast");
    assert_eq!(escape_theme_icons("$(sync~spin)"), "\\$(sync~spin)");
    assert_eq!(escape_theme_icons("no icons"), "no icons");
}

#[test]
fn test_escape_keeps_escaped_icons() {
    assert_eq!(escape_theme_icons("\\$(zap)"), "\\$(zap)");
}

#[test]
fn test_markdown_unescape_theme_icons() {
    assert_eq!(markdown_unescape_theme_icons("$\\(zap\\) x"), "$(zap) x");
    assert_eq!(
        markdown_unescape_theme_icons("$\\(chevron\\-down\\)"),
        "$(chevron-down)"
    );
    assert_eq!(markdown_unescape_theme_icons("$\\(sync~spin\\)"), "$(sync~spin)");
}

#[test]
fn test_markdown_unescape_keeps_backslash_prefixed() {
    assert_eq!(markdown_unescape_theme_icons("\\$\\(zap\\)"), "\\$\\(zap\\)");
}
