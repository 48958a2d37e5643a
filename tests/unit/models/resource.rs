use super::*;

#[test]
fn test_untitled_resource() {
    let resource = Resource::untitled("Untitled-1");
    assert!(resource.is_untitled());
    assert_eq!(resource.to_string(), "untitled:Untitled-1");
}

#[test]
fn test_parse() {
    let resource = Resource::parse("untitled:/tmp/a.rs");
    assert_eq!(resource.scheme(), "untitled");
    assert_eq!(resource.path(), "/tmp/a.rs");

    let plain = Resource::parse("/tmp/a.rs");
    assert_eq!(plain.scheme(), FILE_SCHEME);
    assert_eq!(plain.path(), "/tmp/a.rs");
}

#[test]
fn test_parse_windows_drive_is_a_path() {
    let resource = Resource::parse("C:\\work\\a.txt");
    assert_eq!(resource.scheme(), FILE_SCHEME);
    assert_eq!(resource.path(), "C:\\work\\a.txt");
}

#[test]
fn test_untitled_with_path() {
    let resource = Resource::untitled_with_path(Path::new("/tmp/notes.md"));
    assert!(resource.is_untitled());
    assert_eq!(resource.to_path_buf(), PathBuf::from("/tmp/notes.md"));
}
