use super::*;

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    // 在测试环境中应该能获取到目录
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(LOG_DIR));
}

#[test]
fn test_get_settings_path() {
    let path = get_settings_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().ends_with(SETTINGS_FILE));
    assert!(path.starts_with(get_app_data_dir().unwrap()));
}

#[test]
fn test_app_data_dir_layout() {
    let Some(app_dir) = get_app_data_dir() else {
        return;
    };
    assert!(app_dir.ends_with(APP_NAME));
    assert_eq!(get_log_dir(), Some(app_dir.join(LOG_DIR)));
    assert_eq!(get_settings_path(), Some(app_dir.join(SETTINGS_FILE)));
}
