use super::*;

#[test]
fn log_dir_is_under_app_name() {
    let Some(dir) = get_log_dir() else {
        return;
    };
    let text = dir.to_string_lossy();
    assert!(text.contains(APP_NAME));
    assert!(text.ends_with(LOG_DIR));
}

#[test]
fn ensure_log_dir_creates_directory() {
    let dir = ensure_log_dir().expect("log dir");
    assert!(dir.is_dir());
}
