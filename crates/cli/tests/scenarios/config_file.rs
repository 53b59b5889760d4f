//! Settings file management

use crate::pclick;
use anyhow::Result;

#[test]
fn test_get_defaults_without_file() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "config", "get", "mouse-button").assert_success()?;
    assert_eq!(result.stdout.trim(), "A");

    let result = pclick!(dir.path(), "config", "get", "pause-click-double-click-delay")
        .assert_success()?;
    assert_eq!(result.stdout.trim(), "300");
    Ok(())
}

#[test]
fn test_set_persists() -> Result<()> {
    let dir = tempfile::tempdir()?;

    pclick!(dir.path(), "config", "set", "mouse-button", "middle").assert_success()?;
    pclick!(dir.path(), "config", "set", "double-click-delay", "750").assert_success()?;

    let contents = std::fs::read_to_string(dir.path().join("config.toml"))?;
    assert!(contents.contains("[pause-click]"));
    assert!(contents.contains("mouse-button = \"B\""));

    let result = pclick!(dir.path(), "config", "get", "double-click-delay").assert_success()?;
    assert_eq!(result.stdout.trim(), "750");
    Ok(())
}

#[test]
fn test_set_rejects_out_of_range() -> Result<()> {
    let dir = tempfile::tempdir()?;

    pclick!(dir.path(), "config", "set", "double-click-delay", "10").assert_failure()?;
    pclick!(dir.path(), "config", "set", "unknown-key", "1").assert_failure()?;
    assert!(!dir.path().join("config.toml").exists());
    Ok(())
}

#[test]
fn test_settings_file_drives_run() -> Result<()> {
    let dir = tempfile::tempdir()?;

    pclick!(dir.path(), "config", "set", "double-click", "false").assert_success()?;

    let result = pclick!(dir.path(), "run").stdin("click left\n").assert_success()?;
    assert_eq!(result.toggle_count(), Some(1));
    Ok(())
}

#[test]
fn test_path_create() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "config", "path").assert_success()?;
    assert!(result.contains_stdout("does not exist"));

    pclick!(dir.path(), "config", "path", "--create").assert_success()?;
    assert!(dir.path().join("config.toml").exists());
    Ok(())
}

#[test]
fn test_list_and_example() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "config", "list").assert_success()?;
    assert!(result.contains_stdout("mouse-button"));
    assert!(result.contains_stdout("20-5000"));

    let result = pclick!(dir.path(), "config", "example").assert_success()?;
    assert!(result.contains_stdout("double-click-delay = 300"));
    Ok(())
}

#[test]
fn test_corrupt_file_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("config.toml"), "[pause-click]\ndouble-click = 3\n")?;

    pclick!(dir.path(), "run").stdin("click left\n").assert_failure()?;
    Ok(())
}
