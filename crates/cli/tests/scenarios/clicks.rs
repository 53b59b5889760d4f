//! Click handling through the full binary

use crate::pclick;
use anyhow::Result;
use std::time::Duration;

#[test]
fn test_click_without_suppression_toggles_once() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "run")
        .stdin("set double-click false\nclick left\nstatus\n")
        .assert_success()?;

    assert_eq!(result.toggle_lines(), vec!["pause".to_string()]);
    assert!(result.contains_stdout("status: paused"));
    assert_eq!(result.toggle_count(), Some(1));
    assert_eq!(result.final_state().as_deref(), Some("paused"));
    Ok(())
}

#[test]
fn test_single_click_toggles_after_window() -> Result<()> {
    let dir = tempfile::tempdir()?;

    // Status right after the click still shows the old state
    let result = pclick!(dir.path(), "run")
        .stdin("click left\nstatus\n")
        .assert_success()?;

    assert!(result.contains_stdout("status: running"));
    assert_eq!(result.toggle_count(), Some(1));
    assert_eq!(result.final_state().as_deref(), Some("paused"));
    assert!(result.duration >= Duration::from_millis(300));
    Ok(())
}

#[test]
fn test_double_click_is_suppressed() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "run")
        .stdin("click left\nwait 100\ndouble\nwait 400\n")
        .assert_success()?;

    assert!(result.toggle_lines().is_empty());
    assert_eq!(result.toggle_count(), Some(0));
    assert_eq!(result.final_state().as_deref(), Some("running"));
    Ok(())
}

#[test]
fn test_clicks_outside_window_toggle_twice() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "run")
        .stdin("set double-click-delay 50\nclick left\nwait 300\nclick left\n")
        .assert_success()?;

    assert_eq!(
        result.toggle_lines(),
        vec!["pause".to_string(), "play".to_string()]
    );
    assert_eq!(result.final_state().as_deref(), Some("running"));
    Ok(())
}

#[test]
fn test_right_button_trigger_ignores_left() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let script = "\
# left clicks never count when the trigger is the right button
set mouse-button right
click left
double
set double-click false
click left
click right
";
    let result = pclick!(dir.path(), "run").stdin(script).assert_success()?;

    assert_eq!(result.toggle_count(), Some(1));
    Ok(())
}

#[test]
fn test_missing_setting_ignores_clicks() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "run")
        .stdin("set double-click false\nunset mouse-button\nclick left\nclick left\n")
        .assert_success()?;

    assert_eq!(result.toggle_count(), Some(0));
    Ok(())
}

#[test]
fn test_script_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let script = dir.path().join("clicks.txt");
    std::fs::write(&script, "set double-click off\nclick left\nclick left\nclick left\n")?;

    let result = pclick!(dir.path(), "run", "--script", script.to_str().unwrap())
        .assert_success()?;

    assert_eq!(result.toggle_count(), Some(3));
    assert_eq!(result.final_state().as_deref(), Some("paused"));
    Ok(())
}

#[test]
fn test_bad_script_line_reports_line_number() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = pclick!(dir.path(), "run")
        .stdin("click left\nclick thumb\n")
        .assert_failure()?;

    assert!(
        result.contains_stderr("Script line 2"),
        "Unexpected stderr: {}",
        result.stderr
    );
    Ok(())
}
