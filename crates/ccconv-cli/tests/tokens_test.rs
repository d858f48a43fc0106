//! `tokens`: usage summed over a trailing window.

use anyhow::Result;
use ccconv_testing::{TestWorld, fixtures};
use chrono::{Duration, Utc};
use serde_json::json;

fn usage_log(world: &TestWorld) -> Result<()> {
    let recent = Utc::now() - Duration::hours(1);
    let mut cached = fixtures::assistant_message_at(recent, "cached", 4, 26);
    cached["message"]["usage"]["cache_creation_input_tokens"] = json!(14_785);
    cached["message"]["usage"]["cache_read_input_tokens"] = json!(3);

    world.write_log(
        "-Users-me-work-app",
        "s.jsonl",
        &[
            fixtures::assistant_message_at(Utc::now() - Duration::hours(10), "old", 1_000, 1_000),
            fixtures::user_message_at(recent, "question"),
            cached,
            fixtures::summary("no timestamp"),
        ],
    )?;
    Ok(())
}

#[test]
fn test_tokens_default_window() -> Result<()> {
    let world = TestWorld::new();
    usage_log(&world)?;

    let result = world.run(&["tokens"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.starts_with("Token usage in the last 4 hours:\n"), "stdout: {}", out);
    assert!(out.contains("  Input:        4\n"));
    assert!(out.contains("  Output:       26\n"));
    assert!(out.contains("  Cache create: 14,785\n"));
    assert!(out.contains("  Cache read:   3\n"));
    assert!(out.contains("  Records:      2\n"));
    Ok(())
}

#[test]
fn test_tokens_hours_flag() -> Result<()> {
    let world = TestWorld::new();
    usage_log(&world)?;

    let out = world.run(&["tokens", "--hours=12"])?.stdout;

    assert!(out.starts_with("Token usage in the last 12 hours:\n"));
    assert!(out.contains("  Input:        1,004\n"));
    assert!(out.contains("  Records:      3\n"));
    Ok(())
}

#[test]
fn test_tokens_window_from_config() -> Result<()> {
    let world = TestWorld::new().with_config("token_window_hours = 24\n");
    usage_log(&world)?;

    let out = world.run(&["tokens"])?.stdout;

    assert!(out.starts_with("Token usage in the last 24 hours:\n"));
    assert!(out.contains("  Output:       1,026\n"));
    Ok(())
}

#[test]
fn test_tokens_project_filter() -> Result<()> {
    let world = TestWorld::new();
    usage_log(&world)?;

    let out = world.run(&["tokens", "--project=elsewhere"])?.stdout;

    assert!(out.contains("  Input:        0\n"));
    assert!(out.contains("  Records:      0\n"));
    Ok(())
}
