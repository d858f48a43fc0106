//! `raws`: record selection, type categories, columns and output formats.

use anyhow::Result;
use ccconv_testing::{TestWorld, assertions, fixtures};
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

const PROJECT: &str = "-Users-me-work-app";

fn conversation(world: &TestWorld) -> Result<()> {
    world.write_log(
        PROJECT,
        "session.jsonl",
        &[
            fixtures::user_message("list the files"),
            fixtures::tool_use("Bash", json!({"command": "ls"})),
            fixtures::tool_result("Cargo.toml\nsrc"),
            fixtures::assistant_message("There are two entries.", 4, 26),
            fixtures::summary("Listing files"),
        ],
    )?;
    Ok(())
}

#[test]
fn test_malformed_lines_are_skipped() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_log(
        PROJECT,
        "a.jsonl",
        &format!(
            "{}\n{{not json\n{}\n",
            fixtures::user_message("one"),
            fixtures::assistant_message("two", 1, 1)
        ),
    )?;
    world.write_raw_log(
        "-Users-me-work-other",
        "b.jsonl",
        &format!("{}\n\n[1, 2]\n", fixtures::user_message("three")),
    )?;

    let result = world.run(&["raws"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_len(&json, 3)?;
    assertions::assert_has_provenance(&json)?;
    assert_eq!(json[0]["_projectDir"], PROJECT);
    assert_eq!(json[0]["_fileName"], "a.jsonl");
    assert_eq!(json[2]["_projectDir"], "-Users-me-work-other");
    Ok(())
}

#[test]
fn test_default_since_is_today() -> Result<()> {
    let world = TestWorld::new();
    world.write_log(
        PROJECT,
        "s.jsonl",
        &[
            fixtures::user_message_at(Utc::now() - Duration::days(2), "old"),
            fixtures::user_message("new"),
        ],
    )?;

    let today = world.run(&["raws"])?.json()?;
    assertions::assert_len(&today, 1)?;
    assert_eq!(today[0]["message"]["content"], "new");

    let all = world.run(&["raws", "--since=all"])?.json()?;
    assertions::assert_len(&all, 2)?;
    Ok(())
}

#[test]
fn test_since_date_bound() -> Result<()> {
    let world = TestWorld::new();
    world.write_log(
        PROJECT,
        "s.jsonl",
        &[
            fixtures::user_message_at(Utc.with_ymd_and_hms(2024, 8, 19, 23, 59, 59).unwrap(), "before"),
            fixtures::user_message_at(Utc.with_ymd_and_hms(2024, 8, 20, 0, 0, 0).unwrap(), "midnight"),
            fixtures::summary("no timestamp"),
        ],
    )?;

    let json = world.run(&["raws", "--since=2024-08-20"])?.json()?;
    assertions::assert_len(&json, 1)?;
    assert_eq!(json[0]["message"]["content"], "midnight");
    Ok(())
}

#[test]
fn test_invalid_since_warns_and_exits_zero() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let result = world.run(&["raws", "--since=yesterday"])?;

    assert!(result.success());
    assert!(result.stdout().is_empty());
    assert!(
        result
            .stderr()
            .contains("Warning: invalid date format: yesterday"),
        "stderr: {}",
        result.stderr()
    );
    Ok(())
}

#[test]
fn test_type_user_excludes_tool_results() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let json = world.run(&["raws", "--type=user"])?.json()?;

    assertions::assert_len(&json, 1)?;
    assertions::assert_types_within(&json, &["user"])?;
    assertions::assert_no_tool_results(&json)?;
    Ok(())
}

#[test]
fn test_bare_type_and_column_arguments() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let json = world.run(&["raws", "type=user", "column=type,sessionId"])?.json()?;

    assertions::assert_len(&json, 1)?;
    assert_eq!(json[0]["type"], "user");
    assert_eq!(json[0]["sessionId"], fixtures::SESSION_ID);
    assert!(json[0].get("message").is_none());
    Ok(())
}

#[test]
fn test_type_userandtools_keeps_every_user_record() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let json = world.run(&["raws", "--type=userandtools"])?.json()?;

    assertions::assert_len(&json, 2)?;
    assertions::assert_types_within(&json, &["user"])?;
    Ok(())
}

#[test]
fn test_type_assistant_includes_tool_results() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let json = world.run(&["raws", "--type=assistant"])?.json()?;

    assertions::assert_len(&json, 3)?;
    assertions::assert_types_within(&json, &["assistant", "user"])?;
    assert_eq!(json[1]["type"], "user");
    assert_eq!(json[1]["message"]["content"][0]["type"], "tool_result");
    Ok(())
}

#[test]
fn test_type_exact_match() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let json = world.run(&["raws", "--since=all", "--type=summary"])?.json()?;
    assertions::assert_len(&json, 1)?;
    assert_eq!(json[0]["summary"], "Listing files");

    let none = world.run(&["raws", "--since=all", "--type=system"])?.json()?;
    assertions::assert_len(&none, 0)?;
    Ok(())
}

#[test]
fn test_columns_project_in_order_and_omit_absent() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let result = world.run(&[
        "raws",
        "--type=userandtools",
        "--column=timestamp,message.content[].content,sessionId",
    ])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_len(&json, 2)?;

    // String content cannot be expanded
    assert!(json[0].get("message.content[].content").is_none());
    assert_eq!(json[0]["sessionId"], fixtures::SESSION_ID);
    assert!(json[0].get("_filePath").is_none());

    assert_eq!(json[1]["message.content[].content"], json!(["Cargo.toml\nsrc"]));

    let stdout = result.stdout();
    let ts = stdout.find("\"timestamp\"").unwrap();
    let content = stdout.find("\"message.content[].content\"").unwrap();
    let session = stdout.rfind("\"sessionId\"").unwrap();
    assert!(ts < content && content < session);
    Ok(())
}

#[test]
fn test_column_indexes_and_nested_usage() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let json = world
        .run(&[
            "raws",
            "--type=assistant",
            "--column=message.content[0].type,message.usage.output_tokens",
        ])?
        .json()?;

    assertions::assert_len(&json, 3)?;
    assert_eq!(json[0]["message.content[0].type"], "tool_use");
    assert!(json[0].get("message.usage.output_tokens").is_none());
    assert_eq!(json[2]["message.usage.output_tokens"], 26);
    Ok(())
}

#[test]
fn test_invalid_column_warns_and_exits_zero() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let result = world.run(&["raws", "--column=message..content"])?;

    assert!(result.success());
    assert!(result.stdout().is_empty());
    assert!(
        result.stderr().contains("Warning: invalid column expression"),
        "stderr: {}",
        result.stderr()
    );
    Ok(())
}

#[test]
fn test_project_filter_is_substring() -> Result<()> {
    let world = TestWorld::new();
    world.write_log("-Users-me-work-app", "a.jsonl", &[fixtures::user_message("a")])?;
    world.write_log("-Users-me-work-api", "b.jsonl", &[fixtures::user_message("b")])?;
    world.write_log("-Users-me-notes", "c.jsonl", &[fixtures::user_message("c")])?;

    let json = world.run(&["raws", "--project=work-ap"])?.json()?;
    assertions::assert_len(&json, 2)?;

    let json = world.run(&["raws", "--project=notes"])?.json()?;
    assertions::assert_len(&json, 1)?;
    assert_eq!(json[0]["_projectDir"], "-Users-me-notes");
    Ok(())
}

#[test]
fn test_talk_format() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let result = world.run(&["raws", "--format=talk"])?;

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("] User\nlist the files\n"), "stdout: {}", out);
    assert!(out.contains("] Assistant\n→ Bash command: \"ls\"\n"));
    assert!(out.contains("] Tool result\n← Cargo.toml\n"));
    assert!(out.contains("] Assistant\nThere are two entries.\n"));
    assert!(!out.contains('\u{1b}'), "no color when piped");
    Ok(())
}

#[test]
fn test_plain_format() -> Result<()> {
    let world = TestWorld::new();
    conversation(&world)?;

    let result = world.run(&[
        "raws",
        "--type=assistant",
        "--format=plain",
        "--column=type,message.usage.output_tokens",
    ])?;

    assert!(result.success());
    assert_eq!(
        result.stdout(),
        "type: assistant\n\ntype: user\n\ntype: assistant\nmessage.usage.output_tokens: 26\n"
    );
    Ok(())
}

#[test]
fn test_empty_log_root_prints_empty_array() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["raws"])?;

    assert!(result.success());
    assertions::assert_len(&result.json()?, 0)?;
    Ok(())
}
