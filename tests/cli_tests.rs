#![cfg(feature = "cli")]

use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn bar_foo(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_bar-foo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

#[test]
fn test_single_call_succeeds() -> Result<()> {
    let output = bar_foo(&["--op", "m1", "--receiver", "free", "-a", "-2", "-b", "5"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?.trim(), "m1(-2, 5) = -10");
    Ok(())
}

#[test]
fn test_validation_error_exits_1() -> Result<()> {
    let output = bar_foo(&["--op", "m0", "--receiver", "free", "-x", "1"])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_stray_operand_exits_1_with_operand_hint() -> Result<()> {
    let output = bar_foo(&["--op", "m2", "-a", "1", "-b", "2", "-x", "3"])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("m2 has no 'x' operand"), "{}", stderr);
    assert!(!stderr.contains("--receiver foo"), "{}", stderr);
    Ok(())
}

#[test]
fn test_checked_overflow_exits_2() -> Result<()> {
    let output = bar_foo(&["--op", "m1", "-a", "2147483647", "-b", "2", "--mode", "checked"])?;
    assert_eq!(output.status.code(), Some(2));

    let wrapped = bar_foo(&["--op", "m1", "-a", "2147483647", "-b", "2"])?;
    assert_eq!(wrapped.status.code(), Some(0));
    assert_eq!(String::from_utf8(wrapped.stdout)?.trim(), "Foo.m1(2147483647, 2) = -2");
    Ok(())
}

#[test]
fn test_missing_config_file_exits_3() -> Result<()> {
    let output = bar_foo(&["-c", "/nonexistent/bar-foo/calls.toml"])?;
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn test_mode_flag_overrides_batch_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"[settings]\nmode = \"wrapping\"\n\n[[calls]]\nop = \"m0\"\nx = 2147483647\n")?;
    let path = temp_file.path().to_str().expect("utf-8 temp path");

    let output = bar_foo(&["-c", path])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?.trim(), "Foo.m0(2147483647) = -2");

    let output = bar_foo(&["-c", path, "--mode", "checked"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_verify_json_output() -> Result<()> {
    let output = bar_foo(&["--verify", "-a", "3", "-b", "4", "--format", "json"])?;
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["holds"], true);
    assert_eq!(report["foo_m2"], serde_json::json!({"a": 6, "b": 8}));
    Ok(())
}
