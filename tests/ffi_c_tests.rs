#![cfg(all(feature = "cli", target_os = "linux"))]

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Cargo puts the library artifacts next to the binary.
fn artifact_dir() -> PathBuf {
    Path::new(env!("CARGO_BIN_EXE_bar-foo"))
        .parent()
        .expect("binary has a parent directory")
        .to_path_buf()
}

#[test]
fn test_c_caller_links_against_staticlib() -> Result<()> {
    let staticlib = artifact_dir().join("libbar_foo.a");
    assert!(staticlib.exists(), "missing {}", staticlib.display());

    let out_dir = tempfile::tempdir()?;
    let compiler = cc::Build::new()
        .target(env!("BAR_FOO_TARGET"))
        .host(env!("BAR_FOO_HOST"))
        .opt_level(0)
        .debug(false)
        .cargo_metadata(false)
        .out_dir(out_dir.path())
        .try_get_compiler()?;

    let exe = out_dir.path().join("ffi_caller");
    let status = compiler
        .to_command()
        .arg(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/c/ffi_caller.c"))
        .arg(&staticlib)
        .args(["-lgcc_s", "-lutil", "-lrt", "-lpthread", "-lm", "-ldl", "-lc"])
        .arg("-o")
        .arg(&exe)
        .status()?;
    assert!(status.success(), "C caller failed to build");

    let status = Command::new(&exe).status()?;
    assert_eq!(status.code(), Some(0), "C caller reported a mismatch");
    Ok(())
}

#[test]
fn test_cdylib_is_built() {
    assert!(artifact_dir().join("libbar_foo.so").exists());
}
