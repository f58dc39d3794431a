#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use kindex::{Kind, KindInfo, StaticKind};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Arc;
use tempfile::NamedTempFile;

pub fn kind(id: &str, suffix: &str) -> Arc<dyn Kind> {
    StaticKind::shared(KindInfo::new(id, suffix))
}

pub fn kind_resolve_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_kind-resolve"))
}

/// Write `contents` to a temp catalog file that lives as long as the handle.
pub fn write_catalog(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
