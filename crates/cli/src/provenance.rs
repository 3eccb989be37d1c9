use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a result file: the puzzle, its input, and the solver parameters.
pub struct Payload {
    pub puzzle: &'static str,
    pub input: PathBuf,
    pub params: Value,
}

impl Payload {
    pub fn new(puzzle: &'static str, input: impl Into<PathBuf>, params: Value) -> Self {
        Self {
            puzzle,
            input: input.into(),
            params,
        }
    }
}

/// Write `<artifact>.provenance.json` next to a result file: code revision, callsite,
/// puzzle, input path and size, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    ensure_parent(&provenance_path)?;

    let input_bytes = fs::metadata(&payload.input).map(|m| m.len()).ok();
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": puzzlebox::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "puzzle": payload.puzzle,
        "input": {
            "path": payload.input.to_string_lossy(),
            "bytes": input_bytes
        },
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("result"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
