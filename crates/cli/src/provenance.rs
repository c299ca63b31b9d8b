use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// What produced an artifact: subcommand plus its parameters.
pub struct Provenance {
    pub command: &'static str,
    pub params: Value,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }

    fn document(&self, outputs: &[&Path]) -> Value {
        json!({
            "code_rev": code_rev(),
            "planar_version": planar::VERSION,
            "command": self.command,
            "params": self.params,
            "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>(),
        })
    }

    /// Print the provenance block alone (no artifact).
    pub fn report(&self) -> Value {
        self.document(&[])
    }
}

/// Write `doc` as pretty JSON to `out` plus its provenance sidecar.
pub fn write_json_artifact(out: &Path, doc: &Value, prov: &Provenance) -> Result<PathBuf> {
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, prov)
}

/// Write `<stem>.provenance.json` next to an existing artifact.
pub fn write_sidecar(artifact: &Path, prov: &Provenance) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    ensure_parent(&path)?;
    fs::write(&path, serde_json::to_vec_pretty(&prov.document(&[artifact]))?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(artifact = %artifact.display(), sidecar = %path.display(), "provenance");
    Ok(path)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else "unknown".
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
