//! JSON snapshot file loading and saving.
//!
//! # Invariants
//! - A missing file loads as an empty store with the seed methods.
//! - Saving writes a sibling `.tmp` file and renames it over the target.

use anyhow::Context;
use log::info;
use outreach_core::{InMemoryRecordStore, StoreSnapshot};
use std::fs;
use std::path::{Path, PathBuf};

pub fn load_store(path: &Path) -> anyhow::Result<InMemoryRecordStore> {
    if !path.exists() {
        info!("event=snapshot_load module=cli status=missing");
        return Ok(InMemoryRecordStore::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot `{}`", path.display()))?;
    let snapshot: StoreSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot `{}`", path.display()))?;
    InMemoryRecordStore::from_snapshot(snapshot)
        .with_context(|| format!("snapshot `{}` is inconsistent", path.display()))
}

pub fn save_store(path: &Path, store: &InMemoryRecordStore) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&store.to_snapshot())
        .context("failed to serialize snapshot")?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json)
        .with_context(|| format!("failed to write `{}`", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("failed to replace snapshot `{}`", path.display()))?;

    info!("event=snapshot_save module=cli status=ok");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "outreach.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
