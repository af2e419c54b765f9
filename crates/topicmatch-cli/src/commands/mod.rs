//! CLI command implementations.

pub mod init;
pub mod topics;
pub mod words;
pub mod recommend;
pub mod render;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use topicmatch::prelude::*;

/// Load a model snapshot, naming the file in any error.
pub fn load_snapshot(path: &str) -> Result<ModelSnapshot> {
    ModelSnapshot::load(Path::new(path))
        .with_context(|| format!("Failed to load snapshot: {}", path))
}

/// The requested document, or the snapshot's first one.
pub fn resolve_document(snapshot: &ModelSnapshot, requested: Option<String>) -> Result<String> {
    match requested {
        Some(id) => {
            snapshot.document(&id)?;
            Ok(id)
        }
        None => match snapshot.default_document() {
            Some(id) => Ok(id.to_string()),
            None => bail!(
                "Snapshot has no documents. Export one with {} first.",
                "documents".cyan()
            ),
        },
    }
}
