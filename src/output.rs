use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::model::EndpointDoc;

/// Default output document, overwritten on every run.
pub const DEFAULT_OUT: &str = "endpoints.json";

/// Serialize the sorted records as one JSON document.
pub fn write_endpoints(docs: &[EndpointDoc], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(docs)
        .context("Failed to serialize endpoint records")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} endpoint records to {}", docs.len(), path.display());
    Ok(())
}
