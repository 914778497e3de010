//! JSON export and import of designs.
//!
//! Exports wrap the design in a small versioned envelope. Imports accept the
//! envelope or a bare design record and validate it structurally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bagkit_core::{Error, Result};

use crate::model::Design;

/// Export format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Exported design file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub design: Design,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Importable {
    File(DesignFile),
    Bare(Design),
}

/// Render `design` as pretty JSON.
pub fn export_json(design: &Design) -> Result<String> {
    let file = DesignFile {
        version: FILE_FORMAT_VERSION.to_string(),
        exported_at: Utc::now(),
        design: design.clone(),
    };
    serde_json::to_string_pretty(&file)
        .map_err(|e| Error::other(format!("Failed to serialize design: {e}")))
}

/// Parse an exported design. Malformed or invalid input is logged and
/// yields `None`.
pub fn import_json(text: &str) -> Option<Design> {
    let design = match serde_json::from_str::<Importable>(text) {
        Ok(Importable::File(file)) => {
            if file.version != FILE_FORMAT_VERSION {
                tracing::warn!("Importing design file version {}", file.version);
            }
            file.design
        }
        Ok(Importable::Bare(design)) => design,
        Err(e) => {
            tracing::warn!("Rejected design JSON: {}", e);
            return None;
        }
    };
    match design.validate_structure() {
        Ok(()) => Some(design),
        Err(e) => {
            tracing::warn!("Rejected design {}: {}", design.id, e);
            None
        }
    }
}
