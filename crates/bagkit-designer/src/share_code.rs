//! Share-code codec.
//!
//! A share code is the design's compact JSON, deflated into a single-entry
//! zip archive and rendered as URL-safe base64 without padding. Decoding
//! validates the recovered design structurally.

use std::io::{Cursor, Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use bagkit_core::ShareCodeError;

use crate::model::Design;

/// Archive entry holding the design
pub const DESIGN_ENTRY: &str = "design.json";

/// Largest inflated design accepted by the decoder (bytes)
const MAX_DESIGN_BYTES: u64 = 4 * 1024 * 1024;

/// Encode `design` as a share code.
pub fn encode_share_code(design: &Design) -> Result<String, ShareCodeError> {
    let json = serde_json::to_vec(design).map_err(|e| ShareCodeError::Json {
        reason: e.to_string(),
    })?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer
        .start_file(DESIGN_ENTRY, options)
        .map_err(archive_error)?;
    writer.write_all(&json).map_err(|e| ShareCodeError::Archive {
        reason: e.to_string(),
    })?;
    let bytes = writer.finish().map_err(archive_error)?.into_inner();

    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode a share code, reporting why it failed.
pub fn try_decode_share_code(code: &str) -> Result<Design, ShareCodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(code.trim())
        .map_err(|e| ShareCodeError::Base64 {
            reason: e.to_string(),
        })?;

    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_error)?;
    let entry = archive.by_name(DESIGN_ENTRY).map_err(|e| match e {
        ZipError::FileNotFound => ShareCodeError::MissingEntry {
            entry: DESIGN_ENTRY.to_string(),
        },
        other => archive_error(other),
    })?;

    let mut json = Vec::new();
    entry
        .take(MAX_DESIGN_BYTES)
        .read_to_end(&mut json)
        .map_err(|e| ShareCodeError::Archive {
            reason: e.to_string(),
        })?;

    let design: Design = serde_json::from_slice(&json).map_err(|e| ShareCodeError::Json {
        reason: e.to_string(),
    })?;
    design.validate_structure()?;
    Ok(design)
}

/// Decode a share code. Any failure is logged and yields `None`.
pub fn decode_share_code(code: &str) -> Option<Design> {
    match try_decode_share_code(code) {
        Ok(design) => Some(design),
        Err(e) => {
            tracing::warn!("Rejected share code: {}", e);
            None
        }
    }
}

fn archive_error(e: ZipError) -> ShareCodeError {
    ShareCodeError::Archive {
        reason: e.to_string(),
    }
}
