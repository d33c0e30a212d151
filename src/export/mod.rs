//! Report export to plain text or PDF
//!
//! The destination extension selects the format. Every write goes to a
//! temporary file in the destination directory which is renamed into place
//! only once complete, so a failed export never leaves a partial file behind.

pub mod pdf;
pub mod text;

use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

use crate::core::errors::{GlossError, Result};
use crate::core::models::TranslationReport;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// UTF-8 `.txt`
    Text,
    /// Paginated `.pdf`
    Pdf,
}

impl ExportFormat {
    /// Pick the format from the destination extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());

        match ext.as_deref() {
            Some("txt") => Ok(ExportFormat::Text),
            Some("pdf") => Ok(ExportFormat::Pdf),
            _ => Err(GlossError::UnsupportedExportFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

/// Write `report` to `path` in the format its extension names
pub fn export_report(report: &TranslationReport, path: &Path) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    let content = text::render_report(report);

    let bytes = match format {
        ExportFormat::Text => content.into_bytes(),
        ExportFormat::Pdf => pdf::render_pdf(&content).map_err(|e| match e {
            GlossError::ExportIoFailure { message, .. } => export_failure(path, message),
            other => other,
        })?,
    };

    write_atomic(path, &bytes)?;
    info!("Exported {} report to {}", format, path.display());
    Ok(format)
}

/// Replace `path` with `bytes` all at once
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(|e| export_failure(path, e))?;
    file.write_all(bytes)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| export_failure(path, e))?;
    file.persist(path).map_err(|e| export_failure(path, e.error))?;

    Ok(())
}

fn export_failure(path: &Path, message: impl fmt::Display) -> GlossError {
    GlossError::ExportIoFailure {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}
