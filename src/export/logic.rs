// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten;
use crate::models::ResultTable;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Entry point for writing sweep results to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every row of `tables` to `file`.
    ///
    /// `file` may start with `~/`; after expansion it must be absolute.
    /// Returns the resolved path.
    pub fn export(
        tables: &[ResultTable],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let rows = flatten(tables);
        if rows.is_empty() {
            warning("No rows to export; writing an empty file.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(path)
    }
}
