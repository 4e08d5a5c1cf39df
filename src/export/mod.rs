mod csv_writer;
mod fs_utils;
mod json_writer;

use crate::config::Labels;
use crate::core::Evaluation;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write an evaluation to `path` in the requested format.
///
/// An existing file is only replaced with `force` or after confirmation.
pub fn export_evaluation(
    eval: &Evaluation,
    labels: &Labels,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv_writer::write_csv(path, eval, labels)?,
        ExportFormat::Json => json_writer::write_json(path, eval)?,
    }

    info!(format = format.as_str(), path = %path.display(), "export written");
    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
