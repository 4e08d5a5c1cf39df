use crate::core::Evaluation;
use crate::errors::AppResult;
use std::path::Path;

/// Writes the evaluation as pretty JSON.
pub fn write_json(path: &Path, eval: &Evaluation) -> AppResult<()> {
    let json = serde_json::to_string_pretty(eval)?;
    std::fs::write(path, json)?;
    Ok(())
}
