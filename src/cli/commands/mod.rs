pub mod config;
pub mod export;
pub mod init;
pub mod resolve;
pub mod status;
pub mod week;

use crate::cli::parser::ClockArgs;
use crate::core::Clock;
use crate::errors::AppResult;
use crate::models::BusinessHours;
use crate::utils::{date, time};
use std::path::Path;
use tracing::info;

impl ClockArgs {
    /// Build the evaluation instant, validating any explicit values.
    pub fn to_clock(&self) -> AppResult<Clock> {
        let d = date::parse_optional_date(self.date.as_ref())?;
        let t = time::parse_optional_time(self.now.as_ref())?;
        Ok(Clock::with_overrides(d, t))
    }
}

pub(crate) fn load_hours(path: &Path) -> AppResult<BusinessHours> {
    let hours = BusinessHours::from_file(path)?;
    info!(
        file = %path.display(),
        overrides = hours.special_bhs.len(),
        "business hours loaded"
    );
    Ok(hours)
}
