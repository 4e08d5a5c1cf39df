use super::load_hours;
use crate::cli::parser::Commands;
use crate::core::{Clock, Core};
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Resolve { file, date: d } = cmd {
        let hours = load_hours(file)?;
        let today = date::parse_optional_date(d.as_ref())?;
        let clock = Clock::with_overrides(today, None);

        let resolved = Core::resolve_for(&hours, &clock);
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    }
    Ok(())
}
