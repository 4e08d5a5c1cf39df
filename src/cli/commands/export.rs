use super::load_hours;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::export_evaluation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        output,
        clock,
        force,
    } = cmd
    {
        let hours = load_hours(file)?;
        let clock = clock.to_clock()?;

        let eval = Core::evaluate(&hours, &clock, cfg.week_starts_on.day_id());
        export_evaluation(&eval, &cfg.labels, *format, output, *force)?;
    }
    Ok(())
}
