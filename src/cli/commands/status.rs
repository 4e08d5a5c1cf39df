use super::load_hours;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, current_status};
use crate::errors::AppResult;
use crate::utils::colors::{color_for_status, paint};
use crate::utils::formatting::status_label;
use crate::utils::{date, time};
use serde_json::json;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { file, clock, json } = cmd {
        let hours = load_hours(file)?;
        let clock = clock.to_clock()?;
        let today = clock.today_day_id();

        let resolved = Core::resolve_for(&hours, &clock);
        let status = current_status(&resolved, today, clock.now);

        if *json {
            let out = json!({
                "date": date::format_date(clock.today),
                "now": time::format_time(clock.now),
                "day_id": today,
                "status": status,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            let label = status_label(status, &cfg.labels);
            println!("{}", paint(label, color_for_status(status), cfg.color));
        }
    }
    Ok(())
}
