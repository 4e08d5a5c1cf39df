use super::load_hours;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, Evaluation};
use crate::errors::AppResult;
use crate::models::DayRenderState;
use crate::utils::colors::{BOLD_GREEN, GREY, color_for_status, paint};
use crate::utils::formatting::{bold, day_label, slot_range, status_label};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { file, clock } = cmd {
        let hours = load_hours(file)?;
        let clock = clock.to_clock()?;

        let eval = Core::evaluate(&hours, &clock, cfg.week_starts_on.day_id());
        print_week(&eval, cfg);
    }
    Ok(())
}

fn print_week(eval: &Evaluation, cfg: &Config) {
    let status = status_label(eval.status, &cfg.labels);
    println!(
        "{} {}  {}",
        eval.date,
        eval.now,
        paint(status, color_for_status(eval.status), cfg.color)
    );
    println!();

    let mut table = Table::new(vec![
        Column::new("", 2),
        Column::new("Day", 10),
        Column::new("Hours", 40),
    ]);

    for row in &eval.week {
        let marker = if row.is_today { "*" } else { "" };
        let day = if row.is_today && cfg.color {
            bold(row.day_id.name())
        } else {
            row.day_id.name().to_string()
        };

        let hours = match &row.state {
            DayRenderState::OpenWithSlots { slots } => slots
                .iter()
                .map(|s| {
                    if s.is_active_now {
                        paint(&slot_range(s), BOLD_GREEN, cfg.color)
                    } else {
                        slot_range(s)
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
            DayRenderState::Closed { .. } => {
                paint(day_label(&row.state, &cfg.labels), GREY, cfg.color)
            }
            DayRenderState::OpenAllDay => day_label(&row.state, &cfg.labels).to_string(),
        };

        table.add_row(vec![marker.to_string(), day, hours]);
    }

    print!("{}", table.render());
}
