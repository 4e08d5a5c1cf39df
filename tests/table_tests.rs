use openhours::utils::colors::{BOLD_GREEN, GREEN, paint, strip_ansi};
use openhours::utils::table::{Column, Table};

#[test]
fn test_strip_ansi_removes_color_codes() {
    assert_eq!(strip_ansi(&paint("09:00 - 12:00", BOLD_GREEN, true)), "09:00 - 12:00");
    assert_eq!(strip_ansi("\x1b[1mMonday\x1b[0m"), "Monday");
    assert_eq!(strip_ansi("no codes"), "no codes");
}

#[test]
fn test_table_pads_colored_cells_by_visible_width() {
    let mut table = Table::new(vec![Column::new("Day", 8), Column::new("Hours", 5)]);
    table.add_row(vec![paint("Monday", GREEN, true), "x".to_string()]);
    table.add_row(vec!["Tuesday".to_string(), "y".to_string()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[1].contains("\x1b[32m"), "color codes are kept in the output");

    let plain: Vec<String> = lines.iter().map(|l| strip_ansi(l)).collect();
    assert_eq!(plain[0], "Day      Hours ");
    assert_eq!(plain[1], "Monday   x     ");
    assert_eq!(plain[2], "Tuesday  y     ");
}

#[test]
fn test_table_pads_wide_characters() {
    let mut table = Table::new(vec![Column::new("Label", 12), Column::new("", 1)]);
    table.add_row(vec!["Geöffnet".to_string(), "|".to_string()]);

    let out = table.render();
    let row = out.lines().nth(1).unwrap();
    assert_eq!(row, "Geöffnet     | ");
}
