//! ASCII table rendering for per-language statistics

use crate::models::LanguageStats;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render statistics rows as a bordered ASCII table.
///
/// Rows keep their input order. Column widths fit the widest cell.
pub fn render(rows: &[(String, LanguageStats)]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|(language, stats)| {
            [
                language.clone(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = [0; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let format_row = |row: &[String; 4]| {
        let mut line = String::from("|");
        for (i, cell) in row.iter().enumerate() {
            line.push_str(&format!(" {:<width$} |", cell, width = widths[i]));
        }
        line
    };

    let header_row = HEADERS.map(String::from);

    let mut table = String::new();
    table.push_str(&separator);
    table.push('\n');
    table.push_str(&format_row(&header_row));
    table.push('\n');
    table.push_str(&separator);
    table.push('\n');
    for row in &cells {
        table.push_str(&format_row(row));
        table.push('\n');
    }
    table.push_str(&separator);
    table
}
