//! Cleaning summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::CleanedTable;

/// Display what the cleaning pass kept and removed
pub fn display_cleaning_summary(table: &CleanedTable) {
    let report = table.report();

    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("CLEANING SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL_CONDENSED);
    summary.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    summary.add_row(vec![Cell::new("Rows read"), Cell::new(report.raw_rows)]);
    summary.add_row(vec![
        Cell::new("Rows without target"),
        count_cell(report.rows_missing_target),
    ]);
    summary.add_row(vec![
        Cell::new("Rows out of range"),
        count_cell(report.rows_out_of_range),
    ]);
    summary.add_row(vec![
        Cell::new("Rows kept"),
        Cell::new(table.height())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    summary.add_row(vec![Cell::new("Columns read"), Cell::new(report.raw_columns)]);
    summary.add_row(vec![
        Cell::new("Non-numeric columns"),
        count_cell(report.non_numeric_columns.len()),
    ]);
    summary.add_row(vec![
        Cell::new("Code-like columns"),
        count_cell(report.low_cardinality_columns.len()),
    ]);
    summary.add_row(vec![
        Cell::new("Numeric columns kept"),
        Cell::new(table.width())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);

    for line in summary.to_string().lines() {
        println!("    {}", line);
    }

    if !report.low_cardinality_columns.is_empty() {
        println!();
        println!(
            "      {} {}:",
            style("Dropped code-like columns").yellow(),
            style(format!("({})", report.low_cardinality_columns.len())).dim()
        );
        for dropped in &report.low_cardinality_columns {
            println!(
                "        {} {} {}",
                style("•").dim(),
                dropped.name,
                style(format!("({} distinct)", dropped.distinct_values)).dim()
            );
        }
    }
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).fg(if count == 0 { Color::White } else { Color::Red })
}
