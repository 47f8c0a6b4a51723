//! Preview of the first rows of a cleaned table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::pipeline::CleanedTable;

/// Message for a target that did not reach the cleaned table.
///
/// `header` is the raw header of the input file, when it could be read. A
/// target listed there was dropped for holding non-numeric values.
pub fn missing_target_message(target: &str, header: Option<&[String]>) -> String {
    let in_file = header.is_some_and(|columns| columns.iter().any(|c| c == target));
    if in_file {
        format!(
            "Column '{}' exists but is not numeric, so the analysis cannot proceed.",
            target
        )
    } else {
        format!(
            "Column '{}' does not exist, so the analysis cannot proceed.",
            target
        )
    }
}

/// Build a table of the first `n` rows. Missing cells are left blank.
pub fn build_preview(table: &CleanedTable, n: usize) -> Table {
    let mut preview = Table::new();
    preview.load_preset(UTF8_FULL_CONDENSED);
    preview.set_header(
        table
            .columns()
            .iter()
            .map(|c| Cell::new(&c.name).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for row in table.head(n) {
        preview.add_row(
            row.into_iter()
                .map(|v| Cell::new(v.map(|x| x.to_string()).unwrap_or_default()))
                .collect::<Vec<_>>(),
        );
    }

    preview
}

/// Print the available columns and a short preview so the user can check names
pub fn display_preview(table: &CleanedTable, n: usize) {
    println!();
    println!(
        "    {} {}",
        style("🔎").cyan(),
        style(format!("FIRST {} ROWS", n.min(table.height()))).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());

    if table.width() == 0 {
        println!("      {}", style("No numeric columns survived cleaning").dim());
        return;
    }

    for line in build_preview(table, n).to_string().lines() {
        println!("    {}", line);
    }
}
