//! Terminal heatmap of the full correlation matrix

use comfy_table::{presets::NOTHING, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::CorrelationMatrix;

const COOL: (u8, u8, u8) = (59, 76, 192);
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);

/// Map a coefficient in [-1, 1] onto a blue-white-red scale.
pub fn coolwarm(value: f64) -> Color {
    if value.is_nan() {
        return Color::DarkGrey;
    }
    let t = value.clamp(-1.0, 1.0);
    let (from, to, weight) = if t < 0.0 {
        (NEUTRAL, COOL, -t)
    } else {
        (NEUTRAL, WARM, t)
    };
    Color::Rgb {
        r: lerp(from.0, to.0, weight),
        g: lerp(from.1, to.1, weight),
        b: lerp(from.2, to.2, weight),
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Build the heatmap table. Columns are numbered; row labels carry the names.
pub fn build_heatmap(matrix: &CorrelationMatrix) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    let mut header = vec![Cell::new("")];
    header.extend(
        (1..=matrix.len()).map(|i| Cell::new(i).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for (i, name) in matrix.columns().iter().enumerate() {
        let mut row = vec![Cell::new(format!("{:>2} {}", i + 1, name))];
        for j in 0..matrix.len() {
            let value = matrix.get(i, j);
            let text = if value.is_nan() {
                "  — ".to_string()
            } else {
                format!("{:>5.2}", value)
            };
            row.push(
                Cell::new(text)
                    .bg(coolwarm(value))
                    .fg(Color::Black)
                    .set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }

    table
}

/// Print the heatmap with a title
pub fn display_heatmap(matrix: &CorrelationMatrix) {
    println!();
    println!(
        "    {} {}",
        style("🔥").red(),
        style("CORRELATION HEATMAP (all attributes)").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());

    if matrix.is_empty() {
        println!("      {}", style("No numeric attributes").dim());
        return;
    }

    for line in build_heatmap(matrix).to_string().lines() {
        println!("    {}", line);
    }
    println!(
        "      {} {} {}",
        style("-1 inverse").blue(),
        style("·").dim(),
        style("+1 positive").red()
    );
}
