//! Headline and ranking table for the target's correlates

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{Ranking, RankedFeature};
use crate::utils::print_warning;

/// Format a coefficient to 3 decimals, or a dash when undefined
pub fn format_coefficient(value: f64) -> String {
    if value.is_nan() {
        "—".to_string()
    } else {
        format!("{:.3}", value)
    }
}

/// Describe the direction and rough strength of a coefficient
pub fn describe_relationship(coefficient: f64) -> &'static str {
    let magnitude = coefficient.abs();
    if coefficient.is_nan() {
        "undefined"
    } else if magnitude >= 0.7 {
        if coefficient > 0.0 {
            "strong positive"
        } else {
            "strong inverse"
        }
    } else if magnitude >= 0.4 {
        if coefficient > 0.0 {
            "moderate positive"
        } else {
            "moderate inverse"
        }
    } else if magnitude >= 0.1 {
        if coefficient > 0.0 {
            "weak positive"
        } else {
            "weak inverse"
        }
    } else {
        "negligible"
    }
}

/// Print the strongest-correlate headline
pub fn display_headline(ranking: &Ranking) {
    let top = match ranking.strongest() {
        Some(top) => top,
        None => {
            print_warning(&format!("No attributes were ranked against {}", ranking.target));
            return;
        }
    };
    println!();
    println!(
        "    {} The attribute most correlated with {} is {} (r = {}, {})",
        style("💡").yellow(),
        style(&ranking.target).cyan().bold(),
        style(&top.name).green().bold(),
        style(format_coefficient(top.coefficient)).yellow().bold(),
        describe_relationship(top.coefficient)
    );
}

/// Build the top-`n` ranking table
pub fn build_ranking_table(ranking: &Ranking, n: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Attribute").add_attribute(Attribute::Bold),
        Cell::new("r").add_attribute(Attribute::Bold),
        Cell::new("|r|").add_attribute(Attribute::Bold),
    ]);

    for (rank, feature) in ranking.top(n).iter().enumerate() {
        table.add_row(ranking_row(rank + 1, feature));
    }

    table
}

fn ranking_row(rank: usize, feature: &RankedFeature) -> Vec<Cell> {
    let color = if feature.coefficient.is_nan() {
        Color::DarkGrey
    } else if feature.coefficient >= 0.0 {
        Color::Red
    } else {
        Color::Blue
    };

    vec![
        Cell::new(rank),
        Cell::new(&feature.name),
        Cell::new(format_coefficient(feature.coefficient))
            .fg(color)
            .set_alignment(CellAlignment::Right),
        Cell::new(format_coefficient(feature.abs_coefficient)).set_alignment(CellAlignment::Right),
    ]
}

/// Print the top-`n` ranking
pub fn display_ranking(ranking: &Ranking, n: usize) {
    println!();
    println!(
        "    {} {}",
        style("🏅").cyan(),
        style(format!(
            "CORRELATION WITH {} (top {} of {})",
            ranking.target,
            n.min(ranking.len()),
            ranking.len()
        ))
        .white()
        .bold()
    );
    println!("    {}", style("─".repeat(50)).dim());

    for line in build_ranking_table(ranking, n).to_string().lines() {
        println!("    {}", line);
    }
}
