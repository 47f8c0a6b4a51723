//! fitcorr: Fitness Correlation CLI Tool
//!
//! Loads a CSV of fitness measurements, cleans it, and shows which
//! attributes correlate most strongly with body-fat percentage.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use fitcorr::cli::Cli;
use fitcorr::pipeline::{analyze, get_column_names, AnalysisError, DatasetLoader};
use fitcorr::report::{
    display_cleaning_summary, display_headline, display_heatmap, display_preview,
    display_ranking, export_analysis, missing_target_message,
};
use fitcorr::utils::{
    create_spinner, finish_with_failure, finish_with_success, print_banner, print_completion,
    print_config, print_count, print_error, print_info, print_step_header, print_step_time,
    print_success, print_warning,
};

/// Rows shown when the target column is missing
const PREVIEW_ROWS: usize = 5;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        report_failure(&err, &cli.input);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.cleaning_config().map_err(anyhow::Error::msg)?;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &config);

    let loader = DatasetLoader::new(config.clone());

    // Step 1: Load and clean
    print_step_header(1, "Load & Clean");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading and cleaning data...");
    let table = match loader.load(&cli.input) {
        Ok(table) => table,
        Err(e) => {
            finish_with_failure(&spinner, "Load failed");
            return Err(e.into());
        }
    };
    finish_with_success(
        &spinner,
        &format!(
            "Data loaded: {} ({} rows)",
            cli.input.display(),
            table.height()
        ),
    );
    print_step_time(step_start.elapsed());

    display_cleaning_summary(&table);
    if table.is_empty() {
        print_warning("No rows survived cleaning; every coefficient is undefined");
    }

    // Step 2: Correlation analysis
    print_step_header(2, "Correlation Analysis");

    let step_start = Instant::now();
    let spinner = create_spinner("Calculating correlations...");
    let analysis = match analyze(&table) {
        Ok(analysis) => analysis,
        Err(e) => {
            finish_with_failure(&spinner, "Correlation analysis stopped");
            if matches!(e, AnalysisError::TargetColumnMissing { .. }) {
                display_preview(&table, PREVIEW_ROWS);
            }
            return Err(e.into());
        }
    };
    finish_with_success(&spinner, "Correlation analysis complete");
    print_count("attribute(s) ranked", analysis.ranking.len(), None);
    print_step_time(step_start.elapsed());

    display_headline(&analysis.ranking);
    display_ranking(&analysis.ranking, cli.top);

    println!();
    print_info(&format!(
        "Scatter series: {} (x) vs {} (y), {} point(s)",
        analysis.scatter.x_column,
        analysis.scatter.y_column,
        analysis.scatter.points.len()
    ));

    if !cli.no_heatmap {
        display_heatmap(&analysis.matrix);
    }

    // Step 3: Optional export
    if let Some(export_path) = &cli.export {
        print_step_header(3, "Export");
        let spinner = create_spinner("Writing analysis JSON...");
        export_analysis(export_path, &cli.input, &config, &table, &analysis)?;
        finish_with_success(&spinner, &format!("Saved to {}", export_path.display()));
        print_success("Export complete");
    }

    print_completion();

    Ok(())
}

/// Turn a failure into a user-facing message
fn report_failure(err: &anyhow::Error, input: &Path) {
    match err.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::FileNotFound { path }) => {
            print_error(&format!(
                "Could not find the file `{}`. Check the path given with -i/--input.",
                path.display()
            ));
        }
        Some(AnalysisError::Parse { path, detail }) => {
            print_error(&format!("Could not parse `{}`: {}", path.display(), detail));
        }
        Some(AnalysisError::TargetColumnMissing { target, available }) => {
            let header = get_column_names(input).ok();
            print_error(&missing_target_message(target, header.as_deref()));
            eprintln!("    Available numeric columns: {}", available.join(", "));
            if let Some(header) = &header {
                eprintln!("    Columns in the file: {}", header.join(", "));
            }
        }
        Some(AnalysisError::InsufficientFeatures { .. }) => {
            print_error("Not enough numeric attributes to analyze.");
        }
        None => {
            print_error(&format!("Unexpected error during processing: {:#}", err));
        }
    }
}
