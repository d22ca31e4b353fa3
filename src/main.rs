//! FCBF: Feature Selection CLI Tool
//!
//! Loads a categorical dataset, runs the Fast Correlation-Based Filter against
//! a target column, and writes the reduced dataset plus a JSON report.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use log::LevelFilter;

use fcbf::cli::Cli;
use fcbf::pipeline::{
    load_dataset_with_progress, save_dataset, Dataset, FcbfConfig, FcbfSelector,
};
use fcbf::report::{export_selection, ExportParams, SelectionSummary};
use fcbf::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
    print_warning,
};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("FCBF_LOG", "warn"))
        .init();

    let cli = Cli::parse();
    let output_path = cli.output_path();
    let report_path = cli.report_path();
    let config = FcbfConfig::new(cli.su_threshold, cli.base)?.with_parallel(!cli.sequential);
    let verbose = !cli.quiet;

    if verbose {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(
            &cli.input,
            &cli.target,
            &output_path,
            config.su_threshold(),
            config.base(),
        );
    }

    // Step 1: Load dataset
    if verbose {
        print_step_header(1, "Load Dataset");
    }
    let step_start = Instant::now();
    let (mut df, rows, cols, memory_mb) = load_dataset_with_progress(&cli.input, &cli.load_options())?;

    if verbose {
        println!("\n    {} Dataset Statistics:", style("✧").cyan());
        println!("      Rows: {}", rows);
        println!("      Columns: {}", cols);
        println!("      Estimated memory: {:.2} MB", memory_mb);
    }

    if !cli.drop_columns.is_empty() {
        let present: Vec<String> = cli
            .drop_columns
            .iter()
            .filter(|c| *c != &cli.target && df.column(c.as_str()).is_ok())
            .cloned()
            .collect();
        for missing in cli.drop_columns.iter().filter(|c| !present.contains(c)) {
            log::warn!("drop column '{}' not found or is the target; ignored", missing);
        }
        df = df.drop_many(&present);
        if verbose {
            print_count("column(s) dropped before selection", present.len(), None);
        }
    }
    if verbose {
        print_step_time(step_start.elapsed());
    }

    // Step 2: Encode columns
    if verbose {
        print_step_header(2, "Encode Categorical Columns");
    }
    let step_start = Instant::now();
    let spinner = create_spinner("Validating and encoding columns...");
    let dataset = Dataset::from_dataframe(&df, &cli.target)
        .with_context(|| format!("Failed to prepare dataset from {}", cli.input.display()))?;
    finish_with_success(
        &spinner,
        &format!(
            "{} feature(s), target '{}' with {} class(es)",
            dataset.n_features(),
            dataset.label().name(),
            dataset.label().cardinality()
        ),
    );
    if verbose {
        print_step_time(step_start.elapsed());
    }

    // Step 3: FCBF
    if verbose {
        print_step_header(3, "Fast Correlation-Based Filter");
    }
    let step_start = Instant::now();
    let spinner = create_spinner("Computing symmetric uncertainty...");
    let selection = FcbfSelector::new(config).select(&dataset)?;
    if selection.relevant.is_empty() {
        finish_with_warning(&spinner, "No feature passed the threshold");
        print_warning(
            "Found no features with symmetrical uncertainty, given the class, above threshold. \
             Try a lower threshold.",
        );
    } else {
        finish_with_success(&spinner, "Selection complete");
    }

    if verbose {
        print_count(
            "feature(s) below SU threshold",
            selection.below_threshold.len(),
            Some(&format!("(<{:.3})", config.su_threshold())),
        );
        print_count("redundant feature(s)", selection.redundancies.len(), None);
        print_count("selected feature(s)", selection.relevant.len(), None);
        print_step_time(step_start.elapsed());
    }

    // Step 4: Save output
    if verbose {
        print_step_header(4, "Save Results");
    }
    let step_start = Instant::now();

    let mut keep: Vec<String> = selection.relevant.iter().map(|f| f.name.clone()).collect();
    keep.push(cli.target.clone());
    let mut reduced = df
        .select(keep)
        .context("Failed to select features for output")?;
    save_dataset(&mut reduced, &output_path)?;
    if verbose {
        print_success(&format!("Saved reduced dataset to {}", output_path.display()));
    }

    let input_file = cli.input.display().to_string();
    let params = ExportParams {
        input_file: &input_file,
        target_column: &cli.target,
        config: &config,
        rows,
    };
    export_selection(&selection, &report_path, &params)?;

    if verbose {
        print_success(&format!("Saved report to {}", report_path.display()));
        print_step_time(step_start.elapsed());
        SelectionSummary::from_selection(&selection).display();
        print_completion();
    } else {
        print_info(&format!("Selected: {}", selection.relevant_names().join(", ")));
    }

    Ok(())
}
