//! Abode CLI binary.
//!
//! Ranks housing-market indicators by correlation with the home price index
//! and compares regressions of the index on the strongest of them.

mod config;
mod logging;

use abode::analysis::{
    FactorAnalysis, correlation_summary, descriptive_table, model_comparison,
};
use abode::data::Dataset;
use abode_factors::{FactorRanking, FactorSelection, display_name};
use abode_output::{ExportFormat, Exporter};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "abode")]
#[command(about = "Abode: housing-market factor ranking and regression comparison", long_about = None)]
#[command(version)]
struct Cli {
    /// Combined indicator CSV
    #[arg(long, default_value = "finalcombined.csv")]
    data: PathBuf,

    /// Target column (overrides the config file)
    #[arg(long)]
    target: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Descriptive statistics of every numeric column
    Describe,

    /// Signed correlations with the target
    Correlate {
        /// Rows to show (defaults to the configured display limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Factors ranked by absolute correlation with the target
    Rank {
        /// Show only the strongest K factors
        #[arg(long)]
        top: Option<usize>,
    },

    /// Compare regressions of the target on factor selections
    Compare {
        /// Comma separated selections; 0 or "all" means every factor
        #[arg(long, value_delimiter = ',')]
        cases: Option<Vec<FactorSelection>>,
    },

    /// Full analysis as one JSON report
    Report {
        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Export one result table to a file
    Export {
        /// Table to export
        #[arg(long, value_enum)]
        kind: ExportKind,

        /// Destination file
        #[arg(long)]
        output: PathBuf,

        /// File format: csv, json or pretty-json
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportKind {
    Correlations,
    Fits,
    Summary,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(target) = cli.target {
        config.target = target;
    }
    match &cli.command {
        Commands::Correlate { limit: Some(limit) } => config.display_limit = *limit,
        Commands::Compare { cases: Some(cases) } => config.cases = cases.clone(),
        _ => {}
    }

    let dataset = Dataset::from_csv(&cli.data)?;
    info!(
        path = %cli.data.display(),
        rows = dataset.height(),
        columns = dataset.width(),
        skipped = dataset.skipped_columns().len(),
        "loaded dataset"
    );
    let analysis = FactorAnalysis::new(&dataset, config)?;

    match cli.command {
        Commands::Describe => describe(&analysis, cli.format)?,
        Commands::Correlate { .. } => correlate(&analysis, cli.format)?,
        Commands::Rank { top } => rank_factors(&analysis, top, cli.format)?,
        Commands::Compare { .. } => compare(&analysis, cli.format)?,
        Commands::Report { output } => report(&analysis, output.as_deref())?,
        Commands::Export {
            kind,
            output,
            format,
        } => export(&analysis, kind, &output, format)?,
    }

    Ok(())
}

fn describe(
    analysis: &FactorAnalysis<'_>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = analysis.dataset();
    let table =
        descriptive_table(dataset.source(), dataset.height(), &analysis.summaries()?);

    match format {
        OutputFormat::Text => {
            print!("{}", table.to_ascii_table());
            if !dataset.skipped_columns().is_empty() {
                println!(
                    "Non-numeric columns skipped: {}",
                    dataset.skipped_columns().join(", ")
                );
            }
        }
        OutputFormat::Markdown => print!("{}", table.to_markdown()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}

fn correlate(
    analysis: &FactorAnalysis<'_>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = correlation_summary(&analysis.ranking()?);
    let limit = analysis.config().display_limit;

    match format {
        OutputFormat::Text => print!("{}", summary.to_ascii_table(limit)),
        OutputFormat::Markdown => print!("{}", summary.to_markdown(limit)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn rank_factors(
    analysis: &FactorAnalysis<'_>,
    top: Option<usize>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let full = analysis.ranking()?;
    let ranking = top.map_or_else(|| full.clone(), |k| full.top_k(k));

    match format {
        OutputFormat::Text => print!("{}", ranking_text(&ranking)),
        OutputFormat::Markdown => print!("{}", ranking_markdown(&ranking)),
        OutputFormat::Json => {
            let entries: Vec<_> = ranking
                .iter()
                .map(|e| json!({ "factor": e.name, "abs_correlation": e.abs_correlation }))
                .collect();
            let output = json!({ "target": ranking.target(), "ranking": entries });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn ranking_text(ranking: &FactorRanking) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\nFactors ranked by |correlation| with {}\n",
        ranking.target()
    ));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:>4}  {:<16} {:<24} {:>10}\n",
        "Rank", "Factor", "Label", "|Corr.|"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (i, entry) in ranking.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:<16} {:<24} {:>10.4}\n",
            i + 1,
            entry.name,
            display_name(&entry.name),
            entry.abs_correlation
        ));
    }

    output.push_str(&"=".repeat(60));
    output.push('\n');
    output
}

fn ranking_markdown(ranking: &FactorRanking) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Factors ranked by |correlation| with {}\n\n",
        ranking.target()
    ));
    output.push_str("| Rank | Factor | Label | Absolute correlation |\n");
    output.push_str("|------|--------|-------|----------------------|\n");
    for (i, entry) in ranking.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {:.4} |\n",
            i + 1,
            entry.name,
            display_name(&entry.name),
            entry.abs_correlation
        ));
    }
    output
}

fn compare(
    analysis: &FactorAnalysis<'_>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let cases = analysis.compare()?;
    let comparison = model_comparison(&analysis.config().target, &cases);

    match format {
        OutputFormat::Text => {
            print!("{}", comparison.to_ascii_table());
            for case in &cases {
                println!("\n{} coefficients:", case.label);
                for c in &case.fit.coefficients {
                    println!(
                        "  {:<16} {:>14.6} (se {:.6}, t {:.3})",
                        c.name, c.estimate, c.std_error, c.t_statistic
                    );
                }
            }
        }
        OutputFormat::Markdown => print!("{}", comparison.to_markdown()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cases)?),
    }
    Ok(())
}

fn report(
    analysis: &FactorAnalysis<'_>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = analysis.run()?.report()?;

    match output {
        Some(path) => {
            report.write_to_file(path)?;
            info!(path = %path.display(), "wrote report");
            println!("Report written to {}", path.display());
        }
        None => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn export(
    analysis: &FactorAnalysis<'_>,
    kind: ExportKind,
    output: &Path,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match kind {
        ExportKind::Correlations => {
            correlation_summary(&analysis.ranking()?).export_to_file(output, format)?;
        }
        ExportKind::Fits => {
            let cases = analysis.compare()?;
            model_comparison(&analysis.config().target, &cases)
                .export_to_file(output, format)?;
        }
        ExportKind::Summary => {
            let dataset = analysis.dataset();
            descriptive_table(dataset.source(), dataset.height(), &analysis.summaries()?)
                .export_to_file(output, format)?;
        }
    }

    info!(path = %output.display(), kind = ?kind, format = ?format, "exported");
    println!("Exported to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare_cases() {
        let cli = Cli::parse_from(["abode", "compare", "--cases", "0,5,1"]);
        match cli.command {
            Commands::Compare { cases } => assert_eq!(
                cases.unwrap(),
                vec![
                    FactorSelection::All,
                    FactorSelection::Top(5),
                    FactorSelection::Top(1)
                ]
            ),
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::parse_from([
            "abode",
            "--data",
            "houses.csv",
            "--target",
            "PERMIT1",
            "--format",
            "markdown",
            "-vv",
            "rank",
            "--top",
            "3",
        ]);
        assert_eq!(cli.data, PathBuf::from("houses.csv"));
        assert_eq!(cli.target.as_deref(), Some("PERMIT1"));
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Rank { top: Some(3) }));
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from([
            "abode",
            "export",
            "--kind",
            "fits",
            "--output",
            "fits.json",
            "--format",
            "pretty-json",
        ]);
        match cli.command {
            Commands::Export {
                kind,
                output,
                format,
            } => {
                assert_eq!(kind, ExportKind::Fits);
                assert_eq!(output, PathBuf::from("fits.json"));
                assert_eq!(format, ExportFormat::PrettyJson);
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_invalid_case_rejected() {
        assert!(Cli::try_parse_from(["abode", "compare", "--cases", "five"]).is_err());
    }
}
