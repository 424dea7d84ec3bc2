//! Demonstration of the export functionality in abode-output.

use abode_output::{
    CorrelationSummary, ExportFormat, Exporter, FactorCorrelation, ModelComparison, ModelFit,
    ReportBuilder,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Abode Export Demo ===\n");

    let correlations = CorrelationSummary::new(
        "CSUSHPISA".to_string(),
        vec![
            FactorCorrelation::new("POPTHM".into(), "Population".into(), 0.94, 1),
            FactorCorrelation::new("MORTGAGE30US".into(), "Mortgage Rate".into(), -0.71, 2),
            FactorCorrelation::new("UNRATE".into(), "Unemployment".into(), -0.38, 3),
        ],
    );

    println!("1. Correlations\n");
    print!("{}", correlations.to_ascii_table(10));
    println!("\nCSV Format:");
    println!("{}", correlations.export_to_string(ExportFormat::Csv)?);

    let comparison = ModelComparison::new(
        "CSUSHPISA".to_string(),
        vec![
            ModelFit::new(
                "all factors".into(),
                vec!["POPTHM".into(), "MORTGAGE30US".into(), "UNRATE".into()],
                96,
                0.962,
                0.961,
                741.2,
                3.1e-65,
            ),
            ModelFit::new(
                "top 1 factor".into(),
                vec!["POPTHM".into()],
                96,
                0.884,
                0.883,
                716.5,
                1.4e-45,
            ),
        ],
    );

    println!("2. Regression Comparison\n");
    print!("{}", comparison.to_ascii_table());
    println!("\nMarkdown:\n{}", comparison.to_markdown());
    println!("CSV Format:");
    println!("{}", comparison.export_to_string(ExportFormat::Csv)?);

    println!("3. Report\n");
    let report = ReportBuilder::new()
        .dataset("finalcombined.csv")
        .target("CSUSHPISA")
        .section("correlations", &correlations)?
        .section("comparison", &comparison)?
        .build()?;
    println!("{}", report.to_json()?);

    Ok(())
}
