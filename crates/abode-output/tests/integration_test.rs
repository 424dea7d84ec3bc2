//! Integration tests for abode-output.

use abode_output::{
    ColumnDescription, CorrelationSummary, DescriptiveTable, ExportFormat, Exporter,
    FactorCorrelation, ModelComparison, ModelFit, ReportBuilder,
};

fn correlations() -> CorrelationSummary {
    CorrelationSummary::new(
        "CSUSHPISA".to_string(),
        vec![
            FactorCorrelation::new("POPTHM".into(), "Population".into(), 0.95, 1),
            FactorCorrelation::new("HDTGPDUSQ163N".into(), "Household Debt".into(), -0.61, 2),
            FactorCorrelation::new("UNRATE".into(), "Unemployment".into(), -0.33, 3),
        ],
    )
}

fn comparison() -> ModelComparison {
    ModelComparison::new(
        "CSUSHPISA".to_string(),
        vec![
            ModelFit::new(
                "all factors".into(),
                vec!["POPTHM".into(), "HDTGPDUSQ163N".into(), "UNRATE".into()],
                88,
                0.97,
                0.969,
                900.0,
                1e-60,
            ),
            ModelFit::new(
                "top 1 factor".into(),
                vec!["POPTHM".into()],
                88,
                0.90,
                0.899,
                780.0,
                1e-45,
            ),
        ],
    )
}

#[test]
fn test_full_report_workflow() {
    let descriptive = DescriptiveTable::new(
        "finalcombined.csv".to_string(),
        88,
        vec![ColumnDescription {
            name: "POPTHM".to_string(),
            count: 88,
            mean: 325_000.0,
            std: 5_000.0,
            min: 316_000.0,
            q25: 321_000.0,
            median: 325_500.0,
            q75: 329_000.0,
            max: 334_000.0,
        }],
    );

    let report = ReportBuilder::new()
        .dataset("finalcombined.csv")
        .target("CSUSHPISA")
        .section("summary", &descriptive)
        .unwrap()
        .section("correlations", &correlations())
        .unwrap()
        .section("comparison", &comparison())
        .unwrap()
        .build()
        .unwrap();

    let json = report.to_json().unwrap();
    assert!(json.contains("\"dataset\": \"finalcombined.csv\""));
    assert!(json.contains("\"correlations\""));
    assert!(json.contains("\"top 1 factor\""));

    let restored: CorrelationSummary =
        serde_json::from_value(report.contents["correlations"].clone()).unwrap();
    assert_eq!(restored, correlations());
}

#[test]
fn test_report_written_to_disk() {
    let path = std::env::temp_dir().join("abode_report_test.json");
    let report = ReportBuilder::new()
        .target("CSUSHPISA")
        .section("comparison", &comparison())
        .unwrap()
        .build()
        .unwrap();

    report.write_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"all factors\""));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_renderings_agree_on_best_case() {
    let c = comparison();
    let best = c.best_by_adj_r_squared().unwrap();
    assert_eq!(best.label, "all factors");
    assert!(c.to_ascii_table().contains("Highest adjusted R-squared: all factors"));
}

#[test]
fn test_every_format_exports() {
    let summary = correlations();
    for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::PrettyJson] {
        let out = summary.export_to_string(format).unwrap();
        assert!(out.contains("HDTGPDUSQ163N"), "{format:?}");
    }
}
