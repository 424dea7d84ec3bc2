//! Demonstration of the factor ranker
//!
//! This example shows how to:
//! - Build a correlation matrix from a nested mapping
//! - Rank indicators against the home price index
//! - Take the strongest few and look up their labels
//!
//! Run with: cargo run --example ranking_demo -p abode-factors

use abode_factors::{FactorSelection, TARGET_INDEX, display_name, rank, top_k};
use abode_stats::CorrelationMatrix;
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Abode Factor Ranking Demo");
    println!("=========================\n");

    let target_row = [
        ("POPTHM", 0.94),
        ("UNRATE", -0.38),
        ("MORTGAGE30US", -0.71),
        ("PERMIT1", 0.55),
        ("FORECLOSURES", -0.62),
    ];

    let mut nested: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    let names: Vec<&str> = std::iter::once(TARGET_INDEX)
        .chain(target_row.iter().map(|(n, _)| *n))
        .collect();
    for a in &names {
        let row = nested.entry(a.to_string()).or_default();
        for b in &names {
            let r = if a == b {
                1.0
            } else if *a == TARGET_INDEX || *b == TARGET_INDEX {
                let other = if *a == TARGET_INDEX { b } else { a };
                target_row
                    .iter()
                    .find(|(n, _)| n == other)
                    .map_or(0.0, |(_, r)| *r)
            } else {
                0.0
            };
            row.insert(b.to_string(), r);
        }
    }
    let matrix = CorrelationMatrix::from_nested(&nested)?;

    let ranking = rank(&matrix, TARGET_INDEX)?;
    println!("Ranked against {}:", display_name(TARGET_INDEX));
    for (i, entry) in ranking.iter().enumerate() {
        println!(
            "  {}. {:<14} {:<24} |r| = {:.2} ({:+.2})",
            i + 1,
            entry.name,
            display_name(&entry.name),
            entry.abs_correlation,
            entry.correlation
        );
    }

    println!("\nTop 3: {:?}", top_k(&ranking, 3).names());

    println!("\nComparison cases:");
    for case in FactorSelection::default_cases() {
        println!("  {:<14} -> {:?}", case.label(), case.resolve(&ranking));
    }

    match rank(&matrix, "HOUST") {
        Ok(_) => println!("\nunexpected ranking"),
        Err(e) => println!("\nRanking an unknown target fails: {}", e),
    }

    Ok(())
}
