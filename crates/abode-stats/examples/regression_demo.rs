//! Demonstration of correlation and OLS regression
//!
//! Run with: cargo run --example regression_demo -p abode-stats

use abode_stats::{CorrelationEstimator, OlsRegression, PearsonEstimator, describe};
use ndarray::{Axis, array, s};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Abode Statistics Demo");
    println!("=====================\n");

    let names: Vec<String> = ["CSUSHPISA", "POPTHM", "MORTGAGE30US"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let data = array![
        [100.0, 300.1, 6.8],
        [103.5, 301.0, 6.5],
        [106.1, 302.2, f64::NAN],
        [110.9, 303.0, 5.9],
        [114.2, 303.9, 5.7],
        [118.8, 305.1, 5.2],
        [121.0, 306.0, 5.4],
        [127.3, 307.2, 4.6],
    ];

    println!("Column summaries:");
    for summary in describe(&names, &data) {
        println!(
            "  {:<14} n={} mean={:.3} std={:.3} median={:.3}",
            summary.name, summary.count, summary.mean, summary.std, summary.median
        );
    }

    let estimator = PearsonEstimator::try_default()?;
    let matrix = estimator.estimate(&names, &data)?;
    println!("\nCorrelation with {}:", names[0]);
    if let Some(row) = matrix.row(&names[0]) {
        for (name, r) in row {
            println!("  {:<14} {:+.4}", name, r);
        }
    }

    // Drop the row with a missing rate before fitting
    let complete: Vec<usize> = (0..data.nrows())
        .filter(|&i| data.row(i).iter().all(|v| v.is_finite()))
        .collect();
    let rows = data.select(Axis(0), &complete);
    let y = rows.column(0).to_owned();
    let x = rows.slice(s![.., 1..]).to_owned();

    let fit = OlsRegression::new().fit(&y, &x, &names[1..])?;
    println!("\nOLS on {} observations:", fit.observations);
    for c in &fit.coefficients {
        println!(
            "  {:<14} {:>12.4} (se {:.4}, t {:.2})",
            c.name, c.estimate, c.std_error, c.t_statistic
        );
    }
    println!(
        "  R² {:.4}, adj. R² {:.4}, F {:.2}, Prob (F) {:.3e}",
        fit.r_squared, fit.adj_r_squared, fit.f_statistic, fit.f_pvalue
    );

    Ok(())
}
