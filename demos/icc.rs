//! # Intraclass Correlation Coefficients
//!
//! Rates the agreement between judges scoring the same set of targets.
//!
//! ## Which coefficient?
//! - ICC(1,·): each target is scored by a different, random set of judges
//! - ICC(2,·): the same random sample of judges scores every target and
//!   systematic judge offsets count as disagreement (absolute agreement)
//! - ICC(3,·): the judges are the only ones of interest and offsets are
//!   ignored (consistency)
//! - `·,1` describes a single judge, `·,k` the mean of all k judges
//!
//! Run with: `RUST_LOG=anofox_icc=debug cargo run --example icc`

use anofox_icc::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), IccError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== Intraclass Correlation Coefficients ===\n");

    two_judges()?;
    shrout_fleiss()?;
    null_hypothesis()?;
    degenerate_table()?;

    Ok(())
}

fn print_analysis(analysis: &IccAnalysis) {
    println!(
        "{:<9} {:<24} {:>7} {:>8} {:>4} {:>6} {:>9}  CI {:.0}%",
        "Type",
        "Description",
        "ICC",
        "F",
        "df1",
        "df2",
        "p",
        analysis.confidence_level() * 100.0
    );
    for r in analysis {
        println!(
            "{:<9} {:<24} {:>7.3} {:>8.3} {:>4} {:>6} {:>9.5}  [{:.3}, {:.3}]",
            r.label(),
            r.descriptive_name(),
            r.estimate,
            r.f_statistic,
            r.df1,
            r.df2,
            r.p_value,
            r.ci_lower(),
            r.ci_upper()
        );
    }
    println!();
}

/// Two judges scoring ten targets
fn two_judges() -> Result<(), IccError> {
    println!("--- 10 targets, 2 judges ---\n");

    let table = RatingTable::from_rows(&[
        [103.0, 119.0],
        [82.0, 65.0],
        [116.0, 106.0],
        [102.0, 102.0],
        [99.0, 105.0],
        [98.0, 100.0],
        [104.0, 107.0],
        [62.0, 85.0],
        [97.0, 101.0],
        [107.0, 110.0],
    ])?;

    let analysis = icc(&table, 0.05)?;
    print_analysis(&analysis);

    let vc = analysis.variance_components();
    println!(
        "Mean squares: targets={:.3} judges={:.3} within={:.3} residual={:.3}\n",
        vc.rms, vc.cms, vc.wms, vc.ems
    );
    Ok(())
}

/// Shrout & Fleiss (1979) example: 6 targets, 4 judges
fn shrout_fleiss() -> Result<(), IccError> {
    println!("--- Shrout & Fleiss (1979), 6 targets x 4 judges ---\n");

    let analysis = IccAnalyzer::builder()
        .confidence_level(0.95)
        .build()
        .analyze_rows(&[
            [9.0, 2.0, 5.0, 8.0],
            [6.0, 1.0, 3.0, 2.0],
            [8.0, 4.0, 6.0, 8.0],
            [7.0, 1.0, 2.0, 6.0],
            [10.0, 5.0, 6.0, 9.0],
            [6.0, 2.0, 4.0, 7.0],
        ])?;
    print_analysis(&analysis);

    println!("Judge 2 scores consistently lower, so absolute agreement (ICC2)");
    println!(
        "is much weaker than consistency (ICC3): {:.3} vs {:.3}\n",
        analysis[IccType::Icc2].estimate,
        analysis[IccType::Icc3].estimate
    );
    Ok(())
}

/// Testing against a non-zero ICC
fn null_hypothesis() -> Result<(), IccError> {
    println!("--- H0: ICC = 0.5 ---\n");

    let table = RatingTable::from_fn(8, 3, |i, j| (i as f64) * 2.0 + ((i + j) % 3) as f64)?;
    let analysis = IccAnalyzer::builder().rho0(0.5).build().analyze(&table)?;

    for r in &analysis {
        println!(
            "{:<9} estimate={:.3} F={:.3} p={:.4} significant={}",
            r.label(),
            r.estimate,
            r.f_statistic,
            r.p_value,
            r.is_significant(analysis.alpha())
        );
    }
    println!();
    Ok(())
}

/// Perfect agreement makes the within-target mean square zero
fn degenerate_table() -> Result<(), IccError> {
    println!("--- Judges in perfect agreement ---\n");

    let table = RatingTable::from_fn(5, 3, |i, _| (i + 1) as f64)?;
    let analysis = icc(&table, 0.05)?;

    for r in &analysis {
        println!(
            "{:<9} estimate={:.3} finite={}",
            r.label(),
            r.estimate,
            r.is_finite()
        );
    }
    Ok(())
}
