use crate::params::types::ParameterSet;
use crate::recommend::types::{Recommendation, RecommendationSet};
use crate::sweep::types::ResultRecord;

const BANNER_WIDTH: usize = 80;

/// Renders the analysis as a fixed-width console table: a banner, the input
/// parameters, then one row per record. `maybe_top_n` limits the output to
/// the first n records; the smaller MDEs carry the interesting figures, so
/// the head of the table is the part worth reading.
pub fn render_table(
    params: &ParameterSet,
    records: &[ResultRecord],
    maybe_top_n: Option<usize>,
) -> String {
    let shown = match maybe_top_n {
        Some(top_n) => &records[..top_n.min(records.len())],
        None => records,
    };

    let rule = "=".repeat(BANNER_WIDTH);
    let dash = "-".repeat(BANNER_WIDTH);

    let mut out = String::new();
    out.push_str(&format!("{rule}\n"));
    out.push_str("A/B TEST POWER ANALYSIS RESULTS\n");
    out.push_str(&format!("{rule}\n"));
    out.push_str("Input Parameters:\n");
    out.push_str(&format!(
        "  Baseline Conversion Rate: {:.1}%\n",
        params.baseline_rate() * 100.0
    ));
    out.push_str(&format!(
        "  Monthly Population: {}\n",
        format_thousands(params.monthly_population().round() as usize)
    ));
    out.push_str(&format!("  Number of Variants: {}\n", params.num_variants()));
    out.push_str(&format!(
        "  Statistical Power: {:.1}%\n",
        params.power() * 100.0
    ));
    out.push_str(&format!(
        "  Significance Level: {:.1}%\n",
        params.alpha() * 100.0
    ));
    out.push_str(&format!("{dash}\n"));
    out.push_str(&format!(
        "{:<6} {:<12} {:<10} {:<8} {:<8} {:<8} {:<12}\n",
        "MDE", "Sample/Var", "Total", "Pop %", "Days", "Weeks", "Feasibility"
    ));
    out.push_str(&format!("{dash}\n"));

    for record in shown {
        out.push_str(&format!(
            "{:>3}%   {:>8}    {:>7}   {:>5.1}%   {:>5.1}   {:>5.1}   {}\n",
            record.mde_percent,
            format_thousands(record.sample_size_per_variant),
            format_thousands(record.total_sample_size),
            record.population_split_percent,
            record.duration_days,
            record.duration_weeks,
            record.feasibility,
        ));
    }

    out
}

/// Renders the recommendation sections the analysis ends with. Sections for
/// absent picks are skipped; a table with nothing feasible renders a single
/// explanatory line instead.
pub fn render_recommendations(recommendations: &RecommendationSet) -> String {
    let mut out = String::new();
    if let Some(quick) = &recommendations.quick {
        push_recommendation(&mut out, "Quick Test (< 1 week)", quick);
    }
    if let Some(standard) = &recommendations.standard {
        push_recommendation(&mut out, "Standard Test (1-3 weeks)", standard);
    }
    if let Some(sensitive) = &recommendations.sensitive {
        push_recommendation(&mut out, "Sensitive Test (highest precision)", sensitive);
    }
    if out.is_empty() {
        out.push_str("No feasible test found within the duration and traffic limits.\n");
    }
    out
}

fn push_recommendation(out: &mut String, label: &str, recommendation: &Recommendation) {
    out.push_str(&format!("{label}:\n"));
    out.push_str(&format!("  MDE: {}%\n", recommendation.mde_percent));
    out.push_str(&format!(
        "  Duration: {:.1} days\n",
        recommendation.duration_days
    ));
    out.push_str(&format!(
        "  Sample Size: {}\n",
        format_thousands(recommendation.total_sample_size)
    ));
    out.push('\n');
}

/// Groups digits in threes: 1491400 formats as "1,491,400".
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
