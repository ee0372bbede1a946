//! Plain-text formatting of evaluation reports.

use std::fmt::Write;

use crate::domain::ahp::{ConsistencyResult, EvaluationReport, WeightTable};

/// Width, in characters, of the longest bar.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Formats the criteria table, one table per criterion and the overall ranking.
pub fn format_report(report: &EvaluationReport) -> String {
    let mut out = String::new();

    if !report.goal.is_empty() {
        let _ = writeln!(out, "Goal: {}", report.goal);
        out.push('\n');
    }

    write_table(&mut out, &report.criteria_table);
    for table in &report.alternative_tables {
        out.push('\n');
        write_table(&mut out, table);
    }

    out.push('\n');
    out.push_str("Overall ranking\n");
    let name_width = column_width(report.ranking.iter().map(|r| r.name.as_str()));
    for ranked in &report.ranking {
        let _ = writeln!(
            out,
            "  {:>2}. {:<width$}  {:.4}",
            ranked.rank,
            ranked.name,
            ranked.weight,
            width = name_width
        );
    }

    if let Some(best) = &report.recommended {
        let _ = writeln!(out, "\nRecommended: {} ({:.4})", best.name, best.weight);
    }

    out
}

/// Draws a horizontal bar chart of `(label, value)` pairs, scaled so the
/// largest value spans `width` characters.
pub fn format_bar_chart(series: &[(&str, f64)], width: usize) -> String {
    let max = series
        .iter()
        .map(|(_, value)| *value)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    let label_width = column_width(series.iter().map(|(label, _)| *label));

    let mut out = String::new();
    for (label, value) in series {
        let len = if max > 0.0 && value.is_finite() && *value > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<lw$} | {:<bw$} {:.4}",
            label,
            "#".repeat(len),
            value,
            lw = label_width,
            bw = width
        );
    }
    out
}

fn write_table(out: &mut String, table: &WeightTable) {
    let _ = writeln!(
        out,
        "{} ({})",
        table.title,
        describe_consistency(&table.consistency)
    );
    if !table.status.is_computed() {
        let _ = writeln!(out, "  judgments unavailable, weights set to zero");
    }

    let id_width = column_width(table.rows.iter().map(|r| r.id.as_str()));
    let name_width = column_width(table.rows.iter().map(|r| r.name.as_str()));
    for row in &table.rows {
        let _ = writeln!(
            out,
            "  {:<iw$}  {:<nw$}  {:.4}",
            row.id,
            row.name,
            row.weight,
            iw = id_width,
            nw = name_width
        );
    }
}

fn describe_consistency(result: &ConsistencyResult) -> String {
    format!(
        "lambda_max={}, CI={}, CR={}, {}",
        figure(result.lambda_max),
        figure(result.ci),
        figure(result.cr),
        result.verdict.label()
    )
}

fn figure(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.4}", value)
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}
