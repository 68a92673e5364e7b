//! Terminal report formatting
//!
//! Formats stats reports for terminal output in table and detail views.

use crate::retention::ExpiryUnit;
use crate::services::StatsReport;

/// Format a stats report as a table
pub fn format_stats_report(report: &StatsReport) -> String {
    if report.entries.is_empty() && report.skipped.is_empty() {
        return "No snapshots found.".to_string();
    }

    let name_width = report
        .entries
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<16}  {:>16}  {:>16}  {}\n",
        "Snapshot",
        "Created",
        "Age",
        "Expires after",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<16}  {:->16}  {:->16}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for stat in &report.entries {
        let status = if stat.age.is_expired() { "expired" } else { "ok" };
        output.push_str(&format!(
            "{:<name_width$}  {:<16}  {:>16}  {:>16}  {}\n",
            stat.name,
            stat.identifier.created_at.format("%Y-%m-%d %H:%M"),
            format_quantity(stat.age.elapsed, stat.age.unit),
            format_quantity(stat.age.threshold, stat.age.unit),
            status,
            name_width = name_width,
        ));
    }

    if !report.skipped.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "Skipped {} entr{} without retention tokens.\n",
            report.skipped.len(),
            if report.skipped.len() == 1 { "y" } else { "ies" }
        ));
    }

    output
}

/// Format a stats report as per-snapshot detail blocks
///
/// Also lists the skipped raw names so an operator can spot entries that
/// carry no (or a broken) retention policy.
pub fn format_stats_details(report: &StatsReport) -> String {
    if report.entries.is_empty() && report.skipped.is_empty() {
        return "No snapshots found.".to_string();
    }

    let separator = "-".repeat(56);
    let mut output = String::new();

    for stat in &report.entries {
        output.push_str(&separator);
        output.push('\n');
        output.push_str(&format!("Snapshot: {}\n", stat.name));
        output.push_str(&format!(
            "Created:  {}\n",
            stat.identifier.created_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&format!(
            "Age:      {}\n",
            format_quantity(stat.age.elapsed, stat.age.unit)
        ));
        output.push_str(&format!(
            "Expires:  after {}\n",
            format_quantity(stat.age.threshold, stat.age.unit)
        ));
        output.push_str(&format!("Expired:  {}\n", stat.age.is_expired()));
    }

    for name in &report.skipped {
        output.push_str(&separator);
        output.push('\n');
        output.push_str(&format!("Snapshot: {}\n", name));
        output.push_str("No retention policy in name, skipped.\n");
    }

    output.push_str(&separator);
    output.push('\n');
    output
}

/// Render an amount in a unit, trimming trailing zeros for whole values
fn format_quantity(value: f64, unit: ExpiryUnit) -> String {
    if value.fract() == 0.0 {
        format!("{:.0} {}", value, unit)
    } else {
        format!("{:.2} {}", value, unit)
    }
}
