//! Output formatting and persistence for roster reports.
//!
//! Supports pretty-printing, JSON serialization, CSV export, and a plain
//! text table for the terminal.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::grades::types::{RosterReport, StudentRow};
use csv::WriterBuilder;
use std::fs::File;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &RosterReport) {
    debug!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &RosterReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a report as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: &str, report: &RosterReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
    serde_json::to_writer_pretty(file, report)?;
    debug!(path, "Report written");
    Ok(())
}

/// Writes student rows to a CSV file with a header, replacing any existing file.
///
/// Undefined GPAs are left empty in the `gpa` column and shown as `N/A` in
/// `gpa_display`.
pub fn write_rows_csv(path: &str, rows: &[StudentRow]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path, rows = rows.len(), "CSV written");
    Ok(())
}

/// Renders rows as a fixed-width text table.
pub fn render_table(rows: &[StudentRow]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!(
        "{:>8}  {:<name_width$}  {:<11}  {:>7}  {:>6}\n",
        "ID", "Name", "Standing", "Credits", "GPA"
    );
    for row in rows {
        out.push_str(&format!(
            "{:>8}  {:<name_width$}  {:<11}  {:>7}  {:>6}\n",
            row.id,
            row.name,
            row.standing.as_str(),
            row.total_credit_hours,
            row.gpa_display
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Policy;
    use crate::grades::summary::build_report;
    use crate::grades::types::{Class, Standing, StudentRecord};
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn students() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new(
                "Ada",
                1,
                Standing::ThirdYear,
                vec![Class::new("Logic", 3, "A"), Class::new("Sets", 3, "B-")],
            ),
            StudentRecord::new("Cyd", 2, Standing::Graduate, vec![Class::new("Seminar", 2, "P")]),
        ]
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let report = build_report(&students(), &Policy::default());
        print_pretty(&report);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = build_report(&students(), &Policy::default());
        print_json(&report).unwrap();
    }

    #[test]
    fn test_write_json_round_trips_as_value() {
        let path = temp_path("gpa_roster_test_report.json");
        let _ = fs::remove_file(&path);

        let report = build_report(&students(), &Policy::default());
        write_json(&path, &report).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["students"][0]["gpa"], 3.35);
        assert!(value["students"][1]["gpa"].is_null());
        assert_eq!(value["students"][1]["gpa_display"], "N/A");
        assert_eq!(value["policy"]["attention_min_credit_hours"], 16);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_rows_csv_header_and_rows() {
        let path = temp_path("gpa_roster_test_rows.csv");
        let _ = fs::remove_file(&path);

        let report = build_report(&students(), &Policy::default());
        write_rows_csv(&path, &report.students).unwrap();
        write_rows_csv(&path, &report.students).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name,standing"));
        assert!(lines[2].ends_with(",N/A"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_render_table() {
        let report = build_report(&students(), &Policy::default());
        let table = render_table(&report.students);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("GPA"));
        assert!(lines[1].contains("Ada") && lines[1].ends_with("3.35"));
        assert!(lines[2].contains("graduate") && lines[2].ends_with("N/A"));
    }
}
