//! Console lines printed by the binary around a run.

use crate::config::Settings;
use crate::dataset::EntityKind;
use crate::sink::{SinkReport, tabular_available};

/// Printed before writing when the workbook writer is not compiled in.
pub const FALLBACK_NOTICE: &str = "Workbook writer unavailable, creating JSON files instead...";

/// Returns the fallback notice when the run will not produce a workbook
/// even though one was wanted.
///
/// Requesting JSON output explicitly is not a fallback, so no notice is
/// returned in that case.
#[must_use]
pub fn fallback_notice(settings: &Settings) -> Option<&'static str> {
    notice_for(settings.json_only(), tabular_available())
}

const fn notice_for(json_only: bool, tabular: bool) -> Option<&'static str> {
    if json_only || tabular {
        None
    } else {
        Some(FALLBACK_NOTICE)
    }
}

/// Formats the lines printed once the files are written.
///
/// One `Created:` line per file, the seed, then a per-entity summary.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
///
/// use salon_data::{EntityKind, SinkReport, summary_lines};
///
/// let report = SinkReport {
///     sink: "xlsx",
///     files: vec![PathBuf::from("master.xlsx")],
/// };
/// let lines = summary_lines(&report, 7, &[(EntityKind::Customers, 50)]);
///
/// assert_eq!(lines.first().map(String::as_str), Some("Created: master.xlsx"));
/// assert_eq!(lines.last().map(String::as_str), Some("  - Customers: 50"));
/// ```
#[must_use]
pub fn summary_lines(
    report: &SinkReport,
    seed: u64,
    counts: &[(EntityKind, usize)],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.files.len() + counts.len() + 3);
    lines.extend(
        report
            .files
            .iter()
            .map(|file| format!("Created: {}", file.display())),
    );
    lines.push(format!("Seed: {seed}"));
    lines.push(String::new());
    lines.push("Data Summary:".to_owned());
    lines.extend(counts.iter().map(|(kind, count)| format!("  - {kind}: {count}")));
    lines
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(false, false, Some(FALLBACK_NOTICE))]
    #[case(false, true, None)]
    #[case(true, false, None)]
    #[case(true, true, None)]
    fn notice_only_when_a_workbook_was_wanted(
        #[case] json_only: bool,
        #[case] tabular: bool,
        #[case] expected: Option<&'static str>,
    ) {
        assert_eq!(notice_for(json_only, tabular), expected);
    }

    #[test]
    fn explicit_json_output_has_no_notice() {
        let settings = Settings {
            seed: None,
            customer_count: None,
            appointment_count: None,
            output_path: None,
            json_dir: None,
            json_only: true,
        };

        assert_eq!(fallback_notice(&settings), None);
    }

    #[test]
    fn summary_lists_files_seed_and_counts() {
        let report = SinkReport {
            sink: "json",
            files: vec![
                PathBuf::from("json/customers.json"),
                PathBuf::from("json/master_data.json"),
            ],
        };
        let counts = [(EntityKind::Customers, 1), (EntityKind::Invoices, 0)];

        let lines = summary_lines(&report, 2026, &counts);

        assert_eq!(
            lines,
            vec![
                "Created: json/customers.json",
                "Created: json/master_data.json",
                "Seed: 2026",
                "",
                "Data Summary:",
                "  - Customers: 1",
                "  - Invoices: 0",
            ]
        );
    }
}
