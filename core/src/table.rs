//! # Result Table
//!
//! Renders a [`SweepReport`] as a framed two-column table, reachable hosts
//! on the left, unreachable on the right. Rows pair the sequences by
//! position only; the pairing implies no relationship between the two
//! addresses on a row.

use sweepr_common::network::report::SweepReport;

pub const COLUMN_WIDTH: usize = 15;

/// Renders the report at the default column width.
pub fn render(report: &SweepReport) -> Vec<String> {
    render_with_width(report, COLUMN_WIDTH)
}

/// Renders the report as bordered text lines.
///
/// Emits `report.rows()` data rows; once the shorter sequence runs out its
/// column is blank padding. Rendering is pure, so the same report always
/// yields the same lines.
pub fn render_with_width(report: &SweepReport, column_width: usize) -> Vec<String> {
    let cell = column_width + 2;
    let border = "-".repeat(cell * 2 + 3);

    let mut lines = Vec::with_capacity(report.rows() + 4);
    lines.push(border.clone());
    lines.push(format!("|{:^cell$}|{:^cell$}|", "Reachable", "Unreachable"));
    lines.push(border.clone());

    for row in 0..report.rows() {
        let left = report.reachable().get(row).map_or("", String::as_str);
        let right = report.unreachable().get(row).map_or("", String::as_str);
        lines.push(format!("| {left:<column_width$} | {right:<column_width$} |"));
    }

    lines.push(border);
    lines
}
