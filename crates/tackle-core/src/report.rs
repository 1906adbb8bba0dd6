//! # Earnings Report
//!
//! Builds the end-of-day earnings table from the hire ledger.
//!
//! ```text
//! Customer ID | Equipment            | Number of nights | Total Cost | Returned on time (y/n) | Extra charge for delayed return
//! ------------+----------------------+------------------+------------+------------------------+--------------------------------
//! 101         | Day chairs x 2       | 1                | £30.00     | y                      | £0.00
//! ...
//! Total earnings: £682.50
//! ```
//!
//! Rendering is a pure function of the records: the same records always give
//! byte-identical output.

use serde::Serialize;

use crate::money::Money;
use crate::types::HireRecord;

const ID_W: usize = 11;
const EQUIP_W: usize = 65;
const NIGHTS_W: usize = 16;
const TOTAL_W: usize = 10;
const ON_TIME_W: usize = 22;

/// One hire as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub customer_id: u32,
    /// One entry per line item, e.g. `Day chairs x 2`.
    pub equipment: Vec<String>,
    pub nights: i64,
    pub total: Money,
    pub on_time: bool,
    pub late_penalty: Money,
}

/// The whole report: rows in recording order plus running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsReport {
    pub rows: Vec<ReportRow>,
    pub total_earnings: Money,
    pub total_late_penalties: Money,
}

impl EarningsReport {
    /// Builds the report from records in the order given.
    pub fn from_records(records: &[HireRecord]) -> Self {
        let rows: Vec<ReportRow> = records
            .iter()
            .map(|r| ReportRow {
                customer_id: r.customer_id,
                equipment: r
                    .quote
                    .lines
                    .iter()
                    .map(|l| format!("{} x {}", l.name, l.quantity))
                    .collect(),
                nights: r.nights,
                total: r.total(),
                on_time: r.on_time,
                late_penalty: r.late_penalty(),
            })
            .collect();

        EarningsReport {
            total_earnings: rows.iter().map(|r| r.total).sum(),
            total_late_penalties: rows.iter().map(|r| r.late_penalty).sum(),
            rows,
        }
    }

    /// True when there are no hires to report.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the fixed-width table.
    ///
    /// The equipment column wraps onto continuation rows where every other
    /// column is blank. Trailing spaces are stripped from each line.
    pub fn render_table(&self) -> String {
        if self.is_empty() {
            return "No hires recorded yet.\n".to_string();
        }

        let mut out = String::new();
        let header = header();
        push_line(&mut out, &header);
        push_line(&mut out, &ruler(&header));

        for row in &self.rows {
            let on_time = if row.on_time { "y" } else { "n" };
            let mut equipment = wrap_items(&row.equipment, EQUIP_W).into_iter();
            let first = equipment.next().unwrap_or_default();

            push_line(
                &mut out,
                &format!(
                    "{:<ID_W$} | {:<EQUIP_W$} | {:<NIGHTS_W$} | {:<TOTAL_W$} | {:<ON_TIME_W$} | {}",
                    row.customer_id, first, row.nights, row.total, on_time, row.late_penalty
                ),
            );
            for cont in equipment {
                push_line(
                    &mut out,
                    &format!(
                        "{:<ID_W$} | {:<EQUIP_W$} | {:<NIGHTS_W$} | {:<TOTAL_W$} | {:<ON_TIME_W$} |",
                        "", cont, "", "", ""
                    ),
                );
            }
        }

        out.push('\n');
        push_line(&mut out, &format!("Total earnings: {}", self.total_earnings));
        push_line(
            &mut out,
            &format!("Of which late-return charges: {}", self.total_late_penalties),
        );
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn header() -> String {
    format!(
        "{:<ID_W$} | {:<EQUIP_W$} | {:<NIGHTS_W$} | {:<TOTAL_W$} | {:<ON_TIME_W$} | {}",
        "Customer ID",
        "Equipment",
        "Number of nights",
        "Total Cost",
        "Returned on time (y/n)",
        "Extra charge for delayed return"
    )
}

fn ruler(header: &str) -> String {
    header
        .split('|')
        .map(|col| "-".repeat(col.chars().count()))
        .collect::<Vec<_>>()
        .join("+")
}

/// Packs `items` into lines of at most `width` characters, joined with
/// `", "`. An item longer than `width` is split across lines on its own.
fn wrap_items(items: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();

    for item in items {
        let item_len = item.chars().count();
        if item_len > width {
            if !cur.is_empty() {
                lines.push(std::mem::take(&mut cur));
            }
            let chars: Vec<char> = item.chars().collect();
            lines.extend(chars.chunks(width).map(|c| c.iter().collect::<String>()));
            continue;
        }

        let sep = if cur.is_empty() { 0 } else { 2 };
        if cur.chars().count() + sep + item_len <= width {
            if sep > 0 {
                cur.push_str(", ");
            }
            cur.push_str(item);
        } else {
            lines.push(std::mem::replace(&mut cur, item.clone()));
        }
    }

    if !cur.is_empty() || lines.is_empty() {
        lines.push(cur);
    }
    lines
}
