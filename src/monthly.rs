//! Monthly aggregation of word entries with running totals.

use std::collections::BTreeMap;

use chrono::{Datelike, Month};
use serde::Serialize;

use crate::words::WordEntry;

/// Calendar month key: (year, month 1-12)
pub type MonthKey = (i32, u32);

/// Words added in one calendar month, plus the cumulative count so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub count: usize,
    pub running_total: usize,
}

/// English month name for 1-12, empty for anything else.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Group entries by the calendar month of `date_added`.
///
/// Entries without a timestamp are left out. Within a group, entries keep
/// their input order.
pub fn group_by_month(entries: &[WordEntry]) -> BTreeMap<MonthKey, Vec<&WordEntry>> {
    let mut groups: BTreeMap<MonthKey, Vec<&WordEntry>> = BTreeMap::new();

    for entry in entries {
        if let Some(added) = entry.date_added {
            groups
                .entry((added.year(), added.month()))
                .or_default()
                .push(entry);
        }
    }

    groups
}

/// Per-month counts in chronological order with a running total.
///
/// The last element's `running_total` equals the number of timestamped
/// entries. Empty input gives an empty result.
pub fn compute_monthly_stats(entries: &[WordEntry]) -> Vec<MonthlyStat> {
    let mut running_total = 0;

    group_by_month(entries)
        .into_iter()
        .map(|((year, month), group)| {
            running_total += group.len();
            MonthlyStat {
                year,
                month,
                month_name: month_name(month).to_string(),
                count: group.len(),
                running_total,
            }
        })
        .collect()
}
