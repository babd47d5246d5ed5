// 📊 Statistics View - vocabulary size against developmental milestones

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

use crate::age::age_months_on;
use crate::milestones::{get_all_milestones, get_milestone_for_age, MilestoneBand};
use crate::monthly::{compute_monthly_stats, MonthlyStat};
use crate::words::WordEntry;

/// Everything the statistics page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_words: usize,

    /// None when no birthdate is configured
    pub age_months: Option<u32>,

    /// Band for the current age (None under 12 months or age unknown)
    pub current_milestone: Option<MilestoneBand>,

    pub milestones: Vec<MilestoneBand>,

    pub monthly: Vec<MonthlyStat>,
}

/// Assemble the report for `entries` as of `today`.
pub fn build_report(entries: &[WordEntry], birthdate: Option<NaiveDate>, today: NaiveDate) -> StatsReport {
    let age_months = age_months_on(birthdate, today);

    StatsReport {
        total_words: entries.len(),
        age_months,
        current_milestone: get_milestone_for_age(age_months).copied(),
        milestones: get_all_milestones().to_vec(),
        monthly: compute_monthly_stats(entries),
    }
}

impl StatsReport {
    /// Where the vocabulary sits relative to the current band, if any
    pub fn milestone_status(&self) -> Option<&'static str> {
        let band = self.current_milestone?;
        let total = self.total_words;

        if total < band.min_words as usize {
            Some("below range")
        } else if band.max_words.map_or(false, |max| total > max as usize) {
            Some("above range")
        } else {
            Some("within range")
        }
    }

    /// Plain-text rendering for the terminal
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Statistics");
        let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        let _ = writeln!(out, "Total words: {}", self.total_words);

        match self.age_months {
            Some(months) => {
                let _ = writeln!(out, "Emily's Age: {} months", months);
            }
            None => {
                let _ = writeln!(out, "Emily's Age: unknown (set BABY_BIRTHDATE)");
            }
        }

        if let (Some(band), Some(status)) = (self.current_milestone, self.milestone_status()) {
            let _ = writeln!(
                out,
                "Current milestone: {} ({}) - {}",
                band.label,
                band.range_label(),
                status
            );
        }

        let _ = writeln!(out, "\nMilestones");
        for band in &self.milestones {
            let marker = if Some(*band) == self.current_milestone { "→" } else { " " };
            let _ = writeln!(out, "{} {:<10} {}", marker, band.label, band.range_label());
        }

        let _ = writeln!(out, "\nWords by Month");
        if self.monthly.is_empty() {
            let _ = writeln!(out, "No words added yet");
        } else {
            let _ = writeln!(out, "{:<16} {:>6} {:>14}", "Month", "Words", "Running Total");
            for stat in &self.monthly {
                let _ = writeln!(
                    out,
                    "{:<16} {:>6} {:>14}",
                    format!("{} {}", stat.month_name, stat.year),
                    stat.count,
                    stat.running_total
                );
            }
        }

        out
    }
}
