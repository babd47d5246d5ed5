// 📏 Developmental Milestones - expected vocabulary size by age
// Reference bands follow CDC / American Academy of Pediatrics guidance.

use serde::Serialize;

// ============================================================================
// MILESTONE BAND
// ============================================================================

/// Expected vocabulary range for a child who has reached `age_months`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneBand {
    /// Age (in whole months) at which this band starts to apply
    pub age_months: u32,

    /// Lower end of the expected word count
    pub min_words: u32,

    /// Upper end of the expected word count (None = unbounded)
    pub max_words: Option<u32>,

    /// Display label, e.g. "18 months"
    pub label: &'static str,
}

impl MilestoneBand {
    /// Human-readable word range, e.g. "10-50 words" or "200+ words"
    pub fn range_label(&self) -> String {
        match self.max_words {
            Some(max) => format!("{}-{} words", self.min_words, max),
            None => format!("{}+ words", self.min_words),
        }
    }
}

// ============================================================================
// MILESTONE TABLE
// ============================================================================

/// Ordered ascending by `age_months`; `min_words` never decreases.
pub static MILESTONES: [MilestoneBand; 6] = [
    MilestoneBand { age_months: 12, min_words: 1, max_words: Some(3), label: "12 months" },
    MilestoneBand { age_months: 15, min_words: 3, max_words: Some(10), label: "15 months" },
    MilestoneBand { age_months: 18, min_words: 10, max_words: Some(50), label: "18 months" },
    MilestoneBand { age_months: 24, min_words: 50, max_words: Some(100), label: "24 months" },
    MilestoneBand { age_months: 30, min_words: 200, max_words: None, label: "30 months" },
    MilestoneBand { age_months: 36, min_words: 450, max_words: None, label: "36 months" },
];

/// Age below which no band applies
const FIRST_MILESTONE_MONTHS: u32 = 12;

/// Return the full reference table for display.
pub fn get_all_milestones() -> &'static [MilestoneBand] {
    &MILESTONES
}

/// Find the band that applies to a child of `months` months.
///
/// Floor lookup: returns the last band whose `age_months` does not exceed
/// `months`. The final band has no upper cutoff, so a 48-month-old still gets
/// the 36-month band. Unknown ages and ages under 12 months get `None`.
pub fn get_milestone_for_age(months: Option<u32>) -> Option<&'static MilestoneBand> {
    let months = months?;
    if months < FIRST_MILESTONE_MONTHS {
        return None;
    }

    get_all_milestones()
        .iter()
        .take_while(|band| band.age_months <= months)
        .last()
}
