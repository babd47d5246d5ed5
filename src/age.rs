// 🎂 Age Calculation - whole months between a birthdate and a reference date

use chrono::{Datelike, NaiveDate};

/// Whole months elapsed from `birthdate` to `reference`.
///
/// The monthly anniversary counts only once its day has been reached, so
/// 2024-01-15 → 2024-07-10 is 5 months and 2024-01-15 → 2024-07-20 is 6.
/// Reference dates before the birthdate clamp to 0.
pub fn calculate_age_months(birthdate: NaiveDate, reference: NaiveDate) -> u32 {
    let mut months = (reference.year() - birthdate.year()) * 12
        + (reference.month() as i32 - birthdate.month() as i32);

    if reference.day() < birthdate.day() {
        months -= 1;
    }

    months.max(0) as u32
}

/// Age on `reference`, or `None` when the birthdate is unknown.
pub fn age_months_on(birthdate: Option<NaiveDate>, reference: NaiveDate) -> Option<u32> {
    birthdate.map(|b| calculate_age_months(b, reference))
}
