// 📤 CSV Export - spreadsheet-friendly dump of the vocabulary
// UTF-8 with a BOM so Excel picks the right encoding.

use chrono::NaiveDate;

use crate::error::{Result, TrackerError};
use crate::words::WordEntry;

/// Byte-order mark written before the header row
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Column headers, in order
pub const EXPORT_HEADERS: [&str; 4] = ["Word", "Date Added", "Added By", "Category"];

const FILENAME_PREFIX: &str = "emily_words_";

/// Order entries oldest first, the order rows appear in the export.
pub fn sort_for_export(entries: &mut [WordEntry]) {
    entries.sort_by(|a, b| a.date_added.cmp(&b.date_added));
}

/// Render `entries` as CSV text in the order given.
///
/// Dates are `YYYY-MM-DD`; a missing date or category becomes an empty
/// field. Fields containing commas or quotes are quoted.
pub fn generate_csv_content(entries: &[WordEntry]) -> Result<String> {
    let mut buffer = UTF8_BOM.as_bytes().to_vec();

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(EXPORT_HEADERS)?;

        for entry in entries {
            let date = entry
                .date_added
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default();

            writer.write_record([
                entry.word.as_str(),
                date.as_str(),
                entry.added_by.as_str(),
                entry.category.as_deref().unwrap_or(""),
            ])?;
        }

        writer.flush()?;
    }

    String::from_utf8(buffer)
        .map_err(|e| TrackerError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Download name for an export produced on `today`: `emily_words_YYYY-MM-DD.csv`
pub fn export_filename(today: NaiveDate) -> String {
    format!("{}{}.csv", FILENAME_PREFIX, today.format("%Y-%m-%d"))
}
