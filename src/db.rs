use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::words::{find_duplicate, find_duplicate_excluding, WordEntry, WordFilter};

/// Storage format for timestamps (lexicographic order == chronological order)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display name used when an imported row has no "Added By" value
const UNKNOWN_USER: &str = "Unknown";

/// Categories created on first setup
const DEFAULT_CATEGORIES: [(&str, &str); 5] = [
    ("Noun", "People, places, things"),
    ("Verb", "Action words"),
    ("Animal Sound", "Sounds animals make (moo, woof, etc.)"),
    ("Person", "Names of people (mama, dada, etc.)"),
    ("Other", "Words that don't fit other categories"),
];

/// Family member who can add words
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
}

/// Word category (Noun, Verb, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Outcome of a CSV import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp. Accepts the storage format and ISO 8601 with a
/// `T` separator and optional fraction; anything else is None.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // Enable WAL mode for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            display_name TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS words (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            word TEXT NOT NULL,
            date_added TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id),
            category_id INTEGER REFERENCES categories(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_words_date_added ON words(date_added)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_words_lower_word ON words(lower(word))",
        [],
    )?;

    Ok(())
}

/// Insert the default categories if none exist yet. Returns how many were added.
pub fn seed_categories(conn: &Connection) -> Result<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
    if existing > 0 {
        debug!("Categories already exist, skipping seeding");
        return Ok(0);
    }

    for (name, description) in DEFAULT_CATEGORIES {
        conn.execute(
            "INSERT INTO categories (name, description) VALUES (?1, ?2)",
            params![name, description],
        )?;
    }

    info!("Created {} categories", DEFAULT_CATEGORIES.len());
    Ok(DEFAULT_CATEGORIES.len())
}

fn username_for(display_name: &str) -> String {
    display_name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Id of the user with this display name, creating the user if needed.
///
/// Users are matched on their derived username, so names differing only in
/// case or spacing ("Nick" / "nick") resolve to the same user.
pub fn ensure_user(conn: &Connection, display_name: &str) -> Result<i64> {
    let display_name = display_name.trim();
    let username = username_for(display_name);

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM users WHERE username = ?1",
            [&username],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO users (username, display_name) VALUES (?1, ?2)",
        params![username, display_name],
    )?;
    debug!("Created user {:?}", display_name);

    Ok(conn.last_insert_rowid())
}

/// Id of the category with this name, creating it if needed.
pub fn ensure_category(conn: &Connection, name: &str) -> Result<i64> {
    let name = name.trim();

    let existing: Option<i64> = conn
        .query_row("SELECT id FROM categories WHERE name = ?1", [name], |row| row.get(0))
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
    debug!("Created category {:?}", name);

    Ok(conn.last_insert_rowid())
}

/// All words with their user and category names, oldest first.
pub fn get_all_words(conn: &Connection) -> Result<Vec<WordEntry>> {
    let mut stmt = conn.prepare(
        "SELECT w.id, w.word, w.date_added, w.user_id,
                COALESCE(u.display_name, ''), w.category_id, c.name
         FROM words w
         LEFT JOIN users u ON u.id = w.user_id
         LEFT JOIN categories c ON c.id = w.category_id
         ORDER BY w.date_added ASC, w.id ASC",
    )?;

    let words = stmt
        .query_map([], |row| {
            let id: i64 = row.get(0)?;
            let date_str: String = row.get(2)?;
            let date_added = parse_timestamp(&date_str);
            if date_added.is_none() {
                warn!("Word {} has unparseable date_added {:?}", id, date_str);
            }

            Ok(WordEntry {
                id,
                word: row.get(1)?,
                date_added,
                user_id: row.get(3)?,
                added_by: row.get(4)?,
                category_id: row.get(5)?,
                category: row.get(6)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(words)
}

/// Words matching `filter`, in the filter's sort order.
pub fn list_words(conn: &Connection, filter: &WordFilter) -> Result<Vec<WordEntry>> {
    debug!(
        "Listing words sort={} order={} category={:?} user={:?}",
        filter.sort.as_str(),
        filter.order.as_str(),
        filter.category_id,
        filter.user_id
    );

    Ok(filter.apply(get_all_words(conn)?))
}

pub fn get_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM categories ORDER BY id")?;

    let categories = stmt
        .query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(categories)
}

pub fn get_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, username, display_name FROM users ORDER BY id")?;

    let users = stmt
        .query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                display_name: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(users)
}

pub fn count_words(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;

    Ok(count)
}

fn insert_word_row(
    conn: &Connection,
    word: &str,
    user_id: i64,
    category_id: Option<i64>,
    date_added: NaiveDateTime,
) -> Result<i64> {
    let now = format_timestamp(Utc::now().naive_utc());

    conn.execute(
        "INSERT INTO words (word, date_added, user_id, category_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![word, format_timestamp(date_added), user_id, category_id, now],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Record a new word. Blank text and case-insensitive duplicates are rejected.
pub fn insert_word(
    conn: &Connection,
    word: &str,
    user_id: i64,
    category_id: Option<i64>,
    date_added: NaiveDateTime,
) -> Result<i64> {
    let word = word.trim();
    if word.is_empty() {
        return Err(TrackerError::EmptyWord);
    }

    let existing = get_all_words(conn)?;
    if let Some(dup) = find_duplicate(&existing, word) {
        return Err(TrackerError::DuplicateWord(dup.word.clone()));
    }

    insert_word_row(conn, word, user_id, category_id, date_added)
}

/// Rename a word and/or change its category.
///
/// Blank text is rejected, as is text matching another word (ignoring case);
/// the word may keep its own spelling with different casing.
pub fn update_word(conn: &Connection, id: i64, word: &str, category_id: Option<i64>) -> Result<()> {
    let word = word.trim();
    if word.is_empty() {
        return Err(TrackerError::EmptyWord);
    }

    let existing = get_all_words(conn)?;
    if !existing.iter().any(|w| w.id == id) {
        return Err(TrackerError::WordNotFound(id));
    }
    if let Some(dup) = find_duplicate_excluding(&existing, word, id) {
        return Err(TrackerError::DuplicateWord(dup.word.clone()));
    }

    conn.execute(
        "UPDATE words SET word = ?1, category_id = ?2, updated_at = ?3 WHERE id = ?4",
        params![word, category_id, format_timestamp(Utc::now().naive_utc()), id],
    )?;
    debug!("Updated word {} to {:?}", id, word);

    Ok(())
}

/// Delete a word, returning the text that was removed.
pub fn delete_word(conn: &Connection, id: i64) -> Result<String> {
    let word: Option<String> = conn
        .query_row("SELECT word FROM words WHERE id = ?1", [id], |row| row.get(0))
        .optional()?;

    let word = word.ok_or(TrackerError::WordNotFound(id))?;
    conn.execute("DELETE FROM words WHERE id = ?1", [id])?;
    debug!("Deleted word {} ({:?})", id, word);

    Ok(word)
}

fn parse_export_date(value: &str, line: u64) -> Result<NaiveDateTime> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TrackerError::InvalidDate(format!("line {}: {:?}", line, value)))
}

/// Import words from a CSV file in the export format
/// (`Word,Date Added,Added By,Category`, optional leading BOM).
///
/// Users and categories are created on demand. Words that already exist
/// (ignoring case) are counted as duplicates and skipped. The import runs in
/// one transaction: a row with a bad date leaves the database untouched.
pub fn import_csv(conn: &Connection, csv_path: &Path) -> Result<ImportSummary> {
    let file = File::open(csv_path).map_err(|source| TrackerError::FileOpen {
        path: csv_path.to_path_buf(),
        source,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let tx = conn.unchecked_transaction()?;
    let mut known = get_all_words(&tx)?;
    let mut summary = ImportSummary::default();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let word = record.get(0).unwrap_or("").trim();
        if word.is_empty() {
            warn!("Skipping blank word on line {}", line);
            summary.skipped += 1;
            continue;
        }

        if find_duplicate(&known, word).is_some() {
            summary.duplicates += 1;
            continue;
        }

        let date_added = parse_export_date(record.get(1).unwrap_or(""), line)?;

        let added_by = record.get(2).map(str::trim).filter(|s| !s.is_empty()).unwrap_or(UNKNOWN_USER);
        let user_id = ensure_user(&tx, added_by)?;

        let category_id = match record.get(3).map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => Some(ensure_category(&tx, name)?),
            None => None,
        };

        let id = insert_word_row(&tx, word, user_id, category_id, date_added)?;
        known.push(WordEntry {
            id,
            word: word.to_string(),
            date_added: Some(date_added),
            user_id,
            added_by: added_by.to_string(),
            category_id,
            category: None,
        });
        summary.inserted += 1;
    }

    tx.commit()?;

    info!(
        "Imported {} words ({} duplicates, {} blank rows skipped)",
        summary.inserted, summary.duplicates, summary.skipped
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{SortField, SortOrder};
    use std::io::Write;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        setup_database(&conn).unwrap();
        conn
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(10, 0, 0).unwrap()
    }

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_seed_categories_once() {
        let conn = test_db();

        assert_eq!(seed_categories(&conn).unwrap(), 5);
        assert_eq!(seed_categories(&conn).unwrap(), 0);

        let names: Vec<String> = get_categories(&conn).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Noun", "Verb", "Animal Sound", "Person", "Other"]);
    }

    #[test]
    fn test_ensure_user_reuses_existing() {
        let conn = test_db();

        let first = ensure_user(&conn, "Nick").unwrap();
        let second = ensure_user(&conn, " Nick ").unwrap();
        assert_eq!(first, second);

        ensure_user(&conn, "Big Sister").unwrap();
        let users = get_users(&conn).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "big_sister");
        assert_eq!(users[1].display_name, "Big Sister");
    }

    #[test]
    fn test_ensure_user_matches_case_and_spacing() {
        let conn = test_db();

        let nick = ensure_user(&conn, "Nick").unwrap();
        assert_eq!(ensure_user(&conn, "nick").unwrap(), nick);

        let sister = ensure_user(&conn, "Big Sister").unwrap();
        assert_eq!(ensure_user(&conn, "big  sister").unwrap(), sister);

        // First spelling wins as the display name
        let users = get_users(&conn).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].display_name, "Nick");
    }

    #[test]
    fn test_import_names_differing_by_case() {
        let conn = test_db();
        let file = write_csv(
            "Word,Date Added,Added By,Category\n\
             ball,2024-11-01,Nick,\n\
             car,2024-11-02,nick,\n",
        );

        let summary = import_csv(&conn, file.path()).unwrap();
        assert_eq!(summary.inserted, 2);

        let words = get_all_words(&conn).unwrap();
        assert_eq!(words[0].user_id, words[1].user_id);
        assert_eq!(words[1].added_by, "Nick");
        assert_eq!(get_users(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_update_word() {
        let conn = test_db();
        let nick = ensure_user(&conn, "Nick").unwrap();
        let noun = ensure_category(&conn, "Noun").unwrap();

        let ball = insert_word(&conn, "bal", nick, None, at(2024, 11, 1)).unwrap();
        insert_word(&conn, "car", nick, None, at(2024, 11, 2)).unwrap();

        update_word(&conn, ball, " ball ", Some(noun)).unwrap();
        let words = get_all_words(&conn).unwrap();
        assert_eq!(words[0].word, "ball");
        assert_eq!(words[0].category.as_deref(), Some("Noun"));
        assert_eq!(words[0].date_added, Some(at(2024, 11, 1)));

        // Re-casing its own text is allowed
        update_word(&conn, ball, "Ball", Some(noun)).unwrap();
        assert_eq!(get_all_words(&conn).unwrap()[0].word, "Ball");
    }

    #[test]
    fn test_update_word_rejections() {
        let conn = test_db();
        let nick = ensure_user(&conn, "Nick").unwrap();

        let ball = insert_word(&conn, "ball", nick, None, at(2024, 11, 1)).unwrap();
        insert_word(&conn, "Car", nick, None, at(2024, 11, 2)).unwrap();

        match update_word(&conn, ball, "car", None) {
            Err(TrackerError::DuplicateWord(existing)) => assert_eq!(existing, "Car"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
        assert!(matches!(update_word(&conn, ball, "  ", None), Err(TrackerError::EmptyWord)));
        assert!(matches!(update_word(&conn, 999, "boat", None), Err(TrackerError::WordNotFound(999))));

        assert_eq!(get_all_words(&conn).unwrap()[0].word, "ball");
    }

    #[test]
    fn test_delete_word() {
        let conn = test_db();
        let nick = ensure_user(&conn, "Nick").unwrap();

        let ball = insert_word(&conn, "ball", nick, None, at(2024, 11, 1)).unwrap();
        insert_word(&conn, "car", nick, None, at(2024, 11, 2)).unwrap();

        assert_eq!(delete_word(&conn, ball).unwrap(), "ball");
        assert_eq!(count_words(&conn).unwrap(), 1);
        assert!(matches!(delete_word(&conn, ball), Err(TrackerError::WordNotFound(_))));

        // The text can be added again once deleted
        insert_word(&conn, "Ball", nick, None, at(2024, 11, 3)).unwrap();
        assert_eq!(count_words(&conn).unwrap(), 2);
    }

    #[test]
    fn test_insert_and_read_words() {
        let conn = test_db();
        let nick = ensure_user(&conn, "Nick").unwrap();
        let noun = ensure_category(&conn, "Noun").unwrap();

        insert_word(&conn, "dog", nick, Some(noun), at(2024, 11, 20)).unwrap();
        insert_word(&conn, "  mama ", nick, None, at(2024, 10, 2)).unwrap();

        let words = get_all_words(&conn).unwrap();
        assert_eq!(words.len(), 2);

        // Oldest first, trimmed, joined names
        assert_eq!(words[0].word, "mama");
        assert_eq!(words[0].category, None);
        assert_eq!(words[1].word, "dog");
        assert_eq!(words[1].added_by, "Nick");
        assert_eq!(words[1].category.as_deref(), Some("Noun"));
        assert_eq!(words[1].date_added, Some(at(2024, 11, 20)));

        assert_eq!(count_words(&conn).unwrap(), 2);
    }

    #[test]
    fn test_insert_rejects_duplicates_and_blanks() {
        let conn = test_db();
        let nick = ensure_user(&conn, "Nick").unwrap();

        insert_word(&conn, "Ball", nick, None, at(2024, 11, 1)).unwrap();

        match insert_word(&conn, "ball", nick, None, at(2024, 11, 2)) {
            Err(TrackerError::DuplicateWord(existing)) => assert_eq!(existing, "Ball"),
            other => panic!("expected duplicate error, got {:?}", other),
        }

        assert!(matches!(
            insert_word(&conn, "   ", nick, None, at(2024, 11, 2)),
            Err(TrackerError::EmptyWord)
        ));

        assert_eq!(count_words(&conn).unwrap(), 1);
    }

    #[test]
    fn test_list_words_filters_and_sorts() {
        let conn = test_db();
        let nick = ensure_user(&conn, "Nick").unwrap();
        let partner = ensure_user(&conn, "Partner").unwrap();
        let noun = ensure_category(&conn, "Noun").unwrap();

        insert_word(&conn, "apple", nick, Some(noun), at(2024, 11, 1)).unwrap();
        insert_word(&conn, "banana", partner, Some(noun), at(2024, 11, 5)).unwrap();
        insert_word(&conn, "cat", nick, None, at(2024, 11, 7)).unwrap();

        let newest = list_words(&conn, &WordFilter::default()).unwrap();
        assert_eq!(newest[0].word, "cat");

        let filter = WordFilter {
            sort: SortField::Word,
            order: SortOrder::Asc,
            category_id: Some(noun),
            user_id: None,
        };
        let nouns: Vec<String> = list_words(&conn, &filter).unwrap().into_iter().map(|w| w.word).collect();
        assert_eq!(nouns, vec!["apple", "banana"]);

        let filter = WordFilter { user_id: Some(partner), ..Default::default() };
        assert_eq!(list_words(&conn, &filter).unwrap().len(), 1);
    }

    #[test]
    fn test_unparseable_stored_date_reads_as_none() {
        let conn = test_db();
        let nick = ensure_user(&conn, "Nick").unwrap();

        conn.execute(
            "INSERT INTO words (word, date_added, user_id, created_at, updated_at)
             VALUES ('odd', 'yesterday', ?1, '', '')",
            [nick],
        )
        .unwrap();

        let words = get_all_words(&conn).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].date_added, None);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("2024-11-20 10:00:00"), Some(at(2024, 11, 20)));
        assert_eq!(parse_timestamp("2024-11-20T10:00:00"), Some(at(2024, 11, 20)));
        assert_eq!(parse_timestamp("2024-11-20T10:00:00.123456").map(|t| t.date()), NaiveDate::from_ymd_opt(2024, 11, 20));
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn test_import_csv() {
        let conn = test_db();
        let file = write_csv(
            "\u{FEFF}Word,Date Added,Added By,Category\n\
             mama,2024-09-01,Partner,Person\n\
             dada,2024-09-03,Nick,Person\n\
             \"uh-oh, no\",2024-10-12,Nick,\n\
             Mama,2024-10-15,Nick,Person\n\
             ,2024-10-16,Nick,\n\
             moo,2024-11-01,,Animal Sound\n",
        );

        let summary = import_csv(&conn, file.path()).unwrap();
        assert_eq!(summary, ImportSummary { inserted: 4, duplicates: 1, skipped: 1 });

        let words = get_all_words(&conn).unwrap();
        let texts: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(texts, vec!["mama", "dada", "uh-oh, no", "moo"]);
        assert_eq!(words[0].added_by, "Partner");
        assert_eq!(words[2].category, None);
        assert_eq!(words[3].added_by, "Unknown");
        assert_eq!(words[3].category.as_deref(), Some("Animal Sound"));
    }

    #[test]
    fn test_import_twice_is_idempotent() {
        let conn = test_db();
        let file = write_csv("Word,Date Added,Added By,Category\nball,2024-11-01,Nick,Noun\n");

        assert_eq!(import_csv(&conn, file.path()).unwrap().inserted, 1);

        let second = import_csv(&conn, file.path()).unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.duplicates, 1);
        assert_eq!(count_words(&conn).unwrap(), 1);
    }

    #[test]
    fn test_import_bad_date_rolls_back() {
        let conn = test_db();
        let file = write_csv(
            "Word,Date Added,Added By,Category\n\
             ball,2024-11-01,Nick,Noun\n\
             car,11/02/2024,Nick,Noun\n",
        );

        let result = import_csv(&conn, file.path());
        assert!(matches!(result, Err(TrackerError::InvalidDate(_))));
        assert_eq!(count_words(&conn).unwrap(), 0);
    }

    #[test]
    fn test_import_missing_file() {
        let conn = test_db();
        let result = import_csv(&conn, Path::new("/nonexistent/words.csv"));
        assert!(matches!(result, Err(TrackerError::FileOpen { .. })));
    }
}
