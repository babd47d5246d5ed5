use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

use word_tracker::{
    build_report, delete_word, ensure_user, export_filename, generate_csv_content,
    get_all_milestones, get_all_words, import_csv, insert_word, list_words, logging,
    seed_categories, setup_database, sort_for_export, update_word, Config, ConfigArgs,
    SortField, SortOrder, WordFilter,
};

/// Track the words a child has learned
#[derive(Parser, Debug)]
#[command(name = "word-tracker", version)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the database tables and default categories
    Init,

    /// Import words from a CSV file in the export format
    Import {
        /// CSV file with columns Word,Date Added,Added By,Category
        path: PathBuf,
    },

    /// Add a new word
    Add {
        word: String,

        /// Display name of the family member adding it
        #[arg(long)]
        by: String,

        /// Category id
        #[arg(long)]
        category: Option<i64>,

        /// Date learned as YYYY-MM-DD (default: now)
        #[arg(long)]
        date: Option<String>,
    },

    /// Change a word's text and category
    Edit {
        id: i64,

        word: String,

        /// Category id (omit to clear)
        #[arg(long)]
        category: Option<i64>,
    },

    /// Delete a word
    Delete {
        id: i64,
    },

    /// List words
    Words {
        #[arg(long, value_enum, default_value_t = SortField::Date)]
        sort: SortField,

        #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
        order: SortOrder,

        /// Only words in this category id
        #[arg(long)]
        category: Option<i64>,

        /// Only words added by this user id
        #[arg(long)]
        user: Option<i64>,
    },

    /// Show totals, age, milestones, and the monthly breakdown
    Stats,

    /// Show the milestone reference table
    Milestones,

    /// Export all words as CSV
    Export {
        /// Output file (default: emily_words_<today>.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_args(&cli.config);
    logging::init_logging(&config.log_level);

    match cli.command {
        Command::Milestones => run_milestones(),
        command => {
            let conn = open_database(&config)?;
            match command {
                Command::Init => run_init(&conn),
                Command::Import { path } => run_import(&conn, &path),
                Command::Add { word, by, category, date } => {
                    run_add(&conn, &word, &by, category, date.as_deref())
                }
                Command::Edit { id, word, category } => run_edit(&conn, id, &word, category),
                Command::Delete { id } => run_delete(&conn, id),
                Command::Words { sort, order, category, user } => {
                    let filter = WordFilter { sort, order, category_id: category, user_id: user };
                    run_words(&conn, &filter)
                }
                Command::Stats => run_stats(&conn, &config),
                Command::Export { output } => run_export(&conn, output),
                Command::Milestones => run_milestones(),
            }
        }
    }
}

fn open_database(config: &Config) -> Result<Connection> {
    let conn = Connection::open(&config.database_path)
        .with_context(|| format!("Failed to open database {:?}", config.database_path))?;
    setup_database(&conn).context("Failed to set up database schema")?;
    Ok(conn)
}

fn run_init(conn: &Connection) -> Result<()> {
    let created = seed_categories(conn)?;
    println!("✓ Database initialized ({} categories created)", created);
    Ok(())
}

fn run_import(conn: &Connection, path: &Path) -> Result<()> {
    info!("Importing words from {:?}", path);
    let summary = import_csv(conn, path).with_context(|| format!("Failed to import {:?}", path))?;

    println!("✓ Inserted: {} words", summary.inserted);
    println!("✓ Skipped duplicates: {}", summary.duplicates);
    if summary.skipped > 0 {
        println!("✓ Skipped blank rows: {}", summary.skipped);
    }
    Ok(())
}

fn run_add(
    conn: &Connection,
    word: &str,
    by: &str,
    category: Option<i64>,
    date: Option<&str>,
) -> Result<()> {
    let date_added = match date {
        Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date {:?}, expected YYYY-MM-DD", value))?
            .and_hms_opt(0, 0, 0)
            .context("Invalid date")?,
        None => Local::now().naive_local(),
    };

    let user_id = ensure_user(conn, by)?;
    let id = insert_word(conn, word, user_id, category, date_added)?;
    println!("✓ Added \"{}\" (id {})", word.trim(), id);
    Ok(())
}

fn run_edit(conn: &Connection, id: i64, word: &str, category: Option<i64>) -> Result<()> {
    update_word(conn, id, word, category)?;
    println!("✓ Updated word {} to \"{}\"", id, word.trim());
    Ok(())
}

fn run_delete(conn: &Connection, id: i64) -> Result<()> {
    let word = delete_word(conn, id)?;
    println!("✓ Deleted \"{}\"", word);
    Ok(())
}

fn run_words(conn: &Connection, filter: &WordFilter) -> Result<()> {
    let words = list_words(conn, filter)?;

    if words.is_empty() {
        println!("No words found.");
        return Ok(());
    }

    println!("{:<5} {:<24} {:<12} {:<12} {}", "ID", "Word", "Date", "Added By", "Category");
    for word in &words {
        let date = word
            .date_added
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<5} {:<24} {:<12} {:<12} {}",
            word.id,
            word.word,
            date,
            word.added_by,
            word.category.as_deref().unwrap_or("-")
        );
    }
    println!("\n{} words", words.len());
    Ok(())
}

fn run_stats(conn: &Connection, config: &Config) -> Result<()> {
    let words = get_all_words(conn)?;
    let report = build_report(&words, config.birthdate, Local::now().date_naive());
    print!("{}", report.render_text());
    Ok(())
}

fn run_milestones() -> Result<()> {
    println!("{:<10} {}", "Age", "Expected words");
    for band in get_all_milestones() {
        println!("{:<10} {}", band.label, band.range_label());
    }
    Ok(())
}

fn run_export(conn: &Connection, output: Option<PathBuf>) -> Result<()> {
    let mut words = get_all_words(conn)?;
    sort_for_export(&mut words);

    let csv = generate_csv_content(&words)?;
    let path = output.unwrap_or_else(|| PathBuf::from(export_filename(Local::now().date_naive())));

    std::fs::write(&path, csv).with_context(|| format!("Failed to write {:?}", path))?;
    println!("✓ Exported {} words to {:?}", words.len(), path);
    Ok(())
}
