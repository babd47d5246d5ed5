// Word Tracker - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod age;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod logging;
pub mod milestones;
pub mod monthly;
pub mod stats;
pub mod words;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use age::{age_months_on, calculate_age_months};
pub use config::{parse_birthdate, Config, ConfigArgs};
pub use db::{
    Category, ImportSummary, User,
    count_words, delete_word, ensure_category, ensure_user, get_all_words, get_categories, get_users,
    import_csv, insert_word, list_words, seed_categories, setup_database, update_word,
};
pub use error::{Result, TrackerError};
pub use export::{export_filename, generate_csv_content, sort_for_export};
pub use milestones::{get_all_milestones, get_milestone_for_age, MilestoneBand, MILESTONES};
pub use monthly::{compute_monthly_stats, group_by_month, month_name, MonthKey, MonthlyStat};
pub use stats::{build_report, StatsReport};
pub use words::{find_duplicate, find_duplicate_excluding, SortField, SortOrder, WordEntry, WordFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
