//! SQLite schema for citation storage

/// Schema version for migrations
pub const SCHEMA_VERSION: u32 = 1;

/// SQLite schema definition
pub struct Schema;

impl Schema {
    /// The complete schema SQL for a fresh database
    pub fn create_tables() -> &'static str {
        r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Saved citations, listed back in id order
CREATE TABLE IF NOT EXISTS citations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    authors TEXT,
    year TEXT,
    journal TEXT,
    volume TEXT,
    issue TEXT,
    pages TEXT,
    doi TEXT,
    url TEXT,
    source_type TEXT,
    date_added TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#
    }

    /// Migration SQL from one version to the next
    pub fn migration(from_version: u32, to_version: u32) -> Option<&'static str> {
        match (from_version, to_version) {
            // Databases written before version tracking already have the
            // citations table; CREATE IF NOT EXISTS is a no-op for them
            (0, 1) => Some(Self::create_tables()),
            _ => None,
        }
    }
}
