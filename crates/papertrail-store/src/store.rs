//! Citation store backed by a single SQLite connection

use std::path::Path;

use papertrail_domain::{CitationRecord, SourceType};

use crate::error::{Result, StoreError};
use crate::schema::{Schema, SCHEMA_VERSION};

const SELECT_COLUMNS: &str = "SELECT id, title, authors, year, journal, volume, issue, pages, \
                              doi, url, source_type, date_added FROM citations";

/// Persistent collection of citation records
pub struct CitationStore {
    conn: rusqlite::Connection,
}

impl CitationStore {
    /// Open (or create) the database at `path`, creating parent
    /// directories as needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        tracing::debug!("Opening citation store at {}", path.display());
        let conn = rusqlite::Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        let current_version = self.get_schema_version().unwrap_or(0);

        if current_version == 0 {
            self.conn.execute_batch(Schema::create_tables())?;
            self.set_schema_version(SCHEMA_VERSION)?;
        } else if current_version < SCHEMA_VERSION {
            for version in current_version..SCHEMA_VERSION {
                let migration = Schema::migration(version, version + 1).ok_or_else(|| {
                    StoreError::Migration(format!(
                        "no migration from version {} to {}",
                        version,
                        version + 1
                    ))
                })?;
                self.conn.execute_batch(migration)?;
            }
            self.set_schema_version(SCHEMA_VERSION)?;
        } else if current_version > SCHEMA_VERSION {
            return Err(StoreError::Migration(format!(
                "database schema version {} is newer than supported version {}",
                current_version, SCHEMA_VERSION
            )));
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Option<u32> {
        self.conn
            .query_row(
                "SELECT version FROM schema_version ORDER BY rowid DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .ok()
    }

    fn set_schema_version(&self, version: u32) -> Result<()> {
        self.conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
        Ok(())
    }

    /// Current schema version of the open database
    pub fn schema_version(&self) -> u32 {
        self.get_schema_version().unwrap_or(0)
    }

    // ==================== Citation Operations ====================

    /// Insert a record and return its new id.
    ///
    /// Any id already on the record is ignored. `date_added` is kept when
    /// set, otherwise stamped with the current UTC time.
    pub fn create(&self, record: &CitationRecord) -> Result<i64> {
        let date_added = record
            .date_added
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string());

        self.conn.execute(
            r#"
            INSERT INTO citations
            (title, authors, year, journal, volume, issue, pages, doi, url, source_type, date_added)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            rusqlite::params![
                record.title,
                record.authors,
                record.year,
                record.journal,
                record.volume,
                record.issue,
                record.pages,
                record.doi,
                record.url,
                record.source_type.as_str(),
                date_added,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::info!("Saved citation {}: {}", id, record.title);
        Ok(id)
    }

    /// Every record, in insertion (id) order
    pub fn list_all(&self) -> Result<Vec<CitationRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;

        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Fetch one record by id
    pub fn get(&self, id: i64) -> Result<CitationRecord> {
        let result = self.conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            [id],
            Self::row_to_record,
        );

        match result {
            Ok(record) => Ok(record),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM citations", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete one record; `false` when the id did not exist
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM citations WHERE id = ?1", [id])?;
        if affected > 0 {
            tracing::info!("Deleted citation {}", id);
        }
        Ok(affected > 0)
    }

    /// Delete every record, returning how many were removed
    pub fn clear_all(&self) -> Result<usize> {
        let affected = self.conn.execute("DELETE FROM citations", [])?;
        tracing::info!("Cleared {} citations", affected);
        Ok(affected)
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<CitationRecord> {
        let id: i64 = row.get(0)?;
        let authors: Option<String> = row.get(2)?;
        let source_type: Option<String> = row.get(10)?;

        Ok(CitationRecord {
            id: Some(id),
            title: row.get(1)?,
            authors: authors.unwrap_or_default(),
            year: row.get(3)?,
            journal: row.get(4)?,
            volume: row.get(5)?,
            issue: row.get(6)?,
            pages: row.get(7)?,
            doi: row.get(8)?,
            url: row.get(9)?,
            source_type: source_type.map(SourceType::from).unwrap_or_default(),
            date_added: row.get(11)?,
        })
    }
}
