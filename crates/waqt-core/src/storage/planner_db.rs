//! SQLite-based persistence for blocks and cached timetables.
//!
//! Provides persistent storage for:
//! - The day's scheduled time blocks
//! - Fetched prayer timetables, cached per date
//! - Key-value store for application state

use rusqlite::{params, Connection};

use super::data_dir;
use crate::clock::WallClock;
use crate::error::{CoreError, DatabaseError};
use crate::interval::TimeRange;
use crate::prayer::{PrayerName, Timetable};
use crate::schedule::{ActivityKind, TimeBlock};

/// SQLite database for the planner's durable state.
///
/// Blocks are written with full-replace semantics: every accepted mutation
/// rewrites the whole stored set inside one transaction, so the database
/// always holds exactly what the in-memory registry last held.
pub struct PlannerDb {
    conn: Connection,
}

impl PlannerDb {
    /// Open the database at `~/.config/waqt/waqt.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("waqt.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS blocks (
                id        TEXT PRIMARY KEY,
                title     TEXT NOT NULL,
                kind      TEXT NOT NULL DEFAULT 'other',
                start_min INTEGER NOT NULL,
                end_min   INTEGER NOT NULL,
                period    TEXT NOT NULL,
                split     INTEGER NOT NULL DEFAULT 0,
                done      INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_blocks_start ON blocks(start_min);",
        )?;
        Ok(())
    }

    /// Load every stored block in start order.
    ///
    /// Rows damaged beyond repair (an empty or reversed range) are logged
    /// and skipped rather than failing the whole load.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn load_blocks(&self) -> Result<Vec<TimeBlock>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, kind, start_min, end_min, period, split, done
             FROM blocks ORDER BY start_min",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, bool>(6)?,
                row.get::<_, bool>(7)?,
            ))
        })?;

        let mut blocks = Vec::new();
        for row in rows {
            let (id, title, kind, start_min, end_min, period, split, done) = row?;
            let start = WallClock::from_minutes_wrapped(start_min);
            let end = WallClock::from_minutes_wrapped(end_min);
            let Ok(range) = TimeRange::new(start, end) else {
                log::warn!("skipping stored block {id} with invalid range {start_min}..{end_min}");
                continue;
            };
            blocks.push(TimeBlock {
                id,
                title,
                kind: ActivityKind::parse(&kind),
                range,
                period: period.parse().unwrap_or(PrayerName::Fajr),
                split,
                done,
            });
        }
        Ok(blocks)
    }

    /// Replace the whole stored block set in one transaction.
    ///
    /// # Errors
    /// Returns an error if any statement in the transaction fails.
    pub fn replace_blocks(&mut self, blocks: &[TimeBlock]) -> Result<(), DatabaseError> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM blocks", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO blocks (id, title, kind, start_min, end_min, period, split, done)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for block in blocks {
                stmt.execute(params![
                    block.id,
                    block.title,
                    block.kind.as_str(),
                    block.range.start().minutes(),
                    block.range.end().minutes(),
                    block.period.as_str(),
                    block.split,
                    block.done,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn timetable_key(date: &str) -> String {
        format!("timetable:{date}")
    }

    /// Cache a fetched timetable under its date (`YYYY-MM-DD`).
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn cache_timetable(&self, date: &str, timetable: &Timetable) -> Result<(), CoreError> {
        let json = serde_json::to_string(timetable)?;
        self.kv_set(&Self::timetable_key(date), &json)?;
        Ok(())
    }

    /// The cached timetable for a date, if any.
    ///
    /// An unreadable cache entry is treated as absent so the caller can
    /// refetch.
    ///
    /// # Errors
    /// Returns an error if the read fails.
    pub fn cached_timetable(&self, date: &str) -> Result<Option<Timetable>, CoreError> {
        let Some(json) = self.kv_get(&Self::timetable_key(date))? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(timetable) => Ok(Some(timetable)),
            Err(e) => {
                log::warn!("discarding unreadable timetable cache for {date}: {e}");
                Ok(None)
            }
        }
    }
}
