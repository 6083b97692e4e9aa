//! Encode engine: radical codes to characters.
//!
//! This module provides the main lookup API over a generated radical database.
//! It handles:
//! - Opening the database (read-only by default)
//! - Selecting the canned query for the configured output script and match mode
//! - Decoding result rows into characters
//!
//! # Examples
//!
//! ```no_run
//! use congkit::readers::{Engine, EngineConfig, MatchMode, OutputScript};
//!
//! # fn main() -> congkit::Result<()> {
//! let mut engine = Engine::new(EngineConfig::default())?;
//! let chars = engine.encode("oiar")?;
//! println!("{:?}", chars);
//!
//! // Switch to simplified prefix lookups on the same connection
//! let mut options = engine.options();
//! options.output = OutputScript::Simplified;
//! options.mode = MatchMode::Prediction;
//! engine.set_options(options);
//! let chars = engine.encode("oi")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Missing database
//!
//! When the configured database file does not exist the engine opens an empty
//! in-memory database with the same schema, so every lookup returns no
//! characters instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use log::*;
use rusqlite::{params, Connection, OpenFlags};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::query::{build_pattern, select_query, MatchMode, OutputScript};
use crate::error::DatabaseSnafu;
use crate::storage::models::CongkitVersion;
use crate::storage::schema::create_schema;
use crate::{CongkitError, Result};

/// Default database location of the engine.
pub const DEFAULT_DATABASE_PATH: &str = "./congkit.db";

/// Lookup options that can be changed on a live engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Scheme version of the codes to match
    pub version: CongkitVersion,
    /// Glyph column returned
    pub output: OutputScript,
    pub mode: MatchMode,
}

/// Engine configuration.
///
/// Can be deserialized from JSON; missing fields take their defaults:
///
/// ```
/// use congkit::readers::{EngineConfig, MatchMode};
///
/// let config: EngineConfig = serde_json::from_str(r#"{"version": 3, "mode": "easy"}"#).unwrap();
/// assert_eq!(config.options.mode, MatchMode::Easy);
/// assert!(config.read_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub db_path: PathBuf,
    /// Open an existing database read-only
    pub read_only: bool,
    #[serde(flatten)]
    pub options: EngineOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            read_only: true,
            options: EngineOptions::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_database<P: Into<PathBuf>>(db_path: P) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Decodes the glyph column of one result row.
///
/// Returns `None` for `NULL`, empty text, or text starting with U+0000; such
/// rows are dropped from lookup results. Otherwise returns the first scalar value.
pub fn decode_glyph(text: Option<&str>) -> Option<char> {
    match text?.chars().next() {
        Some('\0') | None => None,
        Some(glyph) => Some(glyph),
    }
}

/// Radical code lookup engine.
///
/// An engine owns one SQLite connection and is meant for a single caller;
/// share it across threads only behind external synchronization.
pub struct Engine {
    conn: Connection,
    config: EngineConfig,
    query: &'static str,
    in_memory: bool,
}

impl Engine {
    /// Opens the database named by `config`.
    ///
    /// A missing database file is not an error: an empty in-memory database is
    /// used instead and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if an existing file cannot be opened.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let (conn, in_memory) = Self::open(&config)?;
        let query = select_query(config.options.output, config.options.mode);
        Ok(Self {
            conn,
            config,
            query,
            in_memory,
        })
    }

    fn open(config: &EngineConfig) -> Result<(Connection, bool)> {
        let db_path = &config.db_path;
        if !db_path.exists() {
            warn!("Congkit database {} does not exist, using an empty in-memory database", db_path.display());
            let conn = Connection::open_in_memory()
                .context(DatabaseSnafu { phase: "opening in-memory database" })?;
            create_schema(&conn)?;
            return Ok((conn, true));
        }

        let mut flags = OpenFlags::SQLITE_OPEN_NO_MUTEX | OpenFlags::SQLITE_OPEN_URI;
        flags |= if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        debug!("Opening {} (read_only: {})", db_path.display(), config.read_only);
        let conn = Connection::open_with_flags(db_path, flags)
            .context(DatabaseSnafu { phase: format!("opening database {}", db_path.display()) })?;
        Ok((conn, false))
    }

    /// Current lookup options.
    pub fn options(&self) -> EngineOptions {
        self.config.options
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the engine fell back to an empty in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.in_memory
    }

    /// Replaces the lookup options and re-selects the active query.
    ///
    /// The database connection is kept.
    pub fn set_options(&mut self, options: EngineOptions) {
        self.config.options = options;
        self.query = select_query(options.output, options.mode);
    }

    /// Looks up the characters encoded by `radicals`.
    ///
    /// Characters come back in database order. A character with several
    /// matching codes appears once per match.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the query fails, or `RowScan` carrying every
    /// row failure of this lookup.
    pub fn encode(&self, radicals: &str) -> Result<Vec<char>> {
        let options = self.config.options;
        let pattern = build_pattern(options.mode, radicals);
        debug!("encode {:?}: version {}, {:?} {:?}, pattern {:?}", radicals, options.version, options.mode, options.output, pattern);

        let mut stmt = self.conn.prepare_cached(self.query)
            .context(DatabaseSnafu { phase: "preparing radicals query" })?;
        let rows = stmt.query_map(params![options.version.as_number(), pattern], |row| row.get::<_, Option<String>>(0))
            .context(DatabaseSnafu { phase: "querying radicals" })?;

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for row in rows {
            match row {
                Ok(text) => {
                    if let Some(glyph) = decode_glyph(text.as_deref()) {
                        results.push(glyph);
                    }
                }
                Err(e) => failures.push(e),
            }
        }

        if !failures.is_empty() {
            return Err(CongkitError::row_scan(failures));
        }
        Ok(results)
    }

    /// Closes the database connection.
    pub fn close(self) -> Result<()> {
        self.conn.close()
            .map_err(|(_, source)| source)
            .context(DatabaseSnafu { phase: "closing database" })
    }
}
