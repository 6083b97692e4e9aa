//! SQL schema of the generated radical database.
//!
//! The database holds exactly two tables and one index:
//!
//! - `characters`: one row per source table entry, keyed by `idx`
//! - `radicals`: radical codes per character and scheme version
//! - `idx_radicals`: non-unique index on `radicals(version, radical)`

use rusqlite::Connection;
use snafu::ResultExt;

use crate::error::DatabaseSnafu;
use crate::Result;

pub const CREATE_CHARS_TABLE: &str = "
    CREATE TABLE characters (
        idx INTEGER NOT NULL PRIMARY KEY ASC,
        tc TEXT NOT NULL,
        sc TEXT,
        chinese INTEGER,
        big5 INTEGER,
        hkcsc INTEGER,
        zhuyin INTEGER,
        kanji INTEGER,
        hiragana INTEGER,
        katakana INTEGER,
        punctuation INTEGER,
        symbol INTEGER
    );";

pub const CREATE_RADICALS_TABLE: &str = "
    CREATE TABLE radicals (
        char_idx INTEGER NOT NULL,
        version INTEGER NOT NULL,
        radical TEXT NOT NULL,
        FOREIGN KEY(char_idx) REFERENCES characters(idx)
    );";

pub const CREATE_RADICALS_INDEX: &str =
    "CREATE INDEX idx_radicals ON radicals(version, radical);";

pub const INSERT_CHAR: &str = "
    INSERT INTO characters (
        idx, tc, sc, chinese, big5, hkcsc, zhuyin, kanji,
        hiragana, katakana, punctuation, symbol
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12);";

pub const INSERT_RADICAL: &str = "
    INSERT INTO radicals (char_idx, version, radical)
    VALUES (?1, ?2, ?3);";

/// Creates both tables and the radical index on an empty database.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_CHARS_TABLE)
        .context(DatabaseSnafu { phase: "creating 'characters' table" })?;
    conn.execute_batch(CREATE_RADICALS_TABLE)
        .context(DatabaseSnafu { phase: "creating 'radicals' table" })?;
    conn.execute_batch(CREATE_RADICALS_INDEX)
        .context(DatabaseSnafu { phase: "creating index for 'radicals' table" })?;
    Ok(())
}
