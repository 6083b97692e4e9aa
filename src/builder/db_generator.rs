//! Radical database generator.
//!
//! This module turns parsed source table rows into the SQLite database read by
//! the [`Engine`](crate::readers::Engine). It handles:
//!
//! - Conversion of table rows into [`Character`] and [`RadicalSet`] records
//! - Schema creation (`characters`, `radicals` and the radical index)
//! - Bulk insertion inside a single transaction
//!
//! # Overview
//!
//! Generation is a full rebuild. An existing file at the destination is removed
//! first. Rows are written into `<destination>.partial`, which is renamed over
//! the destination only after the transaction commits, so a failed run never
//! leaves a half-written database behind.
//!
//! # Examples
//!
//! ```no_run
//! use congkit::builder::{read_builtin_table, DbGenerator};
//!
//! # fn main() -> congkit::Result<()> {
//! let rows = read_builtin_table()?;
//! let stats = DbGenerator::generate(&rows, "congkit.db", None)?;
//! println!("{} characters, {} radicals", stats.characters, stats.radicals);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::*;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::builder::table_loader::{field, TableRow, NOT_AVAILABLE, SPACE_SHORTCODE};
use crate::error::DatabaseSnafu;
use crate::storage::models::{CharIdx, Character, CongkitVersion, RadicalSet};
use crate::storage::schema::{create_schema, INSERT_CHAR, INSERT_RADICAL};
use crate::utils::progress_report::{ProgressReportFn, ProgressState};
use crate::{CongkitError, Result};

const PARTIAL_EXT: &str = "partial";

/// Default file name of the generated database.
pub const DEFAULT_TARGET: &str = "congkit.db";

/// Configuration of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Source table path, `None` for the built-in table
    pub source: Option<PathBuf>,
    /// Destination database path
    pub target: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: None,
            target: PathBuf::from(DEFAULT_TARGET),
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Row counts of a finished generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateStats {
    pub characters: usize,
    pub radicals: usize,
}

/// Builds the radical database from table rows.
pub struct DbGenerator;

/// First scalar value of a glyph column; extra scalars are logged and dropped.
fn decode_glyph_field(value: &str, idx: CharIdx, column: usize) -> Option<char> {
    let mut scalars = value.chars();
    let glyph = scalars.next()?;
    if scalars.next().is_some() {
        warn!("Row {} column {} value {:?} has more than one character, keeping '{}'", idx, column + 1, value, glyph);
    }
    Some(glyph)
}

fn parse_flag(value: &str, glyph: char, column: usize) -> i64 {
    match value.parse::<i64>() {
        Ok(flag) => flag,
        Err(e) => {
            warn!("Unable to convert '{}' column {} value {:?} to int: {}", glyph, column + 1, value, e);
            0
        }
    }
}

fn push_radicals(radical_sets: &mut Vec<RadicalSet>, idx: CharIdx, version: CongkitVersion, codes: &str) {
    if codes == NOT_AVAILABLE {
        return;
    }
    radical_sets.extend(
        codes
            .split(',')
            .filter(|code| !code.is_empty())
            .map(|code| RadicalSet::new(idx, version, code)),
    );
}

/// Converts one table row into its character record and radical sets.
///
/// Charset flags that are not integers are logged and stored as zero.
///
/// # Errors
///
/// Returns `InvalidDataFormat` if the row is too short or has no traditional glyph.
pub fn convert_row(idx: CharIdx, row: &[String]) -> Result<(Character, Vec<RadicalSet>)> {
    if row.len() <= field::SHORTCODE {
        return Err(CongkitError::invalid_data_format(format!(
            "Row {} has {} fields, expected at least {}",
            idx,
            row.len(),
            field::SHORTCODE + 1
        )));
    }

    let traditional = decode_glyph_field(&row[field::TRADITIONAL], idx, field::TRADITIONAL)
        .ok_or_else(|| CongkitError::invalid_data_format(format!("Row {} has no traditional glyph", idx)))?;
    let simplified = match row[field::SIMPLIFIED].as_str() {
        NOT_AVAILABLE => None,
        value => decode_glyph_field(value, idx, field::SIMPLIFIED),
    };

    let mut flags = [0i64; field::FLAG_COUNT];
    for (n, flag) in flags.iter_mut().enumerate() {
        let column = field::FIRST_FLAG + n;
        *flag = parse_flag(&row[column], traditional, column);
    }
    let [chinese, big5, hkscs, zhuyin, kanji, hiragana, katakana, punctuation, symbol] = flags;

    let character = Character {
        idx,
        traditional,
        simplified,
        chinese,
        big5,
        hkscs,
        zhuyin,
        kanji,
        hiragana,
        katakana,
        punctuation,
        symbol,
    };

    let mut radical_sets = Vec::new();
    push_radicals(&mut radical_sets, idx, CongkitVersion::V3, &row[field::CONGKIT_V3]);
    push_radicals(&mut radical_sets, idx, CongkitVersion::V5, &row[field::CONGKIT_V5]);

    let shortcode = row[field::SHORTCODE].as_str();
    if !shortcode.is_empty() && shortcode != NOT_AVAILABLE && shortcode != SPACE_SHORTCODE {
        radical_sets.push(RadicalSet::new(idx, CongkitVersion::V3, shortcode));
        radical_sets.push(RadicalSet::new(idx, CongkitVersion::V5, shortcode));
    }

    Ok((character, radical_sets))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    file_name.push(".");
    file_name.push(PARTIAL_EXT);
    path.with_file_name(file_name)
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl DbGenerator {
    /// Generates the database at `db_path` from `rows`.
    ///
    /// Row `n` becomes character `n`. Any existing file at `db_path` is removed.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error naming the failed phase (table creation, index
    /// creation, row insertion or commit), `InvalidDataFormat` for unusable
    /// rows, or `UserInterrupted` when the progress callback cancels. On error
    /// nothing is left at `db_path`.
    pub fn generate<P: AsRef<Path>>(rows: &[TableRow], db_path: P, prog_rpt: Option<ProgressReportFn>) -> Result<GenerateStats> {
        let db_path = db_path.as_ref();
        if db_path.exists() {
            info!("File already exists at {}, removing it", db_path.display());
            fs::remove_file(db_path)?;
        }

        let work_path = partial_path(db_path);
        remove_if_exists(&work_path)?;

        let result = Self::generate_into(rows, &work_path, prog_rpt);
        match result {
            Ok(stats) => {
                fs::rename(&work_path, db_path)?;
                info!("Generated {} ({} characters, {} radicals)", db_path.display(), stats.characters, stats.radicals);
                Ok(stats)
            }
            Err(e) => {
                warn!("Generation failed, removing {}", work_path.display());
                if let Err(remove_err) = remove_if_exists(&work_path) {
                    warn!("Failed to remove {}: {}", work_path.display(), remove_err);
                }
                Err(e)
            }
        }
    }

    fn generate_into(rows: &[TableRow], db_path: &Path, prog_rpt: Option<ProgressReportFn>) -> Result<GenerateStats> {
        let mut conn = Connection::open(db_path)
            .context(DatabaseSnafu { phase: format!("creating db file at {}", db_path.display()) })?;

        info!("Creating schema...");
        create_schema(&conn)?;

        let tx = conn.transaction()
            .context(DatabaseSnafu { phase: "starting db transaction" })?;
        let stats = Self::insert_rows(&tx, rows, prog_rpt)?;

        info!("Committing {} rows...", stats.characters);
        tx.commit()
            .context(DatabaseSnafu { phase: "committing inserted rows" })?;
        conn.close()
            .map_err(|(_, source)| source)
            .context(DatabaseSnafu { phase: "closing db file" })?;
        Ok(stats)
    }

    fn insert_rows(conn: &Connection, rows: &[TableRow], prog_rpt: Option<ProgressReportFn>) -> Result<GenerateStats> {
        let mut add_char = conn.prepare(INSERT_CHAR)
            .context(DatabaseSnafu { phase: "preparing insert into 'characters' table" })?;
        let mut add_radical = conn.prepare(INSERT_RADICAL)
            .context(DatabaseSnafu { phase: "preparing insert into 'radicals' table" })?;

        let mut progress_state = ProgressState::new("DbGenerator::generate", rows.len() as u64, 10, prog_rpt);
        let mut stats = GenerateStats::default();

        for (row_no, row) in rows.iter().enumerate() {
            let (character, radical_sets) = convert_row(row_no as CharIdx, row)?;

            add_char.execute(params![
                character.idx,
                character.traditional.to_string(),
                character.simplified.map(|c| c.to_string()),
                character.chinese,
                character.big5,
                character.hkscs,
                character.zhuyin,
                character.kanji,
                character.hiragana,
                character.katakana,
                character.punctuation,
                character.symbol,
            ])
            .context(DatabaseSnafu {
                phase: format!("inserting '{}' into 'characters' table", character.traditional),
            })?;
            stats.characters += 1;

            for radical_set in &radical_sets {
                add_radical.execute(params![
                    radical_set.char_idx,
                    radical_set.version.as_number(),
                    radical_set.radical,
                ])
                .context(DatabaseSnafu {
                    phase: format!(
                        "inserting '{}' radical '{}' into 'radicals' table",
                        character.traditional, radical_set.radical
                    ),
                })?;
            }
            stats.radicals += radical_sets.len();

            if progress_state.report(row_no as u64) {
                info!("Generation cancelled by user");
                return Err(CongkitError::user_interrupted());
            }
        }

        Ok(stats)
    }
}
