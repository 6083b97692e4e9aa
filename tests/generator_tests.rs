// Integration tests for table reading and database generation

use std::fs;
use std::path::{Path, PathBuf};

use congkit::builder::{read_table_file, DbGenerator, TableRow};
use congkit::CongkitError;
use rusqlite::Connection;
use tempfile::TempDir;

const COUNT_CHARS: &str = "SELECT COUNT(*) FROM characters";
const COUNT_RADICALS: &str = "SELECT COUNT(*) FROM radicals";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn count(conn: &Connection, query: &str) -> i64 {
    conn.query_row(query, [], |row| row.get(0)).unwrap()
}

#[test]
fn test_read_fixture_table() {
    let rows = read_table_file(fixture("table.txt")).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][0], "倉");
    assert_eq!(rows[4][0], "夾");
}

#[test]
fn test_read_malformed_table() {
    let err = read_table_file(fixture("malformed.txt")).unwrap_err();
    assert!(err.is_malformed_entry());
    assert_eq!(err.line_no(), Some(3));
}

#[test]
fn test_read_missing_table() {
    let err = read_table_file(fixture("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, CongkitError::Io { .. }));
}

#[test]
fn test_generate() {
    let rows = read_table_file(fixture("table.txt")).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");

    let stats = DbGenerator::generate(&rows, &db_path, None).unwrap();
    assert_eq!(stats.characters, 5);
    assert_eq!(stats.radicals, 10);

    assert!(db_path.exists(), "db file was not created");
    assert!(fs::metadata(&db_path).unwrap().len() > 0);
    assert!(!dir.path().join("test.db.partial").exists());

    let conn = Connection::open(&db_path).unwrap();
    assert_eq!(count(&conn, COUNT_CHARS), 5);
    assert_eq!(count(&conn, COUNT_RADICALS), 10);
}

#[test]
fn test_generate_stores_rows_in_source_order() {
    let rows = read_table_file(fixture("table.txt")).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    DbGenerator::generate(&rows, &db_path, None).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let mut stmt = conn.prepare("SELECT idx, tc, sc FROM characters ORDER BY idx").unwrap();
    let stored: Vec<(i64, String, Option<String>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(stored[0], (0, "倉".to_string(), Some("仓".to_string())));
    assert_eq!(stored[2], (2, "大".to_string(), None));
    assert_eq!(stored[4].0, 4);

    let codes: Vec<(i64, String)> = conn
        .prepare("SELECT version, radical FROM radicals WHERE char_idx = 1 ORDER BY version")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(codes, vec![(3, "oiln".to_string()), (5, "orln".to_string())]);
}

#[test]
fn test_generate_multiple_codes_and_shortcodes() {
    let rows = read_table_file(fixture("multi_code.txt")).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");

    let stats = DbGenerator::generate(&rows, &db_path, None).unwrap();
    assert_eq!(stats.characters, 3);
    // 大: k (v3), k and kk (v5); ，: zxab under both versions; full-width space: none
    assert_eq!(stats.radicals, 5);

    let conn = Connection::open(&db_path).unwrap();
    assert_eq!(count(&conn, COUNT_RADICALS), 5);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM radicals WHERE radical = 'SPACE'"), 0);
}

#[test]
fn test_generate_replaces_existing_file() {
    let rows = read_table_file(fixture("table.txt")).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    fs::write(&db_path, b"not a database").unwrap();

    DbGenerator::generate(&rows, &db_path, None).unwrap();
    let conn = Connection::open(&db_path).unwrap();
    assert_eq!(count(&conn, COUNT_CHARS), 5);
}

#[test]
fn test_generate_twice_is_a_full_rebuild() {
    let rows = read_table_file(fixture("table.txt")).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");

    DbGenerator::generate(&rows, &db_path, None).unwrap();
    DbGenerator::generate(&rows[..2], &db_path, None).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    assert_eq!(count(&conn, COUNT_CHARS), 2);
    assert_eq!(count(&conn, COUNT_RADICALS), 4);
}

#[test]
fn test_generate_failure_leaves_no_file() {
    let mut rows = read_table_file(fixture("table.txt")).unwrap();
    let short_row: TableRow = vec!["壞".to_string(), "NA".to_string()];
    rows.insert(3, short_row);
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");

    let err = DbGenerator::generate(&rows, &db_path, None).unwrap_err();
    assert!(matches!(err, CongkitError::InvalidDataFormat { .. }));
    assert!(!db_path.exists());
    assert!(!dir.path().join("test.db.partial").exists());
}

#[test]
fn test_generate_cancelled_by_progress_callback() {
    fn cancel(_state: &mut congkit::utils::ProgressState) -> bool {
        true
    }

    let rows = read_table_file(fixture("table.txt")).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");

    let err = DbGenerator::generate(&rows, &db_path, Some(cancel)).unwrap_err();
    assert!(matches!(err, CongkitError::UserInterrupted { .. }));
    assert!(!db_path.exists());
}

#[test]
fn test_generated_schema_columns() {
    let rows = read_table_file(fixture("table.txt")).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    DbGenerator::generate(&rows, &db_path, None).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let columns = |table: &str| -> Vec<String> {
        conn.prepare(&format!("PRAGMA table_info({})", table))
            .unwrap()
            .query_map([], |row| row.get(1))
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    };
    assert_eq!(
        columns("characters"),
        vec![
            "idx", "tc", "sc", "chinese", "big5", "hkcsc", "zhuyin", "kanji",
            "hiragana", "katakana", "punctuation", "symbol",
        ]
    );
    assert_eq!(columns("radicals"), vec!["char_idx", "version", "radical"]);

    let hkcsc: i64 = conn.query_row("SELECT hkcsc FROM characters WHERE idx = 0", [], |row| row.get(0)).unwrap();
    assert_eq!(hkcsc, 0);
}
