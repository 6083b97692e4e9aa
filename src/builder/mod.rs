//! Builder module for radical database generation
//!
//! This module contains the source table reader and the generator that
//! materializes table rows into the SQLite database used for lookups.

pub mod table_loader;
pub mod db_generator;

// Re-export commonly used types for convenience
pub use table_loader::{read_table, read_table_file, read_builtin_table, TableRow, MIN_FIELD_COUNT};
pub use db_generator::{convert_row, DbGenerator, GenerateStats, GeneratorConfig, DEFAULT_TARGET};
