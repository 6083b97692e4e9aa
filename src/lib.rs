//! # Congkit - Cangjie Radical Code Lookup
//!
//! This crate looks up Chinese characters by their Cangjie (Congkit) radical
//! codes, and generates the SQLite database the lookups run against.
//!
//! ## Features
//!
//! - **Table reading**: Parse the space-delimited radicals table (built-in or user supplied)
//! - **Database generation**: Materialize the table into `characters` and `radicals` tables
//! - **Lookups**: Exact, "easy" (first/second key) and prediction (prefix) matching
//! - **Scheme versions**: Cangjie 3 and Cangjie 5 codes
//! - **Output script**: Traditional or simplified glyphs
//!
//! ## Quick Start
//!
//! ### Generating the database
//!
//! ```no_run
//! use congkit::builder::{read_builtin_table, DbGenerator};
//!
//! # fn main() -> congkit::Result<()> {
//! let rows = read_builtin_table()?;
//! DbGenerator::generate(&rows, "congkit.db", None)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Looking up characters
//!
//! ```no_run
//! use congkit::readers::{Engine, EngineConfig};
//!
//! # fn main() -> congkit::Result<()> {
//! let engine = Engine::new(EngineConfig::with_database("congkit.db"))?;
//! let chars = engine.encode("oiar")?;
//! println!("{:?}", chars);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Builder modules**: [`builder`] for reading source tables and generating the database
//! - **Reader modules**: [`readers`] for the encode engine and its queries
//! - **Storage**: [`storage`] for the record types and SQL schema
//! - **Utilities**: [`utils`] for progress reporting and text helpers
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are represented by
//! [`CongkitError`]. The crate uses the `snafu` library for error handling with
//! context and backtraces.

pub mod builder;
pub mod error;
pub mod readers;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use builder::{DbGenerator, GeneratorConfig};
pub use readers::{Engine, EngineConfig, EngineOptions, MatchMode, OutputScript};
pub use storage::CongkitVersion;

// Re-export error types for convenience
pub use error::{CongkitError, Result, snafu};
