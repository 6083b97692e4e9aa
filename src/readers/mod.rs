// Lookup side of the crate
//
// This module provides the encode engine that turns radical codes into
// characters, along with the canned queries it runs.

pub mod engine;
pub mod query;

pub use engine::{decode_glyph, Engine, EngineConfig, EngineOptions, DEFAULT_DATABASE_PATH};
pub use query::{build_pattern, select_query, MatchMode, OutputScript};
