// Storage model and schema
//
// This module defines the character and radical records persisted in the
// generated database, together with the SQL that creates and fills it.

pub mod models;
pub mod schema;

pub use models::{CharIdx, Character, CongkitVersion, RadicalSet};
pub use schema::create_schema;
