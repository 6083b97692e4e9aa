//! Data model shared by the generator and the encode engine.
//!
//! A [`Character`] is one row of the `characters` table, a [`RadicalSet`] one row
//! of the `radicals` table. Radical sets reference characters by index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a character, assigned from its position in the source table.
pub type CharIdx = i64;

/// Cangjie/Congkit encoding ruleset revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum CongkitVersion {
    /// Third generation Cangjie
    V3 = 3,
    /// Fifth generation Cangjie
    #[default]
    V5 = 5,
}

impl CongkitVersion {
    /// Maps a version number to a scheme. Unrecognised numbers fall back to [`CongkitVersion::V5`].
    pub fn from_number(number: i64) -> Self {
        match number {
            3 => CongkitVersion::V3,
            _ => CongkitVersion::V5,
        }
    }

    pub fn as_number(self) -> i64 {
        self as i64
    }
}

impl From<i64> for CongkitVersion {
    fn from(number: i64) -> Self {
        Self::from_number(number)
    }
}

impl From<CongkitVersion> for i64 {
    fn from(version: CongkitVersion) -> Self {
        version.as_number()
    }
}

impl fmt::Display for CongkitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_number())
    }
}

/// One logical Chinese character and its charset flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Character {
    pub idx: CharIdx,
    /// Traditional glyph
    pub traditional: char,
    /// Simplified glyph, `None` when the table says "NA"
    pub simplified: Option<char>,
    pub chinese: i64,
    pub big5: i64,
    /// HKSCS flag, stored in the `hkcsc` column
    pub hkscs: i64,
    pub zhuyin: i64,
    pub kanji: i64,
    pub hiragana: i64,
    pub katakana: i64,
    pub punctuation: i64,
    pub symbol: i64,
}

/// One radical code of a character under one scheme version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalSet {
    pub char_idx: CharIdx,
    pub version: CongkitVersion,
    pub radical: String,
}

impl RadicalSet {
    pub fn new(char_idx: CharIdx, version: CongkitVersion, radical: &str) -> Self {
        Self {
            char_idx,
            version,
            radical: radical.to_string(),
        }
    }
}
