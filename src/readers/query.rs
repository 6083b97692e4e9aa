//! Canned lookup queries and query pattern construction.

use serde::{Deserialize, Serialize};

/// How an input radical string is matched against stored codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The stored code equals the input
    #[default]
    Exact,
    /// "Easy" input: first and second key with anything in between
    Easy,
    /// The stored code starts with the input
    Prediction,
}

/// Which glyph column a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputScript {
    #[default]
    Traditional,
    Simplified,
}

const LIKE_WILDCARD: char = '%';
const LIKE_ESCAPE: char = '\\';

/// Appends `key` to a LIKE pattern, escaping the LIKE metacharacters.
fn push_literal(pattern: &mut String, key: char) {
    if matches!(key, '%' | '_' | LIKE_ESCAPE) {
        pattern.push(LIKE_ESCAPE);
    }
    pattern.push(key);
}

fn escape_like(radicals: &str) -> String {
    let mut pattern = String::with_capacity(radicals.len() + 1);
    for key in radicals.chars() {
        push_literal(&mut pattern, key);
    }
    pattern
}

pub const GET_CHAR_FROM_CONGKIT: &str = "
    SELECT tc FROM characters LEFT JOIN radicals
    ON (characters.idx = radicals.char_idx)
    WHERE radicals.version = ?1 AND radicals.radical = ?2";

pub const GET_CHAR_FROM_EASY: &str = "
    SELECT tc FROM characters LEFT JOIN radicals
    ON (characters.idx = radicals.char_idx)
    WHERE radicals.version = ?1 AND radicals.radical LIKE ?2 ESCAPE '\\'";

pub const GET_CHAR_WITH_PREDICTION: &str = "
    SELECT tc FROM characters LEFT JOIN radicals
    ON (characters.idx = radicals.char_idx)
    WHERE radicals.version = ?1 AND radicals.radical LIKE ?2 ESCAPE '\\'";

pub const GET_SIMPLIFIED_CHAR_FROM_CONGKIT: &str = "
    SELECT sc FROM characters LEFT JOIN radicals
    ON (characters.idx = radicals.char_idx)
    WHERE radicals.version = ?1 AND radicals.radical = ?2";

pub const GET_SIMPLIFIED_CHAR_FROM_EASY: &str = "
    SELECT sc FROM characters LEFT JOIN radicals
    ON (characters.idx = radicals.char_idx)
    WHERE radicals.version = ?1 AND radicals.radical LIKE ?2 ESCAPE '\\'";

pub const GET_SIMPLIFIED_CHAR_WITH_PREDICTION: &str = "
    SELECT sc FROM characters LEFT JOIN radicals
    ON (characters.idx = radicals.char_idx)
    WHERE radicals.version = ?1 AND radicals.radical LIKE ?2 ESCAPE '\\'";

/// Selects the canned query for an output script and match mode.
pub fn select_query(output: OutputScript, mode: MatchMode) -> &'static str {
    match (output, mode) {
        (OutputScript::Traditional, MatchMode::Exact) => GET_CHAR_FROM_CONGKIT,
        (OutputScript::Traditional, MatchMode::Easy) => GET_CHAR_FROM_EASY,
        (OutputScript::Traditional, MatchMode::Prediction) => GET_CHAR_WITH_PREDICTION,
        (OutputScript::Simplified, MatchMode::Exact) => GET_SIMPLIFIED_CHAR_FROM_CONGKIT,
        (OutputScript::Simplified, MatchMode::Easy) => GET_SIMPLIFIED_CHAR_FROM_EASY,
        (OutputScript::Simplified, MatchMode::Prediction) => GET_SIMPLIFIED_CHAR_WITH_PREDICTION,
    }
}

/// Builds the value bound to the radical parameter of the selected query.
///
/// - `Exact`: the input unchanged
/// - `Easy`: `<first>%<second>` when the input has two or more keys, otherwise the input
/// - `Prediction`: `<input>%`
///
/// In the LIKE modes the input keys `%`, `_` and `\` are escaped and match literally.
pub fn build_pattern(mode: MatchMode, radicals: &str) -> String {
    match mode {
        MatchMode::Exact => radicals.to_string(),
        MatchMode::Easy => {
            let mut keys = radicals.chars();
            match (keys.next(), keys.next()) {
                (Some(first), Some(second)) => {
                    let mut pattern = String::with_capacity(5);
                    push_literal(&mut pattern, first);
                    pattern.push(LIKE_WILDCARD);
                    push_literal(&mut pattern, second);
                    pattern
                }
                _ => escape_like(radicals),
            }
        }
        MatchMode::Prediction => {
            let mut pattern = escape_like(radicals);
            pattern.push(LIKE_WILDCARD);
            pattern
        }
    }
}
