//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Parser settings.
///
/// One recognized option: the indent ("edge") character whose leading run
/// determines a line's depth. Defaults to a space; a tab or any other
/// delimiter can be substituted. Deserializable so host applications can
/// embed it in their own config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Character whose leading run determines nesting depth
    pub edge: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { edge: ' ' }
    }
}

impl ParseOptions {
    /// Options using `edge` as the indent character.
    pub fn with_edge(edge: char) -> Self {
        Self { edge }
    }
}
