//! Canonical text renderings of parsed documents.
//!
//! Two views exist: the single-line view of one node with its leading
//! indent characters stripped, and the recursive subtree view that
//! reconstructs the original text byte-for-byte.

use std::fmt;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::Document;

impl Document {
    /// Single-line view: the node's value with all leading indent
    /// characters stripped. Children are not involved.
    pub fn line(&self, idx: Index) -> Option<&str> {
        self.get_node(idx)
            .map(|node| node.value.trim_start_matches(self.edge()))
    }

    /// Subtree view: the node's value verbatim, then each child's subtree
    /// view on its own line, in document order.
    ///
    /// Applied to the root of a document parsed with a single consistent
    /// indent character, this reproduces the original input exactly,
    /// modulo a trailing line break swallowed by line splitting.
    #[instrument(level = "trace", skip(self))]
    pub fn render_node(&self, idx: Index) -> String {
        let mut out = String::new();
        self.append_subtree(idx, &mut out);
        out
    }

    // Recursion depth is bounded by tree height.
    fn append_subtree(&self, idx: Index, out: &mut String) {
        if let Some(node) = self.get_node(idx) {
            out.push_str(&node.value);
            for &child in &node.children {
                out.push('\n');
                self.append_subtree(child, out);
            }
        }
    }

    /// Renders the whole document from its root. Empty documents render as
    /// the empty string.
    pub fn render(&self) -> String {
        self.root()
            .map(|root| self.render_node(root))
            .unwrap_or_default()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
