//! Line-to-tree builder: the depth-tracking state machine.
//!
//! A depth comparison plus a one-entry stack pop replaces grammar
//! productions. Each line is measured once and attached once, so a full
//! parse is a single O(n) pass over the input.

use std::io::BufRead;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::Document;
use crate::config::ParseOptions;
use crate::errors::TreeResult;

/// Counts leading `edge` characters in `line`.
///
/// Stops at the first non-matching character. Returns 0 for an empty line
/// or a line starting with any other character; an all-edge line has depth
/// equal to its full length.
pub fn indent_len(line: &str, edge: char) -> usize {
    line.chars().take_while(|&c| c == edge).count()
}

/// Builds documents from line-oriented input.
///
/// There is no reject state: every sequence of lines produces a document.
/// Inconsistent indentation is placed, not validated.
pub struct TreeBuilder {
    options: ParseOptions,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a complete in-memory document. Infallible.
    #[instrument(level = "debug", skip(self, input))]
    pub fn build_from_str(&self, input: &str) -> Document {
        let mut state = BuildState::new(self.options.edge);
        for line in input.lines() {
            state.push_line(line.to_string());
        }
        state.finish()
    }

    /// Parse lines supplied by `reader`.
    ///
    /// The only failure mode is an I/O error from the reader itself;
    /// document content cannot fail to parse.
    #[instrument(level = "debug", skip(self, reader))]
    pub fn build_from_reader<R: BufRead>(&self, reader: R) -> TreeResult<Document> {
        let mut state = BuildState::new(self.options.edge);
        for line in reader.lines() {
            state.push_line(line?);
        }
        Ok(state.finish())
    }
}

/// Per-parse state: the open-ancestor stack and the attachment cursor.
struct BuildState {
    doc: Document,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl BuildState {
    fn new(edge: char) -> Self {
        Self {
            doc: Document::new(edge),
            stack: Vec::new(),
            current: None,
        }
    }

    fn push_line(&mut self, value: String) {
        // The first line becomes the root; no placement logic runs for it.
        let Some(mut current) = self.current else {
            let root = self.doc.insert_node(value, None);
            self.stack.push(root);
            self.current = Some(root);
            return;
        };

        let edge = self.doc.edge();
        let depth = indent_len(&value, edge);
        let current_depth = self
            .doc
            .get_node(current)
            .map(|node| indent_len(&node.value, edge))
            .unwrap_or(0);

        // Dedent rule: at most one pop per line, never a loop. A line
        // rising several levels at once attaches to whichever ancestor the
        // single pop exposes; if the pop empties the stack the cursor
        // stays put.
        if depth <= current_depth && !self.stack.is_empty() {
            self.stack.pop();
            if let Some(&open) = self.stack.last() {
                current = open;
            }
        }

        let node_idx = self.doc.insert_node(value, Some(current));
        self.stack.push(node_idx);
        self.current = Some(node_idx);
    }

    fn finish(self) -> Document {
        self.doc
    }
}
