//! Tree notation parsing: leading-whitespace depth turned into ordered trees.
//!
//! Every byte stream is a valid document. A line's depth is the length of
//! its run of leading indent characters, and depth alone decides where a
//! line attaches; there are no syntax errors, no schema, and no reject
//! state. Parsed documents render back to their original text
//! byte-for-byte.
//!
//! ```
//! let doc = rstree::parse("multiply\n add 1 1\n add 2 2");
//!
//! assert_eq!(doc.render(), "multiply\n add 1 1\n add 2 2");
//! assert_eq!(doc.root().and_then(|idx| doc.line(idx)), Some("multiply"));
//! ```

pub mod arena;
pub mod builder;
pub mod config;
pub mod errors;
pub mod util;

mod display;
mod render;

pub use arena::{Document, Node, PostorderIter, PreorderIter};
pub use builder::{indent_len, TreeBuilder};
pub use config::ParseOptions;
pub use errors::{TreeError, TreeResult};

/// Parses `input` with default options (space as the indent character).
pub fn parse(input: &str) -> Document {
    TreeBuilder::new().build_from_str(input)
}

/// Parses lines supplied by `reader` with default options.
pub fn parse_reader<R: std::io::BufRead>(reader: R) -> TreeResult<Document> {
    TreeBuilder::new().build_from_reader(reader)
}
