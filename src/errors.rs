//! Error types for the reader boundary.
//!
//! Document content itself has no error states: every sequence of lines is
//! a valid document. Only the underlying reader can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("failed to read input line: {0}")]
    Read(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
