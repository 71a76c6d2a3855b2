use core::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::{IStr, IStrError};

/// Associate the path and position of the input being processed with an
/// error.
///
/// The position is taken from the first [IStrError] found in the chain of
/// the error, errors without one are reported at the start of the input.
pub fn error_context(path: &Path, input: IStr, error: anyhow::Error) -> anyhow::Error {
    let index = find_index(&error);
    let pos = crate::env::pos_from(input.as_data(), index.saturating_sub(input.index()));

    error.context(ErrorContext {
        path: path.to_owned(),
        pos,
    })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Errors might be threaded through multiple layers of context, so the whole
/// chain is searched.
fn find_index(error: &anyhow::Error) -> usize {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map_or(0, |e| e.span.start)
}

#[derive(Debug, Error)]
#[error("{}:{pos}", .path.display())]
struct ErrorContext {
    path: PathBuf,
    pos: LineCol,
}
