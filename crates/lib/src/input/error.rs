use core::ops::Range;

use thiserror::Error;

/// Error raised through string processing.
#[derive(Debug, Error)]
#[error("{kind} (at {span:?})")]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Construct an error wrapping a custom error raised over the given span.
    #[inline]
    pub fn boxed<E>(span: Range<usize>, error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::new(span, ErrorKind::Boxed(error.into()))
    }

    /// Span of input the error was raised for.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("not utf-8")]
    NotUtf8,
    #[error("expected line")]
    ExpectedLine,
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("unexpected eof")]
    UnexpectedEof,
    #[error("unexpected trailing input")]
    Trailing,
    #[error("{0}")]
    Boxed(Box<dyn std::error::Error + Send + Sync + 'static>),
}
