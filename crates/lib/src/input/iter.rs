use crate::input::{IStr, NL};

/// How lines are trimmed by [IStr::lines].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Strip leading and trailing whitespace.
    Both,
    /// Only strip the line terminator.
    Keep,
}

/// Iterator over the lines of an [IStr].
#[derive(Debug, Clone)]
pub struct Lines {
    input: IStr,
    trim: Trim,
}

impl Lines {
    pub(crate) fn new(input: IStr, trim: Trim) -> Self {
        Self { input, trim }
    }
}

impl Iterator for Lines {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let mut line = self.input.split_once(NL)?;

        match self.trim {
            Trim::Both => line.trim(),
            Trim::Keep => line.trim_cr(),
        }

        Some(line)
    }
}
