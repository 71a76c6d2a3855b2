//! Splitting sequences into fixed-size groups.

use core::iter::FusedIterator;

/// How [chunker] advances between groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Consecutive, non-overlapping groups.
    Distinct,
    /// A window advancing one element at a time.
    Sliding,
}

/// Step through `seq` in groups of `size`.
///
/// With [Grouping::Distinct] the last group holds whatever remains. With
/// [Grouping::Sliding] a window starts at every position, so the final
/// windows are truncated by the end of the sequence. A `size` of zero
/// produces nothing.
///
/// # Examples
///
/// ```
/// use lib::chunk::{chunker, Grouping};
///
/// let groups = chunker(b"abcdefgh", 3, Grouping::Distinct).collect::<Vec<_>>();
/// assert_eq!(groups, [&b"abc"[..], b"def", b"gh"]);
///
/// let windows = chunker(b"abcde", 3, Grouping::Sliding).collect::<Vec<_>>();
/// assert_eq!(windows, [&b"abc"[..], b"bcd", b"cde", b"de", b"e"]);
/// ```
pub fn chunker<T>(seq: &[T], size: usize, grouping: Grouping) -> Chunks<'_, T> {
    let step = match grouping {
        Grouping::Distinct => size,
        Grouping::Sliding => 1,
    };

    Chunks {
        seq,
        size,
        step,
        pos: 0,
    }
}

/// Iterator produced by [chunker].
#[derive(Debug, Clone)]
pub struct Chunks<'a, T> {
    seq: &'a [T],
    size: usize,
    step: usize,
    pos: usize,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 || self.pos >= self.seq.len() {
            return None;
        }

        let end = self.pos.saturating_add(self.size).min(self.seq.len());
        let group = &self.seq[self.pos..end];
        self.pos += self.step;
        Some(group)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.size == 0 {
            0
        } else {
            self.seq.len().saturating_sub(self.pos).div_ceil(self.step)
        };

        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}

#[cfg(test)]
mod tests {
    use super::{chunker, Grouping};

    #[test]
    fn test_distinct_groups() {
        let groups = chunker(b"abcdefghi", 3, Grouping::Distinct).collect::<Vec<_>>();
        assert_eq!(groups, [&b"abc"[..], b"def", b"ghi"]);
    }

    #[test]
    fn test_sliding_windows() {
        let it = chunker(b"abcdefghi", 3, Grouping::Sliding);
        assert_eq!(it.len(), 9);

        let windows = it.take(3).collect::<Vec<_>>();
        assert_eq!(windows, [&b"abc"[..], b"bcd", b"cde"]);
    }

    #[test]
    fn test_size_hint_matches() {
        for size in 1..6 {
            for grouping in [Grouping::Distinct, Grouping::Sliding] {
                let it = chunker(&[1, 2, 3, 4, 5, 6, 7], size, grouping);
                assert_eq!(it.len(), it.clone().count());
            }
        }
    }

    #[test]
    fn test_zero_size() {
        assert_eq!(chunker(b"abc", 0, Grouping::Distinct).count(), 0);
        assert_eq!(chunker(b"abc", 0, Grouping::Sliding).count(), 0);
    }
}
