use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::input::{IStr, NL};

/// Get the line and column of the byte at `index` in `data`.
pub(crate) fn pos_from(data: &[u8], index: usize) -> LineCol {
    let index = index.min(data.len());
    let before = &data[..index];

    let line = memchr::memchr_iter(NL, before).count();
    let start = memchr::memrchr(NL, before).map_or(0, |n| n + 1);

    LineCol::new(line, index - start)
}

/// Read the input at the given path.
///
/// The loaded buffer is leaked, since it's much easier to deal with than
/// lifetimes and memory for it will be freed once the process exits
/// *anyway*.
pub fn input(path: &Path) -> anyhow::Result<IStr> {
    return inner(path).with_context(|| anyhow!("{}", path.display()));

    #[inline]
    fn inner(path: &Path) -> anyhow::Result<IStr> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        log::debug!("loaded {} bytes from {}", buf.len(), path.display());
        Ok(IStr::new(Vec::leak(buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::pos_from;

    #[test]
    fn test_pos_from() {
        let data = b"abc\nde\nfgh";
        assert_eq!(pos_from(data, 0).to_string(), "1:1");
        assert_eq!(pos_from(data, 2).to_string(), "1:3");
        assert_eq!(pos_from(data, 4).to_string(), "2:1");
        assert_eq!(pos_from(data, 8).to_string(), "3:2");
        assert_eq!(pos_from(data, 100).to_string(), "3:4");
    }
}
