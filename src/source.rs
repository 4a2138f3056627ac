//! Single-file source cache
//!
//! Declarations arrive grouped by file, so holding the lines of exactly
//! one file at a time avoids rereading headers with many declarations
//! without growing memory with the size of the codebase. Requesting a
//! different file evicts the previous one; correctness does not depend on
//! callers actually grouping by file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Caches the lines of the most recently read source file
#[derive(Debug, Default)]
pub struct SourceCache {
    file: Option<PathBuf>,
    lines: Vec<String>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of `path`, trailing newlines preserved.
    ///
    /// Reads the file on first request and on any change of path. A read
    /// failure (missing file, non-UTF-8 content) evicts the cache and
    /// propagates, so a later request for the same path retries the read
    /// rather than serving stale lines.
    pub fn lines(&mut self, path: &Path) -> Result<&[String]> {
        if self.file.as_deref() != Some(path) {
            self.file = None;
            let text = fs::read_to_string(path)?;
            self.lines = text.split_inclusive('\n').map(String::from).collect();
            self.file = Some(path.to_path_buf());
        }
        Ok(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_lines_with_newlines() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "one\ntwo\nthree").unwrap();

        let mut cache = SourceCache::new();
        let lines = cache.lines(f.path()).unwrap();
        assert_eq!(lines, ["one\n", "two\n", "three"]);
    }

    #[test]
    fn test_same_path_served_from_cache() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "cached\n").unwrap();

        let mut cache = SourceCache::new();
        cache.lines(f.path()).unwrap();

        // Change the file on disk; the cache must not notice.
        write!(f, "appended\n").unwrap();
        f.flush().unwrap();
        let lines = cache.lines(f.path()).unwrap();
        assert_eq!(lines, ["cached\n"]);
    }

    #[test]
    fn test_different_path_evicts() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        write!(a, "aaa\n").unwrap();
        write!(b, "bbb\n").unwrap();

        let mut cache = SourceCache::new();
        assert_eq!(cache.lines(a.path()).unwrap(), ["aaa\n"]);
        assert_eq!(cache.lines(b.path()).unwrap(), ["bbb\n"]);
        assert_eq!(cache.lines(a.path()).unwrap(), ["aaa\n"]);
    }

    #[test]
    fn test_missing_file_is_an_error_and_clears_cache() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "gone soon\n").unwrap();

        let mut cache = SourceCache::new();
        cache.lines(f.path()).unwrap();

        assert!(cache.lines(Path::new("/no/such/file.h")).is_err());
        // The failed read must not leave the old buffer behind.
        assert!(cache.file.is_none());
    }
}
