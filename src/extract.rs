//! Extraction orchestration
//!
//! This module ties the pipeline together: per declaration, read the
//! source through the cache, locate the adjacent comment block, and fall
//! back to the mined database when there is none. Every path produces a
//! quoted string; a declaration nobody documented yields `""`.

use tracing::debug;

use crate::db::DocDb;
use crate::decl::Declaration;
use crate::scan::comment_block;
use crate::source::SourceCache;

/// Extracts one escaped docstring per declaration.
///
/// Owns the single-file source cache, so one extractor serves one driver
/// thread; parallel drivers should instantiate one extractor each.
#[derive(Debug, Default)]
pub struct DocExtractor {
    cache: SourceCache,
    db: DocDb,
}

impl DocExtractor {
    /// Extractor backed by a mined documentation database
    pub fn new(db: DocDb) -> Self {
        Self {
            cache: SourceCache::new(),
            db,
        }
    }

    /// Extractor with no fallback database (header comments only)
    pub fn without_db() -> Self {
        Self::default()
    }

    /// Produce the quoted, escaped documentation string for a declaration.
    ///
    /// An unreadable source file is not an error here: it means no
    /// adjacent comment can exist, and resolution falls through to the
    /// database like any other undocumented-in-header declaration.
    pub fn extract(&mut self, decl: &Declaration) -> String {
        let block = match self.cache.lines(&decl.location.file) {
            Ok(lines) => comment_block(lines, decl.location.line),
            Err(e) => {
                debug!(
                    file = %decl.location.file.display(),
                    error = %e,
                    "source unreadable, using database fallback"
                );
                Vec::new()
            }
        };

        if !block.is_empty() {
            return format!("\"{}\"", block.join("\\n"));
        }

        debug!(class = %decl.parent, func = %decl.name, "no adjacent comment block");
        self.db.resolve(decl)
    }
}
