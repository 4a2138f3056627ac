//! Documentation database and fallback resolution
//!
//! An external mining step scans implementation files for per-overload
//! documentation and hands the result over as nested JSON:
//!
//! ```json
//! {
//!     "Vector3": {
//!         "dot": {
//!             "1": [ { "args": ["const Vector3&"], "doc": "Dot product." } ]
//!         }
//!     }
//! }
//! ```
//!
//! Internally the three levels collapse into one map keyed by
//! `(class, function, argument count)`. A miss at any level is an
//! undocumented overload, which is expected and silent; resolution never
//! fails the caller.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::decl::Declaration;
use crate::error::{DoxtractError, Result};
use crate::markup::clean;
use crate::similarity::ratio;

/// One mined overload: stored argument-type texts and raw doc text
#[derive(Debug, Clone, Deserialize)]
pub struct DocEntry {
    /// Argument type texts as they appeared in the implementation file
    #[serde(default)]
    pub args: Vec<String>,

    /// Raw documentation text, normalized only on resolution
    pub doc: String,
}

type DocKey = (String, String, usize);

/// Pre-mined documentation, keyed by class, function, and argument count
#[derive(Debug, Default)]
pub struct DocDb {
    entries: HashMap<DocKey, Vec<DocEntry>>,
}

impl DocDb {
    /// An empty database; every resolution yields `""`
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the miner's nested JSON form.
    ///
    /// Argument-count keys that do not parse as integers are skipped with
    /// a warning; a malformed document as a whole is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        type Raw = HashMap<String, HashMap<String, HashMap<String, Vec<DocEntry>>>>;

        let raw: Raw =
            serde_json::from_str(json).map_err(|e| DoxtractError::InvalidDatabase {
                message: e.to_string(),
            })?;

        let mut db = Self::new();
        for (class, funcs) in raw {
            for (func, by_count) in funcs {
                for (count, entries) in by_count {
                    match count.parse::<usize>() {
                        Ok(n) => {
                            db.entries.insert((class.clone(), func.clone(), n), entries);
                        }
                        Err(_) => {
                            warn!(%class, %func, key = %count, "skipping non-numeric argument-count key");
                        }
                    }
                }
            }
        }
        Ok(db)
    }

    /// Register candidates for a `(class, function, arg_count)` key,
    /// appended after any already stored (first-seen order wins ties)
    pub fn insert(&mut self, class: &str, func: &str, arg_count: usize, entry: DocEntry) {
        self.entries
            .entry((class.to_string(), func.to_string(), arg_count))
            .or_default()
            .push(entry);
    }

    /// Number of `(class, function, arg_count)` keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve documentation for a declaration with no adjacent comment.
    ///
    /// Always returns a quoted string; every miss or scoring dead end
    /// degrades to `""`.
    pub fn resolve(&self, decl: &Declaration) -> String {
        format!("\"{}\"", self.lookup(decl).unwrap_or_default())
    }

    fn lookup(&self, decl: &Declaration) -> Option<String> {
        let key = (decl.parent.clone(), decl.name.clone(), decl.args.len());
        let candidates = self.entries.get(&key)?;

        if decl.args.is_empty() || candidates.len() == 1 {
            return Some(clean(&candidates.first()?.doc));
        }

        // Rank candidates by summed per-position similarity between the
        // live argument types and the stored ones. Strictly-greater keeps
        // ties on the first-seen candidate.
        let mut top: Option<(&DocEntry, u32)> = None;
        for entry in candidates {
            let score: u32 = decl
                .args
                .iter()
                .enumerate()
                .map(|(i, arg)| entry.args.get(i).map_or(0, |stored| ratio(arg, stored)))
                .sum();

            match top {
                None => top = Some((entry, score)),
                Some((_, best)) if score > best => top = Some((entry, score)),
                _ => {}
            }
        }

        let (winner, best) = top?;
        if best == 0 {
            debug!(class = %decl.parent, func = %decl.name, "no candidate scored above zero");
            return Some(String::new());
        }
        Some(clean(&winner.doc))
    }
}
