//! Doxtract: doxygen docstring extraction for C++ binding generators
//!
//! This library produces one escaped, quoted documentation string per C++
//! function or method declaration, for embedding directly into generated
//! binding code. Documentation is taken from the comment block immediately
//! above the declaration in its header file; when no such block exists, a
//! pre-built database of docs mined from implementation files is consulted,
//! with overloads disambiguated by fuzzy matching on argument-type text.
//!
//! The contract is total: extraction always yields a quoted string. A
//! declaration with no documentation anywhere yields `""`, never an error.
//!
//! # Example
//!
//! ```ignore
//! use doxtract::{Declaration, DocDb, DocExtractor, Location};
//!
//! let db = DocDb::from_json(&std::fs::read_to_string("docs.json")?)?;
//! let mut extractor = DocExtractor::new(db);
//!
//! let decl = Declaration {
//!     location: Location { file: "include/vector3.h".into(), line: 42 },
//!     parent: "Vector3".to_string(),
//!     name: "dot".to_string(),
//!     args: vec!["const Vector3&".to_string()],
//! };
//!
//! // Always a quoted string, e.g. "\"Return the dot product.\""
//! println!("{}", extractor.extract(&decl));
//! ```

pub mod cli;
pub mod db;
pub mod decl;
pub mod error;
pub mod extract;
pub mod markup;
pub mod scan;
pub mod similarity;
pub mod source;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use db::{DocDb, DocEntry};
pub use decl::{Declaration, Location};
pub use error::{DoxtractError, Result};
pub use extract::DocExtractor;
pub use markup::clean;
pub use scan::{comment_block, is_code};
pub use similarity::ratio;
pub use source::SourceCache;
