//! Declaration input types
//!
//! Declarations are produced by an external reflection layer (a C++ AST
//! walker) and handed to the extractor one at a time. They are read-only
//! here; the fields mirror what the binding generator already knows about
//! each entity.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Position of a declaration in its source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Path to the header file containing the declaration
    pub file: PathBuf,

    /// 1-based line number of the declaration
    pub line: usize,
}

/// One documentable entity: a function, method, or constructor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    /// Where the declaration appears in source
    pub location: Location,

    /// Enclosing class or struct name, empty for free functions
    #[serde(default)]
    pub parent: String,

    /// The function or method identifier
    pub name: String,

    /// Argument type texts in declaration order,
    /// e.g. `["const std::vector<int>&", "int"]`
    #[serde(default)]
    pub args: Vec<String>,
}
