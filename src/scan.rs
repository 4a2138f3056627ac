//! Comment block location
//!
//! Finds the contiguous comment block directly above a declaration by
//! scanning the file's lines backward from the declaration. The
//! code/comment split is deliberately crude: it only has to decide where
//! the block ends, not parse comments exhaustively.

use crate::markup::clean;

/// Whether a line is executable code rather than comment text.
///
/// A line counts as comment only if it starts (after leading whitespace)
/// with `//` or `/*`. Blank lines, stray `*/`, and everything else are
/// code, which terminates the backward scan.
pub fn is_code(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.starts_with("//") && !trimmed.starts_with("/*")
}

/// Collect the comment block immediately above a declaration.
///
/// `decl_line` is the declaration's 1-based line number. Returns cleaned
/// comment fragments oldest first, or an empty vec when no adjacent block
/// exists (including when `decl_line` is out of range for `lines`).
///
/// The scan walks upward carrying a single in-block flag: a line ending
/// with `*/` arms it, a line starting with `/*` disarms it. Interior lines
/// of a `/* ... */` block therefore never hit the code check, while a code
/// line outside any block stops the scan. One flag handles exactly one
/// level of stacked `/* ... */ /* ... */` runs above the declaration;
/// deeper stacks are not a case that occurs in practice.
pub fn comment_block(lines: &[String], decl_line: usize) -> Vec<String> {
    if decl_line < 2 || decl_line - 2 >= lines.len() {
        return Vec::new();
    }

    let mut block = Vec::new();
    let mut inside_block = false;

    for line in lines[..=decl_line - 2].iter().rev() {
        if !inside_block && line.trim_end().ends_with("*/") {
            inside_block = true;
        }
        if inside_block && line.trim_start().starts_with("/*") {
            inside_block = false;
        }

        if !inside_block && is_code(line) {
            break;
        }
        block.push(clean(line));
    }

    block.reverse();
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| format!("{l}\n")).collect()
    }

    #[test]
    fn test_is_code_basics() {
        assert!(is_code("int x = 1;"));
        assert!(is_code(""));
        assert!(is_code("   "));
        assert!(is_code("*/"));
        assert!(!is_code("// comment"));
        assert!(!is_code("   /* block"));
        assert!(!is_code("/** doxygen */"));
    }

    #[test]
    fn test_block_directly_above() {
        let lines = src(&["int x = 1;", "/** Doc. */", "void f();"]);
        assert_eq!(comment_block(&lines, 3), ["Doc."]);
    }

    #[test]
    fn test_scan_stops_at_code() {
        let lines = src(&["void g();", "// not related", "void f();"]);
        assert_eq!(comment_block(&lines, 3), ["not related"]);
    }

    #[test]
    fn test_no_comment_above() {
        let lines = src(&["void g();", "void f();"]);
        assert!(comment_block(&lines, 2).is_empty());
    }

    #[test]
    fn test_declaration_on_first_line() {
        let lines = src(&["void f();"]);
        assert!(comment_block(&lines, 1).is_empty());
    }

    #[test]
    fn test_line_past_end_of_file() {
        let lines = src(&["void f();"]);
        assert!(comment_block(&lines, 10).is_empty());
    }

    #[test]
    fn test_multi_line_block_comment() {
        let lines = src(&[
            "int unrelated;",
            "/** Adds two numbers.",
            "    Overflow is undefined.",
            "*/",
            "int add(int a, int b);",
        ]);
        assert_eq!(
            comment_block(&lines, 5),
            ["Adds two numbers.", "Overflow is undefined.", ""]
        );
    }

    #[test]
    fn test_block_interior_code_like_lines_kept() {
        // Lines inside /* ... */ that would classify as code must not end
        // the scan while the block flag is armed.
        let lines = src(&[
            "double norm();",
            "/* Computes the norm.",
            "   result = sqrt(x*x);",
            "*/",
            "double length() const;",
        ]);
        let block = comment_block(&lines, 5);
        assert_eq!(block.len(), 3);
        assert_eq!(block[0], "Computes the norm.");
    }

    #[test]
    fn test_stacked_single_line_blocks() {
        let lines = src(&[
            "int y;",
            "/* first */",
            "/* second */",
            "void f();",
        ]);
        assert_eq!(comment_block(&lines, 4), ["first", "second"]);
    }

    #[test]
    fn test_line_comment_run_above_block() {
        // A // run touching the top of a /* */ block is one contiguous
        // comment region.
        let lines = src(&[
            "int z;",
            "// overview",
            "/* details */",
            "void f();",
        ]);
        assert_eq!(comment_block(&lines, 4), ["overview", "details"]);
    }

    #[test]
    fn test_blank_line_breaks_contiguity() {
        let lines = src(&["// far away", "", "void f();"]);
        assert!(comment_block(&lines, 3).is_empty());
    }
}
