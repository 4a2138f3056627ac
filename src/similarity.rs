//! Fuzzy string similarity for overload matching
//!
//! Argument-type text mined from implementation files rarely matches the
//! header's spelling exactly (`const QString &` vs `const QString&`), so
//! overload candidates are ranked by edit-distance similarity instead of
//! equality.

/// Similarity ratio between two strings on a 0-100 scale.
///
/// 100 means identical, 0 means nothing in common. Based on normalized
/// Levenshtein distance, rounded to the nearest integer.
pub fn ratio(a: &str, b: &str) -> u32 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
}
