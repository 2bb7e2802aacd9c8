//! Line splitting and joining: the round-trip-safe boundary between raw
//! text and the line sequences the rest of this crate operates on.

/// Split `s` on `"\n"`, keeping the terminator attached to the preceding
/// line. A trailing `"\n"` does not produce an empty final entry; a string
/// without one yields a final entry without `"\n"`. Empty input yields an
/// empty sequence.
pub fn split_lines(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split_inclusive('\n').map(|s| s.to_string()).collect()
}

/// Inverse of [`split_lines`]: concatenating the pieces reproduces the
/// original input.
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}
