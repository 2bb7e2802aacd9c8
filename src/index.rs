//! The `B2J` index: maps each element of `B` to the ascending list of
//! positions at which it occurs.

use std::collections::HashMap;

/// Maps a line (or, for `StringRatio`, a character) to the ascending list
/// of indices at which it occurs in the sequence it was built from.
/// Duplicates are preserved; absent lookups yield the empty slice.
#[derive(Debug, Default)]
pub struct ContentIndex<'a>(HashMap<&'a str, Vec<usize>>);

impl<'a> ContentIndex<'a> {
    /// Linear in the number of elements of `b`.
    pub fn build(b: &'a [String]) -> Self {
        let mut map: HashMap<&'a str, Vec<usize>> = HashMap::with_capacity(b.len());
        for (index, line) in b.iter().enumerate() {
            map.entry(line.as_str()).or_default().push(index);
        }
        Self(map)
    }

    /// Amortized constant-time lookup.
    pub fn indices(&self, key: &str) -> &[usize] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
