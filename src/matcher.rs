//! The longest-match finder and `SequenceMatcher`: the core sequence
//! diffing engine everything else in this crate is defined in terms of.

use crate::index::ContentIndex;
use crate::opcode::OpCode;
use rayon::slice::ParallelSliceMut;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A contiguous block where `A[a..a+size] == B[b..b+size]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceMatch {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Leftmost longest contiguous common run within `a[alo..ahi]` x
/// `b[blo..bhi]`. Returns a zero-size match at `(alo, blo)` if none exists.
///
/// Never overwrites the current best on a tie (`k == best.size`), which is
/// what gives the leftmost-in-`A`-then-leftmost-in-`B` guarantee: `i`
/// advances ascending, and within a fixed `i` the candidate `j`s (drawn
/// from the ascending occurrence list) are visited ascending too.
pub fn find_longest_match(
    a: &[String],
    b: &[String],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
    b2j: &ContentIndex,
) -> SequenceMatch {
    let mut best = SequenceMatch {
        a: alo,
        b: blo,
        size: 0,
    };
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        for &j in b2j.indices(&a[i]) {
            if j < blo {
                continue;
            }
            if j >= bhi {
                break;
            }
            let k = if j == 0 {
                1
            } else {
                j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
            };
            new_j2len.insert(j, k);
            if k > best.size {
                best = SequenceMatch {
                    a: i + 1 - k,
                    b: j + 1 - k,
                    size: k,
                };
            }
        }
        j2len = new_j2len;
    }
    best
}

/// Canonical list of maximal matching blocks between `a` and `b`, sorted
/// ascending by `a`, ending with a sentinel `(len(a), len(b), 0)`.
pub fn get_matching_blocks(a: &[String], b: &[String]) -> Vec<SequenceMatch> {
    let b2j = ContentIndex::build(b);
    let mut queue = vec![(0usize, a.len(), 0usize, b.len())];
    let mut raw = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let m = find_longest_match(a, b, alo, ahi, blo, bhi, &b2j);
        if m.size == 0 {
            continue;
        }
        if alo < m.a && blo < m.b {
            queue.push((alo, m.a, blo, m.b));
        }
        if m.a + m.size < ahi && m.b + m.size < bhi {
            queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
        }
        raw.push(m);
    }
    raw.par_sort_by(|x, y| x.a.cmp(&y.a));

    let mut blocks: Vec<SequenceMatch> = Vec::with_capacity(raw.len() + 1);
    for m in raw {
        if let Some(last) = blocks.last_mut() {
            if last.a + last.size == m.a && last.b + last.size == m.b {
                last.size += m.size;
                continue;
            }
        }
        blocks.push(m);
    }
    blocks.push(SequenceMatch {
        a: a.len(),
        b: b.len(),
        size: 0,
    });
    blocks
}

fn opcodes_from_blocks(blocks: &[SequenceMatch]) -> Vec<OpCode> {
    let mut opcodes = Vec::new();
    let mut i = 0usize;
    let mut j = 0usize;
    for m in blocks {
        if i < m.a && j < m.b {
            opcodes.push(OpCode::replace(i, m.a, j, m.b));
        } else if i < m.a {
            opcodes.push(OpCode::delete(i, m.a, j));
        } else if j < m.b {
            opcodes.push(OpCode::insert(i, j, m.b));
        }
        i = m.a;
        j = m.b;
        if m.size > 0 {
            opcodes.push(OpCode::equal(i, i + m.size, j, j + m.size));
            i += m.size;
            j += m.size;
        }
    }
    opcodes
}

/// Canonical list of edit opcodes derived from [`get_matching_blocks`].
pub fn get_opcodes(a: &[String], b: &[String]) -> Vec<OpCode> {
    opcodes_from_blocks(&get_matching_blocks(a, b))
}

fn ratio_of(total_len: usize, blocks: &[SequenceMatch]) -> f64 {
    if total_len == 0 {
        return 1.0;
    }
    let matched: usize = blocks.iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total_len as f64
}

/// `2*M / (|A|+|B|)` where `M` is the total size of the matching blocks.
/// `1.0` when both sequences are empty.
pub fn sequence_ratio(a: &[String], b: &[String]) -> f64 {
    ratio_of(a.len() + b.len(), &get_matching_blocks(a, b))
}

/// A single-use, immutable view over one `(A, B)` pair. Computes matching
/// blocks and opcodes once at construction; holds its `B2J` index
/// internally and does not expose it.
///
/// Example:
/// ```
/// use difftext::matcher::SequenceMatcher;
/// use difftext::lines::split_lines;
///
/// let a = split_lines("one\ntwo\nthree\n");
/// let b = split_lines("one\nthree\n");
/// let matcher = SequenceMatcher::new(&a, &b);
/// assert_eq!(matcher.opcodes().len(), 2); // equal, then delete
/// ```
pub struct SequenceMatcher<'a> {
    a: &'a [String],
    b: &'a [String],
    matching_blocks: Vec<SequenceMatch>,
    opcodes: Vec<OpCode>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(a: &'a [String], b: &'a [String]) -> Self {
        let matching_blocks = get_matching_blocks(a, b);
        let opcodes = opcodes_from_blocks(&matching_blocks);
        Self {
            a,
            b,
            matching_blocks,
            opcodes,
        }
    }

    pub fn a(&self) -> &'a [String] {
        self.a
    }

    pub fn b(&self) -> &'a [String] {
        self.b
    }

    pub fn matching_blocks(&self) -> &[SequenceMatch] {
        &self.matching_blocks
    }

    pub fn opcodes(&self) -> &[OpCode] {
        &self.opcodes
    }

    pub fn ratio(&self) -> f64 {
        ratio_of(self.a.len() + self.b.len(), &self.matching_blocks)
    }
}

#[cfg(test)]
mod matcher_tests;
