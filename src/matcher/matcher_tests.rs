use super::*;
use crate::lines::split_lines;
use crate::opcode::Op;

fn lines(s: &str) -> Vec<String> {
    split_lines(s)
}

/// O(n^3)-ish reference implementation used only to cross-check
/// [`find_longest_match`] against exhaustive search on short inputs.
fn brute_force_longest_match(
    a: &[String],
    b: &[String],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> SequenceMatch {
    let mut best = SequenceMatch {
        a: alo,
        b: blo,
        size: 0,
    };
    for i in alo..ahi {
        for j in blo..bhi {
            let mut size = 0;
            while i + size < ahi && j + size < bhi && a[i + size] == b[j + size] {
                size += 1;
            }
            if size > best.size {
                best = SequenceMatch { a: i, b: j, size };
            }
        }
    }
    best
}

#[test]
fn longest_match_matches_brute_force_reference() {
    let alphabets: [&[&str]; 2] = [&["A", "B"], &["A", "B", "C"]];
    for alphabet in alphabets {
        for a_len in 0..5 {
            for b_len in 0..5 {
                let a: Vec<String> = (0..a_len)
                    .map(|i| alphabet[i % alphabet.len()].to_string())
                    .collect();
                let b: Vec<String> = (0..b_len)
                    .map(|i| alphabet[(i * 2 + 1) % alphabet.len()].to_string())
                    .collect();
                let b2j = ContentIndex::build(&b);
                let got = find_longest_match(&a, &b, 0, a.len(), 0, b.len(), &b2j);
                let want = brute_force_longest_match(&a, &b, 0, a.len(), 0, b.len());
                assert_eq!(got, want, "a={a:?} b={b:?}");
            }
        }
    }
}

#[test]
fn matching_blocks_end_with_sentinel() {
    let a = lines("A\nB\nC\n");
    let b = lines("A\nC\n");
    let blocks = get_matching_blocks(&a, &b);
    let last = *blocks.last().unwrap();
    assert_eq!(last, SequenceMatch { a: 3, b: 2, size: 0 });
    assert_eq!(blocks.iter().filter(|m| m.size == 0).count(), 1);
}

#[test]
fn matching_blocks_are_maximal_and_monotone() {
    let a = lines("A\nB\nC\nD\nE\nF\nG\nH\nI\nJ\nK\nL\nM\n");
    let b = lines("A\nC\nD\nEf\nFg\nG\nH\nI\nJ\nK\nH\nL\nM\n");
    let blocks = get_matching_blocks(&a, &b);
    for pair in blocks.windows(2) {
        let (m1, m2) = (pair[0], pair[1]);
        assert!(m1.a <= m2.a);
        assert!(m1.b <= m2.b);
        // no two consecutive blocks are adjacent in both coordinates
        assert!(!(m1.a + m1.size == m2.a && m1.b + m1.size == m2.b));
    }
}

#[test]
fn opcodes_tile_both_sequences_completely() {
    let a = lines("A\nB\nC\nD\nE\nF\nG\nH\nI\nJ\nK\nL\nM\n");
    let b = lines("A\nC\nD\nEf\nFg\nG\nH\nI\nJ\nK\nH\nL\nM\n");
    let opcodes = get_opcodes(&a, &b);
    let mut i = 0usize;
    let mut j = 0usize;
    for op in &opcodes {
        assert_eq!(op.i1, i, "A-side gap before {op:?}");
        assert_eq!(op.j1, j, "B-side gap before {op:?}");
        assert!(op.i1 <= op.i2);
        assert!(op.j1 <= op.j2);
        match op.tag {
            Op::Equal => {
                assert_eq!(op.i2 - op.i1, op.j2 - op.j1);
                assert_eq!(a[op.i1..op.i2], b[op.j1..op.j2]);
            }
            Op::Delete => assert_eq!(op.j1, op.j2),
            Op::Insert => assert_eq!(op.i1, op.i2),
            Op::Replace => {
                assert!(op.i1 < op.i2);
                assert!(op.j1 < op.j2);
            }
        }
        i = op.i2;
        j = op.j2;
    }
    assert_eq!(i, a.len());
    assert_eq!(j, b.len());
}

#[test]
fn opcodes_single_line_replace() {
    let a = lines("foo\nbar\nbaz\n");
    let b = lines("foo\nBAR\nbaz\n");
    let opcodes = get_opcodes(&a, &b);
    assert_eq!(
        opcodes,
        vec![
            OpCode::equal(0, 1, 0, 1),
            OpCode::replace(1, 2, 1, 2),
            OpCode::equal(2, 3, 2, 3),
        ]
    );
}

#[test]
fn opcodes_insert_and_delete() {
    let a = lines("one\nthree\n");
    let b = lines("one\ntwo\nthree\n");
    assert_eq!(
        get_opcodes(&a, &b),
        vec![OpCode::equal(0, 1, 0, 1), OpCode::insert(1, 1, 2), OpCode::equal(1, 2, 2, 3)]
    );

    let opcodes = get_opcodes(&b, &a);
    assert_eq!(
        opcodes,
        vec![OpCode::equal(0, 1, 0, 1), OpCode::delete(1, 2, 1), OpCode::equal(2, 3, 1, 2)]
    );
}

#[test]
fn ratio_of_identical_sequences_is_one() {
    let a = lines("x\ny\nz\n");
    assert_eq!(sequence_ratio(&a, &a), 1.0);
}

#[test]
fn ratio_of_empty_sequences_is_one() {
    let empty: Vec<String> = vec![];
    assert_eq!(sequence_ratio(&empty, &empty), 1.0);
}

#[test]
fn ratio_is_bounded() {
    let a = lines("a\nb\nc\nd\n");
    let b = lines("w\nx\ny\nz\n");
    let r = sequence_ratio(&a, &b);
    assert!((0.0..=1.0).contains(&r));
}

#[test]
fn duplicate_lines_stress_the_index() {
    let a = lines("A\nB\nA\nB\nA\nB\n");
    let b = lines("A\nA\nA\nB\nB\nB\n");
    let blocks = get_matching_blocks(&a, &b);
    // tiling must still hold even with heavy duplication
    let total: usize = blocks.iter().map(|m| m.size).sum();
    assert!(total <= a.len().min(b.len()));
}

#[test]
fn sequence_matcher_matches_free_functions() {
    let a = lines("one\ntwo\nthree\n");
    let b = lines("one\nthree\n");
    let matcher = SequenceMatcher::new(&a, &b);
    assert_eq!(matcher.opcodes(), get_opcodes(&a, &b).as_slice());
    assert_eq!(matcher.matching_blocks(), get_matching_blocks(&a, &b).as_slice());
    assert_eq!(matcher.ratio(), sequence_ratio(&a, &b));
}
