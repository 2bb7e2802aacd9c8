//! `ndiff` rendering and `restore`: a flat, ungrouped per-opcode walk and
//! its inverse.

use crate::matcher::get_opcodes;
use crate::opcode::Op;

/// Renders the ndiff delta between `a` and `b`: one entry per line, each
/// prefixed with `"  "`, `"+ "`, or `"- "`. Walks the opcode stream
/// directly; there is no hunk grouping in this format.
pub fn ndiff(a: &[String], b: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for op in get_opcodes(a, b) {
        match op.tag {
            Op::Equal => {
                for i in op.i1..op.i2 {
                    out.push(format!("  {}", a[i]));
                }
            }
            Op::Insert => {
                for j in op.j1..op.j2 {
                    out.push(format!("+ {}", b[j]));
                }
            }
            Op::Delete => {
                for i in op.i1..op.i2 {
                    out.push(format!("- {}", a[i]));
                }
            }
            Op::Replace => {
                for i in op.i1..op.i2 {
                    out.push(format!("- {}", a[i]));
                }
                for j in op.j1..op.j2 {
                    out.push(format!("+ {}", b[j]));
                }
            }
        }
    }
    out
}

/// Reconstructs one side of an ndiff delta. `which == 1` recovers `A`,
/// `which == 2` recovers `B`; any other value yields an empty sequence,
/// per the implementer's-choice fallback this crate documents for an
/// out-of-range selector.
pub fn restore(delta: &[String], which: u8) -> Vec<String> {
    let keep_prefix = match which {
        1 => "- ",
        2 => "+ ",
        _ => return Vec::new(),
    };
    delta
        .iter()
        .filter_map(|line| {
            if let Some(rest) = line.strip_prefix("  ") {
                Some(rest.to_string())
            } else {
                line.strip_prefix(keep_prefix).map(|rest| rest.to_string())
            }
        })
        .collect()
}
