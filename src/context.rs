//! The context-diff renderer (`*** \n--- \n***************\n` format).

use crate::hunks::{group_opcodes, is_unchanged};
use crate::matcher::get_opcodes;
use crate::opcode::{Op, OpCode};
use crate::unified::DiffInput;

fn a_side_lines(a: &[String], group: &[OpCode]) -> Vec<String> {
    let mut out = Vec::new();
    for op in group {
        let prefix = match op.tag {
            Op::Equal => "  ",
            Op::Delete | Op::Replace => "! ",
            Op::Insert => continue,
        };
        for i in op.i1..op.i2 {
            out.push(format!("{prefix}{}", a[i]));
        }
    }
    out
}

fn b_side_lines(b: &[String], group: &[OpCode]) -> Vec<String> {
    let mut out = Vec::new();
    for op in group {
        let prefix = match op.tag {
            Op::Equal => "  ",
            Op::Insert | Op::Replace => "! ",
            Op::Delete => continue,
        };
        for j in op.j1..op.j2 {
            out.push(format!("{prefix}{}", b[j]));
        }
    }
    out
}

/// Renders `input` as a sequence of context-diff lines. Equal sequences
/// yield an empty vec (no output at all, not even headers).
pub fn context_diff(input: &DiffInput) -> Vec<String> {
    let opcodes = get_opcodes(&input.a, &input.b);
    if is_unchanged(&opcodes) {
        return Vec::new();
    }
    let context = if input.context == 0 { 3 } else { input.context };
    let groups = group_opcodes(&opcodes, context);

    let mut out = Vec::new();
    out.push(format!("*** {}\n", input.from_file));
    out.push(format!("--- {}\n", input.to_file));
    for group in &groups {
        let first = group.first().expect("groups are never empty");
        let last = group.last().expect("groups are never empty");
        out.push("***************\n".to_string());
        out.push(format!("*** {},{} ****\n", first.i1 + 1, last.i2));
        out.extend(a_side_lines(&input.a, group));
        out.push(format!("--- {},{} ----\n", first.j1 + 1, last.j2));
        out.extend(b_side_lines(&input.b, group));
    }
    out
}
