//! Collapses an opcode stream into hunks: groups separated by stretches
//! of equality longer than `2*context`, with leading/trailing equal runs
//! clipped to at most `context` lines.

use crate::opcode::{Op, OpCode};

fn trim_equal_start(op: &OpCode, context: usize) -> OpCode {
    let size = op.i2 - op.i1;
    if size > context {
        OpCode::equal(op.i2 - context, op.i2, op.j2 - context, op.j2)
    } else {
        *op
    }
}

fn trim_equal_end(op: &OpCode, context: usize) -> OpCode {
    let size = op.i2 - op.i1;
    if size > context {
        OpCode::equal(op.i1, op.i1 + context, op.j1, op.j1 + context)
    } else {
        *op
    }
}

fn split_equal(op: &OpCode, context: usize) -> Option<(OpCode, OpCode)> {
    let size = op.i2 - op.i1;
    if size > 2 * context {
        let head = OpCode::equal(op.i1, op.i1 + context, op.j1, op.j1 + context);
        let tail = OpCode::equal(op.i2 - context, op.i2, op.j2 - context, op.j2);
        Some((head, tail))
    } else {
        None
    }
}

/// Iterator over the hunks (each a `Vec<OpCode>`) produced by grouping
/// `opcodes` with the given context size.
pub struct Groups<'a> {
    iter: std::iter::Enumerate<std::slice::Iter<'a, OpCode>>,
    last_index: usize,
    context: usize,
    stash: Option<OpCode>,
}

impl<'a> Iterator for Groups<'a> {
    type Item = Vec<OpCode>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = Vec::new();
        if let Some(stashed) = self.stash.take() {
            group.push(stashed);
        }
        while let Some((i, op)) = self.iter.next() {
            if op.tag == Op::Equal {
                if i == 0 || group.is_empty() {
                    group.push(trim_equal_start(op, self.context));
                } else if i == self.last_index {
                    group.push(trim_equal_end(op, self.context));
                    return Some(group);
                } else if let Some((head, tail)) = split_equal(op, self.context) {
                    self.stash = Some(tail);
                    group.push(head);
                    return Some(group);
                } else {
                    group.push(*op);
                }
            } else {
                group.push(*op);
                if i == self.last_index {
                    return Some(group);
                }
            }
        }
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }
}

/// Group an opcode stream into hunks, as [`Groups`] does, collected eagerly.
pub fn group_opcodes(opcodes: &[OpCode], context: usize) -> Vec<Vec<OpCode>> {
    if opcodes.is_empty() {
        return Vec::new();
    }
    Groups {
        iter: opcodes.iter().enumerate(),
        last_index: opcodes.len() - 1,
        context,
        stash: None,
    }
    .collect()
}

/// True when `opcodes` represents no change at all: either empty, or a
/// single `Equal` opcode spanning the whole input.
pub fn is_unchanged(opcodes: &[OpCode]) -> bool {
    match opcodes {
        [] => true,
        [only] => only.tag == Op::Equal,
        _ => false,
    }
}
