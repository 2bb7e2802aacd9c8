//! `Op`/`OpCode`: the edit-operation record shared by every renderer.

use serde::{Deserialize, Serialize};

/// Tag of an [`OpCode`]. Its lowercase name is surfaced only when a host
/// displays it to a user; the matcher and renderers dispatch on the
/// variant directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Equal,
    Insert,
    Delete,
    Replace,
}

impl Op {
    /// The canonical lowercase name, e.g. for a CLI or log line.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Equal => "equal",
            Op::Insert => "insert",
            Op::Delete => "delete",
            Op::Replace => "replace",
        }
    }
}

/// `(tag, i1, i2, j1, j2)`: `[i1,i2)` is a half-open range in `A`,
/// `[j1,j2)` is a half-open range in `B`. Consecutive opcodes chain: the
/// next opcode's `(i1,j1)` equals the previous one's `(i2,j2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCode {
    pub tag: Op,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl OpCode {
    pub fn equal(i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self {
            tag: Op::Equal,
            i1,
            i2,
            j1,
            j2,
        }
    }

    pub fn delete(i1: usize, i2: usize, j: usize) -> Self {
        Self {
            tag: Op::Delete,
            i1,
            i2,
            j1: j,
            j2: j,
        }
    }

    pub fn insert(i: usize, j1: usize, j2: usize) -> Self {
        Self {
            tag: Op::Insert,
            i1: i,
            i2: i,
            j1,
            j2,
        }
    }

    pub fn replace(i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self {
            tag: Op::Replace,
            i1,
            i2,
            j1,
            j2,
        }
    }
}
