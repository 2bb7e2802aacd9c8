//! `DiffInput`/`DiffResult`/`Hunk` and the unified-diff renderer.

use crate::hunks::{group_opcodes, is_unchanged};
use crate::matcher::get_opcodes;
use crate::opcode::{Op, OpCode};
use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_CONTEXT: usize = 3;

/// One rendered hunk: a 1-based old/new line range plus its body lines,
/// each already prefixed with `' '`/`'+'`/`'-'` and carrying its original
/// line terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
    pub lines: Vec<String>,
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@\n",
            self.old_start, self.old_lines, self.new_start, self.new_lines
        )?;
        for line in &self.lines {
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// `(from_file, to_file, hunks)`. `hunks` empty iff the two sequences
/// compared equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub from_file: String,
    pub to_file: String,
    pub hunks: Vec<Hunk>,
}

impl DiffResult {
    /// Render to the bit-exact unified-diff wire format. The empty hunks
    /// case renders to `""`, with no header at all.
    pub fn render(&self) -> String {
        if self.hunks.is_empty() {
            return String::new();
        }
        let mut out = format!("--- {}\n+++ {}\n", self.from_file, self.to_file);
        for hunk in &self.hunks {
            out.push_str(&format!(
                "@@ -{},{} +{},{} @@\n",
                hunk.old_start, hunk.old_lines, hunk.new_start, hunk.new_lines
            ));
            for line in &hunk.lines {
                out.push_str(line);
            }
        }
        out
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Configuration for [`unified_diff`]/[`context_diff`]: `context` of `0`
/// is treated as the default of 3; negative context is not representable
/// (callers pass `usize`) and is therefore already clamped to 0 at the
/// type level, per the implementer's choice documented for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffInput {
    pub a: Vec<String>,
    pub b: Vec<String>,
    pub from_file: String,
    pub to_file: String,
    pub context: usize,
}

impl DiffInput {
    pub fn new(a: Vec<String>, b: Vec<String>) -> Self {
        Self {
            a,
            b,
            from_file: String::new(),
            to_file: String::new(),
            context: DEFAULT_CONTEXT,
        }
    }

    fn effective_context(&self) -> usize {
        if self.context == 0 {
            DEFAULT_CONTEXT
        } else {
            self.context
        }
    }
}

fn hunk_from_group(a: &[String], b: &[String], group: &[OpCode]) -> Hunk {
    let first = group.first().expect("groups are never empty");
    let last = group.last().expect("groups are never empty");
    let mut lines = Vec::new();
    for op in group {
        match op.tag {
            Op::Equal => {
                for i in op.i1..op.i2 {
                    lines.push(format!(" {}", a[i]));
                }
            }
            Op::Delete => {
                for i in op.i1..op.i2 {
                    lines.push(format!("-{}", a[i]));
                }
            }
            Op::Insert => {
                for j in op.j1..op.j2 {
                    lines.push(format!("+{}", b[j]));
                }
            }
            Op::Replace => {
                for i in op.i1..op.i2 {
                    lines.push(format!("-{}", a[i]));
                }
                for j in op.j1..op.j2 {
                    lines.push(format!("+{}", b[j]));
                }
            }
        }
    }
    Hunk {
        old_start: first.i1 + 1,
        old_lines: last.i2 - first.i1,
        new_start: first.j1 + 1,
        new_lines: last.j2 - first.j1,
        lines,
    }
}

/// Computes a [`DiffResult`] from a [`DiffInput`]: the unified-diff
/// renderer. Equal sequences produce a result with no hunks.
pub fn unified_diff(input: &DiffInput) -> DiffResult {
    let opcodes = get_opcodes(&input.a, &input.b);
    let hunks = if is_unchanged(&opcodes) {
        Vec::new()
    } else {
        group_opcodes(&opcodes, input.effective_context())
            .iter()
            .map(|group| hunk_from_group(&input.a, &input.b, group))
            .collect()
    };
    DiffResult {
        from_file: input.from_file.clone(),
        to_file: input.to_file.clone(),
        hunks,
    }
}
