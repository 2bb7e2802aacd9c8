//! A text-differencing library: sequence matching, opcode derivation,
//! hunk grouping, and unified/context/ndiff rendering, plus a similarity
//! ratio, nearest-match selection, and positional patch application.
//!
//! The core is [`matcher`]: everything else is a deterministic function
//! of the opcode stream it produces.

pub mod context;
pub mod error;
pub mod hunks;
pub mod index;
pub mod lines;
pub mod matcher;
pub mod ndiff;
pub mod opcode;
pub mod patch;
pub mod ratio;
pub mod unified;

pub use context::context_diff;
pub use error::DiffError;
pub use hunks::group_opcodes;
pub use lines::{join_lines, split_lines};
pub use matcher::{get_matching_blocks, get_opcodes, sequence_ratio, SequenceMatcher};
pub use ndiff::{ndiff, restore};
pub use opcode::{Op, OpCode};
pub use patch::apply_patch;
pub use ratio::{closest_match, closest_matches, string_ratio};
pub use unified::{unified_diff, DiffInput, DiffResult, Hunk};
