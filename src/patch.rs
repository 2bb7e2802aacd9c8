//! Positional unified-diff patch application: no fuzzy context search,
//! only the exact base sequence this crate's own renderers were pointed
//! at (see spec'd limitation in the module docs of this crate).

use crate::error::DiffError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HUNK_HEADER_WITH_COUNTS: Regex =
        Regex::new(r"^@@ -(\d+),(\d+) \+(\d+),(\d+) @@").unwrap();
    static ref HUNK_HEADER_NO_COUNTS: Regex = Regex::new(r"^@@ -(\d+) \+(\d+) @@").unwrap();
}

struct HunkHeader {
    old_start: usize,
    old_count: usize,
    new_start: usize,
    new_count: usize,
}

fn parse_hunk_header(line: &str, line_number: usize) -> Result<HunkHeader, DiffError> {
    if let Some(caps) = HUNK_HEADER_WITH_COUNTS.captures(line) {
        return Ok(HunkHeader {
            old_start: caps[1].parse().unwrap(),
            old_count: caps[2].parse().unwrap(),
            new_start: caps[3].parse().unwrap(),
            new_count: caps[4].parse().unwrap(),
        });
    }
    if let Some(caps) = HUNK_HEADER_NO_COUNTS.captures(line) {
        return Ok(HunkHeader {
            old_start: caps[1].parse().unwrap(),
            old_count: 1,
            new_start: caps[2].parse().unwrap(),
            new_count: 1,
        });
    }
    Err(DiffError::MalformedHunkHeader {
        line_number,
        line: line.to_string(),
    })
}

struct ParsedHunk {
    header: HunkHeader,
    removes: Vec<String>,
    inserts: Vec<String>,
}

fn parse_hunks(patch: &str) -> Result<Vec<ParsedHunk>, DiffError> {
    let lines: Vec<&str> = patch.split_inclusive('\n').collect();
    let mut hunks = Vec::new();
    let mut idx = 0usize;

    while idx < lines.len() {
        let line = lines[idx];
        if line.starts_with("---") || line.starts_with("+++") {
            idx += 1;
            continue;
        }
        if !line.starts_with("@@") {
            idx += 1;
            continue;
        }
        let header = parse_hunk_header(line.trim_end_matches('\n'), idx + 1)?;
        idx += 1;
        let mut removes = Vec::new();
        let mut inserts = Vec::new();
        while idx < lines.len() {
            let body_line = lines[idx];
            if body_line.starts_with("@@") || body_line.starts_with("---") {
                break;
            }
            if let Some(rest) = body_line.strip_prefix('-') {
                removes.push(rest.to_string());
            } else if let Some(rest) = body_line.strip_prefix('+') {
                inserts.push(rest.to_string());
            } else if body_line.starts_with(' ') {
                // context line: present in the stream, ignored for application
            }
            idx += 1;
        }
        hunks.push(ParsedHunk {
            header,
            removes,
            inserts,
        });
    }
    Ok(hunks)
}

/// Applies a unified-diff `patch` text to `a` positionally: each hunk is
/// spliced in at `old_start - 1 + offset`, verifying that the lines being
/// removed match exactly before splicing. `a` is never mutated in place;
/// on any error the returned `Err` leaves the caller's input untouched.
pub fn apply_patch(a: &[String], patch: &str) -> Result<Vec<String>, DiffError> {
    let hunks = parse_hunks(patch)?;
    let mut result: Vec<String> = a.to_vec();
    let mut offset: isize = 0;

    for hunk in &hunks {
        let pos = (hunk.header.old_start as isize - 1 + offset) as usize;
        for (r, expected) in hunk.removes.iter().enumerate() {
            let actual_index = pos + r;
            let actual = result.get(actual_index).cloned().unwrap_or_default();
            if &actual != expected {
                return Err(DiffError::PatchMismatch {
                    line_number: actual_index + 1,
                    expected: expected.clone(),
                    actual,
                });
            }
        }
        let end = pos + hunk.removes.len();
        result.splice(pos..end, hunk.inserts.iter().cloned());
        offset += hunk.inserts.len() as isize - hunk.removes.len() as isize;
    }
    Ok(result)
}
