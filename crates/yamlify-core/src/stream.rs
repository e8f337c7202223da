//! Line-oriented driver — converts JSON-Lines input record by record.

use crate::emitter::emit;

/// Convert newline-delimited JSON into YAML, one block per record.
///
/// Each non-blank line is converted independently; blank lines are skipped.
/// A line that fails to parse is replaced in place by a two-line diagnostic
/// comment carrying its 1-based line number and original content, so one
/// malformed record never aborts the batch. Blocks are joined with a blank
/// line between them.
///
/// Line numbers count physical input lines (blank lines included), so a
/// diagnostic points at the actual line in the caller's input.
pub fn emit_records(jsonl: &str) -> String {
    let mut blocks = Vec::new();
    for (idx, line) in jsonl.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match emit(line) {
            Ok(yaml) => blocks.push(yaml),
            Err(err) => blocks.push(format!(
                "# Error converting line {}: {}\n# Original content: {}",
                idx + 1,
                err,
                line
            )),
        }
    }
    blocks.join("\n\n")
}
