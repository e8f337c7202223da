//! JSON-to-YAML emitter — renders a `serde_json::Value` tree as block-style YAML.
//!
//! The emitter implements the YAML 1.1 subset this crate guarantees:
//!
//! - **Block mappings/sequences**: nesting expressed via 2-space indentation
//! - **Block literals**: multi-line strings (and strings containing `": "`)
//!   as `|` scalars with a chomping indicator chosen from the trailing newlines
//! - **Selective quoting**: plain scalars stay unquoted unless they would be
//!   misread as YAML syntax, a keyword, or a number
//! - **Embedded-JSON expansion**: a string value that parses as non-string
//!   JSON is re-rendered as the parsed value (one level of unwrapping)
//! - **Inline empty containers**: `[]` and `{}` never expand into block form
//!
//! # Example
//! ```
//! use yamlify_core::emit;
//! let json = r#"{"name":"Alice","age":30}"#;
//! let yaml = emit(json).unwrap();
//! assert_eq!(yaml, "name: Alice\nage: 30");
//! ```

use crate::error::Result;
use serde_json::{Map, Number, Value};

/// Convert a JSON document into YAML text.
///
/// Parses the input as JSON, then walks the value tree to produce block-style
/// YAML. Returns an error if the input is not valid JSON; emission itself is
/// total over any parsed value.
pub fn emit(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(emit_value(&value, 0))
}

/// Render a JSON value as YAML at the given indentation column.
///
/// `indent` is a column count in multiples of 2. Scalars render as a single
/// unindented line (or an unindented block literal); containers render with
/// every line carrying `indent` leading spaces, which is what lets callers
/// tell "already a nested block" apart from an inline scalar.
pub fn emit_value(value: &Value, indent: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => emit_string(s, indent),
        Value::Array(arr) => emit_array(arr, indent),
        Value::Object(map) => emit_object(map, indent),
    }
}

/// Render a string value, expanding embedded JSON first.
///
/// A string that parses as JSON and yields anything other than a string is
/// re-rendered as the parsed value at the same indent: `"123"` becomes the
/// number `123`, `"{\"a\":1}"` becomes a nested mapping. The parsed result
/// being a non-string is what bounds the unwrap to a single level.
fn emit_string(s: &str, indent: usize) -> String {
    if let Ok(parsed) = serde_json::from_str::<Value>(s) {
        if !parsed.is_string() {
            return emit_value(&parsed, indent);
        }
    }
    format_scalar(s)
}

/// Render a string as a YAML scalar: block literal for multi-line content
/// (or content containing `": "`, which a plain scalar would misread as a
/// mapping separator), otherwise quoted or plain per the classifier.
fn format_scalar(s: &str) -> String {
    if s.contains('\n') || s.contains(": ") {
        return block_literal(s);
    }
    let escaped = escape_scalar(s);
    if s.is_empty() || needs_quotes(s) || escaped != s {
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}

/// Render a block literal: the `|` marker line with its chomping indicator,
/// followed by the content lines unindented. Indentation is applied later by
/// `reflow` relative to the introducing line.
///
/// Chomping selection from the source string's trailing newlines:
/// - two or more (`\n\n`) ⇒ `+` keep: every trailing blank line is content
/// - exactly one ⇒ no indicator (clip): the consumer restores one newline
/// - none ⇒ `-` strip: no trailing newline at all
fn block_literal(s: &str) -> String {
    let mut lines: Vec<&str> = s.split('\n').collect();
    // A trailing empty element is a split artifact of a final '\n', not content.
    if lines.last() == Some(&"") {
        lines.pop();
    }
    let indicator = if s.ends_with("\n\n") {
        "+"
    } else if s.ends_with('\n') {
        ""
    } else {
        "-"
    };
    let mut out = format!("|{}", indicator);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

/// Determine if a plain scalar must be quoted to avoid YAML misparsing.
///
/// A scalar needs quotes if it:
/// - Starts with whitespace or a YAML indicator character
/// - Starts with a digit or `-` (would be read as a number or list marker)
/// - Case-insensitively equals a YAML keyword (`true`, `false`, `null`,
///   `yes`, `no`, `on`, `off`)
/// - Consists only of digits and dots (bare ints, floats, version strings)
///
/// The empty string matches no rule here; it is always quoted by the
/// formatter's empty-string arm instead. The same rules apply to object keys.
pub fn needs_quotes(s: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', ':', '{', '}', '[', ']', ',', '&', '*', '#', '?', '|', '<', '>', '=', '!', '%', '@',
        '`',
    ];
    let first = match s.chars().next() {
        Some(c) => c,
        None => return false,
    };
    if first.is_whitespace() || INDICATORS.contains(&first) {
        return true;
    }
    if first.is_ascii_digit() || first == '-' {
        return true;
    }
    let lowered = s.to_ascii_lowercase();
    if matches!(
        lowered.as_str(),
        "true" | "false" | "null" | "yes" | "no" | "on" | "off"
    ) {
        return true;
    }
    s.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Escape a string into the interior of a double-quoted scalar.
///
/// serde_json is the escaping oracle: its string-literal rules (`\\`, `\"`,
/// `\n`, `\r`, `\t`, `\b`, `\f`, `\u00XX` for remaining controls, non-ASCII
/// left literal) are exactly the double-quoted subset YAML accepts. The
/// surrounding quotes it produces are stripped off.
fn escape_scalar(s: &str) -> String {
    let quoted = serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""));
    quoted[1..quoted.len() - 1].to_string()
}

/// Format a JSON number. Finite values use `serde_json::Number`'s canonical
/// decimal form; non-finite values use the YAML sentinels.
fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !f.is_finite() => format_float(f),
        _ => n.to_string(),
    }
}

/// Render an `f64` in YAML form. Non-finite values map to the YAML 1.1
/// sentinels `.nan`, `.inf`, and `-.inf`; finite values use the same
/// canonical decimal form as the JSON serializer.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f == f64::INFINITY {
        ".inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        match Number::from_f64(f) {
            Some(n) => n.to_string(),
            None => f.to_string(),
        }
    }
}

/// Render a sequence. Empty arrays stay inline as `[]`; otherwise each
/// element renders at `indent + 2` and is attached behind a `- ` marker,
/// reflowed when the element is itself a block.
fn emit_array(arr: &[Value], indent: usize) -> String {
    if arr.is_empty() {
        return "[]".to_string();
    }
    let pad = " ".repeat(indent);
    let mut items = Vec::with_capacity(arr.len());
    for item in arr {
        let rendered = emit_value(item, indent + 2);
        if rendered.contains('\n') || rendered.starts_with(' ') {
            items.push(reflow(&rendered, "- ", &pad));
        } else {
            items.push(format!("{}- {}", pad, rendered));
        }
    }
    items.join("\n")
}

/// Render a mapping. Empty objects stay inline as `{}`; otherwise each value
/// renders at `indent + 2` and is attached behind `{key}: `, reflowed when
/// the value is itself a block.
///
/// Relies on `serde_json::Map` with the `preserve_order` feature to keep the
/// original JSON key insertion order.
fn emit_object(map: &Map<String, Value>, indent: usize) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }
    let pad = " ".repeat(indent);
    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = emit_value(value, indent + 2);
        let prefix = format!("{}: ", format_key(key));
        if rendered.contains('\n') || rendered.starts_with(' ') {
            fields.push(reflow(&rendered, &prefix, &pad));
        } else {
            fields.push(format!("{}{}{}", pad, prefix, rendered));
        }
    }
    fields.join("\n")
}

/// Quote an object key when the classifier flags it or escaping changes it.
/// Keys never take the block-literal route; an empty key is always quoted.
fn format_key(key: &str) -> String {
    let escaped = escape_scalar(key);
    if key.is_empty() || needs_quotes(key) || escaped != key {
        format!("\"{}\"", escaped)
    } else {
        key.to_string()
    }
}

/// Attach an already-rendered nested value behind its introducing prefix.
///
/// Two shapes come in here:
/// - A block literal (first line is exactly `|`, `|+`, or `|-`): the marker
///   joins the prefix line, and the content lines gain two spaces beyond
///   `pad` (block content is indented relative to its introducing line).
/// - A nested mapping/sequence block: the prefix stands alone on its own
///   line and the rendered lines follow verbatim, since the recursive call
///   already indented them to `indent + 2`.
fn reflow(rendered: &str, prefix: &str, pad: &str) -> String {
    let mut lines = rendered.split('\n');
    let first = lines.next().unwrap_or("");
    let mut out = Vec::new();
    if matches!(first, "|" | "|+" | "|-") {
        out.push(format!("{}{}{}", pad, prefix, first));
        for line in lines {
            out.push(format!("{}  {}", pad, line));
        }
    } else {
        out.push(format!("{}{}", pad, prefix));
        for line in rendered.split('\n') {
            out.push(line.to_string());
        }
    }
    out.join("\n")
}
