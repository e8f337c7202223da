//! # yamlify-core
//!
//! Deterministic JSON-to-YAML emitter with block-scalar formatting, plus a
//! line-oriented driver for JSON-Lines input.
//!
//! The emitter renders a `serde_json::Value` tree as block-style YAML by
//! hand — block literals with chomping indicators for multi-line strings,
//! selective quoting of plain scalars, 2-space indentation reflow — instead
//! of delegating to a YAML serializer. The reverse direction (YAML back to
//! JSON) delegates parsing to `serde_yaml`.
//!
//! ## Quick start
//!
//! ```rust
//! use yamlify_core::{emit, emit_records};
//!
//! // Single JSON document → YAML
//! let yaml = emit(r#"{"name":"Alice","bio":"line one\nline two"}"#).unwrap();
//! assert_eq!(yaml, "name: Alice\nbio: |-\n  line one\n  line two");
//!
//! // JSON-Lines → one YAML block per record; malformed records degrade to
//! // inline diagnostics instead of failing the batch
//! let yaml = emit_records("{\"a\":1}\nnot json");
//! assert!(yaml.starts_with("a: 1\n\n# Error converting line 2:"));
//! ```
//!
//! ## Modules
//!
//! - [`emitter`] — JSON string / `serde_json::Value` → YAML string
//! - [`stream`] — JSON-Lines → YAML blocks with per-record failure isolation
//! - [`reverse`] — YAML string → pretty-printed JSON string
//! - [`error`] — error types for the two parsing boundaries

pub mod emitter;
pub mod error;
pub mod reverse;
pub mod stream;

pub use emitter::{emit, emit_value, format_float, needs_quotes};
pub use error::ConvertError;
pub use reverse::yaml_to_json;
pub use stream::emit_records;
