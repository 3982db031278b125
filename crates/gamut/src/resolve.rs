//! Fallback-list resolution of theme color fields.
//!
//! A theme field is either a single color string or an ordered list of
//! candidates, first preference first. [`resolve`] walks the list and picks
//! the first entry that parses and that the target can render; everything
//! else is skipped, never fatal. A list like
//!
//! ```yaml
//! background: ["#1e1e2e", "003", blue]
//! ```
//!
//! renders the hex color on capable terminals and quietly degrades to `blue`
//! on a 16-color target.
//!
//! # Example
//!
//! ```rust
//! use gamut::{resolve, CapabilitySet, FieldValue};
//!
//! let field = FieldValue::from(vec!["#003".to_string(), "black".to_string()]);
//!
//! // A capable target takes the first candidate
//! let first = resolve(&field, &CapabilitySet::full()).unwrap();
//! assert_eq!(first.to_string(), "#003");
//!
//! // A base-colors-only target skips it
//! let degraded = resolve(&field, &CapabilitySet::base_only()).unwrap();
//! assert_eq!(degraded.to_string(), "black");
//! ```

use log::debug;
use serde::Deserialize;

use crate::capability::CapabilitySet;
use crate::color::ColorSpec;

/// A raw theme field value: one color string, or an ordered fallback list.
///
/// A bare value is semantically a one-element list;
/// [`candidates`](FieldValue::candidates) normalizes both shapes. The serde
/// representation
/// is untagged, so the type deserializes directly from a YAML string or
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single color spec string.
    Single(String),
    /// Candidates in priority order, first listed wins.
    List(Vec<String>),
}

impl FieldValue {
    /// The normalized, ordered candidate slice.
    pub fn candidates(&self) -> &[String] {
        match self {
            FieldValue::Single(raw) => std::slice::from_ref(raw),
            FieldValue::List(raws) => raws,
        }
    }

    /// Extracts a field value from a raw YAML node.
    ///
    /// Strings become [`Single`](FieldValue::Single); sequences become
    /// [`List`](FieldValue::List), with non-string items dropped (they can
    /// never parse, so they are skipped here rather than at resolution).
    /// Returns `None` for any other node shape.
    pub fn from_value(value: &serde_yaml::Value) -> Option<Self> {
        match value {
            serde_yaml::Value::String(raw) => Some(FieldValue::Single(raw.clone())),
            serde_yaml::Value::Sequence(items) => {
                let raws: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item.as_str() {
                        Some(raw) => Some(raw.to_string()),
                        None => {
                            debug!("dropping non-string color candidate: {:?}", item);
                            None
                        }
                    })
                    .collect();
                Some(FieldValue::List(raws))
            }
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::Single(raw.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(raw: String) -> Self {
        FieldValue::Single(raw)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(raws: Vec<String>) -> Self {
        FieldValue::List(raws)
    }
}

/// Selects the first usable candidate of a field, in list order.
///
/// A candidate is usable when it parses ([`ColorSpec::parse`]) and the target
/// can render it: base colors always, low-res and hex only when
/// `caps.custom_color` is set. Unusable candidates are skipped — a malformed
/// entry in a fallback list is not an error. Returns `None` when the list is
/// exhausted; the caller decides the default.
///
/// List order is the only priority. No ranking between forms is applied:
/// the first usable candidate wins even if a later, more precise one would
/// also have been usable.
pub fn resolve(field: &FieldValue, caps: &CapabilitySet) -> Option<ColorSpec> {
    for raw in field.candidates() {
        let spec = match ColorSpec::parse(raw) {
            Ok(spec) => spec,
            Err(err) => {
                debug!("skipping color candidate: {}", err);
                continue;
            }
        };
        if !spec.is_base() && !caps.custom_color {
            debug!(
                "skipping color candidate '{}': target supports base colors only",
                raw
            );
            continue;
        }
        return Some(spec);
    }
    None
}
