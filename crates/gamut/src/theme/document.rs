//! The resolved theme document.
//!
//! A [`ThemeDocument`] is built once from raw input, is immutable for its
//! lifetime, and is replaced wholesale on reload — there is no in-place
//! mutation. Construction resolves every color slot against the supplied
//! [`CapabilitySet`] and validates the non-color fields; the result is
//! render-ready, with defaults filled in for everything the source omits.
//!
//! # Example
//!
//! ```rust
//! use gamut::{BorderStyle, CapabilitySet, ColorSlot, ThemeDocument};
//!
//! let theme = ThemeDocument::from_yaml(
//!     r##"
//!     shadow: true
//!     borders: simple
//!     colors:
//!       background: ["#1e1e2e", blue]
//!       highlight: red
//!     "##,
//!     &CapabilitySet::base_only(),
//! )
//! .unwrap();
//!
//! assert!(theme.shadow());
//! assert_eq!(theme.borders(), BorderStyle::Simple);
//! // The hex candidate was skipped on this target
//! assert_eq!(theme.color(ColorSlot::Background).to_string(), "blue");
//! // Omitted slots keep their documented defaults
//! assert_eq!(theme.color(ColorSlot::View).to_string(), "white");
//! ```

use std::path::Path;

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::capability::CapabilitySet;
use crate::color::ColorSpec;
use crate::error::ThemeError;
use crate::resolve::{resolve, FieldValue};

use super::borders::BorderStyle;
use super::palette::{ColorSlot, Palette};

/// A fully-resolved, immutable theme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeDocument {
    shadow: bool,
    borders: BorderStyle,
    palette: Palette,
}

/// A resolved field value, for string-keyed lookup via [`ThemeDocument::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedValue {
    /// A resolved color slot.
    Color(ColorSpec),
    /// The border style.
    Borders(BorderStyle),
    /// The shadow toggle.
    Flag(bool),
}

impl ThemeDocument {
    /// Builds a document from an already-parsed raw mapping.
    ///
    /// Color slots resolve through their fallback lists against `caps`,
    /// keeping their documented defaults when nothing is usable. Unrecognized
    /// keys are ignored. Non-color fields are validated strictly.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidFieldValue`] when `shadow` is not a
    /// boolean, `borders` is not one of `none`/`simple`/`outset`, or `colors`
    /// is not a mapping.
    pub fn load(raw: &Mapping, caps: &CapabilitySet) -> Result<Self, ThemeError> {
        let mut doc = Self::default();
        for (key, value) in raw {
            let Some(key) = key.as_str() else {
                debug!("ignoring non-string theme key: {:?}", key);
                continue;
            };
            match key {
                "shadow" => {
                    doc.shadow = value.as_bool().ok_or_else(|| {
                        invalid_field("shadow", value, "a boolean")
                    })?;
                }
                "borders" => {
                    let name = value
                        .as_str()
                        .ok_or_else(|| invalid_field("borders", value, BORDERS_DOMAIN))?;
                    doc.borders = BorderStyle::from_name(name)
                        .ok_or_else(|| invalid_field("borders", value, BORDERS_DOMAIN))?;
                }
                "colors" => {
                    let table = value.as_mapping().ok_or_else(|| {
                        invalid_field("colors", value, "a mapping of slot names to colors")
                    })?;
                    doc.load_colors(table, caps);
                }
                other => {
                    debug!("ignoring unknown theme key '{}'", other);
                }
            }
        }
        Ok(doc)
    }

    /// Resolves the recognized slots of a `colors` table into the palette.
    ///
    /// Nothing in here is fatal: unknown slots, malformed candidates, and
    /// exhausted fallback lists all leave the slot at its default.
    fn load_colors(&mut self, table: &Mapping, caps: &CapabilitySet) {
        for (key, value) in table {
            let Some(key) = key.as_str() else {
                debug!("ignoring non-string color key: {:?}", key);
                continue;
            };
            let Some(slot) = ColorSlot::from_key(key) else {
                debug!("ignoring unknown color slot '{}'", key);
                continue;
            };
            let Some(field) = FieldValue::from_value(value) else {
                debug!("ignoring color slot '{}': not a string or list", key);
                continue;
            };
            match resolve(&field, caps) {
                Some(spec) => self.palette.set(slot, spec),
                None => {
                    debug!("no usable candidate for '{}', keeping default", key);
                }
            }
        }
    }

    /// Builds a document from YAML content.
    ///
    /// Empty content yields the all-defaults document.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Parse`] when the content is not valid YAML or the top
    /// level is not a mapping, plus everything [`load`](Self::load) returns.
    pub fn from_yaml(yaml: &str, caps: &CapabilitySet) -> Result<Self, ThemeError> {
        let value: Value = serde_yaml::from_str(yaml).map_err(|err| ThemeError::Parse {
            message: err.to_string(),
        })?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(raw) => Self::load(&raw, caps),
            other => Err(ThemeError::Parse {
                message: format!("expected a mapping at the top level, got {}", value_kind(&other)),
            }),
        }
    }

    /// Builds a document from a YAML file.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Load`] when the file cannot be read, plus everything
    /// [`from_yaml`](Self::from_yaml) returns.
    pub fn from_file<P: AsRef<Path>>(path: P, caps: &CapabilitySet) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| ThemeError::Load {
            message: format!("failed to read {}: {}", path.display(), err),
        })?;
        Self::from_yaml(&content, caps)
    }

    /// Whether views drop a shadow.
    pub fn shadow(&self) -> bool {
        self.shadow
    }

    /// How view borders are drawn.
    pub fn borders(&self) -> BorderStyle {
        self.borders
    }

    /// Resolved color for a slot.
    pub fn color(&self, slot: ColorSlot) -> ColorSpec {
        self.palette.get(slot)
    }

    /// The full resolved palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// String-keyed lookup using the source document's key names:
    /// `"shadow"`, `"borders"`, or `"colors.<slot>"`.
    ///
    /// Returns `None` for keys outside the recognized field set — including
    /// unknown keys the source document may have carried, which are never
    /// retained.
    pub fn get(&self, key: &str) -> Option<ResolvedValue> {
        match key {
            "shadow" => Some(ResolvedValue::Flag(self.shadow)),
            "borders" => Some(ResolvedValue::Borders(self.borders)),
            _ => {
                let slot = ColorSlot::from_key(key.strip_prefix("colors.")?)?;
                Some(ResolvedValue::Color(self.palette.get(slot)))
            }
        }
    }
}

const BORDERS_DOMAIN: &str = "one of none, simple, outset";

fn invalid_field(field: &str, value: &Value, expected: &str) -> ThemeError {
    ThemeError::InvalidFieldValue {
        field: field.to_string(),
        value: scalar_to_string(value),
        expected: expected.to_string(),
    }
}

/// Renders a raw YAML value for error messages.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
