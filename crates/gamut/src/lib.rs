//! # Gamut - Theme Color Resolution for Terminal UIs
//!
//! `gamut` parses, validates, and resolves the color and style fields of a
//! TUI theme definition. Theme authors write colors in three formats and may
//! give any slot a fallback list; `gamut` picks the first entry the current
//! terminal can actually render, degrading gracefully on limited targets.
//!
//! ## Core Concepts
//!
//! - [`ColorSpec`]: A parsed color in one of three forms — 16 named base
//!   colors, 3-digit low-res colors (`"541"`), or hex codes (`"#ff6b35"`)
//! - [`FieldValue`]: A single color string or an ordered fallback list
//! - [`CapabilitySet`]: What color fidelity the output target supports
//! - [`ThemeDocument`]: The immutable, fully-resolved theme with documented
//!   defaults for every omitted field
//!
//! ## Quick Start
//!
//! ```rust
//! use gamut::{BorderStyle, CapabilitySet, ColorSlot, ThemeDocument};
//!
//! let theme = ThemeDocument::from_yaml(
//!     r##"
//!     shadow: false
//!     borders: simple
//!     colors:
//!       background: ["#1e1e2e", blue]
//!       title_primary: light red
//!     "##,
//!     &CapabilitySet::full(),
//! )
//! .unwrap();
//!
//! assert_eq!(theme.borders(), BorderStyle::Simple);
//! assert_eq!(theme.color(ColorSlot::Background).to_string(), "#1e1e2e");
//!
//! // Render-ready conversion for the terminal backend
//! let bg = theme.color(ColorSlot::Background).to_console();
//! ```
//!
//! ## Fallback Lists
//!
//! A list value is a priority order: the first candidate that parses and
//! that the target supports wins. Non-base colors are skipped on targets
//! without custom-color support, so a theme can ship precise colors with
//! safe ANSI fallbacks:
//!
//! ```rust
//! use gamut::{resolve, CapabilitySet, FieldValue};
//!
//! let field: FieldValue = serde_yaml::from_str("[\"#003\", black]").unwrap();
//!
//! let precise = resolve(&field, &CapabilitySet::full()).unwrap();
//! assert_eq!(precise.to_string(), "#003");
//!
//! let degraded = resolve(&field, &CapabilitySet::base_only()).unwrap();
//! assert_eq!(degraded.to_string(), "black");
//! ```
//!
//! ## Error Policy
//!
//! Malformed entries inside a fallback list are skipped, never fatal; a slot
//! whose whole list is unusable keeps its documented default. Non-color
//! fields are validated strictly: an out-of-set `borders` or a non-boolean
//! `shadow` aborts the load with an error naming the field. Unknown keys are
//! ignored for forward compatibility.
//!
//! ## Reloading
//!
//! Documents are immutable. To hot-reload a theme, build a new
//! [`ThemeDocument`] from fresh input and atomically swap the reference the
//! rest of the application reads.

// Internal modules
pub mod capability;
pub mod color;
mod error;
pub mod resolve;
pub mod theme;

// Error types
pub use error::{ParseError, ThemeError};

// Color exports
pub use color::{BaseColor, ColorSpec, Rgb};

// Capability exports
pub use capability::{set_capability_detector, CapabilitySet};

// Resolution exports
pub use resolve::{resolve, FieldValue};

// Theme exports
pub use theme::{BorderStyle, ColorSlot, Palette, ResolvedValue, ThemeDocument};
