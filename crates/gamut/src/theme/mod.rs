//! Theme documents: border style, color slots, and the resolved aggregate.
//!
//! A theme source has three recognized top-level keys: `shadow` (boolean),
//! `borders` (one of `none`/`simple`/`outset`), and `colors` (a table of
//! slot names to color specs or fallback lists). Everything is optional;
//! [`ThemeDocument`] fills in documented defaults for whatever the source
//! omits, and ignores keys it does not recognize.
//!
//! The load-then-frozen lifecycle is deliberate: a document never mutates
//! after construction. Hot reload means building a new document from fresh
//! input and swapping the reference the application reads.

mod borders;
mod document;
mod palette;

pub use borders::BorderStyle;
pub use document::{ResolvedValue, ThemeDocument};
pub use palette::{ColorSlot, Palette};
