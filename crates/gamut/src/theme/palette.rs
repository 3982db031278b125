//! Named color slots and the resolved palette.
//!
//! Every color a consuming renderer needs is addressed through a
//! [`ColorSlot`]. A [`Palette`] is always fully populated: slots the source
//! document omits (or fails to resolve) keep their documented defaults, so
//! lookups never miss.

use std::collections::BTreeMap;

use crate::color::{BaseColor, ColorSpec};

/// Semantic color slot used by terminal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorSlot {
    /// Color used for the application background.
    Background,
    /// Color used for view shadows.
    Shadow,
    /// Color used for view backgrounds.
    View,
    /// Primary color used for the text.
    Primary,
    /// Secondary color used for the text.
    Secondary,
    /// Tertiary color used for the text.
    Tertiary,
    /// Primary color used for title text.
    TitlePrimary,
    /// Secondary color used for title text.
    TitleSecondary,
    /// Color used for highlighting text.
    Highlight,
    /// Color used for highlighting inactive text.
    HighlightInactive,
}

impl ColorSlot {
    /// All slots, in declaration order.
    pub const ALL: [ColorSlot; 10] = [
        ColorSlot::Background,
        ColorSlot::Shadow,
        ColorSlot::View,
        ColorSlot::Primary,
        ColorSlot::Secondary,
        ColorSlot::Tertiary,
        ColorSlot::TitlePrimary,
        ColorSlot::TitleSecondary,
        ColorSlot::Highlight,
        ColorSlot::HighlightInactive,
    ];

    /// Stable config key for this slot (used inside the `colors` table).
    pub fn key(self) -> &'static str {
        match self {
            ColorSlot::Background => "background",
            ColorSlot::Shadow => "shadow",
            ColorSlot::View => "view",
            ColorSlot::Primary => "primary",
            ColorSlot::Secondary => "secondary",
            ColorSlot::Tertiary => "tertiary",
            ColorSlot::TitlePrimary => "title_primary",
            ColorSlot::TitleSecondary => "title_secondary",
            ColorSlot::Highlight => "highlight",
            ColorSlot::HighlightInactive => "highlight_inactive",
        }
    }

    /// Exact-match lookup from a config key.
    pub fn from_key(key: &str) -> Option<Self> {
        ColorSlot::ALL.into_iter().find(|slot| slot.key() == key)
    }

    /// Documented default for this slot, applied when the source omits the
    /// slot or none of its candidates is usable.
    ///
    /// All defaults are base colors, renderable on any target.
    pub fn default_color(self) -> ColorSpec {
        let color = match self {
            ColorSlot::Background => BaseColor::Blue,
            ColorSlot::Shadow => BaseColor::Black,
            ColorSlot::View => BaseColor::White,
            ColorSlot::Primary => BaseColor::Black,
            ColorSlot::Secondary => BaseColor::Blue,
            ColorSlot::Tertiary => BaseColor::White,
            ColorSlot::TitlePrimary => BaseColor::Red,
            ColorSlot::TitleSecondary => BaseColor::Yellow,
            ColorSlot::Highlight => BaseColor::Red,
            ColorSlot::HighlightInactive => BaseColor::Blue,
        };
        ColorSpec::Base {
            color,
            light: false,
        }
    }
}

/// A fully-resolved slot-to-color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<ColorSlot, ColorSpec>,
}

impl Palette {
    /// Resolved color for a slot.
    pub fn get(&self, slot: ColorSlot) -> ColorSpec {
        // Every slot is populated at construction; the fallback is unreachable
        // but keeps the accessor total.
        self.colors
            .get(&slot)
            .copied()
            .unwrap_or_else(|| slot.default_color())
    }

    /// Replaces the color for a slot.
    pub(crate) fn set(&mut self, slot: ColorSlot, spec: ColorSpec) {
        self.colors.insert(slot, spec);
    }

    /// Iterates slots and resolved colors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, ColorSpec)> + '_ {
        ColorSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}

impl Default for Palette {
    /// The documented default palette, every slot populated.
    fn default() -> Self {
        let colors = ColorSlot::ALL
            .into_iter()
            .map(|slot| (slot, slot.default_color()))
            .collect();
        Self { colors }
    }
}
