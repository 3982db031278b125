//! Color value parsing for theme definitions.
//!
//! Supports the three color formats of the theme file grammar:
//!
//! - Base colors: `black`, `red`, ... plus `light` variants (`light blue`) —
//!   the 16 ANSI colors, renderable on any terminal
//! - Low-res colors: exactly 3 digits, each `0`–`5`, e.g. `"541"` — a
//!   position in the 6×6×6 palette cube
//! - RGB hex: `"#ff6b35"` or `"#f80"` (3 or 6 digit, case-insensitive)
//!
//! A string is valid as exactly one form. The check order is fixed: a `#`
//! prefix commits to the hex grammar, a 3-character all-digit string commits
//! to the low-res grammar, everything else must be a base color name.
//!
//! # Example
//!
//! ```rust
//! use gamut::ColorSpec;
//!
//! let base = ColorSpec::parse("light blue").unwrap();
//! assert!(matches!(base, ColorSpec::Base { light: true, .. }));
//!
//! let cube = ColorSpec::parse("541").unwrap();
//! assert_eq!(cube, ColorSpec::LowRes { r: 5, g: 4, b: 1 });
//!
//! // Base names are lowercase-only; hex digits are not
//! assert!(ColorSpec::parse("BLUE").is_err());
//! assert!(ColorSpec::parse("#FF6B35").is_ok());
//! ```

use crate::error::ParseError;

/// A simple RGB color triplet.
///
/// Decoupled from any terminal backend; this is the render-ready numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One of the 8 named ANSI colors.
///
/// Together with the `light` flag on [`ColorSpec::Base`] these form the 16
/// base colors every ANSI-capable target can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BaseColor {
    /// The lowercase config name for this color.
    pub fn name(self) -> &'static str {
        match self {
            BaseColor::Black => "black",
            BaseColor::Red => "red",
            BaseColor::Green => "green",
            BaseColor::Yellow => "yellow",
            BaseColor::Blue => "blue",
            BaseColor::Magenta => "magenta",
            BaseColor::Cyan => "cyan",
            BaseColor::White => "white",
        }
    }

    /// Exact-match lookup. Case is significant: `"Blue"` is not a base color.
    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "black" => BaseColor::Black,
            "red" => BaseColor::Red,
            "green" => BaseColor::Green,
            "yellow" => BaseColor::Yellow,
            "blue" => BaseColor::Blue,
            "magenta" => BaseColor::Magenta,
            "cyan" => BaseColor::Cyan,
            "white" => BaseColor::White,
            _ => return None,
        };
        Some(color)
    }

    /// ANSI index 0–7 of the dark variant.
    fn ansi_index(self) -> u8 {
        match self {
            BaseColor::Black => 0,
            BaseColor::Red => 1,
            BaseColor::Green => 2,
            BaseColor::Yellow => 3,
            BaseColor::Blue => 4,
            BaseColor::Magenta => 5,
            BaseColor::Cyan => 6,
            BaseColor::White => 7,
        }
    }

    /// Standard xterm RGB value for this color.
    fn rgb(self, light: bool) -> Rgb {
        if light {
            match self {
                BaseColor::Black => Rgb(127, 127, 127),
                BaseColor::Red => Rgb(255, 0, 0),
                BaseColor::Green => Rgb(0, 255, 0),
                BaseColor::Yellow => Rgb(255, 255, 0),
                BaseColor::Blue => Rgb(92, 92, 255),
                BaseColor::Magenta => Rgb(255, 0, 255),
                BaseColor::Cyan => Rgb(0, 255, 255),
                BaseColor::White => Rgb(255, 255, 255),
            }
        } else {
            match self {
                BaseColor::Black => Rgb(0, 0, 0),
                BaseColor::Red => Rgb(205, 0, 0),
                BaseColor::Green => Rgb(0, 205, 0),
                BaseColor::Yellow => Rgb(205, 205, 0),
                BaseColor::Blue => Rgb(0, 0, 238),
                BaseColor::Magenta => Rgb(205, 0, 205),
                BaseColor::Cyan => Rgb(0, 205, 205),
                BaseColor::White => Rgb(229, 229, 229),
            }
        }
    }
}

/// Parsed color value from a theme definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// One of the 16 named ANSI colors.
    Base {
        /// The named color.
        color: BaseColor,
        /// Whether this is the `light` variant (ANSI indices 8–15).
        light: bool,
    },
    /// A 3-digit low-resolution color, each channel in `0..=5`.
    LowRes { r: u8, g: u8, b: u8 },
    /// A `#`-prefixed hex color.
    Hex {
        /// The 24-bit value; 3-digit sources are expanded by nibble doubling.
        rgb: Rgb,
        /// True when the source had 3 digits. Precision metadata only — the
        /// value is identical either way, but low-precision consumers may
        /// prefer to know the source resolution.
        short: bool,
    },
}

impl ColorSpec {
    /// Parses a color string into its unique form.
    ///
    /// Check order: `#` prefix → hex; 3-character all-digit string → low-res;
    /// otherwise base color name. Failing the committed grammar fails the
    /// whole parse — `"#zz"` is not retried as a base name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidColorSyntax`] carrying the input when no
    /// grammar matches.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if let Some(digits) = raw.strip_prefix('#') {
            return Self::parse_hex(digits).ok_or_else(|| invalid(raw));
        }
        if raw.len() == 3 && raw.bytes().all(|b| b.is_ascii_digit()) {
            return Self::parse_low_res(raw).ok_or_else(|| invalid(raw));
        }
        Self::parse_base(raw).ok_or_else(|| invalid(raw))
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(digits: &str) -> Option<Self> {
        // Byte-slicing below is only safe on ASCII input
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            // 3-digit form: each nibble doubles, #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&digits[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&digits[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&digits[2..3], 16).ok()? * 17;
                Some(ColorSpec::Hex {
                    rgb: Rgb(r, g, b),
                    short: true,
                })
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(ColorSpec::Hex {
                    rgb: Rgb(r, g, b),
                    short: false,
                })
            }
            _ => None,
        }
    }

    /// Parses a 3-digit low-res triplet. Digits 6–9 are rejected: the range
    /// restriction is deliberate, not a length check.
    fn parse_low_res(raw: &str) -> Option<Self> {
        let mut channels = raw.bytes().map(|b| b - b'0');
        let r = channels.next()?;
        let g = channels.next()?;
        let b = channels.next()?;
        if r > 5 || g > 5 || b > 5 {
            return None;
        }
        Some(ColorSpec::LowRes { r, g, b })
    }

    /// Parses a base color name, including `light` variants.
    fn parse_base(raw: &str) -> Option<Self> {
        if let Some(name) = raw.strip_prefix("light ") {
            let color = BaseColor::from_name(name)?;
            return Some(ColorSpec::Base { color, light: true });
        }
        let color = BaseColor::from_name(raw)?;
        Some(ColorSpec::Base {
            color,
            light: false,
        })
    }

    /// True for [`Base`](ColorSpec::Base) values, which every ANSI-capable
    /// target can render. Low-res and hex colors require custom-color support.
    pub fn is_base(&self) -> bool {
        matches!(self, ColorSpec::Base { .. })
    }

    /// The concrete sRGB value of this color.
    ///
    /// Base colors use the standard xterm values; low-res channels map to the
    /// xterm cube levels (0, 95, 135, 175, 215, 255).
    pub fn rgb(&self) -> Rgb {
        match *self {
            ColorSpec::Base { color, light } => color.rgb(light),
            ColorSpec::LowRes { r, g, b } => {
                Rgb(cube_level(r), cube_level(g), cube_level(b))
            }
            ColorSpec::Hex { rgb, .. } => rgb,
        }
    }

    /// Converts this color to a `console::Color` for rendering.
    ///
    /// Base dark variants map to the 8 named ANSI colors; light variants to
    /// palette indices 8–15. Low-res colors address the 6×6×6 cube directly
    /// (`16 + 36r + 6g + b`); hex colors map to the nearest palette entry.
    pub fn to_console(&self) -> console::Color {
        match *self {
            ColorSpec::Base { color, light: false } => match color {
                BaseColor::Black => console::Color::Black,
                BaseColor::Red => console::Color::Red,
                BaseColor::Green => console::Color::Green,
                BaseColor::Yellow => console::Color::Yellow,
                BaseColor::Blue => console::Color::Blue,
                BaseColor::Magenta => console::Color::Magenta,
                BaseColor::Cyan => console::Color::Cyan,
                BaseColor::White => console::Color::White,
            },
            ColorSpec::Base { color, light: true } => {
                console::Color::Color256(8 + color.ansi_index())
            }
            ColorSpec::LowRes { r, g, b } => {
                console::Color::Color256(16 + 36 * r + 6 * g + b)
            }
            ColorSpec::Hex { rgb, .. } => console::Color::Color256(rgb_to_ansi256(rgb)),
        }
    }
}

impl std::fmt::Display for ColorSpec {
    /// Renders the canonical source-format string. The output parses back to
    /// an equal `ColorSpec` (hex digits normalize to lowercase).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            ColorSpec::Base { color, light: false } => f.write_str(color.name()),
            ColorSpec::Base { color, light: true } => write!(f, "light {}", color.name()),
            ColorSpec::LowRes { r, g, b } => write!(f, "{}{}{}", r, g, b),
            ColorSpec::Hex {
                rgb: Rgb(r, g, b),
                short: true,
            } => write!(f, "#{:x}{:x}{:x}", r / 17, g / 17, b / 17),
            ColorSpec::Hex {
                rgb: Rgb(r, g, b),
                short: false,
            } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// xterm cube channel value for a low-res digit (0..=5).
fn cube_level(c: u8) -> u8 {
    if c == 0 {
        0
    } else {
        55 + 40 * c
    }
}

/// Nearest 256-color palette index for an RGB value.
///
/// Grayscale values land on the 24-step gray ramp (232–255); everything else
/// quantizes into the 6×6×6 cube.
fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

fn invalid(raw: &str) -> ParseError {
    ParseError::InvalidColorSyntax {
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Base color tests
    // =========================================================================

    #[test]
    fn test_parse_all_dark_base_colors() {
        for (name, color) in [
            ("black", BaseColor::Black),
            ("red", BaseColor::Red),
            ("green", BaseColor::Green),
            ("yellow", BaseColor::Yellow),
            ("blue", BaseColor::Blue),
            ("magenta", BaseColor::Magenta),
            ("cyan", BaseColor::Cyan),
            ("white", BaseColor::White),
        ] {
            assert_eq!(
                ColorSpec::parse(name).unwrap(),
                ColorSpec::Base {
                    color,
                    light: false
                },
                "failed for '{}'",
                name
            );
        }
    }

    #[test]
    fn test_parse_all_light_base_colors() {
        for (name, color) in [
            ("light black", BaseColor::Black),
            ("light red", BaseColor::Red),
            ("light green", BaseColor::Green),
            ("light yellow", BaseColor::Yellow),
            ("light blue", BaseColor::Blue),
            ("light magenta", BaseColor::Magenta),
            ("light cyan", BaseColor::Cyan),
            ("light white", BaseColor::White),
        ] {
            assert_eq!(
                ColorSpec::parse(name).unwrap(),
                ColorSpec::Base { color, light: true },
                "failed for '{}'",
                name
            );
        }
    }

    #[test]
    fn test_parse_base_is_case_sensitive() {
        assert!(ColorSpec::parse("BLUE").is_err());
        assert!(ColorSpec::parse("Blue").is_err());
        assert!(ColorSpec::parse("Light Blue").is_err());
        assert!(ColorSpec::parse("light BLUE").is_err());
        assert!(ColorSpec::parse("blue").is_ok());
    }

    #[test]
    fn test_parse_unknown_names() {
        assert!(ColorSpec::parse("purple").is_err());
        assert!(ColorSpec::parse("light purple").is_err());
        assert!(ColorSpec::parse("grey").is_err());
        assert!(ColorSpec::parse("").is_err());
        // No trimming: surrounding whitespace is not part of any grammar
        assert!(ColorSpec::parse(" blue").is_err());
        assert!(ColorSpec::parse("blue ").is_err());
    }

    // =========================================================================
    // Low-res tests
    // =========================================================================

    #[test]
    fn test_parse_low_res_corners() {
        assert_eq!(
            ColorSpec::parse("000").unwrap(),
            ColorSpec::LowRes { r: 0, g: 0, b: 0 }
        );
        assert_eq!(
            ColorSpec::parse("555").unwrap(),
            ColorSpec::LowRes { r: 5, g: 5, b: 5 }
        );
        assert_eq!(
            ColorSpec::parse("541").unwrap(),
            ColorSpec::LowRes { r: 5, g: 4, b: 1 }
        );
    }

    #[test]
    fn test_parse_low_res_rejects_digits_above_five() {
        // Still digits, still 3 characters — the range restriction rules them out
        assert!(ColorSpec::parse("600").is_err());
        assert!(ColorSpec::parse("060").is_err());
        assert!(ColorSpec::parse("006").is_err());
        assert!(ColorSpec::parse("999").is_err());
    }

    #[test]
    fn test_parse_low_res_wrong_length() {
        assert!(ColorSpec::parse("55").is_err());
        assert!(ColorSpec::parse("5555").is_err());
        assert!(ColorSpec::parse("5a1").is_err());
    }

    // =========================================================================
    // Hex tests
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(
            ColorSpec::parse("#ff6b35").unwrap(),
            ColorSpec::Hex {
                rgb: Rgb(255, 107, 53),
                short: false
            }
        );
        assert_eq!(
            ColorSpec::parse("#000000").unwrap(),
            ColorSpec::Hex {
                rgb: Rgb(0, 0, 0),
                short: false
            }
        );
    }

    #[test]
    fn test_parse_hex_3_digit_doubles_nibbles() {
        assert_eq!(
            ColorSpec::parse("#1a6").unwrap(),
            ColorSpec::Hex {
                rgb: Rgb(0x11, 0xaa, 0x66),
                short: true
            }
        );
        assert_eq!(
            ColorSpec::parse("#fff").unwrap(),
            ColorSpec::Hex {
                rgb: Rgb(255, 255, 255),
                short: true
            }
        );
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(
            ColorSpec::parse("#FF6B35").unwrap(),
            ColorSpec::parse("#ff6b35").unwrap()
        );
        assert_eq!(
            ColorSpec::parse("#1A6").unwrap(),
            ColorSpec::parse("#1a6").unwrap()
        );
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(ColorSpec::parse("#ff").is_err());
        assert!(ColorSpec::parse("#ffff").is_err());
        assert!(ColorSpec::parse("#fffff").is_err());
        assert!(ColorSpec::parse("#fffffff").is_err());
        assert!(ColorSpec::parse("#gggggg").is_err());
        assert!(ColorSpec::parse("#").is_err());
    }

    #[test]
    fn test_hex_prefix_commits_to_hex_grammar() {
        // '#blue' must not fall through to the base color grammar
        assert!(ColorSpec::parse("#blue").is_err());
        // '#123' is hex, not low-res
        assert_eq!(
            ColorSpec::parse("#123").unwrap(),
            ColorSpec::Hex {
                rgb: Rgb(0x11, 0x22, 0x33),
                short: true
            }
        );
    }

    // =========================================================================
    // Render-ready conversion tests
    // =========================================================================

    #[test]
    fn test_to_console_dark_base() {
        let spec = ColorSpec::parse("red").unwrap();
        assert_eq!(spec.to_console(), console::Color::Red);
    }

    #[test]
    fn test_to_console_light_base_uses_bright_indices() {
        let spec = ColorSpec::parse("light red").unwrap();
        assert_eq!(spec.to_console(), console::Color::Color256(9));
        let spec = ColorSpec::parse("light white").unwrap();
        assert_eq!(spec.to_console(), console::Color::Color256(15));
    }

    #[test]
    fn test_to_console_low_res_cube_index() {
        // 16 + 36*5 + 6*4 + 1 = 221
        let spec = ColorSpec::parse("541").unwrap();
        assert_eq!(spec.to_console(), console::Color::Color256(221));
        // Cube origin
        let spec = ColorSpec::parse("000").unwrap();
        assert_eq!(spec.to_console(), console::Color::Color256(16));
    }

    #[test]
    fn test_to_console_hex_quantizes() {
        let spec = ColorSpec::parse("#ff0000").unwrap();
        assert_eq!(spec.to_console(), console::Color::Color256(196));
        let spec = ColorSpec::parse("#00ff00").unwrap();
        assert_eq!(spec.to_console(), console::Color::Color256(46));
    }

    #[test]
    fn test_rgb_of_low_res_uses_cube_levels() {
        let spec = ColorSpec::parse("501").unwrap();
        assert_eq!(spec.rgb(), Rgb(255, 0, 95));
    }

    #[test]
    fn test_rgb_of_base() {
        assert_eq!(ColorSpec::parse("blue").unwrap().rgb(), Rgb(0, 0, 238));
        assert_eq!(
            ColorSpec::parse("light white").unwrap().rgb(),
            Rgb(255, 255, 255)
        );
    }

    // =========================================================================
    // Display round-trip tests
    // =========================================================================

    #[test]
    fn test_display_round_trips() {
        for raw in [
            "black",
            "light magenta",
            "000",
            "541",
            "#1a6",
            "#ff6b35",
        ] {
            let spec = ColorSpec::parse(raw).unwrap();
            assert_eq!(ColorSpec::parse(&spec.to_string()).unwrap(), spec);
        }
    }

    #[test]
    fn test_display_preserves_digit_count() {
        assert_eq!(ColorSpec::parse("#1a6").unwrap().to_string(), "#1a6");
        assert_eq!(
            ColorSpec::parse("#11aa66").unwrap().to_string(),
            "#11aa66"
        );
    }

    // =========================================================================
    // Property tests
    // =========================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(s in ".*") {
                let _ = ColorSpec::parse(&s);
            }

            #[test]
            fn low_res_in_range_always_parses(r in 0u8..=5, g in 0u8..=5, b in 0u8..=5) {
                let raw = format!("{}{}{}", r, g, b);
                prop_assert_eq!(
                    ColorSpec::parse(&raw).unwrap(),
                    ColorSpec::LowRes { r, g, b }
                );
            }

            #[test]
            fn low_res_digit_out_of_range_fails(
                r in 0u8..=9, g in 0u8..=9, b in 0u8..=9
            ) {
                prop_assume!(r > 5 || g > 5 || b > 5);
                let raw = format!("{}{}{}", r, g, b);
                prop_assert!(ColorSpec::parse(&raw).is_err());
            }

            #[test]
            fn hex_6_digit_always_parses(value in 0u32..0x0100_0000) {
                let raw = format!("#{:06x}", value);
                let spec = ColorSpec::parse(&raw).unwrap();
                let Rgb(r, g, b) = spec.rgb();
                prop_assert_eq!(
                    (r, g, b),
                    ((value >> 16) as u8, (value >> 8) as u8, value as u8)
                );
            }

            #[test]
            fn display_parse_round_trip_hex(value in 0u32..0x0100_0000) {
                let spec = ColorSpec::parse(&format!("#{:06X}", value)).unwrap();
                prop_assert_eq!(ColorSpec::parse(&spec.to_string()).unwrap(), spec);
            }
        }
    }
}
