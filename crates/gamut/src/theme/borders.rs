//! Border style for boxed views.

/// How view borders are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No borders at all.
    None,
    /// Plain single-line borders.
    Simple,
    /// Retro 3D-effect borders with light and dark edges.
    #[default]
    Outset,
}

impl BorderStyle {
    /// Exact-match lookup from the lowercase config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(BorderStyle::None),
            "simple" => Some(BorderStyle::Simple),
            "outset" => Some(BorderStyle::Outset),
            _ => None,
        }
    }

    /// The lowercase config name for this style.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Simple => "simple",
            BorderStyle::Outset => "outset",
        }
    }
}

impl std::fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_values() {
        assert_eq!(BorderStyle::from_name("none"), Some(BorderStyle::None));
        assert_eq!(BorderStyle::from_name("simple"), Some(BorderStyle::Simple));
        assert_eq!(BorderStyle::from_name("outset"), Some(BorderStyle::Outset));
    }

    #[test]
    fn test_from_name_rejects_unknown_and_case_variants() {
        assert_eq!(BorderStyle::from_name("dotted"), None);
        assert_eq!(BorderStyle::from_name("Simple"), None);
        assert_eq!(BorderStyle::from_name(""), None);
    }

    #[test]
    fn test_default_is_outset() {
        assert_eq!(BorderStyle::default(), BorderStyle::Outset);
    }

    #[test]
    fn test_display_round_trips() {
        for style in [BorderStyle::None, BorderStyle::Simple, BorderStyle::Outset] {
            assert_eq!(BorderStyle::from_name(&style.to_string()), Some(style));
        }
    }
}
