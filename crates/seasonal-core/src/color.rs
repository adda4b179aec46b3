//! Element color parsing.

use ratatui::style::Color;

/// Display color of the falling elements.
///
/// Parsed once when a run starts; unparsable or missing input falls back to
/// the default rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementColor(Color);

/// Preset colors cycled by the demo: snow, holly red, fir green, gold leaf.
const PRESETS: &[(u8, u8, u8)] = &[
    (0xE8, 0xE8, 0xE8),
    (0xD3, 0x2F, 0x2F),
    (0x2E, 0x7D, 0x32),
    (0xFF, 0xB3, 0x00),
];

impl Default for ElementColor {
    fn default() -> Self {
        let (r, g, b) = PRESETS[0];
        ElementColor(Color::Rgb(r, g, b))
    }
}

impl ElementColor {
    /// Parse a `#RGB` or `#RRGGBB` hex string.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let (r, g, b) = match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| c.to_digit(16));
                let r = it.next()?? as u8;
                let g = it.next()?? as u8;
                let b = it.next()?? as u8;
                // #abc expands to #aabbcc
                (r * 17, g * 17, b * 17)
            }
            6 => (
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            ),
            _ => return None,
        };
        Some(ElementColor(Color::Rgb(r, g, b)))
    }

    /// Parse with fallback to the default color.
    pub fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }

    /// The underlying terminal color.
    pub fn color(self) -> Color {
        self.0
    }

    /// Render back to a `#RRGGBB` hex string.
    pub fn hex(self) -> String {
        match self.0 {
            Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
            _ => Self::default().hex(),
        }
    }

    /// Cycle to the next preset color.
    ///
    /// A color that is not a preset restarts the cycle at the first preset.
    pub fn next_preset(self) -> Self {
        let idx = PRESETS
            .iter()
            .position(|&(r, g, b)| self.0 == Color::Rgb(r, g, b))
            .map(|i| (i + 1) % PRESETS.len())
            .unwrap_or(0);
        let (r, g, b) = PRESETS[idx];
        ElementColor(Color::Rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            ElementColor::parse("#FF0000"),
            Some(ElementColor(Color::Rgb(255, 0, 0)))
        );
        assert_eq!(
            ElementColor::parse("#abc"),
            Some(ElementColor(Color::Rgb(0xAA, 0xBB, 0xCC)))
        );
        assert_eq!(ElementColor::parse("red"), None);
        assert_eq!(ElementColor::parse("#12345"), None);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(
            ElementColor::parse_or_default(None),
            ElementColor::default()
        );
        assert_eq!(
            ElementColor::parse_or_default(Some("not a color")),
            ElementColor::default()
        );
    }

    #[test]
    fn test_hex_round_trip() {
        let c = ElementColor::parse("#1a2b3c").unwrap();
        assert_eq!(c.hex(), "#1A2B3C");
        assert_eq!(ElementColor::parse(&c.hex()), Some(c));
    }

    #[test]
    fn test_preset_cycle_returns_home() {
        let start = ElementColor::default();
        let mut c = start;
        for _ in 0..PRESETS.len() {
            c = c.next_preset();
        }
        assert_eq!(c, start);
    }
}
