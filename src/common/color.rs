//! Color conversions between the renderer and the watch app
//!
//! The configuration page reports colors as hex strings (`RRGGBB`), while the
//! watch app expects the integer value of those digits.

/// Hex color as sent by the configuration page, held as its integer value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(u32);

/// RRGGBB
const MAX_DIGITS: usize = 6;

impl HexColor {
    /// Parse a hex color string:
    /// - 1 to 6 digits: RRGGBB (shorter values are accepted as-is, e.g. "FF" = 255)
    /// - optional '#' or '0x' prefix
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);

        // from_str_radix tolerates a leading sign, the page never sends one
        if hex.is_empty()
            || hex.len() > MAX_DIGITS
            || !hex.chars().all(|c| c.is_ascii_hexdigit())
        {
            return None;
        }

        u32::from_str_radix(hex, 16).ok().map(Self)
    }

    /// Integer value forwarded to the watch app
    pub fn value(self) -> u32 {
        self.0
    }
}
