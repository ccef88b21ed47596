use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use signal_deck::common::RGBColor;
///
/// // Create a red color
/// let red = RGBColor::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts "RRGGBB" with or without a leading `#`, which is the form
    /// DrawingML uses in `a:srgbClr/@val`.
    ///
    /// ```rust
    /// use signal_deck::common::RGBColor;
    ///
    /// assert_eq!(RGBColor::from_hex("0066CC"), Some(RGBColor::new(0, 102, 204)));
    /// assert_eq!(RGBColor::from_hex("#F0F8FF"), Some(RGBColor::new(240, 248, 255)));
    /// assert_eq!(RGBColor::from_hex("0066C"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// ```rust
    /// use signal_deck::common::RGBColor;
    ///
    /// assert_eq!(RGBColor::new(0, 176, 80).to_hex(), "00B050");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_keeps_case_insensitive_input() {
        let color = RGBColor::from_hex("f0f8ff").unwrap();
        assert_eq!(color, RGBColor::new(240, 248, 255));
        assert_eq!(color.to_hex(), "F0F8FF");
        assert_eq!(color.to_string(), "#F0F8FF");
    }

    #[test]
    fn test_rejects_non_hex() {
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("é00000"), None);
    }
}
