//! Canvas and palette shared by every slide builder.
use crate::common::RGBColor;
use crate::common::unit::inches;
use crate::ooxml::pptx::writer::Bounds;

/// The deck's fixed color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title bars, full-slide backgrounds and table headers
    pub primary: RGBColor,
    /// Body text
    pub secondary: RGBColor,
    /// Stat boxes and the closing slide
    pub accent: RGBColor,
    /// Feature boxes and the first table column
    pub light_bg: RGBColor,
    pub white: RGBColor,
}

impl Palette {
    /// The professional blue theme.
    pub const BLUE: Self = Self {
        primary: RGBColor::new(0, 102, 204),
        secondary: RGBColor::new(51, 51, 51),
        accent: RGBColor::new(0, 176, 80),
        light_bg: RGBColor::new(240, 248, 255),
        white: RGBColor::new(255, 255, 255),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::BLUE
    }
}

/// Everything a builder needs besides the presentation itself.
///
/// Passed by reference to every builder; nothing in the deck reads global
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckContext {
    /// Canvas width in EMU
    pub slide_width: i64,
    /// Canvas height in EMU
    pub slide_height: i64,
    pub palette: Palette,
}

impl DeckContext {
    /// Bounds covering the whole canvas.
    #[inline]
    pub fn full_canvas(&self) -> Bounds {
        Bounds::new(0, 0, self.slide_width, self.slide_height)
    }

    /// The 1 in band across the top of content slides.
    #[inline]
    pub fn title_bar(&self) -> Bounds {
        Bounds::new(0, 0, self.slide_width, inches(1.0))
    }
}

impl Default for DeckContext {
    /// 10 × 7.5 in canvas with the blue palette.
    fn default() -> Self {
        Self {
            slide_width: inches(10.0),
            slide_height: inches(7.5),
            palette: Palette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let ctx = DeckContext::default();
        assert_eq!(ctx.slide_width, 9_144_000);
        assert_eq!(ctx.slide_height, 6_858_000);
        assert_eq!(ctx.full_canvas(), Bounds::new(0, 0, 9_144_000, 6_858_000));
        assert_eq!(ctx.title_bar().height, 914_400);
    }

    #[test]
    fn test_palette_values() {
        let p = Palette::default();
        assert_eq!(p.primary.to_hex(), "0066CC");
        assert_eq!(p.secondary.to_hex(), "333333");
        assert_eq!(p.accent.to_hex(), "00B050");
        assert_eq!(p.light_bg.to_hex(), "F0F8FF");
        assert_eq!(p.white.to_hex(), "FFFFFF");
    }
}
