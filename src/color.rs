// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 0xff,
        g: 0xff,
        b: 0xff,
        a: 0xff,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS fill style for the canvas, the color's own alpha scaled by opacity
    pub fn to_css(&self, opacity: f64) -> String {
        let alpha = (self.a as f64 / 255.0) * opacity.max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x1020_30ff);
        assert_eq!(c, Color { r: 0x10, g: 0x20, b: 0x30, a: 0xff });
    }

    #[test]
    fn white_at_full_opacity_is_solid() {
        assert_eq!(Color::WHITE.to_css(1.0), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn opacity_scales_alpha_and_is_clamped() {
        assert_eq!(Color::WHITE.to_css(0.5), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Color::WHITE.to_css(3.0), "rgba(255, 255, 255, 1)");
        assert_eq!(Color::from_u32(0x0000_0000).to_css(1.0), "rgba(0, 0, 0, 0)");
    }
}
