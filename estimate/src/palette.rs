//! Brand colors. Only medium blue is painted today; the others are
//! part of the palette the letterhead was designed with.

use pdf_canvas::Color;

pub fn dark_blue() -> Color {
    Color::from_hex(0x2c4a6e)
}

pub fn medium_blue() -> Color {
    Color::from_hex(0x3b6a96)
}

pub fn light_cyan() -> Color {
    Color::from_hex(0x7dd8f0)
}

pub fn orange() -> Color {
    Color::from_hex(0xf47920)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_hex(c: pdf_canvas::Color) -> u32 {
        let ch = |v: f64| (v * 255.0).round() as u32;
        (ch(c.r) << 16) | (ch(c.g) << 8) | ch(c.b)
    }

    #[test]
    fn palette_values() {
        assert_eq!(to_hex(dark_blue()), 0x2c4a6e);
        assert_eq!(to_hex(medium_blue()), 0x3b6a96);
        assert_eq!(to_hex(light_cyan()), 0x7dd8f0);
        assert_eq!(to_hex(orange()), 0xf47920);
    }
}
