//! Utility functions

use iced::Color;

// ============================================================================
// Hex Colors
// ============================================================================

/// Format a color as `#rrggbb`, or `#rrggbbaa` when not opaque
///
/// Parsing goes through iced's `FromStr for Color`.
pub fn format_hex_color(color: Color) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (r, g, b, a) = (
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    );
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex_color() {
        assert_eq!(format_hex_color(Color::BLACK), "#000000");
        assert_eq!(format_hex_color(Color::from_rgb8(0xff, 0x14, 0x93)), "#ff1493");
        assert_eq!(
            format_hex_color(Color::from_rgba8(0, 0, 0, 0.5)),
            "#00000080"
        );
    }

    #[test]
    fn test_formatted_colors_parse_back() {
        for color in [
            Color::BLACK,
            Color::from_rgb8(0xff, 0x14, 0x93),
            Color::from_rgba8(0x12, 0x34, 0x56, 0.0),
        ] {
            let parsed: Color = format_hex_color(color).parse().unwrap();
            assert_eq!(format_hex_color(parsed), format_hex_color(color));
        }
    }
}
