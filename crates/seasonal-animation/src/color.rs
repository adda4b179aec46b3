//! Color math for fading particles.

use ratatui::style::Color;

/// Attenuate an RGB color by an opacity value.
///
/// Spawn opacity may exceed 1.0; it is clamped to [0, 1] for display only,
/// so full brightness holds until the fade brings the model value back under
/// 1.0. Palette and named colors have no channel math and pass through.
pub fn attenuate(color: Color, opacity: f32) -> Color {
    let alpha = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * alpha) as u8,
            (f32::from(g) * alpha) as u8,
            (f32::from(b) * alpha) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attenuate_scales_channels() {
        assert_eq!(
            attenuate(Color::Rgb(200, 100, 50), 0.5),
            Color::Rgb(100, 50, 25)
        );
    }

    #[test]
    fn test_attenuate_clamps_overbright_opacity() {
        assert_eq!(
            attenuate(Color::Rgb(200, 100, 50), 1.4),
            Color::Rgb(200, 100, 50)
        );
    }

    #[test]
    fn test_attenuate_passes_palette_colors_through() {
        assert_eq!(attenuate(Color::Red, 0.3), Color::Red);
    }
}
