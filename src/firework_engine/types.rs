pub use glam::{Vec2, Vec4 as Color};

/// Compteurs d'une frame de simulation, remontés à l'hôte pour le
/// reporting périodique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Fusées effectivement lancées pendant cette frame (ambiant + différé).
    pub launched: usize,
    /// Fusées ayant explosé pendant cette frame.
    pub exploded: usize,
    /// Fusées en vol à la fin de la frame.
    pub rockets: usize,
    /// Particules vivantes à la fin de la frame.
    pub particles: usize,
}

/// Parse une couleur hexadécimale `#rrggbb` en RGBA normalisé.
pub fn parse_hex_color(text: &str) -> Option<Color> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| -> Option<f32> {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#ffffff"),
            Some(Color::new(1.0, 1.0, 1.0, 1.0))
        );
        assert_eq!(
            parse_hex_color("000000"),
            Some(Color::new(0.0, 0.0, 0.0, 1.0))
        );
        let gold = parse_hex_color("#ffd700").unwrap();
        assert!((gold.y - 215.0 / 255.0).abs() < 1e-6);
        assert_eq!(gold.w, 1.0);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color(""), None);
    }
}
