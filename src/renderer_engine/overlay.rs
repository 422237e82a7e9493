//! Overlay du compte à rebours : chiffres 3×5 agrandis, dessinés
//! directement dans le framebuffer par-dessus les feux d'artifice.

use crate::countdown_engine::TimeLeft;
use crate::firework_engine::types::Color;
use crate::renderer_engine::canvas::PixelCanvas;

const GLYPH_ROWS: usize = 5;
const GLYPH_COLS: i32 = 3;

/// Bitmap 3×5 d'un glyphe, une ligne par entrée, bit 2 = colonne gauche.
fn glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    match c {
        '0' => Some([0b111, 0b101, 0b101, 0b101, 0b111]),
        '1' => Some([0b010, 0b110, 0b010, 0b010, 0b111]),
        '2' => Some([0b111, 0b001, 0b111, 0b100, 0b111]),
        '3' => Some([0b111, 0b001, 0b111, 0b001, 0b111]),
        '4' => Some([0b101, 0b101, 0b111, 0b001, 0b001]),
        '5' => Some([0b111, 0b100, 0b111, 0b001, 0b111]),
        '6' => Some([0b111, 0b100, 0b111, 0b101, 0b111]),
        '7' => Some([0b111, 0b001, 0b001, 0b010, 0b010]),
        '8' => Some([0b111, 0b101, 0b111, 0b101, 0b111]),
        '9' => Some([0b111, 0b101, 0b111, 0b001, 0b111]),
        ':' => Some([0b000, 0b010, 0b000, 0b010, 0b000]),
        _ => None,
    }
}

/// Couleur or du cadran.
fn dial_color() -> Color {
    Color::new(1.0, 0.84, 0.3, 1.0)
}

/// Dessine `D:HH:MM:SS` centré dans le tiers haut du canvas.
pub fn draw_countdown(canvas: &mut PixelCanvas, time_left: &TimeLeft) {
    draw_text(canvas, &time_left.to_string());
}

fn draw_text(canvas: &mut PixelCanvas, text: &str) {
    // Échelle liée à la largeur, bornée pour rester lisible en petit.
    let cell = (canvas.width() as i32 / 90).clamp(2, 10);
    let advance = (GLYPH_COLS + 1) * cell;
    let text_width = advance * text.len() as i32 - cell;
    let x0 = (canvas.width() as i32 - text_width) / 2;
    let y0 = canvas.height() as i32 / 6;
    let color = dial_color();

    let mut x = x0;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                        canvas.fill_rect(
                            x + col * cell,
                            y0 + row as i32 * cell,
                            cell as u32,
                            cell as u32,
                            color,
                        );
                    }
                }
            }
        }
        x += advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_dial_glyphs_exist() {
        for c in "0123456789:".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {:?}", c);
        }
        assert!(glyph('x').is_none());
    }

    #[test]
    fn test_draw_countdown_marks_pixels() {
        let mut canvas = PixelCanvas::new(320, 200);
        let before: u32 = canvas.pixels().iter().map(|&b| b as u32).sum();
        draw_countdown(
            &mut canvas,
            &TimeLeft {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4,
            },
        );
        let after: u32 = canvas.pixels().iter().map(|&b| b as u32).sum();
        assert!(after > before, "overlay drew nothing");
    }

    #[test]
    fn test_draw_countdown_on_tiny_canvas_does_not_panic() {
        let mut canvas = PixelCanvas::new(4, 4);
        draw_countdown(&mut canvas, &TimeLeft::default());
    }
}
