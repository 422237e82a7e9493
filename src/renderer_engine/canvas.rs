use crate::firework_engine::types::{Color, Vec2};
use crate::renderer_engine::Surface;

/// Framebuffer CPU, RGBA8, ligne 0 en haut.
///
/// Toutes les primitives clampent leurs accès : dessiner hors champ est
/// un no-op, jamais une panique (une entité peut sortir de l'écran après
/// un rétrécissement de fenêtre, comportement accepté).
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let mut canvas = Self {
            width: width.max(1),
            height: height.max(1),
            pixels: Vec::new(),
        };
        canvas.pixels = vec![0; canvas.width * canvas.height * 4];
        canvas.fill_opaque_black();
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, row-major from the top.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Redimensionne au pixel près la taille du viewport. Le contenu est
    /// réinitialisé, les traînées repartent de zéro.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixels = vec![0; self.width * self.height * 4];
        self.fill_opaque_black();
    }

    fn fill_opaque_black(&mut self) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[3] = 255;
        }
    }

    /// Remplissage opaque d'un rectangle (avec clipping), utilisé par
    /// l'overlay du compte à rebours.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let rgba = to_rgba8(color);
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = ((x + w as i32).max(0) as usize).min(self.width);
        let y1 = ((y + h as i32).max(0) as usize).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let i = (py * self.width + px) * 4;
                self.pixels[i..i + 3].copy_from_slice(&rgba[..3]);
                self.pixels[i + 3] = 255;
            }
        }
    }

    fn blend_over(&mut self, x: usize, y: usize, color: Color, alpha: f32) {
        let i = (y * self.width + x) * 4;
        let a = alpha.clamp(0.0, 1.0);
        for (c, &src) in [color.x, color.y, color.z].iter().enumerate() {
            let dst = self.pixels[i + c] as f32 / 255.0;
            self.pixels[i + c] = (((src * a + dst * (1.0 - a)) * 255.0) as u32).min(255) as u8;
        }
        self.pixels[i + 3] = 255;
    }

    fn blend_add(&mut self, x: usize, y: usize, color: Color, alpha: f32) {
        let i = (y * self.width + x) * 4;
        let a = alpha.clamp(0.0, 1.0);
        for (c, &src) in [color.x, color.y, color.z].iter().enumerate() {
            let sum = self.pixels[i + c] as u32 + (src * a * 255.0) as u32;
            self.pixels[i + c] = sum.min(255) as u8;
        }
        self.pixels[i + 3] = 255;
    }
}

impl Surface for PixelCanvas {
    fn fade(&mut self, color: Color, opacity: f32) {
        let a = opacity.clamp(0.0, 1.0);
        let target = to_rgba8(color);
        for px in self.pixels.chunks_exact_mut(4) {
            for c in 0..3 {
                let dst = px[c] as f32;
                px[c] = (target[c] as f32 * a + dst * (1.0 - a)) as u8;
            }
            px[3] = 255;
        }
    }

    fn dot(&mut self, pos: Vec2, radius: f32, color: Color, alpha: f32, glow: f32) {
        if alpha <= 0.0 {
            return;
        }
        let radius = radius.max(0.5);
        let reach = radius + glow.max(0.0);

        let x0 = (pos.x - reach).floor().max(0.0) as usize;
        let y0 = (pos.y - reach).floor().max(0.0) as usize;
        let x1 = (((pos.x + reach).ceil() + 1.0).max(0.0) as usize).min(self.width);
        let y1 = (((pos.y + reach).ceil() + 1.0).max(0.0) as usize).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - pos.x;
                let dy = py as f32 + 0.5 - pos.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= radius {
                    self.blend_over(px, py, color, alpha);
                } else if dist <= reach && glow > 0.0 {
                    // Halo additif en décroissance linéaire, façon shadow blur.
                    let falloff = 1.0 - (dist - radius) / glow;
                    self.blend_add(px, py, color, alpha * falloff * 0.35);
                }
            }
        }
    }
}

fn to_rgba8(color: Color) -> [u8; 4] {
    [
        (color.x.clamp(0.0, 1.0) * 255.0) as u8,
        (color.y.clamp(0.0, 1.0) * 255.0) as u8,
        (color.z.clamp(0.0, 1.0) * 255.0) as u8,
        (color.w.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_opaque_black() {
        let canvas = PixelCanvas::new(4, 4);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_fade_converges_to_target_color() {
        let mut canvas = PixelCanvas::new(2, 2);
        let night = Color::new(0.5, 0.5, 0.5, 1.0);
        for _ in 0..200 {
            canvas.fade(night, 0.12);
        }
        let px = canvas.pixel(0, 0).unwrap();
        assert!(px[0] > 110 && px[0] < 135, "converged to {:?}", px);
    }

    #[test]
    fn test_dot_writes_center_pixel() {
        let mut canvas = PixelCanvas::new(16, 16);
        canvas.dot(Vec2::new(8.0, 8.0), 2.0, Color::ONE, 1.0, 0.0);
        assert_eq!(canvas.pixel(8, 8).unwrap()[0], 255);
        // well outside the dot
        assert_eq!(canvas.pixel(0, 0).unwrap()[0], 0);
    }

    #[test]
    fn test_dot_clipped_outside_does_not_panic() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.dot(Vec2::new(-100.0, 4.0), 2.0, Color::ONE, 1.0, 10.0);
        canvas.dot(Vec2::new(4.0, 1_000.0), 2.0, Color::ONE, 1.0, 10.0);
    }

    #[test]
    fn test_resize_resets_contents() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.dot(Vec2::new(4.0, 4.0), 2.0, Color::ONE, 1.0, 0.0);
        canvas.resize(10, 12);
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 12);
        assert_eq!(canvas.pixel(4, 4), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_rect(-2, -2, 3, 3, Color::ONE);
        assert_eq!(canvas.pixel(0, 0).unwrap()[0], 255);
        assert_eq!(canvas.pixel(1, 1).unwrap()[0], 0);
    }
}
