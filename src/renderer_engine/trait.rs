use anyhow::Result;

use crate::firework_engine::types::{Color, Vec2};
use crate::renderer_engine::canvas::PixelCanvas;

/// Surface de dessin vue par le moteur de feux d'artifice.
///
/// Le moteur ne connaît que deux primitives : le fondu global (traînées)
/// et le point lumineux. Tout le reste (framebuffer, présentation GL,
/// overlay) vit derrière cette interface, ce qui rend la simulation
/// testable sans contexte graphique.
pub trait Surface {
    /// Compose un voile `color` à `opacity` sur toute la surface
    /// (jamais un effacement net : c'est l'effet de traînée).
    fn fade(&mut self, color: Color, opacity: f32);

    /// Dessine un point de rayon `radius` à l'opacité `alpha`, entouré
    /// d'un halo de `glow` pixels de la même couleur.
    fn dot(&mut self, pos: Vec2, radius: f32, color: Color, alpha: f32, glow: f32);
}

/// Présentation d'un `PixelCanvas` à l'écran.
pub trait RendererEngine {
    fn render_frame(&mut self, canvas: &PixelCanvas, parallax: Vec2) -> Result<()>;
    fn set_window_size(&mut self, width: i32, height: i32);
    fn close(&mut self);
}
