use crate::firework_engine::types::{Color, Vec2};

/// Élément visuel post-explosion, en décroissance.
///
/// La friction et la gravité sont portées par la particule elle-même
/// (héritées de la configuration au moment de la gerbe), la couleur est
/// immuable sur toute la durée de vie.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Opacité, strictement décroissante de 1.0 vers 0.
    pub alpha: f32,
    pub size: f32,
    pub gravity: f32,
    /// Multiplicateur de vitesse par frame, < 1.
    pub friction: f32,
}

impl Particle {
    /// One frame of decay: passive deceleration, gravity, integration,
    /// then the fixed opacity decrement.
    pub fn advance(&mut self, alpha_decay: f32) {
        self.vel *= self.friction;
        self.vel.y += self.gravity;
        self.pos += self.vel;
        self.alpha -= alpha_decay;
    }

    pub fn alive(&self) -> bool {
        self.alpha > 0.0
    }
}
