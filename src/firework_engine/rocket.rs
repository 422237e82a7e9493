use crate::firework_engine::types::{Color, Vec2};

/// Projectile ascendant, pré-explosion.
///
/// Coordonnées écran : l'origine est en haut à gauche, `y` croît vers le
/// bas, donc une fusée qui monte a `vel.y < 0` et son apex cible est un
/// `target_y` plus petit que son `y` de départ.
#[derive(Debug, Clone)]
pub struct Rocket {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Hauteur d'apex visée (explosion forcée si dépassée).
    pub target_y: f32,
    pub color: Color,
    /// Reste `false` tant que la fusée vole ; passée à `true` au moment
    /// précis où elle est consommée en gerbe de particules.
    pub exploded: bool,
}

impl Rocket {
    /// One frame of flight: integrate position, then pull the vertical
    /// velocity down by the per-frame gravity constant.
    pub fn advance(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
    }

    /// Apex condition: the climb has stalled (`vel.y >= 0`) or the rocket
    /// rose past its target height.
    pub fn apex_reached(&self) -> bool {
        self.vel.y >= 0.0 || self.pos.y <= self.target_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rocket(vy: f32, y: f32, target_y: f32) -> Rocket {
        Rocket {
            pos: Vec2::new(100.0, y),
            vel: Vec2::new(0.0, vy),
            target_y,
            color: Color::ONE,
            exploded: false,
        }
    }

    #[test]
    fn test_advance_applies_gravity() {
        let mut r = rocket(-10.0, 500.0, 0.0);
        r.advance(0.15);
        assert_eq!(r.pos.y, 490.0);
        assert_eq!(r.vel.y, -9.85);
    }

    #[test]
    fn test_apex_on_stalled_climb() {
        assert!(!rocket(-0.1, 300.0, -1_000.0).apex_reached());
        assert!(rocket(0.0, 300.0, -1_000.0).apex_reached());
        assert!(rocket(0.1, 300.0, -1_000.0).apex_reached());
    }

    #[test]
    fn test_apex_on_target_height() {
        assert!(rocket(-10.0, 200.0, 200.0).apex_reached());
        assert!(rocket(-10.0, 199.0, 200.0).apex_reached());
        assert!(!rocket(-10.0, 201.0, 200.0).apex_reached());
    }
}
