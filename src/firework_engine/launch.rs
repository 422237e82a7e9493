use derive_builder::Builder;

use crate::firework_engine::types::Color;

/// Demande de lancement avec surcharges optionnelles.
///
/// Tout champ laissé à `None` est résolu par le moteur au moment du
/// lancement : abscisse aléatoire sur la largeur, départ du bas de
/// l'écran, apex dans la moitié haute, vitesse ascensionnelle aléatoire,
/// couleur tirée de la palette.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(setter(strip_option), default)]
pub struct LaunchRequest {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub target_y: Option<f32>,
    /// Vitesse ascensionnelle, en pixels par frame (positive vers le haut).
    pub speed: Option<f32>,
    pub color: Option<Color>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_no_overrides() {
        let request = LaunchRequestBuilder::default().build().unwrap();
        assert_eq!(request, LaunchRequest::default());
    }

    #[test]
    fn test_builder_strips_options() {
        let request = LaunchRequestBuilder::default()
            .x(12.0)
            .speed(15.0)
            .build()
            .unwrap();
        assert_eq!(request.x, Some(12.0));
        assert_eq!(request.speed, Some(15.0));
        assert_eq!(request.y, None);
        assert_eq!(request.color, None);
    }
}
