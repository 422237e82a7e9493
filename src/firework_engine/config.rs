use serde::Deserialize;

use crate::firework_engine::types::{parse_hex_color, Color};

/// Réglages du moteur de feux d'artifice.
///
/// La physique est exprimée **par frame** (et non par seconde) : la boucle
/// d'affichage est cadencée par le vsync et chaque `update` avance la
/// simulation d'exactement un pas, comme la page d'origine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FireworkConfig {
    // Spawn ambiant
    pub ambient_period_ms: u64,
    pub double_launch_probability: f64,
    pub double_launch_delay_ms: u64,

    // Fusées
    pub rocket_gravity: f32,
    pub rocket_radius: f32,
    pub rocket_glow: f32,
    pub min_launch_speed: f32,
    pub max_launch_speed: f32,
    /// Demi-amplitude de la dérive horizontale au lancement.
    pub launch_spread: f32,
    /// Fraction haute de l'écran où tombe l'apex par défaut.
    pub apex_fraction: f32,

    // Gerbes de particules
    pub burst_min_particles: usize,
    pub burst_extra_particles: usize,
    pub particle_min_speed: f32,
    pub particle_max_speed: f32,
    pub particle_min_size: f32,
    pub particle_max_size: f32,
    pub particle_gravity: f32,
    pub particle_friction: f32,
    pub alpha_decay: f32,
    pub flicker_probability: f64,
    pub flicker_alpha: f32,

    // Rendu
    pub trail_fade_opacity: f32,
    /// Couleur de fond « nuit », RGB normalisé.
    pub night_color: [f32; 3],
    pub palette: Vec<String>,

    // Chorégraphie de célébration
    pub celebration_waves: u64,
    pub celebration_rockets_per_wave: u64,
    pub celebration_wave_spacing_ms: u64,
    pub celebration_intra_spacing_ms: u64,
    pub celebration_min_speed: f32,
    pub celebration_max_speed: f32,
    pub celebration_apex_fraction: f32,
}

impl Default for FireworkConfig {
    fn default() -> Self {
        Self {
            ambient_period_ms: 400,
            double_launch_probability: 0.3,
            double_launch_delay_ms: 150,

            rocket_gravity: 0.15,
            rocket_radius: 2.0,
            rocket_glow: 10.0,
            min_launch_speed: 12.0,
            max_launch_speed: 20.0,
            launch_spread: 2.0,
            apex_fraction: 0.5,

            burst_min_particles: 80,
            burst_extra_particles: 70,
            particle_min_speed: 1.0,
            particle_max_speed: 7.0,
            particle_min_size: 0.5,
            particle_max_size: 2.5,
            particle_gravity: 0.06,
            particle_friction: 0.97,
            alpha_decay: 0.008,
            flicker_probability: 0.1,
            flicker_alpha: 0.5,

            trail_fade_opacity: 0.12,
            night_color: [2.0 / 255.0, 6.0 / 255.0, 23.0 / 255.0],
            palette: [
                "#ff0043", "#14ff00", "#00e7ff", "#ff8e00", "#9c00ff", "#f0ff00", "#ffffff",
                "#ffd700", "#ff69b4", "#00fa9a",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),

            celebration_waves: 4,
            celebration_rockets_per_wave: 20,
            celebration_wave_spacing_ms: 500,
            celebration_intra_spacing_ms: 30,
            celebration_min_speed: 10.0,
            celebration_max_speed: 22.0,
            celebration_apex_fraction: 0.7,
        }
    }
}

impl FireworkConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<Self>(&text)?.normalized())
    }

    /// Ramène les réglages dans leurs domaines valides : probabilités
    /// dans [0, 1], bornes max jamais inférieures aux min, dispersion
    /// positive. Un fichier édité à la main peut dégénérer les plages,
    /// le moteur ne doit jamais paniquer pour autant.
    pub fn normalized(mut self) -> Self {
        self.double_launch_probability = self.double_launch_probability.clamp(0.0, 1.0);
        self.flicker_probability = self.flicker_probability.clamp(0.0, 1.0);
        self.launch_spread = self.launch_spread.max(0.0);
        self.max_launch_speed = self.max_launch_speed.max(self.min_launch_speed);
        self.particle_max_speed = self.particle_max_speed.max(self.particle_min_speed);
        self.particle_max_size = self.particle_max_size.max(self.particle_min_size);
        self.celebration_max_speed = self.celebration_max_speed.max(self.celebration_min_speed);
        self
    }

    pub fn night_color(&self) -> Color {
        Color::new(self.night_color[0], self.night_color[1], self.night_color[2], 1.0)
    }

    /// Palette résolue ; les entrées invalides sont ignorées, et une palette
    /// entièrement invalide retombe sur du blanc plutôt que d'échouer.
    pub fn palette_colors(&self) -> Vec<Color> {
        let colors: Vec<Color> = self
            .palette
            .iter()
            .filter_map(|entry| parse_hex_color(entry))
            .collect();
        if colors.is_empty() {
            vec![Color::ONE]
        } else {
            colors
        }
    }
}
