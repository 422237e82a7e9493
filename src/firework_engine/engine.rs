use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::firework_engine::{
    celebration_schedule,
    choreography::{AmbientSpawner, ScheduledLaunch},
    config::FireworkConfig,
    launch::LaunchRequest,
    particle::Particle,
    rocket::Rocket,
    types::{Color, FrameStats, Vec2},
    FireworkEngine,
};
use crate::renderer_engine::Surface;

/// Moteur de feux d'artifice.
///
/// Possède exclusivement les deux collections d'entités (fusées en vol,
/// particules en décroissance) ainsi que la file des lancements différés
/// (doubles tirs ambiants, vagues de célébration). Tout le temps vient du
/// `now_ms` de l'hôte, la physique avance d'un pas par frame.
pub struct FireworksEngine {
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    pending: BinaryHeap<Reverse<ScheduledLaunch>>,
    next_seq: u64,

    ambient: AmbientSpawner,
    last_burst_counter: u64,

    width: f32,
    height: f32,
    rng: SmallRng,
    palette: Vec<Color>,
    config: FireworkConfig,
}

impl FireworksEngine {
    pub fn new(config: &FireworkConfig, width: f32, height: f32) -> Self {
        Self {
            rockets: Vec::new(),
            particles: Vec::new(),
            pending: BinaryHeap::new(),
            next_seq: 0,
            ambient: AmbientSpawner::default(),
            last_burst_counter: 0,
            width: width.max(1.0),
            height: height.max(1.0),
            rng: SmallRng::from_os_rng(),
            palette: config.palette_colors(),
            config: config.clone().normalized(),
        }
    }

    pub fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    pub fn particles_count(&self) -> usize {
        self.particles.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn schedule(&mut self, due_ms: u64, request: LaunchRequest) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(ScheduledLaunch {
            due_ms,
            seq,
            request,
        }));
    }

    /// Draine tous les lancements différés arrivés à échéance.
    fn drain_due_launches(&mut self, now_ms: u64, stats: &mut FrameStats) {
        while let Some(Reverse(next)) = self.pending.peek() {
            if next.due_ms > now_ms {
                break;
            }
            if let Some(Reverse(launch)) = self.pending.pop() {
                self.launch(&launch.request);
                stats.launched += 1;
            }
        }
    }

    /// Spawn ambiant : un tir toutes les ~400 ms, doublé avec une courte
    /// latence environ une fois sur trois.
    fn ambient_spawn(&mut self, now_ms: u64, stats: &mut FrameStats) {
        if !self.ambient.poll(now_ms, self.config.ambient_period_ms) {
            return;
        }
        self.launch(&LaunchRequest::default());
        stats.launched += 1;

        if self.rng.random_bool(self.config.double_launch_probability) {
            self.schedule(
                now_ms + self.config.double_launch_delay_ms,
                LaunchRequest::default(),
            );
        }
    }

    /// Gerbe d'explosion : 80 + random(0..70) particules à vélocité
    /// radiale, couleur héritée de la fusée.
    fn spawn_burst(&mut self, rocket: &Rocket, newborn: &mut Vec<Particle>) {
        let count = self.config.burst_min_particles
            + self.rng.random_range(0..self.config.burst_extra_particles.max(1));
        newborn.reserve(count);
        for _ in 0..count {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            // Bornes inclusives : une plage réduite à un point reste valide.
            let speed = self
                .rng
                .random_range(self.config.particle_min_speed..=self.config.particle_max_speed);
            newborn.push(Particle {
                pos: rocket.pos,
                vel: Vec2::from_angle(angle) * speed,
                color: rocket.color,
                alpha: 1.0,
                size: self
                    .rng
                    .random_range(self.config.particle_min_size..=self.config.particle_max_size),
                gravity: self.config.particle_gravity,
                friction: self.config.particle_friction,
            });
        }
        debug!(
            "💥 Burst of {} particles at ({:.0}, {:.0})",
            count, rocket.pos.x, rocket.pos.y
        );
    }

    fn random_palette_color(&mut self) -> Color {
        let idx = self.rng.random_range(0..self.palette.len());
        self.palette[idx]
    }
}

impl FireworkEngine for FireworksEngine {
    fn launch(&mut self, request: &LaunchRequest) {
        let x = request
            .x
            .unwrap_or_else(|| self.rng.random_range(0.0..self.width));
        let y = request.y.unwrap_or(self.height);
        let target_y = request.target_y.unwrap_or_else(|| {
            self.rng
                .random_range(0.0..(self.height * self.config.apex_fraction).max(1.0))
        });
        let speed = request.speed.unwrap_or_else(|| {
            self.rng
                .random_range(self.config.min_launch_speed..=self.config.max_launch_speed)
        });
        let vx = self
            .rng
            .random_range(-self.config.launch_spread..=self.config.launch_spread);
        let color = request.color.unwrap_or_else(|| self.random_palette_color());

        self.rockets.push(Rocket {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, -speed),
            target_y,
            color,
            exploded: false,
        });
    }

    fn update(&mut self, now_ms: u64, surface: &mut dyn Surface) -> FrameStats {
        let mut stats = FrameStats::default();

        // 1. Lancements : file différée puis cadence ambiante.
        self.drain_due_launches(now_ms, &mut stats);
        self.ambient_spawn(now_ms, &mut stats);

        // 2. Voile sombre sur toute la surface : effet de traînée.
        surface.fade(self.config.night_color(), self.config.trail_fade_opacity);

        // 3. Fusées, en itération inverse pour retirer sans décaler.
        //    Les particules nées ici ne sont PAS avancées dans cette frame.
        let mut newborn: Vec<Particle> = Vec::new();
        for i in (0..self.rockets.len()).rev() {
            self.rockets[i].advance(self.config.rocket_gravity);
            if self.rockets[i].apex_reached() {
                let mut rocket = self.rockets.swap_remove(i);
                rocket.exploded = true;
                self.spawn_burst(&rocket, &mut newborn);
                stats.exploded += 1;
            } else {
                let rocket = &self.rockets[i];
                surface.dot(
                    rocket.pos,
                    self.config.rocket_radius,
                    rocket.color,
                    1.0,
                    self.config.rocket_glow,
                );
            }
        }

        // 4. Particules : décélération, gravité, décroissance d'opacité.
        for i in (0..self.particles.len()).rev() {
            self.particles[i].advance(self.config.alpha_decay);
            if !self.particles[i].alive() {
                self.particles.swap_remove(i);
                continue;
            }
            // Scintillement purement cosmétique, sans effet sur la durée de vie.
            let flicker = if self.rng.random_bool(self.config.flicker_probability) {
                self.config.flicker_alpha
            } else {
                1.0
            };
            let particle = &self.particles[i];
            surface.dot(
                particle.pos,
                particle.size,
                particle.color,
                particle.alpha * flicker,
                0.0,
            );
        }

        // 5. Les nouveau-nés rejoignent la collection pour la frame suivante.
        self.particles.append(&mut newborn);

        stats.rockets = self.rockets.len();
        stats.particles = self.particles.len();
        stats
    }

    fn sync_burst_counter(&mut self, counter: u64, now_ms: u64) {
        if counter <= self.last_burst_counter {
            // Compteur inchangé (ou remis à zéro par l'hôte) : on adopte.
            self.last_burst_counter = counter;
            return;
        }

        let sequences = counter - self.last_burst_counter;
        self.last_burst_counter = counter;
        for _ in 0..sequences {
            info!("🎆 Celebration burst: scheduling a full choreography");
            let schedule =
                celebration_schedule(&self.config, self.width, self.height, now_ms, &mut self.rng);
            for (due_ms, request) in schedule {
                self.schedule(due_ms, request);
            }
        }
    }

    fn set_viewport(&mut self, width: f32, height: f32) {
        // Les coordonnées des entités en vol restent telles quelles :
        // l'écrêtage visuel après rétrécissement est un artefact accepté.
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    fn reload_config(&mut self, config: &FireworkConfig) -> bool {
        let palette_changed = config.palette != self.config.palette;
        self.config = config.clone().normalized();
        if palette_changed {
            self.palette = config.palette_colors();
        }
        self.ambient.reset();
        palette_changed
    }

    fn get_config(&self) -> &FireworkConfig {
        &self.config
    }

    fn close(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        self.pending.clear();
    }
}

/// Accès de test : hooks déterministes, exposés uniquement pour les tests.
#[cfg(feature = "test_helpers")]
impl FireworksEngine {
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Force le prochain poll ambiant à tirer immédiatement.
    pub fn force_ambient_launch(&mut self) {
        self.ambient.force_due();
    }
}
