use itertools::Itertools;
use rand::Rng;

use crate::firework_engine::{
    config::FireworkConfig,
    launch::{LaunchRequest, LaunchRequestBuilder},
};

/// Lancement différé, daté en millisecondes absolues.
///
/// Le `seq` départage les égalités de date pour que l'ordre de drainage
/// reste celui de la planification.
#[derive(Debug, Clone)]
pub struct ScheduledLaunch {
    pub due_ms: u64,
    pub seq: u64,
    pub request: LaunchRequest,
}

impl PartialEq for ScheduledLaunch {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for ScheduledLaunch {}

impl PartialOrd for ScheduledLaunch {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledLaunch {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

/// Construit la chorégraphie complète d'une célébration : `waves` vagues
/// espacées de `wave_spacing`, chacune égrenant ses fusées toutes les
/// `intra_spacing` millisecondes, avec vitesse élevée et apex haut.
///
/// La liste est une donnée pure : la planifier deux fois produit deux
/// séquences indépendantes qui se superposent sans s'annuler.
pub fn celebration_schedule(
    config: &FireworkConfig,
    width: f32,
    height: f32,
    now_ms: u64,
    rng: &mut impl Rng,
) -> Vec<(u64, LaunchRequest)> {
    (0..config.celebration_waves)
        .cartesian_product(0..config.celebration_rockets_per_wave)
        .map(|(wave, slot)| {
            let due_ms = now_ms
                + wave * config.celebration_wave_spacing_ms
                + slot * config.celebration_intra_spacing_ms;
            let request = LaunchRequestBuilder::default()
                .x(rng.random_range(0.0..width.max(1.0)))
                .target_y(rng.random_range(0.0..(height * config.celebration_apex_fraction).max(1.0)))
                .speed(rng.random_range(config.celebration_min_speed..=config.celebration_max_speed))
                .build()
                .unwrap_or_default();
            (due_ms, request)
        })
        .collect()
}

/// Timer du spawn ambiant : une fusée toutes les `period_ms`, réarmé sur
/// l'instant du tir (tolérant à la dérive, pas de rattrapage en rafale).
#[derive(Debug, Default)]
pub struct AmbientSpawner {
    next_due_ms: Option<u64>,
}

impl AmbientSpawner {
    /// Returns `true` when an ambient launch is due. The first observed
    /// instant only arms the timer.
    pub fn poll(&mut self, now_ms: u64, period_ms: u64) -> bool {
        match self.next_due_ms {
            None => {
                self.next_due_ms = Some(now_ms + period_ms);
                false
            }
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + period_ms);
                true
            }
            Some(_) => false,
        }
    }

    pub fn reset(&mut self) {
        self.next_due_ms = None;
    }

    /// Rend le prochain poll immédiatement éligible.
    #[cfg(feature = "test_helpers")]
    pub fn force_due(&mut self) {
        self.next_due_ms = Some(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_schedule_is_waves_times_rockets() {
        let config = FireworkConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let schedule = celebration_schedule(&config, 800.0, 600.0, 1_000, &mut rng);
        assert_eq!(schedule.len(), 80);
    }

    #[test]
    fn test_schedule_span_is_about_two_seconds() {
        let config = FireworkConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let schedule = celebration_schedule(&config, 800.0, 600.0, 0, &mut rng);
        let last_due = schedule.iter().map(|(due, _)| *due).max().unwrap();
        // 3 * 500 + 19 * 30
        assert_eq!(last_due, 2_070);
    }

    #[test]
    fn test_ambient_spawner_arms_then_fires() {
        let mut spawner = AmbientSpawner::default();
        assert!(!spawner.poll(1_000, 400)); // arming only
        assert!(!spawner.poll(1_399, 400));
        assert!(spawner.poll(1_400, 400));
        assert!(!spawner.poll(1_401, 400));
        assert!(spawner.poll(1_800, 400));
    }
}
