use log::info;

use crate::countdown_engine::{config::CountdownConfig, types::TimeLeft};

/// Moteur de compte à rebours vers un instant cible.
///
/// Deux activités périodiques indépendantes, toutes deux pilotées par le
/// `now_ms` fourni par l'hôte (jamais par l'horloge système) :
/// - `tick` (1 s) recalcule la décomposition affichée ;
/// - `poll` (~500 ms) détecte le franchissement de la cible et lève le
///   signal « arrivé » exactement une fois (front montant, verrouillé).
///
/// Reprogrammer la cible vers le futur réarme entièrement le moteur
/// (mode « aperçu minuit » : cible = maintenant + 5 s).
#[derive(Debug)]
pub struct CountdownEngine {
    target_ms: i64,
    arrived: bool,

    tick_period_ms: u64,
    poll_period_ms: u64,
    next_tick_ms: Option<u64>,
    next_poll_ms: Option<u64>,
}

impl CountdownEngine {
    pub fn new(target_ms: i64, config: &CountdownConfig) -> Self {
        Self {
            target_ms,
            arrived: false,
            tick_period_ms: config.tick_period_ms.max(1),
            poll_period_ms: config.poll_period_ms.max(1),
            next_tick_ms: None,
            next_poll_ms: None,
        }
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    pub fn arrived(&self) -> bool {
        self.arrived
    }

    /// Reprograms the target instant and re-arms the arrival signal.
    pub fn set_target(&mut self, target_ms: i64) {
        info!("⏱️ Countdown retargeted to t={} ms", target_ms);
        self.target_ms = target_ms;
        self.arrived = false;
        self.next_tick_ms = None;
        self.next_poll_ms = None;
    }

    /// Pure breakdown against the supplied instant. Idempotent: the same
    /// `now_ms` always yields the same fields.
    pub fn breakdown(&self, now_ms: u64) -> TimeLeft {
        TimeLeft::from_millis(self.target_ms - now_ms as i64)
    }

    /// Display tick. Returns a fresh breakdown when the 1 s period has
    /// elapsed (and on the very first call), `None` in between.
    pub fn tick(&mut self, now_ms: u64) -> Option<TimeLeft> {
        match self.next_tick_ms {
            Some(due) if now_ms < due => None,
            _ => {
                self.next_tick_ms = Some(now_ms + self.tick_period_ms);
                Some(self.breakdown(now_ms))
            }
        }
    }

    /// Arrival poll. Returns `true` exactly once, the first time
    /// `now >= target` is observed; never re-fires while latched.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_poll_ms {
            Some(due) if now_ms < due => return false,
            _ => self.next_poll_ms = Some(now_ms + self.poll_period_ms),
        }

        if !self.arrived && now_ms as i64 >= self.target_ms {
            self.arrived = true;
            info!("🎆 Countdown target reached at t={} ms", now_ms);
            return true;
        }
        false
    }
}
