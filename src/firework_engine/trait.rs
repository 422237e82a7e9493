use crate::firework_engine::config::FireworkConfig;
use crate::firework_engine::launch::LaunchRequest;
use crate::firework_engine::types::FrameStats;
use crate::renderer_engine::Surface;

/// 🔧 Trait `FireworkEngine`
///
/// Interface commune des moteurs de feux d'artifice, telle que vue par le
/// `Simulator`. Le moteur possède exclusivement ses collections (fusées en
/// vol, particules en décroissance) ; la seule entrée externe est le
/// compteur de célébration observé via `sync_burst_counter`.
pub trait FireworkEngine {
    /// Lance une fusée, en résolvant les surcharges absentes par des
    /// valeurs aléatoires par défaut.
    fn launch(&mut self, request: &LaunchRequest);

    /// Une frame complète : drainage des lancements différés, spawn
    /// ambiant, fondu de la surface, avancement et rendu des entités.
    /// Les particules nées pendant la frame ne sont rendues qu'à la
    /// frame suivante.
    fn update(&mut self, now_ms: u64, surface: &mut dyn Surface) -> FrameStats;

    /// Observe le compteur de célébration : chaque incrément positif
    /// démarre exactement une séquence chorégraphiée indépendante.
    fn sync_burst_counter(&mut self, counter: u64, now_ms: u64);

    /// Ajuste les dimensions logiques du monde. Les entités en vol ne
    /// sont volontairement pas re-projetées.
    fn set_viewport(&mut self, width: f32, height: f32);

    fn reload_config(&mut self, config: &FireworkConfig) -> bool;

    fn get_config(&self) -> &FireworkConfig;

    /// Ferme / libère le moteur.
    fn close(&mut self) {} // Par défaut, fait rien.
}
