/// Contrôle audio minimal : lecture/pause d'une piste en boucle.
///
/// Les échecs de lecture (pas de périphérique, format non supporté,
/// fichier absent) sont consignés puis avalés : l'état du bouton bascule
/// quand même, seule la sortie sonore manque.
pub trait AudioEngine {
    /// Bascule lecture/pause ; retourne le nouvel état.
    fn toggle(&mut self) -> bool;

    fn is_playing(&self) -> bool;

    /// Arrête le thread audio. Par défaut, fait rien.
    fn close(&mut self) {}
}

/// Implémentation muette, pour les tests et le mode sans audio.
#[derive(Debug, Default)]
pub struct NullAudio {
    playing: bool,
}

impl AudioEngine for NullAudio {
    fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
