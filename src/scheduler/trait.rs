/// 🔧 Trait `Clock`
///
/// Unique source de temps pour tous les moteurs. Les timers (tick du
/// compte à rebours, spawn ambiant, chorégraphie) sont exprimés en
/// millisecondes absolues et comparés à `now_ms()`, jamais à l'horloge
/// système directement.
///
/// Deux implémentations :
/// - `SystemClock` : temps réel (epoch Unix), utilisé par le binaire.
/// - `ManualClock` : temps simulé, piloté pas à pas par les tests.
pub trait Clock {
    /// Milliseconds since the Unix epoch (or a simulated equivalent).
    fn now_ms(&self) -> u64;
}

// Permet de partager une horloge simulée entre le test et le simulateur.
impl<C: Clock> Clock for std::rc::Rc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
