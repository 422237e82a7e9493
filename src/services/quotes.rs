use rand::Rng;

/// Citation de repli, servie sur toute défaillance du fournisseur.
pub const FALLBACK_QUOTE: &str = "A year of boundless possibility and achievement lies ahead.";

const BUILTIN_QUOTES: &[&str] = &[
    "Everything renews, nothing of the heart is lost.",
    "Carry your light; the road will find itself.",
    "Small steps, gathered, become the journey.",
    "Grow toward the sun and keep walking.",
    "The stars are bright, and so is this life.",
    "Ride your dreams; waste none of your youth.",
    "Keep going without pause; the future keeps its word.",
    "Embrace change, create the extraordinary.",
    "Eyes like torches, ambition like a rainbow.",
    "For what you love, cross mountains and seas.",
];

/// Fournisseur de citations : un tirage aléatoire dans une liste fixe.
///
/// Contrat : ne retourne jamais une chaîne vide et n'échoue jamais ;
/// une liste vide retombe sur `FALLBACK_QUOTE`.
#[derive(Debug, Clone)]
pub struct QuoteProvider {
    quotes: Vec<String>,
}

impl Default for QuoteProvider {
    fn default() -> Self {
        Self::new(BUILTIN_QUOTES.iter().map(|q| q.to_string()).collect())
    }
}

impl QuoteProvider {
    pub fn new(quotes: Vec<String>) -> Self {
        Self { quotes }
    }

    pub fn pick(&self, rng: &mut impl Rng) -> String {
        if self.quotes.is_empty() {
            return FALLBACK_QUOTE.to_string();
        }
        let idx = rng.random_range(0..self.quotes.len());
        let quote = self.quotes[idx].trim();
        if quote.is_empty() {
            FALLBACK_QUOTE.to_string()
        } else {
            quote.to_string()
        }
    }
}
