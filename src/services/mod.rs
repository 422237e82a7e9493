pub mod quotes;
pub use quotes::{QuoteProvider, FALLBACK_QUOTE};
