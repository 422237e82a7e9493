pub mod types;
pub use self::types::TimeLeft;

pub mod engine;
pub use self::engine::CountdownEngine;

pub mod config;
pub use self::config::CountdownConfig;
