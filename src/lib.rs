pub mod simulator;
pub use simulator::Simulator;
// Countdown engine
pub mod countdown_engine;
pub use countdown_engine::CountdownEngine;
// Firework engine
pub mod firework_engine;
pub use firework_engine::{FireworkEngine, FireworksEngine};
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::{PixelCanvas, RendererEngine, Surface};
// Window engine
pub mod window_engine;
// Audio engine
pub mod audio_engine;
pub use audio_engine::AudioEngine;
// Scheduler / clocks
pub mod scheduler;
pub use scheduler::Clock;
// Services (quotes)
pub mod services;
// Utilities
pub mod utils;
