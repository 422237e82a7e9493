pub mod r#trait;
pub use r#trait::FireworkEngine;

pub mod types;
pub use self::types::{Color, FrameStats, Vec2};

pub mod rocket;
pub use self::rocket::Rocket;

pub mod particle;
pub use self::particle::Particle;

pub mod launch;
pub use self::launch::{LaunchRequest, LaunchRequestBuilder};

pub mod choreography;
pub use self::choreography::{celebration_schedule, AmbientSpawner, ScheduledLaunch};

pub mod config;
pub use self::config::FireworkConfig;

pub mod engine;
pub use self::engine::FireworksEngine;
