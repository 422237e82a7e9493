// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::{info, warn};

use midnight_fireworks::audio_engine::MusicPlayer;
use midnight_fireworks::countdown_engine::{CountdownConfig, CountdownEngine};
use midnight_fireworks::firework_engine::{FireworkConfig, FireworksEngine};
use midnight_fireworks::renderer_engine::GlRenderer;
use midnight_fireworks::scheduler::SystemClock;
use midnight_fireworks::utils::show_rust_core_dependencies;
use midnight_fireworks::window_engine::{GlfwWindowEngine, WindowEngine};
use midnight_fireworks::Simulator;

/// Main entry point for the Midnight Countdown application.
fn main() -> Result<()> {
    env_logger::init();

    info!("🎆 Starting Midnight Countdown...");

    show_rust_core_dependencies();

    let countdown_config =
        CountdownConfig::from_file("assets/config/countdown.toml").unwrap_or_default();
    info!("Countdown config loaded:\n{:#?}", countdown_config);

    let firework_config =
        FireworkConfig::from_file("assets/config/firework.toml").unwrap_or_default();
    info!("Firework config loaded:\n{:#?}", firework_config);

    // Une cible illisible n'est pas fatale : on retombe sur la cible par défaut.
    let target_ms = countdown_config.target_epoch_ms().unwrap_or_else(|e| {
        warn!("⏱️ Invalid countdown target ({}), using default", e);
        CountdownConfig::default()
            .target_epoch_ms()
            .unwrap_or(i64::MAX)
    });

    let window_width = 1024;
    let window_height = 800;

    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(window_width, window_height, "Midnight Countdown")?;

    // 2. Init Renderer (now that GL context is ready)
    let renderer_engine = GlRenderer::new(
        window_width,
        window_height,
        Some("assets/background.jpg"),
    )?;

    // 3. Init engines
    let firework_engine = FireworksEngine::new(
        &firework_config,
        window_width as f32,
        window_height as f32,
    );
    let countdown = CountdownEngine::new(target_ms, &countdown_config);
    let audio_engine = MusicPlayer::new("assets/sounds/theme.wav");

    // 4. Init Simulator
    let mut simulator = Simulator::new(
        countdown,
        firework_engine,
        renderer_engine,
        audio_engine,
        window_engine,
        SystemClock,
    );

    simulator.run();
    simulator.close();

    Ok(())
}
