use std::time::Instant;

use glfw::{Action, Key};
use log::{error, info};

use crate::audio_engine::AudioEngine;
use crate::countdown_engine::{CountdownEngine, TimeLeft};
use crate::firework_engine::types::{FrameStats, Vec2};
use crate::firework_engine::FireworkEngine;
use crate::renderer_engine::{overlay, PixelCanvas, RendererEngine};
use crate::scheduler::Clock;
use crate::services::QuoteProvider;
use crate::window_engine::WindowEngine;

/// Décalage parallaxe : (curseur - centre) / 50, en pixels.
const PARALLAX_DIVISOR: f32 = 50.0;

pub struct Simulator<F, R, A, W, C>
where
    F: FireworkEngine,
    R: RendererEngine,
    A: AudioEngine,
    W: WindowEngine,
    C: Clock,
{
    countdown: CountdownEngine,
    firework_engine: F,
    renderer_engine: R,
    pub audio_engine: A,
    window_engine: W,
    clock: C,

    // Host state
    canvas: PixelCanvas,
    burst_counter: u64,
    time_left: TimeLeft,
    quote: String,
    parallax: Vec2,

    // Loop state
    frames: u64,
    last_time: Instant,
    fps_avg: f32,
    last_log: Instant,
    last_stats: FrameStats,
    first_frame: bool,
}

impl<F, R, A, W, C> Simulator<F, R, A, W, C>
where
    F: FireworkEngine,
    R: RendererEngine,
    A: AudioEngine,
    W: WindowEngine,
    C: Clock,
{
    pub fn new(
        countdown: CountdownEngine,
        firework_engine: F,
        renderer_engine: R,
        audio_engine: A,
        window_engine: W,
        clock: C,
    ) -> Self {
        let (width, height) = window_engine.get_size();
        let quote = QuoteProvider::default().pick(&mut rand::rng());
        info!("💬 Quote of the night: “{}”", quote);

        Self {
            countdown,
            firework_engine,
            renderer_engine,
            audio_engine,
            window_engine,
            clock,
            canvas: PixelCanvas::new(width.max(1) as usize, height.max(1) as usize),
            burst_counter: 0,
            time_left: TimeLeft::default(),
            quote,
            parallax: Vec2::ZERO,
            frames: 0,
            last_time: Instant::now(),
            fps_avg: 0.0,
            last_log: Instant::now(),
            last_stats: FrameStats::default(),
            first_frame: true,
        }
    }

    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Une itération de la boucle auto-replanifiée (une frame par vsync).
    pub fn step(&mut self) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        self.handle_events();

        let now_ms = self.clock.now_ms();

        // Poll d'arrivée (~500 ms) : un front par franchissement de cible.
        if self.countdown.poll(now_ms) {
            self.burst_counter += 1;
            info!("🎆 Midnight! Burst counter -> {}", self.burst_counter);
            self.window_engine
                .set_title(&format!("🎆 Happy New Year! — “{}”", self.quote));
        }

        // Tick d'affichage (1 s).
        if let Some(time_left) = self.countdown.tick(now_ms) {
            self.time_left = time_left;
            if !self.countdown.arrived() {
                self.window_engine.set_title(&format!(
                    "{} to midnight — “{}”",
                    self.time_left, self.quote
                ));
            }
        }

        // Seul signal traversant la frontière du moteur de feux d'artifice.
        self.firework_engine
            .sync_burst_counter(self.burst_counter, now_ms);

        self.last_stats = self.firework_engine.update(now_ms, &mut self.canvas);
        overlay::draw_countdown(&mut self.canvas, &self.time_left);

        if let Err(e) = self
            .renderer_engine
            .render_frame(&self.canvas, self.parallax)
        {
            error!("❌ Render failed: {}", e);
            self.window_engine.set_should_close(true);
            return false;
        }
        self.window_engine.swap_buffers();

        self.update_loop_metrics();

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        true
    }

    fn handle_events(&mut self) {
        self.window_engine.poll_events();

        // Collect events into a Vec to avoid borrow checker issues
        let events: Vec<_> = glfw::flush_messages(self.window_engine.get_events()).collect();

        for (_, event) in events {
            match event {
                glfw::WindowEvent::FramebufferSize(w, h) => {
                    self.renderer_engine.set_window_size(w, h);
                    self.canvas.resize(w.max(1) as usize, h.max(1) as usize);
                    self.firework_engine.set_viewport(w as f32, h as f32);
                    info!("🖥️ Window resized: {} x {}", w, h);
                }
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    self.window_engine.set_should_close(true);
                }
                glfw::WindowEvent::Key(Key::M, _, Action::Press, _) => {
                    self.audio_engine.toggle();
                }
                glfw::WindowEvent::Key(Key::P, _, Action::Press, _) => {
                    self.preview_midnight();
                }
                glfw::WindowEvent::CursorPos(x, y) => {
                    let (w, h) = self.window_engine.get_size();
                    self.parallax = Vec2::new(
                        (x as f32 - w as f32 / 2.0) / PARALLAX_DIVISOR,
                        (y as f32 - h as f32 / 2.0) / PARALLAX_DIVISOR,
                    );
                }
                _ => {}
            }
        }
    }

    /// Mode aperçu : cible reprogrammée à maintenant + 5 s, signal réarmé.
    pub fn preview_midnight(&mut self) {
        let target = self.clock.now_ms() as i64 + 5_000;
        info!("🚀 Preview midnight requested");
        self.countdown.set_target(target);
    }

    fn update_loop_metrics(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_time).as_secs_f32();
        self.last_time = now;
        self.frames += 1;

        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        // moyenne pondérée EMA
        let alpha = 0.15;
        self.fps_avg = alpha * fps + (1.0 - alpha) * self.fps_avg;

        if self.last_log.elapsed() >= std::time::Duration::from_secs(5) {
            info!(
                "FPS moyen (EMA): {:.1} | rockets: {} | particles: {} | bursts: {}",
                self.fps_avg, self.last_stats.rockets, self.last_stats.particles, self.burst_counter
            );
            self.last_log = Instant::now();
        }
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
        self.firework_engine.close();
        self.audio_engine.close();
        // Window engine cleanup happens automatically when dropped
    }

    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    pub fn firework_engine(&self) -> &F {
        &self.firework_engine
    }

    pub fn burst_counter(&self) -> u64 {
        self.burst_counter
    }
}
