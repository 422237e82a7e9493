use std::cell::RefCell;
use std::rc::Rc;

use midnight_fireworks::audio_engine::AudioEngine;
use midnight_fireworks::firework_engine::config::FireworkConfig;
use midnight_fireworks::firework_engine::types::{Color, FrameStats, Vec2};
use midnight_fireworks::firework_engine::{FireworkEngine, LaunchRequest};
use midnight_fireworks::renderer_engine::{PixelCanvas, RendererEngine, Surface};

/// Surface d'enregistrement : capture chaque primitive émise par le
/// moteur, pour vérifier l'ordre et les paramètres de rendu sans
/// contexte graphique.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub fades: usize,
    pub dots: Vec<RecordedDot>,
}

#[derive(Debug, Clone, Copy)]
pub struct RecordedDot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    pub alpha: f32,
    pub glow: f32,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.fades = 0;
        self.dots.clear();
    }
}

impl Surface for RecordingSurface {
    fn fade(&mut self, _color: Color, _opacity: f32) {
        self.fades += 1;
    }

    fn dot(&mut self, pos: Vec2, radius: f32, color: Color, alpha: f32, glow: f32) {
        assert!(alpha >= 0.0, "a dot must never be rendered negative");
        self.dots.push(RecordedDot {
            pos,
            radius,
            color,
            alpha,
            glow,
        });
    }
}

// ---------------------------------------------------------------------
// Mocks des moteurs pour les tests du Simulator (journal d'appels partagé)
// ---------------------------------------------------------------------

pub type CallLog = Rc<RefCell<Vec<String>>>;

#[allow(dead_code)]
pub struct DummyAudio;

impl AudioEngine for DummyAudio {
    fn toggle(&mut self) -> bool {
        false
    }
    fn is_playing(&self) -> bool {
        false
    }
}

#[allow(dead_code)]
pub struct TestAudio {
    log: CallLog,
    playing: bool,
}

#[allow(dead_code)]
impl TestAudio {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            playing: false,
        }
    }
}

impl AudioEngine for TestAudio {
    fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.log.borrow_mut().push("audio.toggle".into());
        self.playing
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("audio.close".into());
    }
}

#[allow(dead_code)]
#[derive(Default)]
pub struct DummyFirework {
    config: FireworkConfig,
}

impl FireworkEngine for DummyFirework {
    fn launch(&mut self, _request: &LaunchRequest) {}
    fn update(&mut self, _now_ms: u64, _surface: &mut dyn Surface) -> FrameStats {
        FrameStats::default()
    }
    fn sync_burst_counter(&mut self, _counter: u64, _now_ms: u64) {}
    fn set_viewport(&mut self, _width: f32, _height: f32) {}
    fn reload_config(&mut self, _config: &FireworkConfig) -> bool {
        false
    }
    fn get_config(&self) -> &FireworkConfig {
        &self.config
    }
}

#[allow(dead_code)]
pub struct TestFirework {
    log: CallLog,
    config: FireworkConfig,
    pub seen_counter: u64,
}

#[allow(dead_code)]
impl TestFirework {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            config: FireworkConfig::default(),
            seen_counter: 0,
        }
    }
}

impl FireworkEngine for TestFirework {
    fn launch(&mut self, _request: &LaunchRequest) {
        self.log.borrow_mut().push("firework.launch".into());
    }

    fn update(&mut self, _now_ms: u64, surface: &mut dyn Surface) -> FrameStats {
        surface.fade(Color::ZERO, 0.12);
        self.log.borrow_mut().push("firework.update".into());
        FrameStats::default()
    }

    fn sync_burst_counter(&mut self, counter: u64, _now_ms: u64) {
        if counter != self.seen_counter {
            self.log
                .borrow_mut()
                .push(format!("firework.sync({})", counter));
        }
        self.seen_counter = counter;
    }

    fn set_viewport(&mut self, _width: f32, _height: f32) {}

    fn reload_config(&mut self, _config: &FireworkConfig) -> bool {
        false
    }

    fn get_config(&self) -> &FireworkConfig {
        &self.config
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("firework.close".into());
    }
}

#[allow(dead_code)]
pub struct TestRenderer {
    log: CallLog,
}

#[allow(dead_code)]
impl TestRenderer {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl RendererEngine for TestRenderer {
    fn render_frame(&mut self, _canvas: &PixelCanvas, _parallax: Vec2) -> anyhow::Result<()> {
        self.log.borrow_mut().push("renderer.render_frame".into());
        Ok(())
    }

    fn set_window_size(&mut self, _width: i32, _height: i32) {}

    fn close(&mut self) {
        self.log.borrow_mut().push("renderer.close".into());
    }
}
