use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{bounded, Receiver, Sender};
use hound::WavReader;
use log::{info, warn};

use crate::audio_engine::AudioEngine;

/// Lecteur de musique d'ambiance : une piste WAV jouée en boucle sur un
/// thread dédié, avec une simple barrière lecture/pause partagée.
///
/// Toute défaillance de la chaîne audio laisse le lecteur dans un état
/// silencieux mais cohérent : `toggle` continue de basculer l'état.
pub struct MusicPlayer {
    gate: Arc<AtomicBool>,
    playing: bool,
    stop_tx: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl MusicPlayer {
    pub fn new(track_path: &str) -> Self {
        let gate = Arc::new(AtomicBool::new(false));
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let thread_gate = gate.clone();
        let path = track_path.to_owned();
        let handle = thread::spawn(move || audio_thread(&path, thread_gate, stop_rx));

        Self {
            gate,
            playing: false,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }
}

impl AudioEngine for MusicPlayer {
    fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.gate.store(self.playing, Ordering::Relaxed);
        info!(
            "🎵 Music {}",
            if self.playing { "playing" } else { "paused" }
        );
        self.playing
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn close(&mut self) {
        self.playing = false;
        self.gate.store(false, Ordering::Relaxed);
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Corps du thread audio. Tout échec est consigné puis avalé, le thread
/// se contente alors d'attendre l'ordre d'arrêt.
fn audio_thread(path: &str, gate: Arc<AtomicBool>, stop_rx: Receiver<()>) {
    let stream = match build_looping_stream(path, gate) {
        Ok(stream) => Some(stream),
        Err(e) => {
            warn!("🎵 Audio disabled: {}", e);
            None
        }
    };

    // La fermeture du canal (Drop côté hôte) vaut ordre d'arrêt.
    let _ = stop_rx.recv();
    drop(stream);
}

fn build_looping_stream(path: &str, gate: Arc<AtomicBool>) -> Result<cpal::Stream> {
    let track = load_track(path)?;
    if track.is_empty() {
        return Err(anyhow!("track '{}' has no samples", path));
    }

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no output device"))?;
    let supported = device.default_output_config()?;
    let channels = supported.channels() as usize;
    let config: cpal::StreamConfig = supported.into();

    let mut cursor = 0usize;
    let stream = device.build_output_stream(
        &config,
        move |out: &mut [f32], _: &cpal::OutputCallbackInfo| {
            if !gate.load(Ordering::Relaxed) {
                out.fill(0.0);
                return;
            }
            for frame in out.chunks_mut(channels) {
                let [left, right] = track[cursor];
                for (i, sample) in frame.iter_mut().enumerate() {
                    *sample = match i {
                        0 => left,
                        1 => right,
                        _ => 0.0,
                    };
                }
                // Boucle infinie sur la piste.
                cursor = (cursor + 1) % track.len();
            }
        },
        |err| warn!("🎵 Audio stream error: {}", err),
        None,
    )?;
    stream.play()?;

    info!("🎵 Looping track '{}' ready", path);
    Ok(stream)
}

/// Charge un fichier WAV en tampon stéréo `[f32; 2]` normalisé
/// (canal gauche dupliqué si la piste est mono).
fn load_track(path: &str) -> Result<Vec<[f32; 2]>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let mut data = Vec::new();
    let mut frame = Vec::with_capacity(channels);
    for sample in reader.samples::<i16>().flatten() {
        frame.push(sample as f32 / 32_768.0);
        if frame.len() == channels {
            let left = frame[0];
            let right = if channels > 1 { frame[1] } else { frame[0] };
            data.push([left, right]);
            frame.clear();
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_even_without_audio_backend() {
        // Chemin inexistant : la chaîne audio échoue en silence, le
        // bouton doit quand même basculer.
        let mut player = MusicPlayer::new("definitely/not/a/file.wav");
        assert!(!player.is_playing());
        assert!(player.toggle());
        assert!(player.is_playing());
        assert!(!player.toggle());
        player.close();
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut player = MusicPlayer::new("definitely/not/a/file.wav");
        player.close();
        player.close();
    }
}
