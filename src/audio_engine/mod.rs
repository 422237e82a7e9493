pub mod r#trait;
pub use r#trait::{AudioEngine, NullAudio};

pub mod music_player;
pub use music_player::MusicPlayer;
