//! Sound board: the configured effect files behind the `SoundSink` seam

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tui_shooter_core::GameConfig;
use tui_shooter_types::{Sound, SoundSink};

/// Maps effects to files and logs every play request.
///
/// Playback itself is left to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundBoard {
    files: BTreeMap<Sound, PathBuf>,
}

impl SoundBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut board = Self::new();
        for (sound, path) in config.sound_files() {
            board.add(sound, path);
        }
        board
    }

    pub fn add(&mut self, sound: Sound, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::info!(sound = sound.as_str(), path = %path.display(), "added sound");
        self.files.insert(sound, path);
    }

    pub fn file(&self, sound: Sound) -> Option<&Path> {
        self.files.get(&sound).map(PathBuf::as_path)
    }
}

impl SoundSink for SoundBoard {
    fn play(&mut self, sound: Sound) {
        match self.files.get(&sound) {
            Some(path) => tracing::info!(sound = sound.as_str(), path = %path.display(), "playing sound"),
            None => tracing::debug!(sound = sound.as_str(), "no file configured for sound"),
        }
    }
}
