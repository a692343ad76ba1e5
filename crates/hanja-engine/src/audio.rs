//! Audio collaborator seam.
//!
//! Games ask for clips by id; a backend plays them. Playback is best-effort:
//! callers log a [`PlaybackError`] and carry on.

use std::collections::HashSet;

use crate::assets::manifest::AssetManifest;

/// Handle to one playing clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioHandle(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("unknown audio clip: {0}")]
    UnknownClip(String),
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Something that can play and stop clips.
pub trait AudioBackend {
    fn play(&mut self, clip: &str) -> Result<AudioHandle, PlaybackError>;

    /// Stop a clip. Unknown or finished handles are ignored.
    fn stop(&mut self, handle: AudioHandle);

    /// Register the manifest's sounds. Backends without a clip table ignore it.
    fn load_manifest(&mut self, _manifest: &AssetManifest) {}
}

/// Backend that never makes a sound.
#[derive(Debug, Default)]
pub struct SilentAudio {
    next: u32,
}

impl AudioBackend for SilentAudio {
    fn play(&mut self, _clip: &str) -> Result<AudioHandle, PlaybackError> {
        self.next += 1;
        Ok(AudioHandle(self.next))
    }

    fn stop(&mut self, _handle: AudioHandle) {}
}

/// In-memory backend that records calls, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    next: u32,
    /// Clips that fail to play.
    pub broken: HashSet<String>,
    /// Every successful play, in order.
    pub played: Vec<(AudioHandle, String)>,
    /// Every stop, in order.
    pub stopped: Vec<AudioHandle>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clips started and not yet stopped.
    pub fn playing(&self) -> Vec<&str> {
        self.played
            .iter()
            .filter(|(h, _)| !self.stopped.contains(h))
            .map(|(_, clip)| clip.as_str())
            .collect()
    }
}

impl AudioBackend for RecordingAudio {
    fn play(&mut self, clip: &str) -> Result<AudioHandle, PlaybackError> {
        if self.broken.contains(clip) {
            return Err(PlaybackError::Backend(format!("{clip} failed to decode")));
        }
        self.next += 1;
        let handle = AudioHandle(self.next);
        self.played.push((handle, clip.to_string()));
        Ok(handle)
    }

    fn stop(&mut self, handle: AudioHandle) {
        self.stopped.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_tracks_playing_clips() {
        let mut audio = RecordingAudio::new();
        let a = audio.play("intro_1").unwrap();
        audio.play("intro_2").unwrap();
        audio.stop(a);
        assert_eq!(audio.playing(), ["intro_2"]);
    }

    #[test]
    fn broken_clip_fails() {
        let mut audio = RecordingAudio::new();
        audio.broken.insert("intro_3".into());
        assert!(matches!(audio.play("intro_3"), Err(PlaybackError::Backend(_))));
        assert!(audio.played.is_empty());
    }
}
