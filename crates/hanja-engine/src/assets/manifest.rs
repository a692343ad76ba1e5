use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest naming every image and sound a game uses.
/// Loaded from a JSON file at runtime; games refer to assets by name only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named images: name → descriptor.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Named audio clips: clip id → descriptor.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Relative path to the image file (e.g., "img/player_right_1.png").
    pub path: String,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Playback volume in 0..=1 (default: 1).
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_volume() -> f32 {
    1.0
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn sound(&self, clip: &str) -> Option<&SoundDescriptor> {
        self.sounds.get(clip)
    }
}
