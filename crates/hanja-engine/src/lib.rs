pub mod api;
pub mod assets;
pub mod audio;
pub mod bridge;
pub mod components;
pub mod core;
pub mod dialogue;
pub mod input;
pub mod storage;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, GameEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use audio::{AudioBackend, AudioHandle, PlaybackError, RecordingAudio, SilentAudio};
pub use bridge::view::{DialogueView, SceneView, SpriteView};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::SpriteComponent;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use dialogue::{
    DialogueError, DialogueEvent, DialogueSession, LineSet, TypewriterConfig, Voice,
};
pub use input::keys::{Key, KeyState};
pub use input::queue::{InputEvent, InputQueue};
pub use input::touch::{TouchAction, TouchConfig, TouchControls, TouchDirection, TouchLayout};
pub use storage::{MemoryStorage, StorageError, StorageProvider};
pub use systems::render::build_sprite_views;
