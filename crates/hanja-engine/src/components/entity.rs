use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::sprite::SpriteComponent;

/// Fat Entity: a single struct with optional components.
/// Designed for simplicity over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are not shown).
    pub active: bool,
    /// Position offset in page pixels.
    pub pos: Vec2,
    /// Sprite component (entities without one are invisible).
    pub sprite: Option<SpriteComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            sprite: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Swap the sprite image, keeping layer and alpha.
    pub fn set_image(&mut self, image: &str) {
        if let Some(sprite) = self.sprite.as_mut() {
            if sprite.image != image {
                sprite.image.clear();
                sprite.image.push_str(image);
            }
        }
    }
}
