use crate::components::layer::RenderLayer;

/// Which image the page shows for an entity.
///
/// `image` is a key into the asset manifest's sprite table, not a URL;
/// the page resolves it to an `<img>` source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Sprite name in the asset manifest (e.g. "player_right_2").
    pub image: String,
    /// Stacking band.
    pub layer: RenderLayer,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            image: String::new(),
            layer: RenderLayer::Characters,
            alpha: 1.0,
        }
    }
}
