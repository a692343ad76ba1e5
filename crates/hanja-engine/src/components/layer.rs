use serde::Serialize;

/// Stacking band of a DOM sprite.
///
/// Layers stack back-to-front: Background first, Overlay last.
/// The page maps each layer to a z-index band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLayer {
    Background,
    Props,
    #[default]
    Characters,
    Overlay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_characters() {
        assert_eq!(RenderLayer::default(), RenderLayer::Characters);
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Props);
        assert!(RenderLayer::Props < RenderLayer::Characters);
        assert!(RenderLayer::Characters < RenderLayer::Overlay);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&RenderLayer::Background).unwrap(), "\"background\"");
    }
}
