use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;

/// Registry of named sprite images, built from an AssetManifest.
/// Lets game code check its sprite names up front instead of showing
/// broken images later.
pub struct SpriteRegistry {
    paths: HashMap<String, String>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            paths: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let paths = manifest
            .sprites
            .iter()
            .map(|(name, desc)| (name.clone(), desc.path.clone()))
            .collect();
        Self { paths }
    }

    /// Names from `wanted` that the manifest does not define.
    pub fn missing<'a>(&self, wanted: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        wanted
            .into_iter()
            .filter(|name| !self.paths.contains_key(*name))
            .collect()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
