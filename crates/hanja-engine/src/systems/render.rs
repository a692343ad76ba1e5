use crate::bridge::view::SpriteView;
use crate::components::entity::Entity;

/// Build the sprite list of a view from a set of entities.
/// Sorted back-to-front by layer; entity order is kept within a layer.
pub fn build_sprite_views<'a>(entities: impl Iterator<Item = &'a Entity>, out: &mut Vec<SpriteView>) {
    out.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        out.push(SpriteView {
            id: entity.id,
            tag: entity.tag.clone(),
            image: sprite.image.clone(),
            layer: sprite.layer,
            x: entity.pos.x,
            y: entity.pos.y,
            alpha: sprite.alpha,
        });
    }

    // Stable sort keeps spawn order inside a layer.
    out.sort_by_key(|s| s.layer);
}
