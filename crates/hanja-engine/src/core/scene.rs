use crate::components::entity::Entity;

/// Entity storage using a flat Vec.
/// A DOM-rendered scene holds a handful of entities; linear lookup is fine.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(16),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.tag == tag)
    }

    /// Show or hide every entity carrying `tag`.
    pub fn set_active_by_tag(&mut self, tag: &str, active: bool) {
        for entity in self.entities.iter_mut().filter(|e| e.tag == tag) {
            entity.active = active;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec2;

    #[test]
    fn find_by_tag_mut_edits_in_place() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("player").with_pos(Vec2::new(50.0, 0.0)));
        scene.find_by_tag_mut("player").unwrap().pos.x += 4.0;
        let player = scene.iter().next().unwrap();
        assert_eq!(player.pos, Vec2::new(54.0, 0.0));
        assert!(scene.find_by_tag_mut("bori").is_none());
    }

    #[test]
    fn iter_keeps_spawn_order() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("bg"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("player"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("bori"));
        let tags: Vec<&str> = scene.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["bg", "player", "bori"]);
    }

    #[test]
    fn set_active_by_tag_toggles_all_matches() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("village"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("village"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("bori"));
        scene.set_active_by_tag("village", false);
        assert!(scene.iter().filter(|e| e.tag == "village").all(|e| !e.active));
        assert!(scene.find_by_tag_mut("bori").unwrap().active);
    }
}
