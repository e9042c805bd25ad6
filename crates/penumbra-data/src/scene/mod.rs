// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The scene consumed by the renderer.

use crate::ecs::{Camera, Entity, EntityId};
use penumbra_core::asset::Material;
use penumbra_core::renderer::TextureId;
use std::sync::Arc;

/// An index into a scene's material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub usize);

/// The environment a scene is lit by. Only one kind can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkySource {
    /// A cubemap texture sampled by direction.
    Cubemap(TextureId),
    /// An equirectangular (spherical) 2D texture.
    Sphere(TextureId),
}

impl SkySource {
    /// Returns the texture backing the sky.
    pub fn texture(&self) -> TextureId {
        match self {
            SkySource::Cubemap(id) | SkySource::Sphere(id) => *id,
        }
    }
}

/// A flat collection of entities, lights, materials, and an optional sky.
///
/// Entity ids are indices into the entity list and are never reused.
#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    lights: Vec<EntityId>,
    materials: Vec<Option<Arc<dyn Material>>>,
    main_camera: Option<EntityId>,
    sky: Option<SkySource>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and returns its id.
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        entity.id = id;
        log::trace!("Spawned entity '{}' as {:?}", entity.name, id);
        self.entities.push(entity);
        id
    }

    /// Adds an entity and registers it in the light list.
    pub fn spawn_light(&mut self, entity: Entity) -> EntityId {
        let id = self.spawn(entity);
        self.lights.push(id);
        id
    }

    /// Looks up an entity by id.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0 as usize)
    }

    /// Iterates over every entity in spawn order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterates over the entities registered as lights.
    pub fn lights(&self) -> impl Iterator<Item = &Entity> {
        self.lights.iter().filter_map(move |id| self.entity(*id))
    }

    /// Selects the entity the scene is viewed from.
    pub fn set_main_camera(&mut self, id: EntityId) {
        self.main_camera = Some(id);
    }

    /// Returns the main camera entity and its camera, if both exist.
    pub fn main_camera(&self) -> Option<(&Entity, &Camera)> {
        let entity = self.entity(self.main_camera?)?;
        let camera = entity.camera.as_ref()?;
        Some((entity, camera))
    }

    /// Appends a material to the material table.
    pub fn add_material(&mut self, material: Arc<dyn Material>) -> MaterialId {
        self.materials.push(Some(material));
        MaterialId(self.materials.len() - 1)
    }

    /// Empties a slot of the material table. Entities using it are no longer drawn.
    pub fn clear_material(&mut self, id: MaterialId) {
        if let Some(slot) = self.materials.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Resolves a material reference. Out-of-range and empty slots resolve to `None`.
    pub fn material(&self, id: MaterialId) -> Option<&dyn Material> {
        self.materials.get(id.0)?.as_deref()
    }

    /// Sets or removes the sky.
    pub fn set_sky(&mut self, sky: Option<SkySource>) {
        self.sky = sky;
    }

    /// Returns the active sky, if any.
    pub fn sky(&self) -> Option<SkySource> {
        self.sky
    }
}
