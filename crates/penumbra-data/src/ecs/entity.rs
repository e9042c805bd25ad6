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

use super::components::{AttachedTo, Camera, MeshRenderer, Transform};
use crate::scene::MaterialId;
use penumbra_core::renderer::{GpuMesh, LightType};

/// A unique identifier for an entity within a [`Scene`](crate::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// A scene object with a fixed set of optional component slots.
///
/// Every entity has a transform. The remaining capabilities are present or
/// absent; a light slot holds exactly one light kind, so an entity can never be
/// both a directional and a point light.
///
/// Entities are built with the `with_*` methods and receive their id when they
/// are spawned into a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub(crate) id: EntityId,
    /// A human-readable name, used in log messages.
    pub name: String,
    /// Position, rotation, and scale.
    pub transform: Transform,
    /// GPU geometry, if the entity has any.
    pub mesh: Option<GpuMesh>,
    /// Makes the mesh visible with a material.
    pub renderer: Option<MeshRenderer>,
    /// A directional or point light.
    pub light: Option<LightType>,
    /// A camera viewing from this entity's transform.
    pub camera: Option<Camera>,
    /// A parent whose transform is composed in front of this one when rendering.
    pub attached_to: Option<AttachedTo>,
}

impl Entity {
    /// Creates an entity with an identity transform and no other components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId(u32::MAX),
            name: name.into(),
            transform: Transform::identity(),
            mesh: None,
            renderer: None,
            light: None,
            camera: None,
            attached_to: None,
        }
    }

    /// Returns the id assigned when the entity was spawned.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Sets the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Gives the entity a mesh.
    pub fn with_mesh(mut self, mesh: GpuMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Makes the entity's mesh visible with the given material.
    pub fn with_renderer(mut self, material: MaterialId) -> Self {
        self.renderer = Some(MeshRenderer::new(material));
        self
    }

    /// Turns the entity into a light.
    pub fn with_light(mut self, light: LightType) -> Self {
        self.light = Some(light);
        self
    }

    /// Gives the entity a camera.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Attaches the entity to a parent for rendering.
    pub fn attached_to(mut self, parent: EntityId) -> Self {
        self.attached_to = Some(AttachedTo::new(parent));
        self
    }
}
