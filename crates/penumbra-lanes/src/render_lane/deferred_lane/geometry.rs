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

//! Camera uniforms and the geometry pass.

use super::targets::GBuffer;
use glam::{Mat4, Vec2, Vec3};
use penumbra_core::renderer::{ClearFlags, CommandEncoder, CompareFunction, ShaderProgramId};
use penumbra_data::{
    ecs::{Camera, Entity, Transform},
    Scene,
};

/// Everything the passes need to know about the main camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// World to view.
    pub view: Mat4,
    /// View to clip.
    pub projection: Mat4,
    /// World-space eye position.
    pub position: Vec3,
    /// Orientation without translation, used to aim sky rays.
    pub basis: Mat4,
    /// Reciprocals of the projection's horizontal and vertical scale.
    pub inverse_scale: Vec2,
}

impl CameraView {
    /// Captures the camera carried by an entity with `transform`.
    pub fn new(transform: &Transform, camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix(transform),
            projection: camera.projection_matrix(),
            position: transform.position,
            basis: Camera::orientation_basis(transform),
            inverse_scale: camera.inverse_projection_scale(),
        }
    }

    /// Uploads the camera to the program in use.
    pub fn upload(&self, encoder: &mut dyn CommandEncoder) {
        encoder.set_uniform("projMatrix", self.projection.into());
        encoder.set_uniform("viewMatrix", self.view.into());
        encoder.set_uniform("camPos", self.position.into());
    }
}

/// The model matrix an entity is drawn with.
///
/// An attached entity whose parent resolves is drawn with the parent's
/// translation, rotation, and scale applied first. The entity's own transform is
/// never modified.
pub fn model_matrix(scene: &Scene, entity: &Entity) -> Mat4 {
    let mut model = Mat4::IDENTITY;
    if let Some(attached) = entity.attached_to {
        match scene.entity(attached.parent) {
            Some(parent) => model = parent.transform.apply(model),
            None => log::warn!(
                "Entity '{}' is attached to missing parent {:?}",
                entity.name,
                attached.parent
            ),
        }
    }
    entity.transform.apply(model)
}

/// Draws every visible entity into the G-buffer and returns the number of draws.
pub(crate) fn geometry_pass(
    encoder: &mut dyn CommandEncoder,
    program: ShaderProgramId,
    gbuffer: &GBuffer,
    camera: &CameraView,
    scene: &Scene,
) -> u32 {
    gbuffer.target().bind(encoder);
    encoder.use_program(program);
    encoder.clear(ClearFlags::COLOR | ClearFlags::DEPTH);
    encoder.set_depth_func(CompareFunction::Less);
    camera.upload(encoder);
    render_scene(encoder, scene)
}

fn render_scene(encoder: &mut dyn CommandEncoder, scene: &Scene) -> u32 {
    let mut draws = 0;
    for entity in scene.entities() {
        let Some(mesh) = entity.mesh.as_ref() else {
            continue;
        };
        let Some(renderer) = entity.renderer else {
            continue;
        };
        let Some(material) = scene.material(renderer.material) else {
            log::trace!(
                "Skipping '{}': material {:?} does not resolve",
                entity.name,
                renderer.material
            );
            continue;
        };

        material.bind(encoder);
        encoder.set_uniform("modelMatrix", model_matrix(scene, entity).into());
        encoder.draw_indexed(mesh);
        material.release(encoder);

        log::trace!("Drew '{}' ({} triangles)", entity.name, mesh.triangle_count());
        draws += 1;
    }
    draws
}
