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

use crate::math::Extent2D;
use crate::renderer::api::*;

/// A trait for an object that issues fixed-function state changes and draws.
///
/// The encoder is a state machine in the OpenGL sense: a bound framebuffer, a
/// program in use, and texture bindings persist until they are replaced. Passes
/// therefore state everything they rely on instead of assuming what the previous
/// pass left behind.
pub trait CommandEncoder {
    /// Binds a framebuffer for drawing. `None` binds the display surface.
    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferId>);

    /// Sets the viewport to cover `(0, 0)..size`.
    fn set_viewport(&mut self, size: Extent2D);

    /// Sets the color used by [`ClearFlags::COLOR`] clears.
    fn set_clear_color(&mut self, color: [f32; 4]);

    /// Clears the selected buffers of the bound framebuffer.
    fn clear(&mut self, flags: ClearFlags);

    /// Enables a fixed-function capability.
    fn enable(&mut self, capability: Capability);

    /// Disables a fixed-function capability.
    fn disable(&mut self, capability: Capability);

    /// Selects which faces are culled while [`Capability::CullFace`] is enabled.
    fn set_cull_face(&mut self, face: Face);

    /// Enables or disables writes to the depth attachment.
    fn set_depth_mask(&mut self, write: bool);

    /// Sets the depth comparison function.
    fn set_depth_func(&mut self, func: CompareFunction);

    /// Sets the blend factors used while [`Capability::Blend`] is enabled.
    fn set_blend_func_separate(&mut self, state: BlendState);

    /// Makes a program current. Uniform uploads target the current program.
    fn use_program(&mut self, program: ShaderProgramId);

    /// Uploads a value to a named uniform of the current program.
    fn set_uniform(&mut self, name: &str, value: UniformValue);

    /// Binds a texture to a texture unit, or clears the unit with `None`.
    fn bind_texture(&mut self, unit: TextureUnit, texture: Option<TextureId>);

    /// Draws a single quad covering the whole viewport.
    fn draw_fullscreen_quad(&mut self);

    /// Draws an indexed triangle list from a GPU mesh.
    fn draw_indexed(&mut self, mesh: &GpuMesh);
}
