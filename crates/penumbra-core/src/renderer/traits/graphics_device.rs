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

use crate::renderer::api::*;
use crate::renderer::error::{ResourceError, ShaderError};
use std::fmt::Debug;

/// The resource side of a graphics backend.
///
/// Every method takes `&self`: devices are shared behind an `Arc` by the objects
/// whose lifetime they back (textures, render targets, the renderer), and backends
/// are expected to use interior mutability.
pub trait GraphicsDevice: Send + Sync + Debug + 'static {
    /// Creates a new texture with undefined contents.
    /// ## Arguments
    /// * `descriptor` - The size, format, filtering, and mip chain of the texture.
    /// ## Returns
    /// A `Result` containing the ID of the created texture or an error if the creation fails.
    fn create_texture(&self, descriptor: &TextureDescriptor) -> Result<TextureId, ResourceError>;

    /// Destroys a texture.
    /// ## Errors
    /// * `ResourceError::InvalidTexture` - If the texture does not exist.
    fn destroy_texture(&self, id: TextureId) -> Result<(), ResourceError>;

    /// Replaces the base level of a texture with tightly packed texel data.
    /// ## Arguments
    /// * `id` - The texture to write to.
    /// * `data` - Texel bytes in the texture's format, row after row.
    fn write_texture(&self, id: TextureId, data: &[u8]) -> Result<(), ResourceError>;

    /// Regenerates every mip level below the base level of a texture.
    fn generate_mipmaps(&self, id: TextureId) -> Result<(), ResourceError>;

    /// Creates an empty framebuffer object.
    fn create_framebuffer(&self, label: Option<&str>) -> Result<FramebufferId, ResourceError>;

    /// Destroys a framebuffer object. Attached textures are not destroyed.
    fn destroy_framebuffer(&self, id: FramebufferId) -> Result<(), ResourceError>;

    /// Attaches a mip level of a 2D texture to a framebuffer attachment point.
    fn attach_texture(
        &self,
        framebuffer: FramebufferId,
        attachment: Attachment,
        texture: TextureId,
        mip_level: u32,
    ) -> Result<(), ResourceError>;

    /// Attaches a mip level of one cubemap face to a framebuffer attachment point.
    fn attach_cube_face(
        &self,
        framebuffer: FramebufferId,
        attachment: Attachment,
        texture: TextureId,
        face: CubeFace,
        mip_level: u32,
    ) -> Result<(), ResourceError>;

    /// Declares which color attachments fragment outputs are written to, in output order.
    fn set_draw_buffers(
        &self,
        framebuffer: FramebufferId,
        color_attachments: &[u32],
    ) -> Result<(), ResourceError>;

    /// Reports whether a framebuffer is complete and can be drawn to.
    fn framebuffer_status(&self, framebuffer: FramebufferId) -> FramebufferStatus;

    /// Loads, compiles, and links a program from its source files.
    /// ## Errors
    /// * `ShaderError::LoadError` - If a source file cannot be read.
    /// * `ShaderError::CompilationError` - If a stage fails to compile or the program fails to link.
    fn load_shader_program(&self, source: &ShaderSource) -> Result<ShaderProgramId, ShaderError>;

    /// Destroys a shader program.
    fn destroy_shader_program(&self, id: ShaderProgramId) -> Result<(), ResourceError>;
}
