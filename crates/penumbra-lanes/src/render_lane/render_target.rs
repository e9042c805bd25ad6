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

//! Owned textures and off-screen render targets.

use crate::error::DeferredError;
use penumbra_core::{
    math::Extent2D,
    renderer::{
        Attachment, CommandEncoder, CubeFace, FramebufferId, GraphicsDevice, ResourceError,
        TextureDescriptor, TextureDimension, TextureFormat, TextureId,
    },
};
use std::sync::Arc;

/// A texture whose backend handle is destroyed when the value is dropped.
///
/// Render targets hold attachments as `Arc<GpuTexture>`, so a texture shared by
/// several targets (the G-buffer depth, for instance) lives until the last of
/// them is gone.
#[derive(Debug)]
pub struct GpuTexture {
    device: Arc<dyn GraphicsDevice>,
    id: TextureId,
    size: Extent2D,
    dimension: TextureDimension,
    format: TextureFormat,
    mip_level_count: u32,
}

impl GpuTexture {
    /// Creates a texture with undefined contents.
    pub fn new(
        device: &Arc<dyn GraphicsDevice>,
        descriptor: &TextureDescriptor,
    ) -> Result<Self, ResourceError> {
        let id = device.create_texture(descriptor)?;
        log::trace!(
            "Created texture {:?} '{}' ({}x{}, {:?}, {} mips)",
            id,
            descriptor.label.as_deref().unwrap_or("unnamed"),
            descriptor.size.width,
            descriptor.size.height,
            descriptor.format,
            descriptor.mip_level_count
        );
        Ok(Self {
            device: device.clone(),
            id,
            size: descriptor.size,
            dimension: descriptor.dimension,
            format: descriptor.format,
            mip_level_count: descriptor.mip_level_count,
        })
    }

    /// The backend handle.
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Size of the base level.
    pub fn size(&self) -> Extent2D {
        self.size
    }

    /// Whether this is a 2D texture or a cubemap.
    pub fn dimension(&self) -> TextureDimension {
        self.dimension
    }

    /// Texel format.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Number of mip levels, at least one.
    pub fn mip_level_count(&self) -> u32 {
        self.mip_level_count
    }

    /// Uploads tightly packed texels into the base level.
    pub fn write(&self, data: &[u8]) -> Result<(), ResourceError> {
        self.device.write_texture(self.id, data)
    }

    /// Rebuilds the mip chain from the base level.
    pub fn generate_mipmaps(&self) -> Result<(), ResourceError> {
        self.device.generate_mipmaps(self.id)
    }
}

impl Drop for GpuTexture {
    fn drop(&mut self) {
        if let Err(e) = self.device.destroy_texture(self.id) {
            log::warn!("Failed to destroy texture {:?}: {}", self.id, e);
        }
    }
}

/// An off-screen drawing surface with color attachments and an optional depth attachment.
///
/// A target must be [validated](RenderTarget::validate) after its attachments are
/// set and before anything is drawn into it. The framebuffer handle is destroyed
/// on drop; attachments are released with it.
#[derive(Debug)]
pub struct RenderTarget {
    device: Arc<dyn GraphicsDevice>,
    framebuffer: FramebufferId,
    label: String,
    size: Extent2D,
    colors: Vec<Option<Arc<GpuTexture>>>,
    depth: Option<Arc<GpuTexture>>,
    draw_buffers: Vec<u32>,
}

impl RenderTarget {
    /// Creates a target without attachments.
    pub fn new(
        device: &Arc<dyn GraphicsDevice>,
        label: impl Into<String>,
        size: Extent2D,
    ) -> Result<Self, ResourceError> {
        let label = label.into();
        let framebuffer = device.create_framebuffer(Some(&label))?;
        Ok(Self {
            device: device.clone(),
            framebuffer,
            label,
            size,
            colors: Vec::new(),
            depth: None,
            draw_buffers: Vec::new(),
        })
    }

    fn check_size(&self, texture: &GpuTexture) -> Result<(), ResourceError> {
        if texture.size() != self.size {
            return Err(ResourceError::IncompatibleTexture {
                id: texture.id(),
                reason: format!(
                    "{}x{} texture cannot be attached to the {}x{} target '{}'",
                    texture.size().width,
                    texture.size().height,
                    self.size.width,
                    self.size.height,
                    self.label
                ),
            });
        }
        Ok(())
    }

    fn store_color(&mut self, index: u32, texture: Arc<GpuTexture>) {
        let index = index as usize;
        if self.colors.len() <= index {
            self.colors.resize(index + 1, None);
        }
        self.colors[index] = Some(texture);
    }

    /// Attaches the base level of a 2D texture as color attachment `index`.
    pub fn add_color_texture(
        &mut self,
        index: u32,
        texture: Arc<GpuTexture>,
    ) -> Result<(), ResourceError> {
        self.check_size(&texture)?;
        self.device
            .attach_texture(self.framebuffer, Attachment::Color(index), texture.id(), 0)?;
        self.store_color(index, texture);
        Ok(())
    }

    /// Attaches one mip level of a cubemap face as color attachment `index`.
    ///
    /// The target takes the size of the attached level, so one target can walk
    /// every face and level of a cubemap.
    pub fn attach_cube_face(
        &mut self,
        index: u32,
        texture: Arc<GpuTexture>,
        face: CubeFace,
        mip_level: u32,
    ) -> Result<(), ResourceError> {
        if texture.dimension() != TextureDimension::Cube || mip_level >= texture.mip_level_count() {
            return Err(ResourceError::IncompatibleTexture {
                id: texture.id(),
                reason: format!("no cube face level {mip_level}"),
            });
        }
        self.device.attach_cube_face(
            self.framebuffer,
            Attachment::Color(index),
            texture.id(),
            face,
            mip_level,
        )?;
        self.size = texture.size().mip(mip_level);
        self.store_color(index, texture);
        Ok(())
    }

    /// Attaches a depth texture. The texture may be shared with other targets.
    pub fn add_depth_texture(&mut self, texture: Arc<GpuTexture>) -> Result<(), ResourceError> {
        self.check_size(&texture)?;
        if !texture.format().is_depth() {
            return Err(ResourceError::IncompatibleTexture {
                id: texture.id(),
                reason: format!("{:?} is not a depth format", texture.format()),
            });
        }
        self.device
            .attach_texture(self.framebuffer, Attachment::Depth, texture.id(), 0)?;
        self.depth = Some(texture);
        Ok(())
    }

    /// Declares color attachment `index` as written by fragment output `draw_buffers().len()`.
    pub fn add_draw_buffer(&mut self, index: u32) -> Result<(), ResourceError> {
        self.draw_buffers.push(index);
        self.device
            .set_draw_buffers(self.framebuffer, &self.draw_buffers)
    }

    /// Checks completeness with the backend.
    ///
    /// An incomplete target is logged with its diagnostic and reported as an error.
    pub fn validate(&self) -> Result<(), DeferredError> {
        let status = self.device.framebuffer_status(self.framebuffer);
        if status.is_complete() {
            return Ok(());
        }
        log::error!("Render target '{}' is incomplete: {}", self.label, status);
        Err(DeferredError::IncompleteRenderTarget {
            label: self.label.clone(),
            status,
        })
    }

    /// Makes this target the destination of subsequent draws.
    pub fn bind(&self, encoder: &mut dyn CommandEncoder) {
        encoder.bind_framebuffer(Some(self.framebuffer));
    }

    /// Returns drawing to the display surface.
    pub fn release(&self, encoder: &mut dyn CommandEncoder) {
        encoder.bind_framebuffer(None);
    }

    /// The color attachment at `index`, if one is attached.
    pub fn color_texture(&self, index: u32) -> Option<&Arc<GpuTexture>> {
        self.colors.get(index as usize)?.as_ref()
    }

    /// The depth attachment, if any.
    pub fn depth_texture(&self) -> Option<&Arc<GpuTexture>> {
        self.depth.as_ref()
    }

    /// Every color attachment, in attachment order.
    pub fn color_textures(&self) -> impl Iterator<Item = &Arc<GpuTexture>> {
        self.colors.iter().flatten()
    }

    /// The color attachments written simultaneously.
    pub fn draw_buffers(&self) -> &[u32] {
        &self.draw_buffers
    }

    /// The backend framebuffer handle.
    pub fn framebuffer(&self) -> FramebufferId {
        self.framebuffer
    }

    /// The label used in logs and errors.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The drawing size in pixels.
    pub fn size(&self) -> Extent2D {
        self.size
    }
}

impl Drop for RenderTarget {
    fn drop(&mut self) {
        if let Err(e) = self.device.destroy_framebuffer(self.framebuffer) {
            log::warn!("Failed to destroy render target '{}': {}", self.label, e);
        }
    }
}
