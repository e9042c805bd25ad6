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

//! Surface-sized render targets, reallocated on every resize.

use crate::{
    error::DeferredError,
    render_lane::{
        ping_pong::PingPong,
        render_target::{GpuTexture, RenderTarget},
    },
};
use penumbra_core::{
    math::{full_mip_chain, Extent2D},
    renderer::{
        CommandEncoder, FilterMode, GraphicsDevice, TextureDescriptor, TextureFormat, TextureUnit,
    },
};
use std::sync::Arc;

/// A render target with a single color attachment kept at hand for sampling.
#[derive(Debug)]
pub struct ColorTarget {
    target: RenderTarget,
    color: Arc<GpuTexture>,
}

impl ColorTarget {
    fn allocate(
        device: &Arc<dyn GraphicsDevice>,
        label: &str,
        size: Extent2D,
        format: TextureFormat,
        filter: FilterMode,
        mip_levels: u32,
        depth: Option<Arc<GpuTexture>>,
    ) -> Result<Self, DeferredError> {
        let color = Arc::new(GpuTexture::new(
            device,
            &TextureDescriptor::empty_2d(format!("{label} Color"), size, format, filter)
                .with_mip_levels(mip_levels),
        )?);

        let mut target = RenderTarget::new(device, label, size)?;
        target.add_color_texture(0, color.clone())?;
        target.add_draw_buffer(0)?;
        if let Some(depth) = depth {
            target.add_depth_texture(depth)?;
        }
        target.validate()?;

        Ok(Self { target, color })
    }

    /// The color attachment.
    pub fn texture(&self) -> &GpuTexture {
        &self.color
    }

    /// The underlying render target.
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Makes this target the destination of subsequent draws.
    pub fn bind(&self, encoder: &mut dyn CommandEncoder) {
        self.target.bind(encoder);
    }
}

/// The geometry buffer: albedo, normal, and position color attachments plus depth.
#[derive(Debug)]
pub struct GBuffer {
    target: RenderTarget,
    albedo: Arc<GpuTexture>,
    normal: Arc<GpuTexture>,
    position: Arc<GpuTexture>,
    depth: Arc<GpuTexture>,
}

impl GBuffer {
    /// Color attachment index of the albedo texture.
    pub const ALBEDO: u32 = 0;
    /// Color attachment index of the normal texture.
    pub const NORMAL: u32 = 1;
    /// Color attachment index of the position texture.
    pub const POSITION: u32 = 2;

    fn allocate(device: &Arc<dyn GraphicsDevice>, size: Extent2D) -> Result<Self, DeferredError> {
        // Every G-buffer texel is read back at its exact position, never filtered.
        let texture = |label: &str, format| -> Result<Arc<GpuTexture>, DeferredError> {
            Ok(Arc::new(GpuTexture::new(
                device,
                &TextureDescriptor::empty_2d(label, size, format, FilterMode::Nearest),
            )?))
        };
        let albedo = texture("GBuffer Albedo", TextureFormat::Rgba8)?;
        let normal = texture("GBuffer Normal", TextureFormat::Rgba8)?;
        let position = texture("GBuffer Position", TextureFormat::Rgba32Float)?;
        let depth = texture("GBuffer Depth", TextureFormat::Depth16)?;

        let mut target = RenderTarget::new(device, "GBuffer", size)?;
        target.add_color_texture(Self::ALBEDO, albedo.clone())?;
        target.add_color_texture(Self::NORMAL, normal.clone())?;
        target.add_color_texture(Self::POSITION, position.clone())?;
        target.add_draw_buffer(Self::ALBEDO)?;
        target.add_draw_buffer(Self::NORMAL)?;
        target.add_draw_buffer(Self::POSITION)?;
        target.add_depth_texture(depth.clone())?;
        target.validate()?;

        Ok(Self {
            target,
            albedo,
            normal,
            position,
            depth,
        })
    }

    /// The underlying render target.
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Surface base color.
    pub fn albedo(&self) -> &GpuTexture {
        &self.albedo
    }

    /// Surface normals.
    pub fn normal(&self) -> &GpuTexture {
        &self.normal
    }

    /// Surface positions.
    pub fn position(&self) -> &GpuTexture {
        &self.position
    }

    /// Depth, shared with the HDR accumulation target.
    pub fn depth(&self) -> &Arc<GpuTexture> {
        &self.depth
    }

    /// Binds the three color attachments as inputs of a lighting program.
    pub fn bind_inputs(&self, encoder: &mut dyn CommandEncoder) {
        for (unit, name, texture) in [
            (TextureUnit::Albedo, "albedoMap", &self.albedo),
            (TextureUnit::Normal, "normalMap", &self.normal),
            (TextureUnit::Position, "positionMap", &self.position),
        ] {
            encoder.bind_texture(unit, Some(texture.id()));
            encoder.set_uniform(name, unit.into());
        }
    }
}

/// Every target whose size follows the surface.
#[derive(Debug)]
pub struct SurfaceTargets {
    size: Extent2D,
    pub(crate) gbuffer: GBuffer,
    pub(crate) hdr: ColorTarget,
    pub(crate) hdr_pool: PingPong<ColorTarget>,
    pub(crate) ldr_pool: PingPong<ColorTarget>,
}

impl SurfaceTargets {
    /// Allocates and validates a full set of targets of `size`.
    pub fn allocate(device: &Arc<dyn GraphicsDevice>, size: Extent2D) -> Result<Self, DeferredError> {
        let gbuffer = GBuffer::allocate(device, size)?;
        let hdr = ColorTarget::allocate(
            device,
            "HDR Accumulation",
            size,
            TextureFormat::Rgba16Float,
            FilterMode::Nearest,
            1,
            Some(gbuffer.depth().clone()),
        )?;

        let mips = full_mip_chain(size.width, size.height);
        // HDR slots are blurred through their mips; filtering them would blur twice.
        let hdr_slot = |label: &str| {
            ColorTarget::allocate(
                device,
                label,
                size,
                TextureFormat::Rgba16Float,
                FilterMode::Nearest,
                mips,
                None,
            )
        };
        let ldr_slot = |label: &str| {
            ColorTarget::allocate(
                device,
                label,
                size,
                TextureFormat::Rgba8,
                FilterMode::Linear,
                mips,
                None,
            )
        };
        let hdr_pool = PingPong::new(hdr_slot("HDR Back Buffer 0")?, hdr_slot("HDR Back Buffer 1")?);
        let ldr_pool = PingPong::new(ldr_slot("LDR Back Buffer 0")?, ldr_slot("LDR Back Buffer 1")?);

        Ok(Self {
            size,
            gbuffer,
            hdr,
            hdr_pool,
            ldr_pool,
        })
    }

    /// The surface size these targets were allocated for.
    pub fn size(&self) -> Extent2D {
        self.size
    }

    /// The geometry buffer.
    pub fn gbuffer(&self) -> &GBuffer {
        &self.gbuffer
    }

    /// The lighting accumulation target.
    pub fn hdr(&self) -> &ColorTarget {
        &self.hdr
    }

    /// The bloom chain pool.
    pub fn hdr_pool(&self) -> &PingPong<ColorTarget> {
        &self.hdr_pool
    }

    /// The display-range post-process pool.
    pub fn ldr_pool(&self) -> &PingPong<ColorTarget> {
        &self.ldr_pool
    }

    /// Every render target, G-buffer first.
    pub fn render_targets(&self) -> impl Iterator<Item = &RenderTarget> {
        [&self.gbuffer.target, &self.hdr.target]
            .into_iter()
            .chain(self.hdr_pool.slots().iter().map(ColorTarget::target))
            .chain(self.ldr_pool.slots().iter().map(ColorTarget::target))
    }
}
