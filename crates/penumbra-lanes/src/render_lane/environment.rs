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

//! Image-based lighting precompute.
//!
//! A sky is convolved once per scene load into three textures read by the
//! indirect lighting pass: a diffuse irradiance cubemap, a prefiltered cubemap
//! whose mip levels hold increasing roughness, and a 2D BRDF scale-bias table.
//! Every texel is produced by a full-screen quad into one cube face (or the
//! table) at a time.

use super::{
    render_target::{GpuTexture, RenderTarget},
    settings::{EnvironmentSettings, ShaderPaths, ShaderStage},
};
use crate::error::DeferredError;
use glam::{Mat4, Vec3};
use penumbra_core::{
    math::Extent2D,
    renderer::{
        ClearFlags, CommandEncoder, CubeFace, FilterMode, GraphicsDevice, ShaderProgramId,
        ShaderSource, TextureDescriptor, TextureFormat, TextureUnit,
    },
};
use penumbra_data::SkySource;
use std::sync::Arc;

/// Returns the world-space basis a full-screen quad is rotated by to cover `face`.
///
/// Multiplying `(x, y, -1)` in quad space by this matrix gives the direction
/// sampled for that pixel of the face.
pub fn face_basis(face: CubeFace) -> Mat4 {
    let (forward, up) = match face {
        CubeFace::PositiveX => (Vec3::X, Vec3::NEG_Y),
        CubeFace::NegativeX => (Vec3::NEG_X, Vec3::NEG_Y),
        CubeFace::PositiveY => (Vec3::Y, Vec3::Z),
        CubeFace::NegativeY => (Vec3::NEG_Y, Vec3::NEG_Z),
        CubeFace::PositiveZ => (Vec3::Z, Vec3::NEG_Y),
        CubeFace::NegativeZ => (Vec3::NEG_Z, Vec3::NEG_Y),
    };
    Mat4::look_to_rh(Vec3::ZERO, forward, up).inverse()
}

/// Roughness stored in mip `level` of a chain of `levels`.
pub fn prefilter_roughness(level: u32, levels: u32) -> f32 {
    if levels <= 1 {
        0.0
    } else {
        level as f32 / (levels - 1) as f32
    }
}

/// Programs that only live for the duration of one precompute.
struct PrecomputePrograms<'a> {
    device: &'a Arc<dyn GraphicsDevice>,
    programs: Vec<ShaderProgramId>,
}

impl<'a> PrecomputePrograms<'a> {
    fn new(device: &'a Arc<dyn GraphicsDevice>) -> Self {
        Self {
            device,
            programs: Vec::with_capacity(3),
        }
    }

    fn load(
        &mut self,
        paths: &ShaderPaths,
        stage: &'static str,
        files: &ShaderStage,
    ) -> Result<ShaderProgramId, DeferredError> {
        let (vertex, fragment) = paths.resolve(files);
        let program = self
            .device
            .load_shader_program(&ShaderSource::new(vertex, fragment))
            .map_err(|source| {
                log::error!("Failed to load the '{}' environment program: {}", stage, source);
                DeferredError::EnvironmentShader { stage, source }
            })?;
        self.programs.push(program);
        Ok(program)
    }
}

impl Drop for PrecomputePrograms<'_> {
    fn drop(&mut self) {
        for program in self.programs.drain(..) {
            if let Err(e) = self.device.destroy_shader_program(program) {
                log::warn!("Failed to destroy precompute program {:?}: {}", program, e);
            }
        }
    }
}

/// The precomputed lighting environment of a sky.
#[derive(Debug)]
pub struct EnvironmentInfo {
    irradiance: Arc<GpuTexture>,
    prefiltered: Arc<GpuTexture>,
    scale_bias: Arc<GpuTexture>,
}

impl EnvironmentInfo {
    /// Convolves `sky` into the irradiance map, the prefiltered map, and the scale-bias table.
    ///
    /// Leaves the display surface bound. The viewport is left at the size of the
    /// last texture written.
    pub fn precompute(
        device: &Arc<dyn GraphicsDevice>,
        encoder: &mut dyn CommandEncoder,
        sky: SkySource,
        settings: &EnvironmentSettings,
        paths: &ShaderPaths,
    ) -> Result<Self, DeferredError> {
        let mut programs = PrecomputePrograms::new(device);
        let irradiance_program = programs.load(paths, "irradiance", &paths.irradiance)?;
        let prefilter_program = programs.load(paths, "prefilter", &paths.prefilter)?;
        let scale_bias_program = programs.load(paths, "scale bias", &paths.scale_bias)?;

        let irradiance = Arc::new(GpuTexture::new(
            device,
            &TextureDescriptor::empty_cube(
                "Irradiance Map",
                settings.irradiance_size,
                TextureFormat::Rgba16Float,
                1,
            ),
        )?);
        let prefiltered = Arc::new(GpuTexture::new(
            device,
            &TextureDescriptor::empty_cube(
                "Prefiltered Environment Map",
                settings.prefilter_size,
                TextureFormat::Rgba16Float,
                settings.prefilter_mip_levels.max(1),
            ),
        )?);
        let scale_bias = Arc::new(GpuTexture::new(
            device,
            &TextureDescriptor::empty_2d(
                "Scale Bias Map",
                Extent2D::new(settings.scale_bias_size, settings.scale_bias_size),
                TextureFormat::Rg16Float,
                FilterMode::Linear,
            ),
        )?);

        encoder.use_program(irradiance_program);
        bind_sky(encoder, sky);
        convolve_cube(device, encoder, "Irradiance Capture", &irradiance, 0)?;

        encoder.use_program(prefilter_program);
        bind_sky(encoder, sky);
        let levels = prefiltered.mip_level_count();
        for level in 0..levels {
            encoder.set_uniform("roughness", prefilter_roughness(level, levels).into());
            convolve_cube(device, encoder, "Prefilter Capture", &prefiltered, level)?;
        }

        encoder.use_program(scale_bias_program);
        let mut lut_target = RenderTarget::new(device, "Scale Bias Capture", scale_bias.size())?;
        lut_target.add_color_texture(0, scale_bias.clone())?;
        lut_target.add_draw_buffer(0)?;
        lut_target.validate()?;
        lut_target.bind(encoder);
        encoder.set_viewport(lut_target.size());
        encoder.clear(ClearFlags::COLOR);
        encoder.draw_fullscreen_quad();
        lut_target.release(encoder);
        encoder.bind_texture(TextureUnit::Texture, None);

        log::info!(
            "Precomputed environment lighting ({}px irradiance, {}px x{} prefilter, {}px scale-bias)",
            settings.irradiance_size,
            settings.prefilter_size,
            levels,
            settings.scale_bias_size
        );

        Ok(Self {
            irradiance,
            prefiltered,
            scale_bias,
        })
    }

    /// Diffuse irradiance cubemap.
    pub fn irradiance(&self) -> &GpuTexture {
        &self.irradiance
    }

    /// Roughness-prefiltered cubemap.
    pub fn prefiltered(&self) -> &GpuTexture {
        &self.prefiltered
    }

    /// BRDF scale-bias lookup table.
    pub fn scale_bias(&self) -> &GpuTexture {
        &self.scale_bias
    }
}

fn bind_sky(encoder: &mut dyn CommandEncoder, sky: SkySource) {
    encoder.bind_texture(TextureUnit::Texture, Some(sky.texture()));
    encoder.set_uniform("environmentMap", TextureUnit::Texture.into());
    encoder.set_uniform("isSphereMap", matches!(sky, SkySource::Sphere(_)).into());
}

fn convolve_cube(
    device: &Arc<dyn GraphicsDevice>,
    encoder: &mut dyn CommandEncoder,
    label: &str,
    cubemap: &Arc<GpuTexture>,
    level: u32,
) -> Result<(), DeferredError> {
    let mut target = RenderTarget::new(device, label, cubemap.size().mip(level))?;
    for face in CubeFace::ALL {
        target.attach_cube_face(0, cubemap.clone(), face, level)?;
        if face == CubeFace::PositiveX {
            target.add_draw_buffer(0)?;
        }
        target.validate()?;
        target.bind(encoder);
        encoder.set_viewport(target.size());
        encoder.set_uniform("faceBasis", face_basis(face).into());
        encoder.clear(ClearFlags::COLOR);
        encoder.draw_fullscreen_quad();
    }
    target.release(encoder);
    Ok(())
}
