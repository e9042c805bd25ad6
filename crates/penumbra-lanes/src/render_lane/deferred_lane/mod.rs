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

//! The deferred rendering pipeline.
//!
//! [`DeferredRenderer`] owns every shader program and render target of the
//! pipeline and runs the same pass sequence each frame:
//!
//! 1. geometry into the G-buffer,
//! 2. indirect then per-light direct lighting into the HDR accumulation target,
//! 3. the sky, behind everything drawn so far,
//! 4. bloom, blur, tone mapping, gamma correction, and FXAA through the ping-pong pools,
//! 5. a copy of the final image to the display surface.
//!
//! Passes are free functions that receive the program and targets they use, so
//! nothing but [`DeferredRenderer::update`] decides which pass runs when.

mod geometry;
mod lighting;
mod post_process;
mod present;
mod sky;
mod targets;

pub use geometry::{model_matrix, CameraView};
pub use targets::{ColorTarget, GBuffer, SurfaceTargets};

use super::{
    environment::EnvironmentInfo,
    settings::DeferredSettings,
    shader_set::{ShaderKind, ShaderSet},
    ssao::SsaoKernel,
};
use crate::error::DeferredError;
use penumbra_core::{
    math::Extent2D,
    renderer::{Capability, ClearFlags, CommandEncoder, Face, GraphicsDevice},
};
use penumbra_data::Scene;
use std::sync::Arc;

/// What one call to [`DeferredRenderer::update`] drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Entities drawn into the G-buffer.
    pub geometry_draws: u32,
    /// Lights accumulated by the direct lighting pass.
    pub light_draws: u32,
    /// Whether a sky was drawn.
    pub sky_drawn: bool,
    /// Full-screen quads drawn by the post-process chain.
    pub post_process_draws: u32,
    /// Whether an image reached the display surface.
    pub presented: bool,
}

/// A deferred renderer bound to one graphics device.
#[derive(Debug)]
pub struct DeferredRenderer {
    device: Arc<dyn GraphicsDevice>,
    settings: DeferredSettings,
    shaders: ShaderSet,
    ssao: SsaoKernel,
    environment: Option<EnvironmentInfo>,
    targets: Option<SurfaceTargets>,
}

impl DeferredRenderer {
    /// Creates the pipeline for `scene`.
    ///
    /// Fails if any program fails to load, in which case nothing else is
    /// allocated. When the scene has a sky its lighting environment is
    /// precomputed before this returns. Surface targets only exist after the
    /// first [`resize`](Self::resize).
    pub fn create(
        device: Arc<dyn GraphicsDevice>,
        encoder: &mut dyn CommandEncoder,
        scene: &Scene,
        settings: DeferredSettings,
    ) -> Result<Self, DeferredError> {
        let shaders = ShaderSet::load(&device, &settings.shaders)?;

        let environment = match scene.sky() {
            Some(sky) => Some(EnvironmentInfo::precompute(
                &device,
                encoder,
                sky,
                &settings.environment,
                &settings.shaders,
            )?),
            None => None,
        };

        let ssao = SsaoKernel::generate(&device, settings.ssao.sample_count, settings.ssao.noise_size)?;

        encoder.enable(Capability::DepthTest);
        encoder.enable(Capability::CullFace);
        encoder.set_cull_face(Face::Back);

        log::info!(
            "Created deferred renderer ({} programs, sky: {})",
            ShaderKind::COUNT,
            environment.is_some()
        );

        Ok(Self {
            device,
            settings,
            shaders,
            ssao,
            environment,
            targets: None,
        })
    }

    /// Recomputes the lighting environment after the scene's sky changed.
    ///
    /// A scene without a sky drops the current environment. If the precompute
    /// fails, the previous environment stays in place.
    pub fn load_environment(
        &mut self,
        encoder: &mut dyn CommandEncoder,
        scene: &Scene,
    ) -> Result<(), DeferredError> {
        let environment = scene
            .sky()
            .map(|sky| {
                EnvironmentInfo::precompute(
                    &self.device,
                    encoder,
                    sky,
                    &self.settings.environment,
                    &self.settings.shaders,
                )
            })
            .transpose();
        if let Some(targets) = &self.targets {
            encoder.set_viewport(targets.size());
        }
        self.environment = environment?;
        Ok(())
    }

    /// Reallocates every surface-sized target for a `width` x `height` surface.
    ///
    /// The previous targets are released first. If any new target fails to
    /// validate, the renderer is left without targets and frames fail with
    /// [`DeferredError::SurfaceNotConfigured`] until a resize succeeds.
    pub fn resize(
        &mut self,
        encoder: &mut dyn CommandEncoder,
        width: u32,
        height: u32,
    ) -> Result<(), DeferredError> {
        let size = Extent2D::new(width, height);
        if size.is_empty() {
            return Err(DeferredError::InvalidSurfaceSize { width, height });
        }

        self.targets = None;
        self.targets = Some(SurfaceTargets::allocate(&self.device, size)?);

        encoder.set_clear_color(self.settings.clear_color);
        encoder.set_viewport(size);

        log::info!("Resized deferred renderer to {}x{}", width, height);
        Ok(())
    }

    /// Renders one frame of `scene` to the display surface.
    ///
    /// A scene without a main camera produces an empty frame.
    pub fn update(
        &mut self,
        encoder: &mut dyn CommandEncoder,
        scene: &Scene,
    ) -> Result<FrameStats, DeferredError> {
        let Some((camera_entity, camera)) = scene.main_camera() else {
            log::trace!("No main camera, skipping frame");
            return Ok(FrameStats::default());
        };
        let targets = self
            .targets
            .as_mut()
            .ok_or(DeferredError::SurfaceNotConfigured)?;
        let view = CameraView::new(&camera_entity.transform, camera);
        let mut stats = FrameStats::default();

        log::debug!("Geometry pass");
        stats.geometry_draws = geometry::geometry_pass(
            encoder,
            self.shaders.get(ShaderKind::GBuffer),
            &targets.gbuffer,
            &view,
            scene,
        );

        log::debug!("Lighting pass");
        targets.hdr.bind(encoder);
        encoder.clear(ClearFlags::COLOR);
        encoder.set_depth_mask(false);
        lighting::global_illumination(
            encoder,
            self.shaders.get(ShaderKind::DeferredIndirect),
            &targets.gbuffer,
            self.environment.as_ref(),
            &self.ssao,
            &view,
            targets.size(),
        );
        stats.light_draws = lighting::direct_lighting(
            encoder,
            self.shaders.get(ShaderKind::DeferredDirect),
            &targets.gbuffer,
            &view,
            scene,
        );
        encoder.set_depth_mask(true);

        log::debug!("Sky pass");
        stats.sky_drawn = sky::sky_pass(encoder, &self.shaders, scene.sky(), &view);

        log::debug!("Post-process chain");
        stats.post_process_draws =
            post_process::post_process(encoder, &self.shaders, targets, &self.settings.bloom)?;

        present::present(
            encoder,
            self.shaders.get(ShaderKind::Texture),
            targets.ldr_pool.current(),
        );
        stats.presented = true;

        log::trace!("Frame done: {:?}", stats);
        Ok(stats)
    }

    /// The surface size of the current targets, if a resize succeeded.
    pub fn surface_size(&self) -> Option<Extent2D> {
        self.targets.as_ref().map(SurfaceTargets::size)
    }

    /// The surface-sized targets, if a resize succeeded.
    pub fn targets(&self) -> Option<&SurfaceTargets> {
        self.targets.as_ref()
    }

    /// The precomputed lighting environment, if the scene has a sky.
    pub fn environment(&self) -> Option<&EnvironmentInfo> {
        self.environment.as_ref()
    }

    /// The ambient occlusion kernel.
    pub fn ssao(&self) -> &SsaoKernel {
        &self.ssao
    }

    /// The loaded programs.
    pub fn shaders(&self) -> &ShaderSet {
        &self.shaders
    }

    /// The settings the renderer was created with.
    pub fn settings(&self) -> &DeferredSettings {
        &self.settings
    }
}
