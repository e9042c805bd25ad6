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

//! Deferred lighting: one indirect quad, then one additive quad per light.

use super::{geometry::CameraView, targets::GBuffer};
use crate::render_lane::{environment::EnvironmentInfo, ssao::SsaoKernel};
use penumbra_core::{
    math::Extent2D,
    renderer::{
        BlendState, Capability, CommandEncoder, CompareFunction, LightType, ShaderProgramId,
        TextureUnit, UniformValue,
    },
};
use penumbra_data::Scene;

/// Resolves ambient and image-based lighting for every pixel in one quad.
///
/// Without an environment the IBL units are left unbound.
pub(crate) fn global_illumination(
    encoder: &mut dyn CommandEncoder,
    program: ShaderProgramId,
    gbuffer: &GBuffer,
    environment: Option<&EnvironmentInfo>,
    ssao: &SsaoKernel,
    camera: &CameraView,
    surface: Extent2D,
) {
    encoder.use_program(program);
    camera.upload(encoder);
    gbuffer.bind_inputs(encoder);

    let maps = [
        (
            TextureUnit::Irradiance,
            "irradianceMap",
            environment.map(|e| e.irradiance().id()),
        ),
        (
            TextureUnit::Prefilter,
            "prefilterEnvmap",
            environment.map(|e| e.prefiltered().id()),
        ),
        (
            TextureUnit::ScaleBias,
            "scaleBiasMap",
            environment.map(|e| e.scale_bias().id()),
        ),
    ];
    for (unit, name, texture) in maps {
        encoder.bind_texture(unit, texture);
        encoder.set_uniform(name, unit.into());
    }
    ssao.bind(encoder, surface);

    encoder.draw_fullscreen_quad();
}

/// Adds one full-screen quad per light and returns how many were drawn.
///
/// Light-list entities without a light kind are skipped. Blending is disabled
/// and the depth comparison is back to `Less` when this returns.
pub(crate) fn direct_lighting(
    encoder: &mut dyn CommandEncoder,
    program: ShaderProgramId,
    gbuffer: &GBuffer,
    camera: &CameraView,
    scene: &Scene,
) -> u32 {
    encoder.enable(Capability::Blend);
    encoder.set_blend_func_separate(BlendState::ADDITIVE);
    encoder.set_depth_func(CompareFunction::LessEqual);

    encoder.use_program(program);
    camera.upload(encoder);
    gbuffer.bind_inputs(encoder);

    let mut drawn = 0;
    for light in scene.lights() {
        match light.light {
            Some(LightType::Directional(directional)) => {
                encoder.set_uniform("dirLight.direction", directional.direction.into());
                encoder.set_uniform("dirLight.color", directional.color.into());
                encoder.set_uniform("isDirLight", UniformValue::Bool(true));
                encoder.set_uniform("isPointLight", UniformValue::Bool(false));
            }
            Some(LightType::Point(point)) => {
                encoder.set_uniform("pointLight.position", light.transform.position.into());
                encoder.set_uniform("pointLight.color", point.color.into());
                encoder.set_uniform("isPointLight", UniformValue::Bool(true));
                encoder.set_uniform("isDirLight", UniformValue::Bool(false));
            }
            None => {
                log::trace!("Skipping light entity '{}' without a light kind", light.name);
                continue;
            }
        }
        encoder.draw_fullscreen_quad();
        drawn += 1;
    }

    encoder.disable(Capability::Blend);
    encoder.set_depth_func(CompareFunction::Less);
    drawn
}
