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

//! The sky pass, drawn behind the lit scene.

use super::geometry::CameraView;
use crate::render_lane::shader_set::{ShaderKind, ShaderSet};
use penumbra_core::renderer::{CommandEncoder, CompareFunction, TextureUnit};
use penumbra_data::SkySource;

/// Draws the sky behind everything already in the depth buffer.
///
/// Returns `false` without touching any state when there is no sky.
pub(crate) fn sky_pass(
    encoder: &mut dyn CommandEncoder,
    shaders: &ShaderSet,
    sky: Option<SkySource>,
    camera: &CameraView,
) -> bool {
    let (kind, sampler, texture) = match sky {
        Some(SkySource::Cubemap(texture)) => (ShaderKind::Skybox, "skybox", texture),
        Some(SkySource::Sphere(texture)) => (ShaderKind::Skysphere, "tex", texture),
        None => return false,
    };

    encoder.use_program(shaders.get(kind));
    encoder.bind_texture(TextureUnit::Texture, Some(texture));
    encoder.set_uniform(sampler, TextureUnit::Texture.into());
    encoder.set_uniform("persp", camera.inverse_scale.into());
    encoder.set_uniform("cameraBasis", camera.basis.into());

    // The sky sits on the far plane, where the cleared depth is equal, not greater.
    encoder.set_depth_func(CompareFunction::LessEqual);
    encoder.draw_fullscreen_quad();
    encoder.set_depth_func(CompareFunction::Less);
    true
}
