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

//! Bloom, blur, tone mapping, gamma correction, and anti-aliasing.
//!
//! Every stage swaps its pool before drawing: the swap hands back the previous
//! output to sample and the other slot to draw into.

use super::targets::SurfaceTargets;
use crate::{
    error::DeferredError,
    render_lane::{
        settings::BloomSettings,
        shader_set::{ShaderKind, ShaderSet},
    },
};
use glam::Vec2;
use penumbra_core::renderer::{CommandEncoder, TextureUnit};

/// Runs the post-process chain and returns the number of quads drawn.
///
/// The final image is left in the current slot of the LDR pool.
pub(crate) fn post_process(
    encoder: &mut dyn CommandEncoder,
    shaders: &ShaderSet,
    targets: &mut SurfaceTargets,
    bloom: &BloomSettings,
) -> Result<u32, DeferredError> {
    let mut draws = 0;
    let rcp_screen_size = targets.size().reciprocal();

    encoder.use_program(shaders.get(ShaderKind::Bloom));
    encoder.bind_texture(TextureUnit::Texture, Some(targets.hdr.texture().id()));
    encoder.set_uniform("tex", TextureUnit::Texture.into());
    encoder.set_uniform("threshold", bloom.threshold.into());
    let swap = targets.hdr_pool.swap();
    swap.write.bind(encoder);
    encoder.draw_fullscreen_quad();
    draws += 1;

    encoder.use_program(shaders.get(ShaderKind::Blur));
    for step in 1..=bloom.blur_iterations {
        let step = step as f32;
        for direction in [Vec2::new(step, 0.0), Vec2::new(0.0, step)] {
            let swap = targets.hdr_pool.swap();
            swap.read.texture().generate_mipmaps()?;
            encoder.bind_texture(TextureUnit::Texture, Some(swap.read.texture().id()));
            encoder.set_uniform("tex", TextureUnit::Texture.into());
            encoder.set_uniform("direction", direction.into());
            swap.write.bind(encoder);
            encoder.draw_fullscreen_quad();
            draws += 1;
        }
    }

    encoder.use_program(shaders.get(ShaderKind::Tonemap));
    encoder.bind_texture(TextureUnit::Texture, Some(targets.hdr.texture().id()));
    encoder.set_uniform("tex", TextureUnit::Texture.into());
    encoder.bind_texture(TextureUnit::Bloom, Some(targets.hdr_pool.current().texture().id()));
    encoder.set_uniform("bloomTex", TextureUnit::Bloom.into());
    let swap = targets.ldr_pool.swap();
    swap.write.bind(encoder);
    encoder.draw_fullscreen_quad();
    draws += 1;

    encoder.use_program(shaders.get(ShaderKind::Gamma));
    let swap = targets.ldr_pool.swap();
    encoder.bind_texture(TextureUnit::Texture, Some(swap.read.texture().id()));
    encoder.set_uniform("tex", TextureUnit::Texture.into());
    swap.write.bind(encoder);
    encoder.draw_fullscreen_quad();
    draws += 1;

    encoder.use_program(shaders.get(ShaderKind::Fxaa));
    let swap = targets.ldr_pool.swap();
    swap.read.texture().generate_mipmaps()?;
    encoder.bind_texture(TextureUnit::Texture, Some(swap.read.texture().id()));
    encoder.set_uniform("tex", TextureUnit::Texture.into());
    encoder.set_uniform("rcpScreenSize", rcp_screen_size.into());
    swap.write.bind(encoder);
    encoder.draw_fullscreen_quad();
    draws += 1;

    log::debug!("Post-process chain drew {} quads", draws);
    Ok(draws)
}
