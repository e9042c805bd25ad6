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

//! Copies the final image onto the display surface.

use super::targets::ColorTarget;
use penumbra_core::renderer::{ClearFlags, CommandEncoder, ShaderProgramId, TextureUnit};

/// Draws `image` onto the display surface. Only the surface's depth is cleared first.
pub(crate) fn present(encoder: &mut dyn CommandEncoder, program: ShaderProgramId, image: &ColorTarget) {
    encoder.bind_framebuffer(None);
    encoder.clear(ClearFlags::DEPTH);
    encoder.use_program(program);
    encoder.bind_texture(TextureUnit::Texture, Some(image.texture().id()));
    encoder.set_uniform("tex", TextureUnit::Texture.into());
    encoder.draw_fullscreen_quad();
}
