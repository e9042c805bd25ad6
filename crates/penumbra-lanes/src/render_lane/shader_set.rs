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

//! The fixed table of shader programs used by the deferred pipeline.

use super::settings::{ShaderPaths, ShaderStage};
use crate::error::DeferredError;
use penumbra_core::renderer::{GraphicsDevice, ShaderProgramId, ShaderSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifies the program of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShaderKind {
    /// Forward image-based lighting.
    Ibl,
    /// Forward direct lighting.
    Direct,
    /// Cubemap sky.
    Skybox,
    /// Plain textured quad, used to present the final image.
    Texture,
    /// Edge-detecting anti-aliasing.
    Fxaa,
    /// Linear to display gamma.
    Gamma,
    /// HDR plus bloom to LDR.
    Tonemap,
    /// Equirectangular sky.
    Skysphere,
    /// Bright-pass extraction.
    Bloom,
    /// Separable mip-sampled blur.
    Blur,
    /// Screen-space ambient occlusion.
    Ssao,
    /// Writes albedo, normal, and position.
    GBuffer,
    /// Deferred ambient and image-based lighting.
    DeferredIndirect,
    /// Deferred per-light shading.
    DeferredDirect,
}

impl ShaderKind {
    /// Number of programs in a [`ShaderSet`].
    pub const COUNT: usize = 14;

    /// Every kind, in table order.
    pub const ALL: [ShaderKind; Self::COUNT] = [
        ShaderKind::Ibl,
        ShaderKind::Direct,
        ShaderKind::Skybox,
        ShaderKind::Texture,
        ShaderKind::Fxaa,
        ShaderKind::Gamma,
        ShaderKind::Tonemap,
        ShaderKind::Skysphere,
        ShaderKind::Bloom,
        ShaderKind::Blur,
        ShaderKind::Ssao,
        ShaderKind::GBuffer,
        ShaderKind::DeferredIndirect,
        ShaderKind::DeferredDirect,
    ];

    /// Position of this kind in [`ShaderKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The source files this kind is built from unless overridden.
    pub fn default_stage(self) -> ShaderStage {
        let (vertex, fragment) = match self {
            ShaderKind::Ibl => ("Model.vert", "IBL.frag"),
            ShaderKind::Direct => ("Model.vert", "Lighting.frag"),
            ShaderKind::Skybox => ("Quad.vert", "Skybox.frag"),
            ShaderKind::Texture => ("Quad.vert", "Texture.frag"),
            ShaderKind::Fxaa => ("Quad.vert", "FXAAQuality.frag"),
            ShaderKind::Gamma => ("Quad.vert", "GammaCorrection.frag"),
            ShaderKind::Tonemap => ("Quad.vert", "Tonemap.frag"),
            ShaderKind::Skysphere => ("Quad.vert", "Skysphere.frag"),
            ShaderKind::Bloom => ("Quad.vert", "Bloom.frag"),
            ShaderKind::Blur => ("Quad.vert", "Blur.frag"),
            ShaderKind::Ssao => ("Model.vert", "SSAO.frag"),
            ShaderKind::GBuffer => ("Model.vert", "GBuffer.frag"),
            ShaderKind::DeferredIndirect => ("Quad.vert", "DeferredIndirect.frag"),
            ShaderKind::DeferredDirect => ("Quad.vert", "DeferredDirect.frag"),
        };
        ShaderStage::new(vertex, fragment)
    }
}

/// One loaded program per [`ShaderKind`].
///
/// A set only exists when every program loaded. Programs are destroyed when the
/// set is dropped.
#[derive(Debug)]
pub struct ShaderSet {
    device: Arc<dyn GraphicsDevice>,
    programs: Vec<ShaderProgramId>,
}

impl ShaderSet {
    /// Loads every program, failing on the first one that does not load.
    ///
    /// Programs loaded before the failure are destroyed again.
    pub fn load(
        device: &Arc<dyn GraphicsDevice>,
        paths: &ShaderPaths,
    ) -> Result<Self, DeferredError> {
        let mut set = ShaderSet {
            device: device.clone(),
            programs: Vec::with_capacity(ShaderKind::COUNT),
        };

        for kind in ShaderKind::ALL {
            let (vertex, fragment) = paths.resolve(&paths.program(kind));
            match device.load_shader_program(&ShaderSource::new(vertex, fragment)) {
                Ok(program) => {
                    log::trace!("Loaded {:?} program as {:?}", kind, program);
                    set.programs.push(program);
                }
                Err(source) => {
                    log::error!("Failed to load the {:?} program: {}", kind, source);
                    // Dropping the partial set releases what was loaded so far.
                    return Err(DeferredError::ShaderLoad { kind, source });
                }
            }
        }

        log::debug!("Loaded {} shader programs", set.programs.len());
        Ok(set)
    }

    /// The program of `kind`.
    pub fn get(&self, kind: ShaderKind) -> ShaderProgramId {
        self.programs[kind.index()]
    }
}

impl Drop for ShaderSet {
    fn drop(&mut self) {
        for program in self.programs.drain(..) {
            if let Err(e) = self.device.destroy_shader_program(program) {
                log::warn!("Failed to destroy shader program {:?}: {}", program, e);
            }
        }
    }
}
