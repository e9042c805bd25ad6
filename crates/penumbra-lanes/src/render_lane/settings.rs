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

//! Tunable parameters of the deferred pipeline, loadable from RON.

use super::shader_set::ShaderKind;
use crate::error::DeferredError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The vertex and fragment files of one program, relative to [`ShaderPaths::root`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderStage {
    /// Vertex stage file.
    pub vertex: String,
    /// Fragment stage file.
    pub fragment: String,
}

impl ShaderStage {
    /// Creates a stage pair.
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Where the pipeline's programs are loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    /// Directory every stage file is resolved against.
    pub root: String,
    /// Replacements for the default files of individual passes.
    pub overrides: BTreeMap<ShaderKind, ShaderStage>,
    /// Convolves the sky into the diffuse irradiance cubemap.
    pub irradiance: ShaderStage,
    /// Convolves the sky into one roughness level of the prefiltered cubemap.
    pub prefilter: ShaderStage,
    /// Integrates the BRDF scale and bias lookup table.
    pub scale_bias: ShaderStage,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            root: "res/Shaders".to_owned(),
            overrides: BTreeMap::new(),
            irradiance: ShaderStage::new("Quad.vert", "Irradiance.frag"),
            prefilter: ShaderStage::new("Quad.vert", "Prefilter.frag"),
            scale_bias: ShaderStage::new("Quad.vert", "ScaleBias.frag"),
        }
    }
}

impl ShaderPaths {
    /// The files of `kind`, honoring overrides.
    pub fn program(&self, kind: ShaderKind) -> ShaderStage {
        self.overrides
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| kind.default_stage())
    }

    /// Joins both files of `stage` onto the root directory.
    pub fn resolve(&self, stage: &ShaderStage) -> (String, String) {
        let root = Path::new(&self.root);
        (
            root.join(&stage.vertex).to_string_lossy().into_owned(),
            root.join(&stage.fragment).to_string_lossy().into_owned(),
        )
    }
}

/// Ambient occlusion sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsaoSettings {
    /// Hemisphere samples in the kernel.
    pub sample_count: u32,
    /// Rotation vectors in the noise tile.
    pub noise_size: u32,
}

impl Default for SsaoSettings {
    fn default() -> Self {
        Self {
            sample_count: 30,
            noise_size: 16,
        }
    }
}

/// Bloom extraction and blur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomSettings {
    /// Luminance above which pixels bloom. Zero blooms everything.
    pub threshold: f32,
    /// Outer blur iterations. Each runs a horizontal and a vertical pass.
    pub blur_iterations: u32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            blur_iterations: 2,
        }
    }
}

/// Resolutions of the precomputed image-based lighting textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Face size of the irradiance cubemap.
    pub irradiance_size: u32,
    /// Face size of the prefiltered cubemap's base level.
    pub prefilter_size: u32,
    /// Roughness levels in the prefiltered cubemap.
    pub prefilter_mip_levels: u32,
    /// Side of the square scale-bias lookup table.
    pub scale_bias_size: u32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            irradiance_size: 32,
            prefilter_size: 128,
            prefilter_mip_levels: 5,
            scale_bias_size: 512,
        }
    }
}

/// Everything the [`DeferredRenderer`](super::DeferredRenderer) can be tuned with.
///
/// ```
/// use penumbra_lanes::DeferredSettings;
///
/// let settings = DeferredSettings::from_ron_str("(bloom: (blur_iterations: 3))").unwrap();
/// assert_eq!(settings.bloom.blur_iterations, 3);
/// assert_eq!(settings.ssao.sample_count, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeferredSettings {
    /// Shader file locations.
    pub shaders: ShaderPaths,
    /// Ambient occlusion kernel.
    pub ssao: SsaoSettings,
    /// Bloom chain.
    pub bloom: BloomSettings,
    /// Image-based lighting precompute.
    pub environment: EnvironmentSettings,
    /// Clear color of every target. Magenta makes undrawn pixels obvious.
    pub clear_color: [f32; 4],
}

impl Default for DeferredSettings {
    fn default() -> Self {
        Self {
            shaders: ShaderPaths::default(),
            ssao: SsaoSettings::default(),
            bloom: BloomSettings::default(),
            environment: EnvironmentSettings::default(),
            clear_color: [1.0, 0.0, 1.0, 1.0],
        }
    }
}

impl DeferredSettings {
    /// Parses settings from RON. Missing fields keep their defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, DeferredError> {
        Ok(ron::from_str(source)?)
    }

    /// Reads and parses a RON settings file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read renderer settings '{}'", path.display()))?;
        let settings = Self::from_ron_str(&source)
            .with_context(|| format!("Failed to parse renderer settings '{}'", path.display()))?;
        log::info!("Loaded renderer settings from '{}'", path.display());
        Ok(settings)
    }

    /// Serializes the settings to pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}
