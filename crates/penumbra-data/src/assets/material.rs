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

use penumbra_core::{
    asset::Material,
    math::Vec4,
    renderer::{CommandEncoder, TextureId, TextureUnit, UniformValue},
};

/// A metallic-roughness surface description written into the geometry buffer.
///
/// Each optional map overrides its scalar factor; the shader is told which maps
/// are present through the `material.has*` flags.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    /// Base color, multiplied with the albedo map when one is bound.
    pub albedo_color: Vec4,
    /// Metalness in `[0, 1]`.
    pub metalness: f32,
    /// Perceptual roughness in `[0, 1]`.
    pub roughness: f32,
    /// Optional base color texture.
    pub albedo_map: Option<TextureId>,
    /// Optional tangent-space normal map.
    pub normal_map: Option<TextureId>,
    /// Optional metalness texture.
    pub metalness_map: Option<TextureId>,
    /// Optional roughness texture.
    pub roughness_map: Option<TextureId>,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            albedo_color: Vec4::ONE,
            metalness: 0.0,
            roughness: 0.5,
            albedo_map: None,
            normal_map: None,
            metalness_map: None,
            roughness_map: None,
        }
    }
}

impl StandardMaterial {
    fn maps(&self) -> [(TextureUnit, &'static str, &'static str, Option<TextureId>); 4] {
        [
            (TextureUnit::Albedo, "material.albedoMap", "material.hasAlbedoMap", self.albedo_map),
            (TextureUnit::Normal, "material.normalMap", "material.hasNormalMap", self.normal_map),
            (
                TextureUnit::Metalness,
                "material.metalnessMap",
                "material.hasMetalnessMap",
                self.metalness_map,
            ),
            (
                TextureUnit::Roughness,
                "material.roughnessMap",
                "material.hasRoughnessMap",
                self.roughness_map,
            ),
        ]
    }
}

impl Material for StandardMaterial {
    fn bind(&self, encoder: &mut dyn CommandEncoder) {
        encoder.set_uniform("material.albedoColor", self.albedo_color.into());
        encoder.set_uniform("material.metalness", self.metalness.into());
        encoder.set_uniform("material.roughness", self.roughness.into());

        for (unit, sampler, flag, map) in self.maps() {
            encoder.set_uniform(flag, map.is_some().into());
            if let Some(texture) = map {
                encoder.set_uniform(sampler, UniformValue::Sampler(unit));
                encoder.bind_texture(unit, Some(texture));
            }
        }
    }

    fn release(&self, encoder: &mut dyn CommandEncoder) {
        for (unit, _, flag, map) in self.maps() {
            if map.is_some() {
                encoder.bind_texture(unit, None);
                encoder.set_uniform(flag, false.into());
            }
        }
    }
}
