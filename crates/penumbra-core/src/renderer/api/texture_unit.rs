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

//! The fixed mapping from semantic texture roles to sampling slots.
//!
//! Shaders and passes agree on slots through this enum only. Two roles never
//! share a slot, so textures bound for one role cannot clobber another role
//! within a pass.

use serde::{Deserialize, Serialize};

/// A semantic texture role with a fixed hardware sampling slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TextureUnit {
    /// Surface base color. Material albedo maps and the G-buffer albedo.
    Albedo,
    /// Surface normals. Material normal maps and the G-buffer normals.
    Normal,
    /// Material metalness map.
    Metalness,
    /// Material roughness map.
    Roughness,
    /// G-buffer view/world positions.
    Position,
    /// Diffuse irradiance cubemap.
    Irradiance,
    /// Roughness-prefiltered environment cubemap.
    Prefilter,
    /// BRDF scale-bias lookup table.
    ScaleBias,
    /// Generic input of full-screen passes.
    Texture,
    /// Blurred bloom input of the tone mapping pass.
    Bloom,
    /// Ambient occlusion kernel rotation noise.
    Noise,
}

impl TextureUnit {
    /// Every unit, in slot order.
    pub const ALL: [TextureUnit; 11] = [
        TextureUnit::Albedo,
        TextureUnit::Normal,
        TextureUnit::Metalness,
        TextureUnit::Roughness,
        TextureUnit::Position,
        TextureUnit::Irradiance,
        TextureUnit::Prefilter,
        TextureUnit::ScaleBias,
        TextureUnit::Texture,
        TextureUnit::Bloom,
        TextureUnit::Noise,
    ];

    /// Returns the sampling slot of this role.
    pub const fn slot(self) -> u32 {
        match self {
            TextureUnit::Albedo => 0,
            TextureUnit::Normal => 1,
            TextureUnit::Metalness => 2,
            TextureUnit::Roughness => 3,
            TextureUnit::Position => 4,
            TextureUnit::Irradiance => 5,
            TextureUnit::Prefilter => 6,
            TextureUnit::ScaleBias => 7,
            TextureUnit::Texture => 8,
            TextureUnit::Bloom => 9,
            TextureUnit::Noise => 10,
        }
    }

    /// Returns the role bound to `slot`, if any.
    pub fn from_slot(slot: u32) -> Option<TextureUnit> {
        TextureUnit::ALL.get(slot as usize).copied()
    }
}
