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

//! Defines light types for the rendering system.
//!
//! These types are stored on scene entities by `penumbra-data` and read by the
//! direct lighting pass, which draws one full-screen quad per light.

use crate::math::Vec3;

/// A directional light source that illuminates from a uniform direction.
///
/// Directional lights simulate infinitely distant light sources like the sun.
/// They have no position, only a direction, and cast parallel rays with no falloff.
///
/// # Examples
///
/// ```
/// use penumbra_core::renderer::light::DirectionalLight;
/// use penumbra_core::math::Vec3;
///
/// // Noon sun
/// let sun = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0), Vec3::ONE);
/// assert_eq!(sun.direction, Vec3::NEG_Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The direction the light is pointing.
    ///
    /// This vector points from the light source towards the scene.
    pub direction: Vec3,

    /// The color of the light in linear RGB space. Values above 1 are allowed.
    pub color: Vec3,
}

impl DirectionalLight {
    /// Creates a directional light.
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Self { direction, color }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Y,
            color: Vec3::ONE,
        }
    }
}

/// A point light source that emits light in all directions from a single point.
///
/// The position is not stored here: it is taken from the transform of the
/// entity carrying the light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// The color of the light in linear RGB space. Values above 1 are allowed.
    pub color: Vec3,
}

impl PointLight {
    /// Creates a point light.
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self { color: Vec3::ONE }
    }
}

/// An enumeration of all supported light types.
///
/// A light is either directional or point, never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightType {
    /// A directional light (sun-like, infinite distance, no falloff).
    Directional(DirectionalLight),
    /// A point light (omni-directional, positioned by its entity).
    Point(PointLight),
}

impl Default for LightType {
    fn default() -> Self {
        LightType::Directional(DirectionalLight::default())
    }
}
