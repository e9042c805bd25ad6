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

use penumbra_core::math::{Mat4, Vec3, DEG_TO_RAD};

/// A component that describes an entity's position, rotation, and scale.
///
/// Rotation is stored as Euler angles in **degrees** and applied about X, then Y,
/// then Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The position of the entity.
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    /// The scale of the entity.
    pub scale: Vec3,
}

impl Transform {
    /// Creates a new `Transform` with a given position, rotation, and scale.
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates a new `Transform` with a given position, and identity rotation/scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Creates a new identity `Transform`.
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Returns the rotation as a matrix, `Rx * Ry * Rz`.
    pub fn rotation_matrix(&self) -> Mat4 {
        let radians = self.rotation * DEG_TO_RAD;
        Mat4::from_rotation_x(radians.x)
            * Mat4::from_rotation_y(radians.y)
            * Mat4::from_rotation_z(radians.z)
    }

    /// Post-multiplies `matrix` by this transform: translate, then rotate, then scale.
    pub fn apply(&self, matrix: Mat4) -> Mat4 {
        matrix
            * Mat4::from_translation(self.position)
            * self.rotation_matrix()
            * Mat4::from_scale(self.scale)
    }

    /// Calculates the `Mat4` of this transform alone.
    pub fn to_mat4(&self) -> Mat4 {
        self.apply(Mat4::IDENTITY)
    }
}

impl Default for Transform {
    /// Returns the identity `Transform`.
    fn default() -> Self {
        Self::identity()
    }
}
