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

use super::Transform;
use penumbra_core::math::{Mat4, Vec2, Vec3, DEG_TO_RAD};

/// A component that defines a perspective camera.
///
/// The camera's placement comes from the transform of the entity carrying it:
/// `rotation.y` is the yaw and `rotation.x` the pitch, both in degrees. With a
/// zero rotation the camera looks down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The vertical field of view in radians.
    pub fov_y_radians: f32,

    /// The aspect ratio of the viewport (width / height).
    /// This is typically updated when the surface is resized.
    pub aspect_ratio: f32,

    /// The distance to the near clipping plane.
    pub z_near: f32,

    /// The distance to the far clipping plane.
    pub z_far: f32,
}

impl Camera {
    /// Creates a new perspective camera with the given parameters.
    pub fn new_perspective(fov_y_radians: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y_radians,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a default perspective camera.
    ///
    /// - FOV: 60 degrees
    /// - Aspect ratio: 16:9
    /// - Near plane: 0.1
    /// - Far plane: 1000.0
    pub fn default_perspective() -> Self {
        Self::new_perspective(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0)
    }

    /// Calculates the projection matrix for this camera.
    ///
    /// Uses a right-handed coordinate system with a [-1, 1] clip depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_radians, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// Calculates the view matrix for a camera placed by `transform`.
    ///
    /// Translation is undone first, then yaw, then pitch.
    pub fn view_matrix(&self, transform: &Transform) -> Mat4 {
        Mat4::from_rotation_x(-transform.rotation.x * DEG_TO_RAD)
            * Mat4::from_rotation_y(-transform.rotation.y * DEG_TO_RAD)
            * Mat4::from_translation(-transform.position)
    }

    /// Returns the camera's orientation with translation discarded, yaw then pitch.
    ///
    /// The Z axis is flipped so that the basis maps a view ray `(x, y, 1)` onto the
    /// world direction the camera looks along. Sky passes use it to rotate with
    /// the camera's look direction while staying infinitely far away.
    pub fn orientation_basis(transform: &Transform) -> Mat4 {
        let yaw = Mat4::from_rotation_y(transform.rotation.y * DEG_TO_RAD);
        let pitch = Mat4::from_rotation_x(transform.rotation.x * DEG_TO_RAD);
        yaw * pitch * Mat4::from_scale(Vec3::new(1.0, 1.0, -1.0))
    }

    /// Returns the inverse horizontal and vertical scale terms of the projection.
    ///
    /// A full-screen pass multiplies its NDC coordinate by these to rebuild a
    /// view-space ray.
    pub fn inverse_projection_scale(&self) -> Vec2 {
        let projection = self.projection_matrix();
        Vec2::new(1.0 / projection.x_axis.x, 1.0 / projection.y_axis.y)
    }

    /// Updates the aspect ratio, typically called when the surface is resized.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::default_perspective()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use penumbra_core::math::Vec4;

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::default();
        let transform = Transform::from_position(Vec3::new(0.0, 0.0, 5.0));
        let p = camera.view_matrix(&transform) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.z, -5.0);
    }

    #[test]
    fn orientation_basis_ignores_position() {
        let a = Transform::new(Vec3::new(10.0, 3.0, -2.0), Vec3::new(15.0, 40.0, 0.0), Vec3::ONE);
        let b = Transform::new(Vec3::ZERO, a.rotation, Vec3::ONE);
        assert_eq!(Camera::orientation_basis(&a), Camera::orientation_basis(&b));
    }

    #[test]
    fn unrotated_basis_looks_down_negative_z() {
        let basis = Camera::orientation_basis(&Transform::identity());
        let forward = basis * Vec4::new(0.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(forward.z, -1.0);
    }

    #[test]
    fn inverse_projection_scale_matches_fov() {
        let camera = Camera::new_perspective(90.0_f32.to_radians(), 2.0, 0.1, 100.0);
        let scale = camera.inverse_projection_scale();
        assert_relative_eq!(scale.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(scale.x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn aspect_ratio_ignores_zero_height() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(800, 0);
        assert_relative_eq!(camera.aspect_ratio, 16.0 / 9.0);
        camera.set_aspect_ratio(800, 600);
        assert_relative_eq!(camera.aspect_ratio, 800.0 / 600.0);
    }
}
