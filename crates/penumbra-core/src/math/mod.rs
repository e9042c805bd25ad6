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

//! Math primitives used across the renderer.
//!
//! Linear algebra comes from `glam`; this module only re-exports the types the
//! engine uses and adds the few pixel-space helpers that `glam` does not carry.
//!
//! All angular inputs to `glam` are in **radians**. Scene transforms store Euler
//! angles in degrees and convert at the boundary.

mod dimension;

pub use self::dimension::Extent2D;
pub use glam::{Mat4, Vec2, Vec3, Vec4};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Returns the number of mip levels in a full chain for a surface of the given size.
///
/// A 1x1 surface has a single level; every halving of the largest side adds one.
pub fn full_mip_chain(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mip_chain_lengths() {
        assert_eq!(full_mip_chain(1, 1), 1);
        assert_eq!(full_mip_chain(2, 1), 2);
        assert_eq!(full_mip_chain(128, 128), 8);
        assert_eq!(full_mip_chain(1920, 1080), 11);
        assert_eq!(full_mip_chain(0, 0), 1);
    }
}
