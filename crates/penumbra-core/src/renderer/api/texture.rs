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

//! Defines data structures related to GPU texture resources.

use crate::math::Extent2D;
use std::borrow::Cow;

/// The dimensionality of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureDimension {
    /// A two-dimensional texture.
    D2,
    /// A cubemap (six square 2D faces).
    Cube,
}

/// The storage format of a texture's texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Four 8-bit normalized channels. Display range.
    Rgba8,
    /// Four 16-bit float channels. High dynamic range.
    Rgba16Float,
    /// Four 32-bit float channels. Used for positions.
    Rgba32Float,
    /// Two 16-bit float channels. Used for the scale-bias lookup table.
    Rg16Float,
    /// A 16-bit depth buffer.
    Depth16,
}

impl TextureFormat {
    /// Returns `true` for formats that can only be attached as a depth buffer.
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::Depth16)
    }

    /// Returns the size of a single texel in bytes.
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::Rgba8 => 4,
            TextureFormat::Rgba16Float => 8,
            TextureFormat::Rgba32Float => 16,
            TextureFormat::Rg16Float => 4,
            TextureFormat::Depth16 => 2,
        }
    }
}

/// Defines the filtering mode for texture sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Point sampling. Returns the value of the nearest texel.
    Nearest,
    /// Linear interpolation. Returns a weighted average of the nearest texels.
    Linear,
}

/// A descriptor used to create a [`TextureId`].
///
/// Textures created from a descriptor start with undefined contents.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The size of the base level (of each face, for cubemaps).
    pub size: Extent2D,
    /// The dimensionality of the texture.
    pub dimension: TextureDimension,
    /// The format of the texels in the texture.
    pub format: TextureFormat,
    /// The filter used for both minification and magnification.
    pub filter: FilterMode,
    /// The number of mipmap levels for the texture.
    pub mip_level_count: u32,
}

impl<'a> TextureDescriptor<'a> {
    /// Describes an empty single-level 2D texture.
    pub fn empty_2d(
        label: impl Into<Cow<'a, str>>,
        size: Extent2D,
        format: TextureFormat,
        filter: FilterMode,
    ) -> Self {
        Self {
            label: Some(label.into()),
            size,
            dimension: TextureDimension::D2,
            format,
            filter,
            mip_level_count: 1,
        }
    }

    /// Describes an empty cubemap with `mip_level_count` levels per face.
    pub fn empty_cube(
        label: impl Into<Cow<'a, str>>,
        face_size: u32,
        format: TextureFormat,
        mip_level_count: u32,
    ) -> Self {
        Self {
            label: Some(label.into()),
            size: Extent2D::new(face_size, face_size),
            dimension: TextureDimension::Cube,
            format,
            filter: FilterMode::Linear,
            mip_level_count,
        }
    }

    /// Returns the same descriptor with a different mip level count.
    pub fn with_mip_levels(mut self, mip_level_count: u32) -> Self {
        self.mip_level_count = mip_level_count.max(1);
        self
    }
}

/// An opaque handle to a GPU texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub usize);
