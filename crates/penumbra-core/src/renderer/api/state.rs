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

//! Fixed-function state toggled between passes: depth, blending, culling, clears.

use bitflags::bitflags;

/// A fixed-function capability that can be enabled or disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Depth testing against the bound depth attachment.
    DepthTest,
    /// Face culling, configured with [`Face`].
    CullFace,
    /// Color blending, configured with [`BlendState`].
    Blend,
}

/// Which polygon faces are culled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Cull front-facing polygons.
    Front,
    /// Cull back-facing polygons.
    Back,
}

/// A comparison function used for depth testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareFunction {
    /// The test never passes.
    Never,
    /// Passes if the new value is less than the existing value.
    Less,
    /// Passes if the new value is equal to the existing value.
    Equal,
    /// Passes if the new value is less than or equal to the existing value.
    LessEqual,
    /// Passes if the new value is greater than the existing value.
    Greater,
    /// The test always passes.
    Always,
}

/// A multiplier applied to a source or destination term of the blend equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// `0`
    Zero,
    /// `1`
    One,
    /// The source alpha.
    SrcAlpha,
    /// `1 - source alpha`
    OneMinusSrcAlpha,
}

/// Separate color and alpha blend factors (`glBlendFuncSeparate` equivalent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendState {
    /// Factor applied to the incoming color.
    pub src_color: BlendFactor,
    /// Factor applied to the stored color.
    pub dst_color: BlendFactor,
    /// Factor applied to the incoming alpha.
    pub src_alpha: BlendFactor,
    /// Factor applied to the stored alpha.
    pub dst_alpha: BlendFactor,
}

impl BlendState {
    /// Adds incoming color onto the stored color and keeps only the incoming alpha.
    ///
    /// Used to accumulate one light at a time into the HDR buffer.
    pub const ADDITIVE: BlendState = BlendState {
        src_color: BlendFactor::One,
        dst_color: BlendFactor::One,
        src_alpha: BlendFactor::One,
        dst_alpha: BlendFactor::Zero,
    };
}

bitflags! {
    /// Which buffers of the bound framebuffer a clear touches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// Clear every color draw buffer to the clear color.
        const COLOR = 1 << 0;
        /// Clear the depth attachment to the far plane.
        const DEPTH = 1 << 1;
    }
}
