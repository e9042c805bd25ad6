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

//! Errors raised by the deferred rendering lane.

use crate::render_lane::ShaderKind;
use penumbra_core::renderer::{FramebufferStatus, ResourceError, ShaderError};
use thiserror::Error;

/// An error that prevents the deferred renderer from being created, resized, or drawn.
#[derive(Debug, Error)]
pub enum DeferredError {
    /// One of the pipeline's shader programs failed to load.
    #[error("Failed to load the {kind:?} shader program: {source}")]
    ShaderLoad {
        /// The pass whose program failed.
        kind: ShaderKind,
        /// The backend's load or compile error.
        #[source]
        source: ShaderError,
    },
    /// An environment precompute program failed to load.
    #[error("Failed to load the '{stage}' environment program: {source}")]
    EnvironmentShader {
        /// The precompute stage whose program failed.
        stage: &'static str,
        /// The backend's load or compile error.
        #[source]
        source: ShaderError,
    },
    /// A render target reported anything other than complete after its attachments were set.
    #[error("Render target '{label}' is incomplete: {status}")]
    IncompleteRenderTarget {
        /// The label of the offending target.
        label: String,
        /// The status reported by the backend.
        status: FramebufferStatus,
    },
    /// A texture, framebuffer, or program operation failed in the backend.
    #[error(transparent)]
    Resource(#[from] ResourceError),
    /// A frame was requested before a successful resize.
    #[error("The renderer has no surface targets; call resize with a valid size first")]
    SurfaceNotConfigured,
    /// A resize was requested with a zero dimension.
    #[error("Invalid surface size {width}x{height}")]
    InvalidSurfaceSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The renderer settings could not be parsed.
    #[error("Invalid renderer settings: {0}")]
    Settings(#[from] ron::error::SpannedError),
}
