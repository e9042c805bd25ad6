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

//! Defines the hierarchy of error types reported by graphics backends.

use crate::renderer::api::{FramebufferId, ShaderProgramId, TextureId};
use std::fmt;

/// An error related to loading, compiling, or linking a shader program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// An error occurred while trying to load the shader source from a path.
    LoadError {
        /// The path of the file that failed to load.
        path: String,
        /// The underlying I/O or source error.
        source_error: String,
    },
    /// The shader source failed to compile or the program failed to link.
    CompilationError {
        /// A descriptive label for the shader, usually its source path.
        label: String,
        /// Detailed error messages from the shader compiler.
        details: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::LoadError { path, source_error } => {
                write!(
                    f,
                    "Failed to load shader source from '{path}': {source_error}"
                )
            }
            ShaderError::CompilationError { label, details } => {
                write!(f, "Shader compilation failed for '{label}': {details}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// An error related to the creation or use of a GPU resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The texture handle does not name a live texture.
    InvalidTexture(TextureId),
    /// The framebuffer handle does not name a live framebuffer.
    InvalidFramebuffer(FramebufferId),
    /// The program handle does not name a live program.
    InvalidProgram(ShaderProgramId),
    /// The texture cannot be used the way it was requested (wrong dimension or format).
    IncompatibleTexture {
        /// The offending texture.
        id: TextureId,
        /// Why the texture was rejected.
        reason: String,
    },
    /// An error originating from the specific graphics backend implementation.
    BackendError(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::InvalidTexture(id) => write!(f, "Invalid texture handle: {id:?}"),
            ResourceError::InvalidFramebuffer(id) => {
                write!(f, "Invalid framebuffer handle: {id:?}")
            }
            ResourceError::InvalidProgram(id) => write!(f, "Invalid shader program handle: {id:?}"),
            ResourceError::IncompatibleTexture { id, reason } => {
                write!(f, "Texture {id:?} cannot be used here: {reason}")
            }
            ResourceError::BackendError(msg) => {
                write!(f, "Backend-specific resource error: {msg}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn shader_error_display() {
        let err = ShaderError::LoadError {
            path: "res/Shaders/Bloom.frag".to_string(),
            source_error: "File not found".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Failed to load shader source from 'res/Shaders/Bloom.frag': File not found"
        );

        let err_comp = ShaderError::CompilationError {
            label: "Blur.frag".to_string(),
            details: "Syntax error at line 5".to_string(),
        };
        assert_eq!(
            format!("{err_comp}"),
            "Shader compilation failed for 'Blur.frag': Syntax error at line 5"
        );
    }

    #[test]
    fn invalid_handles_name_the_handle() {
        let err = ResourceError::InvalidTexture(TextureId(12));
        assert_eq!(format!("{err}"), "Invalid texture handle: TextureId(12)");
        assert!(err.source().is_none());
    }
}
