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

//! Off-screen framebuffer handles, attachment points, and completeness status.

use std::fmt;

/// An opaque handle to a framebuffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FramebufferId(pub usize);

/// An attachment point of a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// The color attachment at the given index.
    Color(u32),
    /// The depth attachment.
    Depth,
}

/// One face of a cubemap, in the conventional +X, -X, +Y, -Y, +Z, -Z order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// The face looking down +X.
    PositiveX,
    /// The face looking down -X.
    NegativeX,
    /// The face looking down +Y.
    PositiveY,
    /// The face looking down -Y.
    NegativeY,
    /// The face looking down +Z.
    PositiveZ,
    /// The face looking down -Z.
    NegativeZ,
}

impl CubeFace {
    /// All six faces in layer order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];
}

/// The completeness status reported by a backend for a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferStatus {
    /// The framebuffer can be drawn to.
    Complete,
    /// The target is the default framebuffer, but the default framebuffer does not exist.
    Undefined,
    /// One of the attachment points is incomplete.
    IncompleteAttachment,
    /// No texture is attached at all.
    MissingAttachment,
    /// A draw buffer names an attachment point with nothing attached.
    IncompleteDrawBuffer,
    /// The read buffer names an attachment point with nothing attached.
    IncompleteReadBuffer,
    /// The combination of attachment formats is not supported by the implementation.
    Unsupported,
    /// The attachments disagree on their sample counts.
    IncompleteMultisample,
    /// A status code the backend could not classify.
    Unknown(u32),
}

impl FramebufferStatus {
    /// Returns `true` only for [`FramebufferStatus::Complete`].
    pub fn is_complete(&self) -> bool {
        matches!(self, FramebufferStatus::Complete)
    }

    /// Returns the diagnostic message for this status.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            FramebufferStatus::Complete => "The framebuffer is complete",
            FramebufferStatus::Undefined => {
                "Target is the default framebuffer, but the default framebuffer does not exist"
            }
            FramebufferStatus::IncompleteAttachment => {
                "Any of the framebuffer attachment points are framebuffer incomplete"
            }
            FramebufferStatus::MissingAttachment => {
                "The framebuffer does not have any texture attached to it"
            }
            FramebufferStatus::IncompleteDrawBuffer => {
                "A draw buffer names a color attachment point with no attachment"
            }
            FramebufferStatus::IncompleteReadBuffer => {
                "The read buffer names a color attachment point with no attachment"
            }
            FramebufferStatus::Unsupported => {
                "The combination of internal formats of the attached textures violates an implementation-dependent set of restrictions"
            }
            FramebufferStatus::IncompleteMultisample => {
                "The sample counts of the attached images do not match"
            }
            FramebufferStatus::Unknown(_) => "There is a problem with the framebuffer",
        }
    }
}

impl fmt::Display for FramebufferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferStatus::Unknown(code) => write!(f, "{} (status {code:#x})", self.diagnostic()),
            _ => f.write_str(self.diagnostic()),
        }
    }
}
