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

//! GPU-resident mesh handles consumed by indexed draws.

/// An opaque handle to a GPU buffer resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub usize);

/// The format of the indices in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integer indices.
    Uint16,
    /// 32-bit unsigned integer indices.
    #[default]
    Uint32,
}

/// A mesh whose vertex and index data already live on the GPU.
///
/// The renderer never uploads geometry itself; asset loading produces these
/// handles and the scene hands them over for indexed triangle draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GpuMesh {
    /// The vertex array / vertex buffer holding the attributes.
    pub vertex_buffer: BufferId,
    /// The buffer holding the triangle indices.
    pub index_buffer: BufferId,
    /// The number of indices to draw.
    pub index_count: u32,
    /// The format of the indices in `index_buffer`.
    pub index_format: IndexFormat,
}

impl GpuMesh {
    /// Returns the number of triangles an indexed triangle-list draw produces.
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}
