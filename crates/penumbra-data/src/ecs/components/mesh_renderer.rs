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

use crate::scene::MaterialId;

/// A component that makes an entity's mesh visible.
///
/// Entities with a mesh but no `MeshRenderer` are never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshRenderer {
    /// Index of the material in the scene's material table.
    pub material: MaterialId,
}

impl MeshRenderer {
    /// Renders with the given material.
    pub fn new(material: MaterialId) -> Self {
        Self { material }
    }
}
