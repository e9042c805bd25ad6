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

use crate::ecs::EntityId;

/// A component that attaches an entity to a parent for rendering.
///
/// The parent's transform is composed in front of the entity's own transform
/// when the model matrix is built. The entity's stored [`Transform`](super::Transform)
/// is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachedTo {
    /// The entity this one is attached to.
    pub parent: EntityId,
}

impl AttachedTo {
    /// Attaches to `parent`.
    pub fn new(parent: EntityId) -> Self {
        Self { parent }
    }
}
