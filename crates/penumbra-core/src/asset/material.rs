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

//! Defines the material contract used by the geometry pass.

use crate::renderer::traits::CommandEncoder;
use std::fmt::Debug;

/// A trait for types that can be used as a surface material.
///
/// The geometry pass calls [`Material::bind`] right before drawing an entity and
/// [`Material::release`] right after, with the geometry-buffer program in use.
/// A material uploads whatever uniforms and texture bindings it needs in `bind`
/// and undoes every binding it made in `release`, so the next entity starts from
/// a clean program state.
pub trait Material: Debug + Send + Sync {
    /// Uploads this material's uniforms and binds its textures.
    fn bind(&self, encoder: &mut dyn CommandEncoder);

    /// Restores the program and texture state changed by [`Material::bind`].
    fn release(&self, encoder: &mut dyn CommandEncoder);
}
