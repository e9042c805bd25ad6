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

//! Defines the core architectural traits for the rendering subsystem.
//!
//! This module contains the fundamental contracts that decouple the deferred
//! pipeline from any specific graphics backend.
//!
//! - [`GraphicsDevice`]: The interface for creating and destroying GPU resources.
//! - [`CommandEncoder`]: The interface for fixed-function state changes and draws.

mod command_recorder;
mod graphics_device;

pub use self::command_recorder::CommandEncoder;
pub use self::graphics_device::GraphicsDevice;
