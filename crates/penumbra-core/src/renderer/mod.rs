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

//! Provides the public, backend-agnostic rendering contracts for Penumbra.
//!
//! This module defines the "common language" for all rendering operations. It contains
//! the abstract `traits` ([`GraphicsDevice`] and [`CommandEncoder`]), the descriptor
//! and handle types they exchange, and the error types that form the stable API.
//!
//! The module defines the 'what' of rendering. The 'how' belongs to a backend that
//! implements the traits; the deferred lanes drive those traits without knowing
//! which graphics API sits underneath.

pub mod api;
pub mod error;
pub mod light;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::*;
pub use self::error::{ResourceError, ShaderError};
pub use self::light::{DirectionalLight, LightType, PointLight};
pub use self::traits::{CommandEncoder, GraphicsDevice};
