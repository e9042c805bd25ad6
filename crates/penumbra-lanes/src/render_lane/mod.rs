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

//! Rendering lane - the deferred pipeline and the resources it owns.

mod deferred_lane;
mod environment;
mod ping_pong;
mod render_target;
mod settings;
mod shader_set;
mod ssao;

pub use deferred_lane::*;
pub use environment::*;
pub use ping_pong::*;
pub use render_target::*;
pub use settings::*;
pub use shader_set::*;
pub use ssao::{generate_kernel, generate_noise, SsaoKernel};
