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

//! Shader program handles and the uniform values they accept.

use crate::math::{Mat4, Vec2, Vec3, Vec4};
use crate::renderer::api::TextureUnit;
use std::borrow::Cow;

/// An opaque handle to a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderProgramId(pub usize);

/// The source files of a vertex + fragment program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderSource<'a> {
    /// Path of the vertex stage source.
    pub vertex: Cow<'a, str>,
    /// Path of the fragment stage source.
    pub fragment: Cow<'a, str>,
}

impl<'a> ShaderSource<'a> {
    /// Creates a source pair from two paths.
    pub fn new(vertex: impl Into<Cow<'a, str>>, fragment: impl Into<Cow<'a, str>>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// A value uploaded to a named uniform of the program in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i32),
    /// A single float.
    Float(f32),
    /// A two-component vector.
    Vec2(Vec2),
    /// A three-component vector.
    Vec3(Vec3),
    /// A four-component vector.
    Vec4(Vec4),
    /// A column-major 4x4 matrix.
    Mat4(Mat4),
    /// A sampler reading from the given texture unit.
    Sampler(TextureUnit),
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec2> for UniformValue {
    fn from(value: Vec2) -> Self {
        UniformValue::Vec2(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

impl From<TextureUnit> for UniformValue {
    fn from(value: TextureUnit) -> Self {
        UniformValue::Sampler(value)
    }
}
