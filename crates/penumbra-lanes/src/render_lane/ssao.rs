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

//! Ambient occlusion sample kernel and rotation noise.

use super::render_target::GpuTexture;
use glam::{Vec2, Vec3, Vec4};
use penumbra_core::{
    math::Extent2D,
    renderer::{
        CommandEncoder, FilterMode, GraphicsDevice, ResourceError, TextureDescriptor,
        TextureFormat, TextureUnit, UniformValue,
    },
};
use rand::prelude::*;
use std::sync::Arc;

const KERNEL_SEED: u64 = 42;
const NOISE_SEED: u64 = 12345;

/// Generates `count` sample offsets in the +Z unit hemisphere.
///
/// Samples get longer with their index on a quadratic curve, so most of them
/// stay close to the shaded point.
pub fn generate_kernel(count: u32, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(0.01..1.0),
            )
            .normalize();
            let t = i as f32 / count as f32;
            let scale = 0.1 + 0.9 * t * t;
            direction * rng.gen_range(0.0..1.0f32) * scale
        })
        .collect()
}

/// Generates `count` unit rotation vectors around +Z.
pub fn generate_noise(count: u32, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            Vec3::new(angle.cos(), angle.sin(), 0.0)
        })
        .collect()
}

/// The occlusion kernel and the noise tile that rotates it per pixel.
#[derive(Debug)]
pub struct SsaoKernel {
    samples: Vec<Vec3>,
    sample_uniforms: Vec<String>,
    noise: GpuTexture,
    noise_side: u32,
}

impl SsaoKernel {
    /// Builds a kernel of `sample_count` offsets and a square noise tile holding at
    /// least `noise_size` rotations. Seeds are fixed, so every run gets the same set.
    pub fn generate(
        device: &Arc<dyn GraphicsDevice>,
        sample_count: u32,
        noise_size: u32,
    ) -> Result<Self, ResourceError> {
        let samples = generate_kernel(sample_count, &mut StdRng::seed_from_u64(KERNEL_SEED));
        let sample_uniforms = (0..samples.len()).map(|i| format!("kernel[{i}]")).collect();

        let noise_side = (noise_size.max(1) as f32).sqrt().ceil() as u32;
        let rotations = generate_noise(noise_side * noise_side, &mut StdRng::seed_from_u64(NOISE_SEED));
        let texels: Vec<Vec4> = rotations.iter().map(|r| r.extend(0.0)).collect();

        let noise = GpuTexture::new(
            device,
            &TextureDescriptor::empty_2d(
                "SSAO Noise",
                Extent2D::new(noise_side, noise_side),
                TextureFormat::Rgba32Float,
                FilterMode::Nearest,
            ),
        )?;
        noise.write(bytemuck::cast_slice(&texels))?;

        log::debug!(
            "Generated SSAO kernel: {} samples, {}x{} noise tile",
            samples.len(),
            noise_side,
            noise_side
        );
        Ok(Self {
            samples,
            sample_uniforms,
            noise,
            noise_side,
        })
    }

    /// The kernel offsets.
    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }

    /// The noise tile texture.
    pub fn noise(&self) -> &GpuTexture {
        &self.noise
    }

    /// Uploads the kernel and binds the noise tile, scaled to repeat over `surface`.
    pub fn bind(&self, encoder: &mut dyn CommandEncoder, surface: Extent2D) {
        for (name, sample) in self.sample_uniforms.iter().zip(&self.samples) {
            encoder.set_uniform(name, (*sample).into());
        }
        encoder.set_uniform("kernelSize", UniformValue::Int(self.samples.len() as i32));
        encoder.bind_texture(TextureUnit::Noise, Some(self.noise.id()));
        encoder.set_uniform("noiseMap", TextureUnit::Noise.into());
        let scale = Vec2::new(surface.width as f32, surface.height as f32) / self.noise_side as f32;
        encoder.set_uniform("noiseScale", scale.into());
    }
}
