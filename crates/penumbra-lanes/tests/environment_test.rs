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

mod common;

use common::{fixtures, MockGpu};
use glam::Vec4;
use penumbra_core::renderer::{CompareFunction, TextureDimension, TextureFormat, UniformValue};
use penumbra_data::{Scene, SkySource};
use penumbra_lanes::DeferredError;

fn sky_scene(gpu: &MockGpu, dimension: TextureDimension) -> Scene {
    let sky = gpu.solid_texture("sky", dimension, Vec4::new(0.2, 0.4, 0.8, 1.0));
    let mut scene = fixtures::lit_scene();
    scene.set_sky(Some(match dimension {
        TextureDimension::Cube => SkySource::Cubemap(sky),
        TextureDimension::D2 => SkySource::Sphere(sky),
    }));
    scene
}

#[test]
fn cubemap_sky_is_precomputed_at_creation() {
    let gpu = MockGpu::new();
    let scene = sky_scene(&gpu, TextureDimension::Cube);
    let renderer = fixtures::renderer(&gpu, &scene, 800, 600);

    let environment = renderer.environment().unwrap();
    let irradiance = gpu.texture(environment.irradiance().id()).unwrap();
    assert_eq!(irradiance.dimension, TextureDimension::Cube);
    assert_eq!(irradiance.size.width, 32);
    let prefiltered = gpu.texture(environment.prefiltered().id()).unwrap();
    assert_eq!(prefiltered.mip_level_count, 5);
    assert_eq!(prefiltered.size.width, 128);
    let scale_bias = gpu.texture(environment.scale_bias().id()).unwrap();
    assert_eq!(scale_bias.format, TextureFormat::Rg16Float);
    assert_eq!(scale_bias.dimension, TextureDimension::D2);

    // Every face of the irradiance map and of each prefilter level, plus the table.
    assert_eq!(gpu.draws_with("Irradiance.frag").len(), 6);
    let prefilter = gpu.draws_with("Prefilter.frag");
    assert_eq!(prefilter.len(), 6 * 5);
    assert_eq!(prefilter[0].uniform("roughness"), Some(UniformValue::Float(0.0)));
    assert_eq!(prefilter[29].uniform("roughness"), Some(UniformValue::Float(1.0)));
    assert_eq!(gpu.draws_with("ScaleBias.frag").len(), 1);

    let sky = scene.sky().unwrap().texture();
    assert!(prefilter.iter().all(|d| d.sampled("environmentMap") == Some(sky)));
    assert_eq!(prefilter[0].uniform("isSphereMap"), Some(UniformValue::Bool(false)));

    // Precompute programs and capture targets are gone once creation returns.
    assert_eq!(gpu.live_programs(), 14);
    assert_eq!(gpu.live_framebuffers(), 6);
}

#[test]
fn indirect_lighting_samples_the_environment() {
    let gpu = MockGpu::new();
    let scene = sky_scene(&gpu, TextureDimension::Cube);
    let mut renderer = fixtures::renderer(&gpu, &scene, 800, 600);
    gpu.clear_log();
    renderer.update(&mut gpu.encoder(), &scene).unwrap();

    let environment = renderer.environment().unwrap();
    let indirect = gpu.draws_with("DeferredIndirect.frag").remove(0);
    assert_eq!(indirect.sampled("irradianceMap"), Some(environment.irradiance().id()));
    assert_eq!(indirect.sampled("prefilterEnvmap"), Some(environment.prefiltered().id()));
    assert_eq!(indirect.sampled("scaleBiasMap"), Some(environment.scale_bias().id()));
    assert_eq!(indirect.sampled("noiseMap"), Some(renderer.ssao().noise().id()));
}

#[test]
fn cubemap_sky_uses_the_skybox_program() {
    let gpu = MockGpu::new();
    let scene = sky_scene(&gpu, TextureDimension::Cube);
    let mut renderer = fixtures::renderer(&gpu, &scene, 800, 600);
    gpu.clear_log();
    let stats = renderer.update(&mut gpu.encoder(), &scene).unwrap();
    assert!(stats.sky_drawn);

    let sky = gpu.draws_with("Skybox.frag").remove(0);
    assert_eq!(sky.sampled("skybox"), scene.sky().map(|s| s.texture()));
    assert_eq!(sky.target, Some(renderer.targets().unwrap().hdr().target().framebuffer()));
    assert!(sky.depth_mask);
    assert_eq!(sky.depth_func, CompareFunction::LessEqual);
    assert!(gpu.draws_with("Skysphere.frag").is_empty());
    assert!(matches!(sky.uniform("cameraBasis"), Some(UniformValue::Mat4(_))));
    assert!(matches!(sky.uniform("persp"), Some(UniformValue::Vec2(_))));
}

#[test]
fn spherical_sky_uses_the_skysphere_program() {
    let gpu = MockGpu::new();
    let scene = sky_scene(&gpu, TextureDimension::D2);
    let mut renderer = fixtures::renderer(&gpu, &scene, 800, 600);
    assert_eq!(
        gpu.draws_with("Irradiance.frag")[0].uniform("isSphereMap"),
        Some(UniformValue::Bool(true))
    );
    gpu.clear_log();
    renderer.update(&mut gpu.encoder(), &scene).unwrap();

    let sky = gpu.draws_with("Skysphere.frag").remove(0);
    assert_eq!(sky.sampled("tex"), scene.sky().map(|s| s.texture()));
    assert!(gpu.draws_with("Skybox.frag").is_empty());
}

#[test]
fn no_sky_skips_the_pass_and_leaves_ibl_unbound() {
    let gpu = MockGpu::new();
    let scene = fixtures::lit_scene();
    let mut renderer = fixtures::renderer(&gpu, &scene, 800, 600);
    assert!(renderer.environment().is_none());
    assert!(gpu.draws().is_empty());

    let stats = renderer.update(&mut gpu.encoder(), &scene).unwrap();
    assert!(!stats.sky_drawn);
    assert!(gpu.draws_with("Skybox.frag").is_empty());
    assert!(gpu.draws_with("Skysphere.frag").is_empty());
    let indirect = gpu.draws_with("DeferredIndirect.frag").remove(0);
    assert_eq!(indirect.sampled("irradianceMap"), None);
}

#[test]
fn environment_follows_scene_sky_changes() {
    let gpu = MockGpu::new();
    let mut scene = fixtures::lit_scene();
    let mut renderer = fixtures::renderer(&gpu, &scene, 800, 600);
    let mut encoder = gpu.encoder();

    let sky = gpu.solid_texture("sky", TextureDimension::Cube, Vec4::ONE);
    scene.set_sky(Some(SkySource::Cubemap(sky)));
    renderer.load_environment(&mut encoder, &scene).unwrap();
    assert!(renderer.environment().is_some());
    let textures_with_sky = gpu.live_textures();

    scene.set_sky(None);
    renderer.load_environment(&mut encoder, &scene).unwrap();
    assert!(renderer.environment().is_none());
    assert_eq!(gpu.live_textures(), textures_with_sky - 3);

    let stats = renderer.update(&mut encoder, &scene).unwrap();
    assert!(stats.presented);
}

#[test]
fn failed_reload_keeps_the_previous_environment() {
    let gpu = MockGpu::new();
    let mut scene = sky_scene(&gpu, TextureDimension::Cube);
    let mut renderer = fixtures::renderer(&gpu, &scene, 800, 600);
    let irradiance = renderer.environment().unwrap().irradiance().id();
    let textures = gpu.live_textures();

    let replacement = gpu.solid_texture("new sky", TextureDimension::D2, Vec4::ONE);
    scene.set_sky(Some(SkySource::Sphere(replacement)));
    gpu.fail_fragment("Prefilter.frag");
    let err = renderer.load_environment(&mut gpu.encoder(), &scene).unwrap_err();
    assert!(matches!(err, DeferredError::EnvironmentShader { stage: "prefilter", .. }));

    assert_eq!(renderer.environment().unwrap().irradiance().id(), irradiance);
    assert!(gpu.texture(irradiance).is_some());
    assert_eq!(gpu.live_textures(), textures + 1);
    assert_eq!(gpu.live_programs(), 14);

    gpu.clear_log();
    renderer.update(&mut gpu.encoder(), &scene).unwrap();
    let indirect = gpu.draws_with("DeferredIndirect.frag").remove(0);
    assert_eq!(indirect.sampled("irradianceMap"), Some(irradiance));
}
