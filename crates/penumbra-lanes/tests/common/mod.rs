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

//! A recording graphics backend for driving the renderer without a GPU.
//!
//! Every texture carries one representative color. A draw writes, into each
//! draw buffer of the bound target, the sum of the colors of the textures its
//! program samples plus every `*color` vector uniform. With blending on the
//! result is added to what is already there. That is enough to follow which
//! pass fed which texture through the whole frame.

#![allow(dead_code)]

use glam::Vec4;
use penumbra_core::{
    math::Extent2D,
    renderer::{
        Attachment, BlendState, Capability, ClearFlags, CommandEncoder, CompareFunction, CubeFace,
        Face, FilterMode, FramebufferId, FramebufferStatus, GpuMesh, GraphicsDevice,
        ResourceError, ShaderError, ShaderProgramId, ShaderSource, TextureDescriptor,
        TextureDimension, TextureFormat, TextureId, TextureUnit, UniformValue,
    },
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

pub const MAGENTA: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone)]
pub struct MockTexture {
    pub label: String,
    pub size: Extent2D,
    pub dimension: TextureDimension,
    pub format: TextureFormat,
    pub filter: FilterMode,
    pub mip_level_count: u32,
    pub color: Vec4,
    pub bytes_written: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MockFramebuffer {
    pub label: String,
    pub colors: BTreeMap<u32, (TextureId, u32)>,
    pub depth: Option<TextureId>,
    pub draw_buffers: Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct MockProgram {
    pub vertex: String,
    pub fragment: String,
    pub uniforms: BTreeMap<String, UniformValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub program: ShaderProgramId,
    pub fragment: String,
    pub target: Option<FramebufferId>,
    pub written: Vec<TextureId>,
    pub sampled: BTreeMap<String, Option<TextureId>>,
    pub uniforms: BTreeMap<String, UniformValue>,
    pub indexed: bool,
    pub blend: bool,
    pub depth_func: CompareFunction,
    pub depth_mask: bool,
    pub output: Vec4,
}

impl DrawRecord {
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.get(name).copied()
    }

    pub fn sampled(&self, sampler: &str) -> Option<TextureId> {
        self.sampled.get(sampler).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    BindFramebuffer(Option<FramebufferId>),
    Viewport(Extent2D),
    ClearColor([f32; 4]),
    Clear(ClearFlags),
    Enable(Capability),
    Disable(Capability),
    CullFace(Face),
    DepthMask(bool),
    DepthFunc(CompareFunction),
    BlendFunc(BlendState),
    UseProgram(ShaderProgramId),
    Uniform(String, UniformValue),
    BindTexture(TextureUnit, Option<TextureId>),
    GenerateMipmaps(TextureId),
    Draw(DrawRecord),
}

#[derive(Debug)]
pub struct MockState {
    next_id: usize,
    pub textures: HashMap<TextureId, MockTexture>,
    pub framebuffers: HashMap<FramebufferId, MockFramebuffer>,
    pub programs: HashMap<ShaderProgramId, MockProgram>,
    pub log: Vec<Command>,
    pub failing_fragment: Option<String>,
    pub forced_status: Option<(String, FramebufferStatus)>,
    pub invalid_destroys: usize,
    pub textures_created: usize,
    pub shader_loads: usize,
    pub display: Vec4,
    bound_framebuffer: Option<FramebufferId>,
    program: Option<ShaderProgramId>,
    units: HashMap<TextureUnit, TextureId>,
    clear_color: Vec4,
    capabilities: HashSet<Capability>,
    depth_func: CompareFunction,
    depth_mask: bool,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            next_id: 1,
            textures: HashMap::new(),
            framebuffers: HashMap::new(),
            programs: HashMap::new(),
            log: Vec::new(),
            failing_fragment: None,
            forced_status: None,
            invalid_destroys: 0,
            textures_created: 0,
            shader_loads: 0,
            display: Vec4::ZERO,
            bound_framebuffer: None,
            program: None,
            units: HashMap::new(),
            clear_color: Vec4::ZERO,
            capabilities: HashSet::new(),
            depth_func: CompareFunction::Less,
            depth_mask: true,
        }
    }
}

impl MockState {
    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn attachment_size(&self, (texture, mip): (TextureId, u32)) -> Option<Extent2D> {
        self.textures.get(&texture).map(|t| t.size.mip(mip))
    }

    fn status_of(&self, framebuffer: &MockFramebuffer) -> FramebufferStatus {
        if let Some((label, status)) = &self.forced_status {
            if *label == framebuffer.label {
                return *status;
            }
        }
        if framebuffer.colors.is_empty() && framebuffer.depth.is_none() {
            return FramebufferStatus::MissingAttachment;
        }
        let mut sizes = Vec::new();
        for attachment in framebuffer.colors.values() {
            match self.attachment_size(*attachment) {
                Some(size) => sizes.push(size),
                None => return FramebufferStatus::IncompleteAttachment,
            }
        }
        if let Some(depth) = framebuffer.depth {
            match self.attachment_size((depth, 0)) {
                Some(size) => sizes.push(size),
                None => return FramebufferStatus::IncompleteAttachment,
            }
        }
        if sizes.windows(2).any(|pair| pair[0] != pair[1]) {
            return FramebufferStatus::IncompleteAttachment;
        }
        if framebuffer
            .draw_buffers
            .iter()
            .any(|index| !framebuffer.colors.contains_key(index))
        {
            return FramebufferStatus::IncompleteDrawBuffer;
        }
        FramebufferStatus::Complete
    }

    fn draw_targets(&self) -> Vec<TextureId> {
        let Some(framebuffer) = self
            .bound_framebuffer
            .and_then(|id| self.framebuffers.get(&id))
        else {
            return Vec::new();
        };
        let buffers = if framebuffer.draw_buffers.is_empty() {
            vec![0]
        } else {
            framebuffer.draw_buffers.clone()
        };
        buffers
            .iter()
            .filter_map(|index| framebuffer.colors.get(index).map(|(id, _)| *id))
            .collect()
    }

    fn draw(&mut self, indexed: bool) {
        let Some(program_id) = self.program else {
            panic!("draw without a program in use");
        };
        let program = self.programs[&program_id].clone();

        let mut output = Vec4::ZERO;
        let mut sampled = BTreeMap::new();
        for (name, value) in &program.uniforms {
            match value {
                UniformValue::Sampler(unit) => {
                    let texture = self.units.get(unit).copied();
                    if let Some(color) = texture.and_then(|id| self.textures.get(&id)).map(|t| t.color) {
                        output += color;
                    }
                    sampled.insert(name.clone(), texture);
                }
                UniformValue::Vec3(v) if name.to_lowercase().ends_with("color") => {
                    output += v.extend(0.0);
                }
                UniformValue::Vec4(v) if name.to_lowercase().ends_with("color") => output += *v,
                _ => {}
            }
        }

        let blend = self.capabilities.contains(&Capability::Blend);
        let written = self.draw_targets();
        if self.bound_framebuffer.is_none() {
            self.display = if blend { self.display + output } else { output };
        }
        for id in &written {
            if let Some(texture) = self.textures.get_mut(id) {
                texture.color = if blend { texture.color + output } else { output };
            }
        }

        let record = DrawRecord {
            program: program_id,
            fragment: program.fragment.clone(),
            target: self.bound_framebuffer,
            written,
            sampled,
            uniforms: program.uniforms,
            indexed,
            blend,
            depth_func: self.depth_func,
            depth_mask: self.depth_mask,
            output,
        };
        self.log.push(Command::Draw(record));
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockGpu {
    state: Arc<Mutex<MockState>>,
}

impl MockGpu {
    pub fn new() -> Self {
        init_logging();
        Self::default()
    }

    pub fn device(&self) -> Arc<dyn GraphicsDevice> {
        Arc::new(MockDevice {
            state: self.state.clone(),
        })
    }

    pub fn encoder(&self) -> MockEncoder {
        MockEncoder {
            state: self.state.clone(),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn fail_fragment(&self, fragment_suffix: &str) {
        self.state().failing_fragment = Some(fragment_suffix.to_owned());
    }

    pub fn force_status(&self, label: &str, status: FramebufferStatus) {
        self.state().forced_status = Some((label.to_owned(), status));
    }

    /// Creates a texture outside the renderer, filled with `color`.
    pub fn solid_texture(&self, label: &str, dimension: TextureDimension, color: Vec4) -> TextureId {
        let descriptor = match dimension {
            TextureDimension::D2 => TextureDescriptor::empty_2d(
                label,
                Extent2D::new(64, 32),
                TextureFormat::Rgba8,
                FilterMode::Linear,
            ),
            TextureDimension::Cube => {
                TextureDescriptor::empty_cube(label, 64, TextureFormat::Rgba8, 1)
            }
        };
        let id = self.device().create_texture(&descriptor).unwrap();
        self.state().textures.get_mut(&id).unwrap().color = color;
        id
    }

    pub fn live_textures(&self) -> usize {
        self.state().textures.len()
    }

    pub fn live_framebuffers(&self) -> usize {
        self.state().framebuffers.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state().programs.len()
    }

    pub fn texture(&self, id: TextureId) -> Option<MockTexture> {
        self.state().textures.get(&id).cloned()
    }

    pub fn framebuffer(&self, id: FramebufferId) -> Option<MockFramebuffer> {
        self.state().framebuffers.get(&id).cloned()
    }

    pub fn display(&self) -> Vec4 {
        self.state().display
    }

    pub fn log(&self) -> Vec<Command> {
        self.state().log.clone()
    }

    pub fn clear_log(&self) {
        self.state().log.clear();
    }

    pub fn draws(&self) -> Vec<DrawRecord> {
        self.state()
            .log
            .iter()
            .filter_map(|command| match command {
                Command::Draw(draw) => Some(draw.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn draws_with(&self, fragment_suffix: &str) -> Vec<DrawRecord> {
        self.draws()
            .into_iter()
            .filter(|draw| draw.fragment.ends_with(fragment_suffix))
            .collect()
    }
}

#[derive(Debug)]
pub struct MockDevice {
    state: Arc<Mutex<MockState>>,
}

impl MockDevice {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GraphicsDevice for MockDevice {
    fn create_texture(&self, descriptor: &TextureDescriptor) -> Result<TextureId, ResourceError> {
        let mut state = self.lock();
        let id = TextureId(state.next_id());
        state.textures_created += 1;
        state.textures.insert(
            id,
            MockTexture {
                label: descriptor.label.as_deref().unwrap_or_default().to_owned(),
                size: descriptor.size,
                dimension: descriptor.dimension,
                format: descriptor.format,
                filter: descriptor.filter,
                mip_level_count: descriptor.mip_level_count,
                color: Vec4::ZERO,
                bytes_written: 0,
            },
        );
        Ok(id)
    }

    fn destroy_texture(&self, id: TextureId) -> Result<(), ResourceError> {
        let mut state = self.lock();
        if state.textures.remove(&id).is_none() {
            state.invalid_destroys += 1;
            return Err(ResourceError::InvalidTexture(id));
        }
        Ok(())
    }

    fn write_texture(&self, id: TextureId, data: &[u8]) -> Result<(), ResourceError> {
        let mut state = self.lock();
        let texture = state
            .textures
            .get_mut(&id)
            .ok_or(ResourceError::InvalidTexture(id))?;
        texture.bytes_written = data.len();
        Ok(())
    }

    fn generate_mipmaps(&self, id: TextureId) -> Result<(), ResourceError> {
        let mut state = self.lock();
        if !state.textures.contains_key(&id) {
            return Err(ResourceError::InvalidTexture(id));
        }
        state.log.push(Command::GenerateMipmaps(id));
        Ok(())
    }

    fn create_framebuffer(&self, label: Option<&str>) -> Result<FramebufferId, ResourceError> {
        let mut state = self.lock();
        let id = FramebufferId(state.next_id());
        state.framebuffers.insert(
            id,
            MockFramebuffer {
                label: label.unwrap_or_default().to_owned(),
                ..Default::default()
            },
        );
        Ok(id)
    }

    fn destroy_framebuffer(&self, id: FramebufferId) -> Result<(), ResourceError> {
        let mut state = self.lock();
        if state.framebuffers.remove(&id).is_none() {
            state.invalid_destroys += 1;
            return Err(ResourceError::InvalidFramebuffer(id));
        }
        Ok(())
    }

    fn attach_texture(
        &self,
        framebuffer: FramebufferId,
        attachment: Attachment,
        texture: TextureId,
        mip_level: u32,
    ) -> Result<(), ResourceError> {
        let mut state = self.lock();
        if !state.textures.contains_key(&texture) {
            return Err(ResourceError::InvalidTexture(texture));
        }
        let target = state
            .framebuffers
            .get_mut(&framebuffer)
            .ok_or(ResourceError::InvalidFramebuffer(framebuffer))?;
        match attachment {
            Attachment::Color(index) => {
                target.colors.insert(index, (texture, mip_level));
            }
            Attachment::Depth => target.depth = Some(texture),
        }
        Ok(())
    }

    fn attach_cube_face(
        &self,
        framebuffer: FramebufferId,
        attachment: Attachment,
        texture: TextureId,
        _face: CubeFace,
        mip_level: u32,
    ) -> Result<(), ResourceError> {
        self.attach_texture(framebuffer, attachment, texture, mip_level)
    }

    fn set_draw_buffers(
        &self,
        framebuffer: FramebufferId,
        color_attachments: &[u32],
    ) -> Result<(), ResourceError> {
        let mut state = self.lock();
        let target = state
            .framebuffers
            .get_mut(&framebuffer)
            .ok_or(ResourceError::InvalidFramebuffer(framebuffer))?;
        target.draw_buffers = color_attachments.to_vec();
        Ok(())
    }

    fn framebuffer_status(&self, framebuffer: FramebufferId) -> FramebufferStatus {
        let state = self.lock();
        match state.framebuffers.get(&framebuffer) {
            Some(target) => state.status_of(target),
            None => FramebufferStatus::Undefined,
        }
    }

    fn load_shader_program(&self, source: &ShaderSource) -> Result<ShaderProgramId, ShaderError> {
        let mut state = self.lock();
        state.shader_loads += 1;
        if let Some(failing) = &state.failing_fragment {
            if source.fragment.ends_with(failing.as_str()) {
                return Err(ShaderError::CompilationError {
                    label: source.fragment.to_string(),
                    details: "syntax error".to_owned(),
                });
            }
        }
        let id = ShaderProgramId(state.next_id());
        state.programs.insert(
            id,
            MockProgram {
                vertex: source.vertex.to_string(),
                fragment: source.fragment.to_string(),
                uniforms: BTreeMap::new(),
            },
        );
        Ok(id)
    }

    fn destroy_shader_program(&self, id: ShaderProgramId) -> Result<(), ResourceError> {
        let mut state = self.lock();
        if state.programs.remove(&id).is_none() {
            state.invalid_destroys += 1;
            return Err(ResourceError::InvalidProgram(id));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockEncoder {
    state: Arc<Mutex<MockState>>,
}

impl MockEncoder {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: Command) -> MutexGuard<'_, MockState> {
        let mut state = self.lock();
        state.log.push(command);
        state
    }
}

impl CommandEncoder for MockEncoder {
    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferId>) {
        let mut state = self.record(Command::BindFramebuffer(framebuffer));
        if let Some(id) = framebuffer {
            assert!(state.framebuffers.contains_key(&id), "binding destroyed framebuffer {id:?}");
        }
        state.bound_framebuffer = framebuffer;
    }

    fn set_viewport(&mut self, size: Extent2D) {
        self.record(Command::Viewport(size));
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        let mut state = self.record(Command::ClearColor(color));
        state.clear_color = Vec4::from_array(color);
    }

    fn clear(&mut self, flags: ClearFlags) {
        let mut state = self.record(Command::Clear(flags));
        if !flags.contains(ClearFlags::COLOR) {
            return;
        }
        let clear_color = state.clear_color;
        match state.bound_framebuffer {
            None => state.display = clear_color,
            Some(id) => {
                let attached: Vec<TextureId> = state
                    .framebuffers
                    .get(&id)
                    .map(|fb| fb.colors.values().map(|(texture, _)| *texture).collect())
                    .unwrap_or_default();
                for texture in attached {
                    if let Some(texture) = state.textures.get_mut(&texture) {
                        texture.color = clear_color;
                    }
                }
            }
        }
    }

    fn enable(&mut self, capability: Capability) {
        self.record(Command::Enable(capability))
            .capabilities
            .insert(capability);
    }

    fn disable(&mut self, capability: Capability) {
        self.record(Command::Disable(capability))
            .capabilities
            .remove(&capability);
    }

    fn set_cull_face(&mut self, face: Face) {
        self.record(Command::CullFace(face));
    }

    fn set_depth_mask(&mut self, write: bool) {
        let mut state = self.record(Command::DepthMask(write));
        state.depth_mask = write;
    }

    fn set_depth_func(&mut self, func: CompareFunction) {
        let mut state = self.record(Command::DepthFunc(func));
        state.depth_func = func;
    }

    fn set_blend_func_separate(&mut self, state: BlendState) {
        self.record(Command::BlendFunc(state));
    }

    fn use_program(&mut self, program: ShaderProgramId) {
        let mut state = self.record(Command::UseProgram(program));
        assert!(state.programs.contains_key(&program), "using destroyed program {program:?}");
        state.program = Some(program);
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        let mut state = self.record(Command::Uniform(name.to_owned(), value));
        let Some(program) = state.program else {
            panic!("uniform '{name}' set without a program in use");
        };
        if let Some(program) = state.programs.get_mut(&program) {
            program.uniforms.insert(name.to_owned(), value);
        }
    }

    fn bind_texture(&mut self, unit: TextureUnit, texture: Option<TextureId>) {
        let mut state = self.record(Command::BindTexture(unit, texture));
        match texture {
            Some(id) => state.units.insert(unit, id),
            None => state.units.remove(&unit),
        };
    }

    fn draw_fullscreen_quad(&mut self) {
        self.lock().draw(false);
    }

    fn draw_indexed(&mut self, _mesh: &GpuMesh) {
        self.lock().draw(true);
    }
}

pub mod fixtures {
    use super::*;
    use glam::Vec3;
    use penumbra_core::renderer::{
        BufferId, DirectionalLight, IndexFormat, LightType, PointLight,
    };
    use penumbra_data::{assets::StandardMaterial, ecs::Camera, ecs::Entity, ecs::Transform, Scene};
    use penumbra_lanes::{DeferredRenderer, DeferredSettings};

    pub fn cube_mesh() -> GpuMesh {
        GpuMesh {
            vertex_buffer: BufferId(1),
            index_buffer: BufferId(2),
            index_count: 36,
            index_format: IndexFormat::Uint32,
        }
    }

    pub fn sun() -> LightType {
        LightType::Directional(DirectionalLight::new(Vec3::NEG_Y, Vec3::ONE))
    }

    pub fn lamp(color: Vec3) -> LightType {
        LightType::Point(PointLight::new(color))
    }

    /// A camera at the origin looking down -Z, a directional light, and one lit cube.
    pub fn lit_scene() -> Scene {
        let mut scene = Scene::new();
        let eye = scene.spawn(Entity::new("eye").with_camera(Camera::default()));
        scene.set_main_camera(eye);
        scene.spawn_light(Entity::new("sun").with_light(sun()));

        let material = scene.add_material(Arc::new(StandardMaterial {
            albedo_color: Vec4::new(0.8, 0.6, 0.4, 1.0),
            ..Default::default()
        }));
        scene.spawn(
            Entity::new("cube")
                .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, -5.0)))
                .with_mesh(cube_mesh())
                .with_renderer(material),
        );
        scene
    }

    pub fn renderer(gpu: &MockGpu, scene: &Scene, width: u32, height: u32) -> DeferredRenderer {
        let mut encoder = gpu.encoder();
        let mut renderer =
            DeferredRenderer::create(gpu.device(), &mut encoder, scene, DeferredSettings::default())
                .expect("renderer creation");
        renderer
            .resize(&mut encoder, width, height)
            .expect("initial resize");
        renderer
    }
}
