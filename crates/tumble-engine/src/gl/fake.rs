//! Recording in-memory [`GraphicsApi`] used by unit tests.
//!
//! Tracks every live object so tests can assert that nothing leaks, records
//! the calls that matter for frame assertions, and lets tests script failures.
//!
//! Compile rule: a stage compiles iff its source contains `void main(`.
//! Uniform rule: a linked program exposes every `uniform <type> <name>;`
//! declaration found in its attached sources.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use super::{GraphicsApi, ShaderStage};

/// Snapshot of live object counts.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LiveObjects {
    pub shaders: usize,
    pub programs: usize,
    pub buffers: usize,
    pub vertex_arrays: usize,
}

impl LiveObjects {
    pub fn total(&self) -> usize {
        self.shaders + self.programs + self.buffers + self.vertex_arrays
    }
}

/// Calls recorded for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear([f32; 4]),
    UseProgram(Option<u32>),
    BindVertexArray(Option<u32>),
    BindArrayBuffer(Option<u32>),
    UniformMat4 { name: String, value: [f32; 16] },
    UniformVec4 { name: String, value: [f32; 4] },
    UniformF32 { name: String, value: f32 },
    Viewport(i32, i32),
    EnableDepthTest,
    Draw { first: i32, count: i32, instances: i32 },
    GetError,
}

#[derive(Debug)]
struct FakeShader {
    source: String,
}

#[derive(Debug, Default)]
struct FakeProgram {
    attached: Vec<u32>,
    uniforms: HashSet<String>,
    linked: bool,
}

#[derive(Debug, Default)]
struct State {
    next_name: u32,
    shaders: HashMap<u32, FakeShader>,
    programs: HashMap<u32, FakeProgram>,
    buffers: HashSet<u32>,
    vertex_arrays: HashSet<u32>,
    buffer_sizes: HashMap<u32, usize>,
    bound_buffer: Option<u32>,

    calls: Vec<Call>,
    errors: VecDeque<u32>,
    sticky_error: Option<u32>,

    fail_link: bool,
    fail_create_shader: Option<ShaderStage>,
    fail_create_program: bool,
    fail_create_buffer: bool,
}

impl State {
    fn alloc(&mut self) -> u32 {
        self.next_name += 1;
        self.next_name
    }
}

/// Recording fake GL.
#[derive(Debug, Default)]
pub struct FakeGl {
    state: RefCell<State>,
}

/// Opaque uniform location: the uniform name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeLocation(pub String);

impl FakeGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> LiveObjects {
        let s = self.state.borrow();
        LiveObjects {
            shaders: s.shaders.len(),
            programs: s.programs.len(),
            buffers: s.buffers.len(),
            vertex_arrays: s.vertex_arrays.len(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn draw_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Draw { .. }))
            .collect()
    }

    pub fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    /// Byte size uploaded into `buffer`.
    pub fn buffer_size(&self, buffer: u32) -> Option<usize> {
        self.state.borrow().buffer_sizes.get(&buffer).copied()
    }

    pub fn is_program(&self, program: u32) -> bool {
        self.state.borrow().programs.contains_key(&program)
    }

    pub fn push_error(&self, code: u32) {
        self.state.borrow_mut().errors.push_back(code);
    }

    pub fn set_sticky_error(&self, code: Option<u32>) {
        self.state.borrow_mut().sticky_error = code;
    }

    pub fn fail_next_links(&self, fail: bool) {
        self.state.borrow_mut().fail_link = fail;
    }

    /// Makes every `create_shader` for `stage` fail; `None` restores creation.
    pub fn fail_shader_creation(&self, stage: Option<ShaderStage>) {
        self.state.borrow_mut().fail_create_shader = stage;
    }

    pub fn fail_program_creation(&self, fail: bool) {
        self.state.borrow_mut().fail_create_program = fail;
    }

    pub fn fail_buffer_creation(&self, fail: bool) {
        self.state.borrow_mut().fail_create_buffer = fail;
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

fn declared_uniforms(source: &str) -> impl Iterator<Item = String> + '_ {
    source.lines().filter_map(|line| {
        let rest = line.trim().strip_prefix("uniform ")?;
        let name = rest.split_whitespace().nth(1)?;
        Some(name.trim_end_matches(';').to_string())
    })
}

impl GraphicsApi for FakeGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = FakeLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        if s.fail_create_shader == Some(stage) {
            return Err(format!("cannot create {stage} shader"));
        }
        let name = s.alloc();
        s.shaders.insert(name, FakeShader { source: String::new() });
        Ok(name)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(sh) = self.state.borrow_mut().shaders.get_mut(&shader) {
            sh.source = source.to_string();
        }
    }

    fn compile_shader(&self, _shader: u32) {}

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .is_some_and(|sh| sh.source.contains("void main("))
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:1(1): error: entry point `main` not found".to_string()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        if s.fail_create_program {
            return Err("cannot create program".to_string());
        }
        let name = s.alloc();
        s.programs.insert(name, FakeProgram::default());
        Ok(name)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.push(shader);
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.retain(|&s| s != shader);
        }
    }

    fn link_program(&self, program: u32) {
        let mut s = self.state.borrow_mut();
        let fail = s.fail_link;
        let Some(attached) = s.programs.get(&program).map(|p| p.attached.clone()) else {
            return;
        };
        let uniforms: HashSet<String> = attached
            .iter()
            .filter_map(|sh| s.shaders.get(sh))
            .flat_map(|sh| declared_uniforms(&sh.source).collect::<Vec<_>>())
            .collect();
        if let Some(p) = s.programs.get_mut(&program) {
            p.linked = !fail;
            p.uniforms = uniforms;
        }
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state
            .borrow()
            .programs
            .get(&program)
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: vertex shader output `v_color` not read by fragment shader".to_string()
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.state.borrow_mut().programs.remove(&program);
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<FakeLocation> {
        let s = self.state.borrow();
        let p = s.programs.get(&program)?;
        (p.linked && p.uniforms.contains(name)).then(|| FakeLocation(name.to_string()))
    }

    fn uniform_mat4(&self, location: &FakeLocation, value: &[f32; 16]) {
        self.record(Call::UniformMat4 {
            name: location.0.clone(),
            value: *value,
        });
    }

    fn uniform_vec4(&self, location: &FakeLocation, value: [f32; 4]) {
        self.record(Call::UniformVec4 {
            name: location.0.clone(),
            value,
        });
    }

    fn uniform_f32(&self, location: &FakeLocation, value: f32) {
        self.record(Call::UniformF32 {
            name: location.0.clone(),
            value,
        });
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        let name = s.alloc();
        s.vertex_arrays.insert(name);
        Ok(name)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.state.borrow_mut().vertex_arrays.remove(&vertex_array);
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        if s.fail_create_buffer {
            return Err("out of buffer names".to_string());
        }
        let name = s.alloc();
        s.buffers.insert(name);
        Ok(name)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.state.borrow_mut().bound_buffer = buffer;
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[u8]) {
        let mut s = self.state.borrow_mut();
        if let Some(bound) = s.bound_buffer {
            s.buffer_sizes.insert(bound, data.len());
        }
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut s = self.state.borrow_mut();
        s.buffers.remove(&buffer);
        s.buffer_sizes.remove(&buffer);
    }

    fn vertex_attrib_vec3(&self, _index: u32) {}

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear(&self, color: [f32; 4]) {
        self.record(Call::Clear(color));
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::Draw {
            first,
            count,
            instances: 1,
        });
    }

    fn draw_triangles_instanced(&self, first: i32, count: i32, instances: i32) {
        self.record(Call::Draw {
            first,
            count,
            instances,
        });
    }

    fn get_error(&self) -> Option<u32> {
        let mut s = self.state.borrow_mut();
        s.calls.push(Call::GetError);
        s.errors.pop_front().or(s.sticky_error)
    }
}
