use crate::gl::GraphicsApi;

use super::builder::ProgramHandle;

/// Uniform names the renderer looks up in the linked program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformNames {
    pub model_view: String,
    pub projection: String,
    /// Per-mesh flat color, optional in the shader.
    pub color: String,
    /// Accumulated time in seconds, optional in the shader.
    pub time_factor: String,
}

impl Default for UniformNames {
    fn default() -> Self {
        Self {
            model_view: "mv_matrix".to_string(),
            projection: "p_matrix".to_string(),
            color: "uColor".to_string(),
            time_factor: "tf".to_string(),
        }
    }
}

/// Uniform locations resolved once against a linked program.
///
/// A `None` entry means the program does not use that uniform (or the
/// compiler optimized it away); uploads to it are skipped.
pub struct UniformBindings<G: GraphicsApi> {
    pub model_view: Option<G::UniformLocation>,
    pub projection: Option<G::UniformLocation>,
    pub color: Option<G::UniformLocation>,
    pub time_factor: Option<G::UniformLocation>,
}

impl<G: GraphicsApi> UniformBindings<G> {
    pub fn resolve(gl: &G, program: &ProgramHandle<G>, names: &UniformNames) -> Self {
        let raw = program.raw();

        let required = |name: &str| {
            let loc = gl.uniform_location(raw, name);
            if loc.is_none() {
                log::warn!("uniform `{name}` not found in program; uploads will be skipped");
            }
            loc
        };
        let optional = |name: &str| {
            let loc = gl.uniform_location(raw, name);
            if loc.is_none() {
                log::debug!("optional uniform `{name}` not present in program");
            }
            loc
        };

        Self {
            model_view: required(&names.model_view),
            projection: required(&names.projection),
            color: optional(&names.color),
            time_factor: optional(&names.time_factor),
        }
    }

    pub fn upload_model_view(&self, gl: &G, value: &[f32; 16]) {
        if let Some(loc) = &self.model_view {
            gl.uniform_mat4(loc, value);
        }
    }

    pub fn upload_projection(&self, gl: &G, value: &[f32; 16]) {
        if let Some(loc) = &self.projection {
            gl.uniform_mat4(loc, value);
        }
    }

    pub fn upload_color(&self, gl: &G, value: [f32; 4]) {
        if let Some(loc) = &self.color {
            gl.uniform_vec4(loc, value);
        }
    }

    pub fn upload_time_factor(&self, gl: &G, value: f32) {
        if let Some(loc) = &self.time_factor {
            gl.uniform_f32(loc, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::fake::{Call, FakeGl};
    use crate::shader::{link_program, ShaderSource};

    #[test]
    fn resolves_default_names_against_built_in_program() {
        let gl = FakeGl::new();
        let program = link_program(&gl, &ShaderSource::built_in()).unwrap();
        let bindings = UniformBindings::resolve(&gl, &program, &UniformNames::default());

        assert!(bindings.model_view.is_some());
        assert!(bindings.projection.is_some());
        assert!(bindings.color.is_some());
        // The built-in shaders carry no time factor.
        assert!(bindings.time_factor.is_none());
    }

    #[test]
    fn absent_uniforms_skip_uploads() {
        let gl = FakeGl::new();
        let src = ShaderSource::from_strings(
            "uniform mat4 mvp;\nvoid main() {}\n",
            "void main() {}\n",
        );
        let program = link_program(&gl, &src).unwrap();
        let bindings = UniformBindings::resolve(&gl, &program, &UniformNames::default());

        gl.clear_calls();
        bindings.upload_model_view(&gl, &[0.0; 16]);
        bindings.upload_color(&gl, [1.0, 0.0, 0.0, 1.0]);
        bindings.upload_time_factor(&gl, 2.0);
        assert!(gl.calls().is_empty());
    }

    #[test]
    fn custom_names_are_honored() {
        let gl = FakeGl::new();
        let src = ShaderSource::from_strings(
            "uniform mat4 u_model_view;\nuniform mat4 u_proj;\nuniform float u_time;\nvoid main() {}\n",
            "void main() {}\n",
        );
        let program = link_program(&gl, &src).unwrap();
        let names = UniformNames {
            model_view: "u_model_view".into(),
            projection: "u_proj".into(),
            color: "u_color".into(),
            time_factor: "u_time".into(),
        };
        let bindings = UniformBindings::resolve(&gl, &program, &names);

        gl.clear_calls();
        bindings.upload_time_factor(&gl, 1.5);
        assert_eq!(
            gl.calls(),
            vec![Call::UniformF32 { name: "u_time".into(), value: 1.5 }]
        );
    }
}
