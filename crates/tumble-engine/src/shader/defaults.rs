use crate::gl::ShaderStage;

/// Built-in vertex stage: positions at attribute 0, model-view and projection
/// matrices as uniforms.
pub const DEFAULT_VERTEX_SHADER: &str = r#"#version 410
layout (location = 0) in vec3 position;

uniform mat4 mv_matrix;
uniform mat4 p_matrix;

void main()
{
    gl_Position = p_matrix * mv_matrix * vec4(position, 1.0);
}
"#;

/// Built-in fragment stage: flat per-draw color.
pub const DEFAULT_FRAGMENT_SHADER: &str = r#"#version 410
uniform vec4 uColor;
out vec4 outColor;

void main()
{
    outColor = uColor;
}
"#;

pub fn default_source(stage: ShaderStage) -> &'static str {
    match stage {
        ShaderStage::Vertex => DEFAULT_VERTEX_SHADER,
        ShaderStage::Fragment => DEFAULT_FRAGMENT_SHADER,
    }
}
