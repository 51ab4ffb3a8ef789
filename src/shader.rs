//! Shader compilation and program linking.

use std::{fmt, rc::Rc};

use glow::HasContext;

use crate::{Error, Result};

/// Position at location 0, one constant color.
pub const FLAT_VERT: &str = r#"#version 330 core
layout (location = 0) in vec3 pos;

void main()
{
    gl_Position = vec4(pos.x, pos.y, pos.z, 1.0);
}
"#;

pub const FLAT_FRAG: &str = r#"#version 330 core
out vec4 frag_color;

void main()
{
    frag_color = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

/// Position at location 0, color at location 1.
pub const COLORED_VERT: &str = r#"#version 330 core
layout (location = 0) in vec3 pos;
layout (location = 1) in vec3 color;

out vec3 vert_color;

void main()
{
    vert_color = color;
    gl_Position = vec4(pos.x, pos.y, pos.z, 1.0);
}
"#;

pub const COLORED_FRAG: &str = r#"#version 330 core
in vec3 vert_color;
out vec4 frag_color;

void main()
{
    frag_color = vec4(vert_color, 1.0f);
}
"#;

pub const QUAD_FRAG: &str = r#"#version 330 core
out vec4 frag_color;

void main()
{
    frag_color = vec4(0.35f, 0.96f, 0.3f, 1.0f);
}
"#;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A compiled stage. Deleted on drop; only needed until the program links.
pub struct Shader {
    gl: Rc<glow::Context>,
    raw: glow::NativeShader,
    stage: ShaderStage,
}

impl Shader {
    pub fn compile(gl: Rc<glow::Context>, stage: ShaderStage, source: &str) -> Result<Shader> {
        unsafe {
            let raw = gl
                .create_shader(stage.gl_type())
                .map_err(Error::gl_object("shader"))?;
            gl.shader_source(raw, source);
            gl.compile_shader(raw);

            if !gl.get_shader_compile_status(raw) {
                let log = gl.get_shader_info_log(raw);
                gl.delete_shader(raw);
                tracing::error!("{stage} shader failed to compile: {log}");
                return Err(Error::ShaderCompile { stage, log });
            }

            Ok(Shader { gl, raw, stage })
        }
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { self.gl.delete_shader(self.raw) };
    }
}

/// A linked vertex + fragment program.
pub struct Program {
    gl: Rc<glow::Context>,
    raw: glow::NativeProgram,
}

impl Program {
    pub fn link(gl: Rc<glow::Context>, vertex_src: &str, fragment_src: &str) -> Result<Program> {
        let vs = Shader::compile(gl.clone(), ShaderStage::Vertex, vertex_src)?;
        let fs = Shader::compile(gl.clone(), ShaderStage::Fragment, fragment_src)?;

        unsafe {
            let raw = gl.create_program().map_err(Error::gl_object("program"))?;
            gl.attach_shader(raw, vs.raw);
            gl.attach_shader(raw, fs.raw);
            gl.link_program(raw);

            // the linked program keeps its own copy of the stages
            gl.detach_shader(raw, vs.raw);
            gl.detach_shader(raw, fs.raw);

            if !gl.get_program_link_status(raw) {
                let log = gl.get_program_info_log(raw);
                gl.delete_program(raw);
                tracing::error!("shader program linker failure: {log}");
                return Err(Error::ProgramLink { log });
            }

            tracing::debug!(program = raw.0.get(), "linked shader program");
            Ok(Program { gl, raw })
        }
    }

    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.raw)) };
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        tracing::debug!(program = self.raw.0.get(), "deleting shader program");
        unsafe { self.gl.delete_program(self.raw) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(&str, &str); 5] = [
        ("flat vertex", FLAT_VERT),
        ("flat fragment", FLAT_FRAG),
        ("colored vertex", COLORED_VERT),
        ("colored fragment", COLORED_FRAG),
        ("quad fragment", QUAD_FRAG),
    ];

    #[test]
    fn sources_target_glsl_330_core() {
        for (name, src) in ALL {
            assert!(src.starts_with("#version 330 core\n"), "{name}");
            assert!(src.contains("void main()"), "{name}");
        }
    }

    #[test]
    fn attribute_locations() {
        assert!(FLAT_VERT.contains("layout (location = 0) in vec3 pos;"));
        assert!(COLORED_VERT.contains("layout (location = 0) in vec3 pos;"));
        assert!(COLORED_VERT.contains("layout (location = 1) in vec3 color;"));
    }

    #[test]
    fn colored_stages_share_the_varying() {
        assert!(COLORED_VERT.contains("out vec3 vert_color;"));
        assert!(COLORED_FRAG.contains("in vec3 vert_color;"));
    }

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
    }
}
