use anyhow::Context;
use learn_opengl::{
    buffer::{Attribute, VertexArray, VertexBuffer},
    logger,
    shader::{self, Program},
    vertex::TRIANGLE,
    Lesson, LessonApp, LessonConfig,
};

const APP_TITLE: &str = "Introduction to Modern OpenGL - Hello Triangle";

struct Triangle {
    program: Program,
    vao: VertexArray,
    vbo: VertexBuffer,
}

impl Lesson for Triangle {
    fn draw(&mut self, _gl: &glow::Context) {
        self.program.bind();
        self.vao.draw_arrays(self.vbo.len());
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let config = LessonConfig::new(APP_TITLE).with_env_overrides();
    let app = LessonApp::new(config)
        .context("failed to initialize OpenGL window")?
        .with_fps_title();
    let gl = app.gl();

    let vbo = VertexBuffer::new(gl.clone(), &TRIANGLE).context("failed to upload vertices")?;
    let vao = VertexArray::new(gl.clone()).context("failed to create vertex array")?;
    vao.attach(&vbo, Attribute::vec3(0), 0, 0);

    let program = Program::link(gl, shader::FLAT_VERT, shader::FLAT_FRAG)
        .context("failed to build shader program")?;

    app.run(Triangle { program, vao, vbo })?;
    Ok(())
}
