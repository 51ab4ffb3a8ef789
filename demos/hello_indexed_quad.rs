use anyhow::Context;
use learn_opengl::{
    buffer::{Attribute, IndexBuffer, VertexArray, VertexBuffer},
    logger,
    shader::{self, Program},
    vertex::{QUAD, QUAD_INDICES},
    Lesson, LessonApp, LessonConfig,
};

const APP_TITLE: &str = "Introduction to Modern OpenGL - Hello Indexed Quad";

struct IndexedQuad {
    program: Program,
    vao: VertexArray,
    ibo: IndexBuffer,
    _vbo: VertexBuffer,
}

impl Lesson for IndexedQuad {
    fn draw(&mut self, _gl: &glow::Context) {
        self.program.bind();
        self.vao.draw_elements(&self.ibo);
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let config = LessonConfig::new(APP_TITLE).with_env_overrides();
    let app = LessonApp::new(config)
        .context("failed to initialize OpenGL window")?
        .with_fps_title()
        .with_wireframe_toggle();
    let gl = app.gl();

    let vbo = VertexBuffer::new(gl.clone(), &QUAD).context("failed to upload vertices")?;
    let vao = VertexArray::new(gl.clone()).context("failed to create vertex array")?;
    vao.attach(&vbo, Attribute::vec3(0), 0, 0);

    // recorded in the bound vertex array
    let ibo = IndexBuffer::new(gl.clone(), &QUAD_INDICES).context("failed to upload indices")?;
    vao.unbind();

    let program = Program::link(gl, shader::FLAT_VERT, shader::QUAD_FRAG)
        .context("failed to build shader program")?;

    app.run(IndexedQuad {
        program,
        vao,
        ibo,
        _vbo: vbo,
    })?;
    Ok(())
}
