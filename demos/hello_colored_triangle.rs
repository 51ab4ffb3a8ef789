use anyhow::Context;
use learn_opengl::{
    buffer::{Attribute, VertexArray, VertexBuffer},
    logger,
    shader::{self, Program},
    vertex::{TRIANGLE, TRIANGLE_COLORS},
    Lesson, LessonApp, LessonConfig,
};

const APP_TITLE: &str = "Introduction to Modern OpenGL - Hello Colored Triangle 2";

struct ColoredTriangle {
    program: Program,
    vao: VertexArray,
    positions: VertexBuffer,
    _colors: VertexBuffer,
}

impl Lesson for ColoredTriangle {
    fn draw(&mut self, _gl: &glow::Context) {
        self.program.bind();
        self.vao.draw_arrays(self.positions.len());
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let config = LessonConfig::new(APP_TITLE).with_env_overrides();
    let app = LessonApp::new(config)
        .context("failed to initialize OpenGL window")?
        .with_fps_title();
    let gl = app.gl();

    // positions and colors live in two separate buffers
    let positions =
        VertexBuffer::new(gl.clone(), &TRIANGLE).context("failed to upload positions")?;
    let colors =
        VertexBuffer::new(gl.clone(), &TRIANGLE_COLORS).context("failed to upload colors")?;

    let vao = VertexArray::new(gl.clone()).context("failed to create vertex array")?;
    vao.attach(&positions, Attribute::vec3(0), 0, 0);
    vao.attach(&colors, Attribute::vec3(1), 0, 0);

    let program = Program::link(gl, shader::COLORED_VERT, shader::COLORED_FRAG)
        .context("failed to build shader program")?;

    app.run(ColoredTriangle {
        program,
        vao,
        positions,
        _colors: colors,
    })?;
    Ok(())
}
