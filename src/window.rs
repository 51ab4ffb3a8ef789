use std::rc::Rc;

use glow::HasContext;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::{config::LessonConfig, Error, Result};

/// A window with a current OpenGL core-profile context and its loaded
/// function table.
pub struct GlWindow {
    context: WindowedContext<PossiblyCurrent>,
    gl: Rc<glow::Context>,
}

impl GlWindow {
    pub fn new(event_loop: &EventLoop<()>, config: &LessonConfig) -> Result<GlWindow> {
        let window_builder = WindowBuilder::new()
            .with_title(&*config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let version = config.gl_version;
        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(
                Api::OpenGl,
                (version.major, version.minor),
            ))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(config.vsync)
            .build_windowed(window_builder, event_loop)?;

        let context = unsafe { context.make_current() }.map_err(|(_, err)| err)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| context.get_proc_address(symbol))
        };

        unsafe {
            tracing::info!(
                version = %gl.get_parameter_string(glow::VERSION),
                renderer = %gl.get_parameter_string(glow::RENDERER),
                "created OpenGL context"
            );
            let [r, g, b, a] = config.clear_color;
            gl.clear_color(r, g, b, a);
        }

        let window = GlWindow {
            context,
            gl: Rc::new(gl),
        };
        window.set_viewport(window.window().inner_size());
        Ok(window)
    }

    pub fn gl(&self) -> Rc<glow::Context> {
        self.gl.clone()
    }

    pub fn window(&self) -> &Window {
        self.context.window()
    }

    pub fn set_title(&self, title: &str) {
        self.window().set_title(title);
    }

    pub fn resize(&self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        tracing::debug!(width = size.width, height = size.height, "resized");
        self.context.resize(size);
        self.set_viewport(size);
    }

    pub fn clear(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) };
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.context.swap_buffers().map_err(Error::from)
    }

    fn set_viewport(&self, size: PhysicalSize<u32>) {
        unsafe {
            self.gl
                .viewport(0, 0, size.width as i32, size.height as i32)
        };
    }
}
