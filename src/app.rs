//! The shared render loop every lesson runs.

use std::{rc::Rc, time::Instant};

use glow::HasContext;
use winit::{
    event::{Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
};

use crate::{
    config::LessonConfig,
    fps::FpsCounter,
    input::{Action, KeyBindings, PolygonMode},
    window::GlWindow,
    Result,
};

/// What a lesson draws each frame, after the framebuffer has been cleared.
pub trait Lesson {
    fn draw(&mut self, gl: &glow::Context);
}

/// Clearing the screen is already a lesson.
impl Lesson for () {
    fn draw(&mut self, _gl: &glow::Context) {}
}

pub struct LessonApp {
    event_loop: EventLoop<()>,
    window: GlWindow,
    config: LessonConfig,
    bindings: KeyBindings,
    fps: Option<FpsCounter>,
}

impl LessonApp {
    pub fn new(config: LessonConfig) -> Result<Self> {
        let event_loop = EventLoop::new();
        let window = GlWindow::new(&event_loop, &config)?;
        Ok(Self {
            event_loop,
            window,
            config,
            bindings: KeyBindings::default(),
            fps: None,
        })
    }

    /// Appends the average FPS and frame time to the window title.
    pub fn with_fps_title(mut self) -> Self {
        self.fps = Some(FpsCounter::new(self.config.fps_interval));
        self
    }

    /// `W` toggles between filled and wireframe polygons.
    pub fn with_wireframe_toggle(mut self) -> Self {
        self.bindings.wireframe = true;
        self
    }

    pub fn gl(&self) -> Rc<glow::Context> {
        self.window.gl()
    }

    /// Runs until the window is closed or Escape is pressed. The lesson is
    /// dropped before the window, while its context is still current.
    pub fn run<L: Lesson>(self, mut lesson: L) -> Result<()> {
        let LessonApp {
            mut event_loop,
            window,
            config,
            bindings,
            mut fps,
        } = self;

        let gl = window.gl();
        let start = Instant::now();
        let mut polygon_mode = PolygonMode::default();
        let mut result = Ok(());

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                Event::WindowEvent {
                    event:
                        WindowEvent::KeyboardInput {
                            input:
                                KeyboardInput {
                                    virtual_keycode: Some(key),
                                    state,
                                    ..
                                },
                            ..
                        },
                    ..
                } => match bindings.action(key, state) {
                    Some(Action::Close) => *control_flow = ControlFlow::Exit,
                    Some(Action::ToggleWireframe) => {
                        polygon_mode = polygon_mode.toggled();
                        tracing::info!(?polygon_mode, "toggled wireframe");
                        unsafe { gl.polygon_mode(glow::FRONT_AND_BACK, polygon_mode.gl_mode()) };
                    }
                    None => {}
                },
                Event::WindowEvent {
                    event: WindowEvent::Resized(size),
                    ..
                } => {
                    window.resize(size);
                }
                Event::RedrawEventsCleared => {
                    if let Some(stats) = fps.as_mut().and_then(|fps| fps.tick(start.elapsed())) {
                        window.set_title(&stats.title(&config.title));
                    }

                    window.clear();
                    lesson.draw(&gl);

                    if let Err(err) = window.swap_buffers() {
                        tracing::error!("failed to swap buffers: {err}");
                        result = Err(err);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        tracing::info!("render loop finished");
        drop(lesson);
        drop(window);
        result
    }
}
