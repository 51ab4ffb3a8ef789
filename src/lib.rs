pub mod app;
pub mod buffer;
pub mod config;
pub mod error;
pub mod fps;
pub mod input;
pub mod logger;
pub mod shader;
pub mod vertex;
pub mod window;

pub use app::{Lesson, LessonApp};
pub use config::LessonConfig;
pub use error::{Error, Result};
