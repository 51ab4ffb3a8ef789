//! Lesson window configuration.

use std::{borrow::Cow, env, time::Duration};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.23, 0.38, 0.47, 1.0];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GlVersion {
    pub major: u8,
    pub minor: u8,
}

impl GlVersion {
    pub const V3_3: GlVersion = GlVersion { major: 3, minor: 3 };
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct LessonConfig {
    pub title: Cow<'static, str>,
    pub width: u32,
    pub height: u32,
    /// Always a core profile context.
    pub gl_version: GlVersion,
    pub clear_color: [f32; 4],
    pub vsync: bool,
    /// How often the FPS title is refreshed.
    pub fps_interval: Duration,
}

impl LessonConfig {
    pub fn new(title: impl Into<Cow<'static, str>>) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gl_version: GlVersion::V3_3,
            clear_color: DEFAULT_CLEAR_COLOR,
            vsync: true,
            fps_interval: Duration::from_millis(250),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_fps_interval(mut self, interval: Duration) -> Self {
        self.fps_interval = interval;
        self
    }

    /// Applies `LEARN_GL_WIDTH`, `LEARN_GL_HEIGHT` and `LEARN_GL_VSYNC`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(width) = lookup("LEARN_GL_WIDTH") {
            match parse_dimension(&width) {
                Some(width) => self.width = width,
                None => tracing::warn!("ignoring invalid LEARN_GL_WIDTH: {width:?}"),
            }
        }
        if let Some(height) = lookup("LEARN_GL_HEIGHT") {
            match parse_dimension(&height) {
                Some(height) => self.height = height,
                None => tracing::warn!("ignoring invalid LEARN_GL_HEIGHT: {height:?}"),
            }
        }
        if let Some(vsync) = lookup("LEARN_GL_VSYNC") {
            self.vsync = !matches!(
                vsync.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off"
            );
        }
        self
    }
}

fn parse_dimension(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|&v| v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_lessons() {
        let config = LessonConfig::new("Hello Window");
        assert_eq!(config.title, "Hello Window");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.gl_version, GlVersion::V3_3);
        assert_eq!(config.clear_color, [0.23, 0.38, 0.47, 1.0]);
        assert!(config.vsync);
        assert_eq!(config.fps_interval, Duration::from_millis(250));
    }

    #[test]
    fn builder_methods() {
        let config = LessonConfig::new("t")
            .with_size(0, 300)
            .with_clear_color([0.0, 0.0, 0.0, 1.0])
            .with_vsync(false);
        assert_eq!((config.width, config.height), (1, 300));
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert!(!config.vsync);
    }

    #[test]
    fn env_overrides() {
        let config = LessonConfig::new("t").with_overrides(overrides(&[
            ("LEARN_GL_WIDTH", "1024"),
            ("LEARN_GL_HEIGHT", " 768 "),
            ("LEARN_GL_VSYNC", "Off"),
        ]));
        assert_eq!((config.width, config.height), (1024, 768));
        assert!(!config.vsync);
    }

    #[test]
    fn invalid_env_overrides_keep_the_base_value() {
        let config = LessonConfig::new("t").with_overrides(overrides(&[
            ("LEARN_GL_WIDTH", "wide"),
            ("LEARN_GL_HEIGHT", "0"),
            ("LEARN_GL_VSYNC", "yes"),
        ]));
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.vsync);
    }
}
