use anyhow::Context;
use learn_opengl::{logger, LessonApp, LessonConfig};

const APP_TITLE: &str = "Introduction to Modern OpenGL - Hello Window 1";

fn main() -> anyhow::Result<()> {
    logger::init();

    let config = LessonConfig::new(APP_TITLE).with_env_overrides();
    let app = LessonApp::new(config).context("failed to initialize OpenGL window")?;

    app.run(())?;
    Ok(())
}
