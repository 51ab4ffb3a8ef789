use crate::shader::ShaderStage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to create window: {0}")]
    WindowCreation(#[from] glutin::CreationError),
    #[error("OpenGL context error: {0}")]
    ContextCurrent(#[from] glutin::ContextError),
    #[error("failed to create {kind}: {message}")]
    GlObject { kind: &'static str, message: String },
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("shader program linker failure: {log}")]
    ProgramLink { log: String },
}

impl Error {
    pub(crate) fn gl_object(kind: &'static str) -> impl FnOnce(String) -> Error {
        move |message| Error::GlObject { kind, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_errors_carry_the_info_log() {
        let err = Error::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:3(1): error: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fragment shader failed to compile: 0:3(1): error: syntax error"
        );

        let err = Error::ProgramLink {
            log: "unresolved varying".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "shader program linker failure: unresolved varying"
        );
    }

    #[test]
    fn gl_object_errors_name_the_object() {
        let err = Error::gl_object("vertex array")("out of memory".to_string());
        assert_eq!(err.to_string(), "failed to create vertex array: out of memory");
    }
}
