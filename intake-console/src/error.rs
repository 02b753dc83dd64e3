use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Config error: {0}")]
    Config(#[from] intake_config::ConfigError),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Logging error: {message}")]
    Logger { message: String },

    // Shown verbatim at the prompt, so no source location here
    #[error("{message}")]
    Usage { message: String },
}

impl ConsoleError {
    /// Create a logging setup error
    pub fn logger<S: Into<String>>(message: S) -> Self {
        ConsoleError::Logger {
            message: message.into(),
        }
    }

    /// Create a command usage error
    pub fn usage<S: Into<String>>(message: S) -> Self {
        ConsoleError::Usage {
            message: message.into(),
        }
    }
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
