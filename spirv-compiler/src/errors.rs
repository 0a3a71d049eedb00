use std::error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Spawn {
        program: String,
        error: std::io::Error,
    },
    CompilationFailed {
        source: PathBuf,
        log: String,
    },
    InvalidModule {
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "i/o error: {}", error),
            Self::Spawn { program, error } => {
                write!(f, "failed to run shader compiler {}: {}", program, error)
            }
            Self::CompilationFailed { source, log } => {
                write!(f, "compilation of {} failed: {}", source.display(), log)
            }
            Self::InvalidModule { path, reason } => {
                write!(f, "{} is not a valid SPIR-V module: {}", path.display(), reason)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Spawn { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
