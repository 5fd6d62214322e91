use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub enum Error {
    InputNotFound(PathBuf),
    ToolNotFound(PathBuf),
    ToolFailed { status: Option<i32>, stderr: String },
    Timeout(Duration),
    OutputMissing(PathBuf),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => write!(f, "input file not found: {}", path.display()),
            Error::ToolNotFound(path) => {
                write!(f, "converter tool not found: {}", path.display())
            }
            Error::ToolFailed { status, stderr } => {
                let stderr = stderr.trim();
                match status {
                    Some(code) => write!(f, "converter failed with exit code {code}: {stderr}"),
                    None => write!(f, "converter terminated by signal: {stderr}"),
                }
            }
            Error::Timeout(limit) => {
                write!(f, "converter timed out after {} seconds", limit.as_secs())
            }
            Error::OutputMissing(path) => {
                write!(f, "converter produced no output at {}", path.display())
            }
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
