// vim: set ai et ts=4 sw=4 sts=4:
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {msg}")]
    InputFormat { line: usize, msg: String },  // line numbers are 1-based

    #[error("cannot decode entry: {0}")]
    DecodeAmbiguity(String),

    #[error("no solution: {0}")]
    NoSolution(String),

    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl Error {
    pub fn input_format<S: Into<String>>(line: usize, msg: S) -> Self {
        Error::InputFormat { line, msg: msg.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
