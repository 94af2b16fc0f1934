use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;
use std::{fmt, io, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    Io(io::Error),
    Config { path: Option<PathBuf>, source: toml::de::Error },
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GameError(e) => write!(f, "ggez: {e}"),
            ErrorType::Io(e) => write!(f, "io: {e}"),
            ErrorType::Config { path: Some(path), source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            ErrorType::Config { path: None, source } => write!(f, "invalid config: {source}"),
        }
    }
}

/// An error together with the steps it passed through, innermost first
#[must_use]
pub struct Error {
    error_type: ErrorType,
    trace: Vec<String>,
}

impl From<ErrorType> for Error {
    fn from(error_type: ErrorType) -> Self {
        Self { error_type, trace: vec![] }
    }
}

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        ErrorType::GameError(e).into()
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        ErrorType::Io(e).into()
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        ErrorType::Config { path: None, source }.into()
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.trace.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.error_type
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.error_type)?;
        for step in self.trace.iter().rev() {
            writeln!(f, " in {step}")?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if !self.trace.is_empty() {
            let steps = self.trace.iter().rev().cloned().collect::<Vec<_>>();
            write!(f, " (in {})", steps.join(" > "))?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s))
    }
}

#[test]
fn test_trace_is_printed_outermost_first() {
    let result: Result = Err(io::Error::new(io::ErrorKind::NotFound, "gone").into());
    let error = result
        .with_trace_step("Prefs::read")
        .with_trace_step("Prefs::load")
        .unwrap_err();
    assert_eq!(error.to_string(), "io: gone (in Prefs::load > Prefs::read)");
    assert!(matches!(error.error_type(), ErrorType::Io(_)));
}
