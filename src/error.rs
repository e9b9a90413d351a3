use crate::prefs::PrefsError;
use crate::snake;
use log::SetLoggerError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    SnakeBuilderError(snake::BuilderError),
    PrefsError(PrefsError),
    LoggerError(SetLoggerError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<snake::BuilderError> for Error {
    fn from(e: snake::BuilderError) -> Self {
        Self(ErrorType::SnakeBuilderError(e), vec![])
    }
}

impl From<PrefsError> for Error {
    fn from(e: PrefsError) -> Self {
        Self(ErrorType::PrefsError(e), vec![])
    }
}

impl From<SetLoggerError> for Error {
    fn from(e: SetLoggerError) -> Self {
        Self(ErrorType::LoggerError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorType::SnakeBuilderError(e) => write!(f, "{}", e.1)?,
            ErrorType::PrefsError(e) => write!(f, "invalid preferences: {}", e)?,
            ErrorType::LoggerError(e) => write!(f, "logger setup failed: {}", e)?,
        }
        for t in (self.1).iter().rev() {
            write!(f, " (in {})", t)?;
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
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let result: Result = Err(Error::from(PrefsError::EmptySnake))
        .with_trace_step("Prefs::validate")
        .with_trace_step("Game::new");
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid preferences: a snake needs at least one segment (in Game::new) (in Prefs::validate)"
    );
    assert!(matches!(err.error_type(), ErrorType::PrefsError(PrefsError::EmptySnake)));
}

#[test]
fn test_second_logger_is_an_error() {
    use simplelog::{Config, LevelFilter, SimpleLogger};

    // only one logger can ever be installed per process
    let _ = SimpleLogger::init(LevelFilter::Off, Config::default());
    let result: Result = SimpleLogger::init(LevelFilter::Off, Config::default())
        .map_err(Error::from)
        .with_trace_step("logger setup");
    let err = result.unwrap_err();
    assert!(matches!(err.error_type(), ErrorType::LoggerError(_)));
    assert!(err.to_string().starts_with("logger setup failed: "));
    assert!(err.to_string().ends_with(" (in logger setup)"));
}
