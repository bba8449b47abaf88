// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io;
use thiserror::Error;

use crate::common::constants::timer::OPERATION_CONTEXT;

#[derive(Error, Debug)]
pub enum LapseError {
    /// Invalid or unusable configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Timed operation error
    #[error("Timing error: {0}")]
    Time(#[from] TimeError),

    /// Logger lookup error
    #[error("Logging error: {0}")]
    Log(#[from] LogError),

    /// Console input error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// I/O Error
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl LapseError {
    /// Get user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LapseError::ConfigurationError(reason) => format!("Invalid configuration: {}", reason),
            LapseError::Time(TimeError::NoOperationSupplied) => "Nothing to time".to_string(),
            LapseError::Time(TimeError::OperationFailed(_)) => "Timed operation failed".to_string(),
            LapseError::Log(_) => "Logger unavailable".to_string(),
            LapseError::Input(InputError::Interrupted) => "Input cancelled".to_string(),
            LapseError::Input(_) => "Could not read input".to_string(),
            LapseError::IoError(_) => "Internal system error".to_string(),
        }
    }
}

/// Failure of [`crate::timer::time`].
#[derive(Error, Debug)]
pub enum TimeError {
    /// `time` was called without an operation. Duration is always zero.
    #[error("no operation supplied")]
    NoOperationSupplied,

    /// The timed operation failed. Displays as "timing function: <cause>";
    /// `source()` is the operation's own error.
    #[error("{ctx}: {0:#}", ctx = OPERATION_CONTEXT)]
    OperationFailed(#[source] anyhow::Error),
}

impl TimeError {
    /// The operation's original error, if the operation ran and failed.
    pub fn operation_error(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimeError::NoOperationSupplied => None,
            TimeError::OperationFailed(err) => {
                let err: &(dyn std::error::Error + Send + Sync + 'static) = err.as_ref();
                Some(err)
            }
        }
    }

    pub fn into_inner(self) -> Option<anyhow::Error> {
        match self {
            TimeError::NoOperationSupplied => None,
            TimeError::OperationFailed(err) => Some(err),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("no logger found")]
    NoLoggerFound,

    #[error("logger found of incorrect type: found {found}, should be {expected}")]
    NotLogger {
        found: &'static str,
        expected: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    /// Input ended before a line was read
    #[error("unexpected end of input")]
    Eof,

    /// More than one token on the line
    #[error("expected newline")]
    ExpectedNewline,

    /// Ctrl-C while reading masked input
    #[error("input interrupted")]
    Interrupted,
}

impl InputError {
    /// Adapter for `map_err` that tags an I/O failure with where it happened.
    pub fn io(context: &'static str) -> impl FnOnce(io::Error) -> InputError {
        move |source| InputError::Io { context, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_operation_failed_keeps_original_error() {
        let original = io::Error::new(io::ErrorKind::Other, "boom");
        let err = TimeError::OperationFailed(anyhow::Error::new(original));

        assert_eq!(err.to_string(), "timing function: boom");
        assert_eq!(err.operation_error().unwrap().to_string(), "boom");
        assert_eq!(err.source().unwrap().to_string(), "boom");

        let inner = err.into_inner().unwrap();
        assert_eq!(
            inner.downcast_ref::<io::Error>().unwrap().kind(),
            io::ErrorKind::Other
        );
    }

    #[test]
    fn test_no_operation_supplied_has_no_inner_error() {
        let err = TimeError::NoOperationSupplied;
        assert!(err.operation_error().is_none());
        assert!(err.source().is_none());
        assert!(err.into_inner().is_none());
    }

    #[test]
    fn test_input_io_error_carries_context() {
        let err = InputError::io("scanning line")(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.to_string(), "scanning line: pipe closed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_user_messages_hide_details() {
        let err: LapseError = io::Error::new(io::ErrorKind::Other, "disk on fire").into();
        assert_eq!(err.user_message(), "Internal system error");

        let err: LapseError = InputError::Interrupted.into();
        assert_eq!(err.user_message(), "Input cancelled");

        let err: LapseError = TimeError::NoOperationSupplied.into();
        assert_eq!(err.to_string(), "Timing error: no operation supplied");

        let err: LapseError =
            TimeError::OperationFailed(anyhow::anyhow!("disk full")).into();
        assert_eq!(err.to_string(), "Timing error: timing function: disk full");
    }

    #[test]
    fn test_operation_failed_shows_whole_cause_chain() {
        let cause = anyhow::Error::new(io::Error::new(io::ErrorKind::Other, "boom"))
            .context("flushing cache");
        let err = TimeError::OperationFailed(cause);

        assert_eq!(err.to_string(), "timing function: flushing cache: boom");
        assert_eq!(err.source().unwrap().to_string(), "flushing cache");
    }
}
