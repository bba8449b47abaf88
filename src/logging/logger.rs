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

use std::fmt::{self, Display};
use std::panic::Location;

use chrono::{SecondsFormat, Utc};
use tracing::{dispatcher, Dispatch, Level};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

use crate::common::constants::config::DEFAULT_LOG_LEVEL;
use crate::common::errors::LapseError;
use crate::config::{Config, LogFormat};

/// RFC 3339 UTC timestamps with nanosecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3339Nanos;

impl FormatTime for Rfc3339Nanos {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true))
    }
}

/// A handle to a tracing subscriber that can be passed around explicitly.
///
/// Events sent through the helpers carry a `caller` field with the file
/// and line of the call site.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// `RUST_LOG` takes precedence over `config.log_level`.
    pub fn from_config(config: &Config) -> Result<Self, LapseError> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .map_err(|e| LapseError::ConfigurationError(format!("invalid log filter: {}", e)))?;
        Ok(Self::build(filter, config.log_format, config.log_color))
    }

    /// Trace level, colored text, RFC 3339 timestamps, caller locations.
    pub fn standard() -> Self {
        Self::build(EnvFilter::new(DEFAULT_LOG_LEVEL), LogFormat::Text, true)
    }

    fn build(filter: EnvFilter, format: LogFormat, color: bool) -> Self {
        Self::build_with_writer(filter, format, color, std::io::stderr)
    }

    fn build_with_writer<W>(filter: EnvFilter, format: LogFormat, color: bool, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(Rfc3339Nanos)
            .with_ansi(color)
            .with_target(false)
            .with_writer(writer);

        let dispatch = match format {
            LogFormat::Text => Dispatch::new(builder.finish()),
            LogFormat::Json => Dispatch::new(builder.json().finish()),
        };
        Self { dispatch }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Run `f` with this logger as the thread's default subscriber.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl Display) {
        let caller = Location::caller();
        self.in_scope(|| match level {
            Level::ERROR => tracing::error!(caller = %caller, "{}", message),
            Level::WARN => tracing::warn!(caller = %caller, "{}", message),
            Level::INFO => tracing::info!(caller = %caller, "{}", message),
            Level::DEBUG => tracing::debug!(caller = %caller, "{}", message),
            _ => tracing::trace!(caller = %caller, "{}", message),
        });
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log(Level::ERROR, message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        self.log(Level::WARN, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log(Level::INFO, message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log(Level::DEBUG, message);
    }

    #[track_caller]
    pub fn trace(&self, message: impl Display) {
        self.log(Level::TRACE, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Install a logger built from `config` as the process-wide default.
pub fn init_tracing(config: &Config) -> Result<(), LapseError> {
    let logger = Logger::from_config(config)?;
    dispatcher::set_global_default(logger.dispatch)
        .map_err(|e| LapseError::ConfigurationError(format!("tracing already initialized: {}", e)))
}
