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

use crate::common::constants::config::{
    DEFAULT_LOG_LEVEL, ENV_LOG_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
};
use crate::common::errors::LapseError;
use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse_safe(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// An `EnvFilter` directive, e.g. "debug" or "lapse=trace,info"
    pub log_level: String,
    pub log_format: LogFormat,
    pub log_color: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, LapseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` reads the process
    /// environment through this.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LapseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        EnvFilter::try_new(&log_level).map_err(|e| {
            LapseError::ConfigurationError(format!("invalid log level '{}': {}", log_level, e))
        })?;

        Ok(Self {
            log_level,
            log_format: LogFormat::parse_safe(
                &lookup(ENV_LOG_FORMAT).unwrap_or_else(|| "text".to_string()),
            ),
            log_color: lookup(ENV_LOG_COLOR)
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(true),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
            log_color: true,
        }
    }
}
