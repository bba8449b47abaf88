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

//! Loggers that travel with a request.
//!
//! A [`Logger`] is stored in a [`Context`] under a fixed key. Code further
//! down the call chain pulls it back out with [`from_context`], or with
//! [`from_context_safe`] when falling back to the standard logger is
//! acceptable.

pub mod context;
pub mod logger;

use std::any;

pub use context::Context;
pub use logger::{init_tracing, Logger, Rfc3339Nanos};

use crate::common::constants::context::LOGGER_KEY;
use crate::common::errors::LogError;

/// The standard logger. See [`Logger::standard`].
pub fn standard() -> Logger {
    Logger::standard()
}

pub fn register(ctx: &Context, logger: Logger) -> Context {
    ctx.with_value(LOGGER_KEY, logger)
}

/// Register a fresh standard logger.
pub fn register_standard(ctx: &Context) -> (Context, Logger) {
    let logger = standard();
    (register(ctx, logger.clone()), logger)
}

pub fn from_context(ctx: &Context) -> Result<Logger, LogError> {
    let value = ctx.value(LOGGER_KEY).ok_or(LogError::NoLoggerFound)?;
    value
        .downcast_ref::<Logger>()
        .cloned()
        .ok_or_else(|| LogError::NotLogger {
            found: ctx.value_type_name(LOGGER_KEY).unwrap_or("unknown"),
            expected: any::type_name::<Logger>(),
        })
}

/// Like [`from_context`], but registers and returns a standard logger
/// when none is usable. The returned context carries the logger that was
/// returned.
pub fn from_context_safe(ctx: &Context) -> (Context, Logger) {
    match from_context(ctx) {
        Ok(logger) => (ctx.clone(), logger),
        Err(_) => register_standard(ctx),
    }
}
