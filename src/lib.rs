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

//! lapse: elapsed-time measurement.
//!
//! The [`timer`] module is the core: start a timer, read it as often as
//! needed, or hand a fallible closure to [`timer::time`]. The remaining
//! modules are small helpers that usually sit next to it in a service:
//! console prompts, request-scoped loggers and axum responses.

pub mod common;
pub mod config;
pub mod console;
#[cfg(feature = "http")]
pub mod http;
pub mod logging;
pub mod timer;

pub use common::errors::{InputError, LapseError, LogError, TimeError};
pub use timer::{start, stop, time, StopGuard, Stopwatch, Timer};
