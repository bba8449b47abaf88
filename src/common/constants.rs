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

pub mod timer {
    /// Context attached to an operation's error by `time`
    pub const OPERATION_CONTEXT: &str = "timing function";
}

pub mod config {
    pub const ENV_LOG_LEVEL: &str = "LAPSE_LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "LAPSE_LOG_FORMAT";
    pub const ENV_LOG_COLOR: &str = "LAPSE_LOG_COLOR";
    /// The standard logger reports everything
    pub const DEFAULT_LOG_LEVEL: &str = "trace";
}

pub mod context {
    /// Key under which a `Logger` is registered in a `Context`
    pub const LOGGER_KEY: &str = "lapse.logger";
}

pub mod console {
    /// Prefix written before every non-silent output
    pub const PROMPT_PREFIX: &str = "> ";
    /// Written before masked input is read
    pub const PRIVATE_INPUT_GLYPH: &str = "⚷";
    pub const SCAN_CONTEXT: &str = "scanning line";
    pub const PRIVATE_SCAN_CONTEXT: &str = "privately scanning line";
    pub const PROMPT_CONTEXT: &str = "writing prompt";
}

pub mod http {
    pub const CONTENT_TYPE_TEXT: &str = "text/plain";
    pub const CONTENT_TYPE_JSON: &str = "application/json";
    /// Context logged when a response body cannot be produced
    pub const WRITE_CONTEXT: &str = "writing response";
}
