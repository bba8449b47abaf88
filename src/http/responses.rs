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

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::error::Error;

#[cfg(feature = "proto")]
use prost_reflect::{ReflectMessage, SerializeOptions};

use crate::common::constants::http::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT, WRITE_CONTEXT};
use crate::logging::{self, Context};

/// Plain-text response.
pub fn respond(status: StatusCode, payload: impl Into<Body>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
        payload.into(),
    )
        .into_response()
}

pub fn respond_string(status: StatusCode, payload: &str) -> Response {
    respond(status, payload.to_owned())
}

pub fn respond_error(status: StatusCode, err: &dyn Error) -> Response {
    respond_string(status, &err.to_string())
}

/// Logs `err` through the context's logger, then responds with it.
pub fn respond_error_with_log(ctx: &Context, status: StatusCode, err: &dyn Error) -> Response {
    let (_, logger) = logging::from_context_safe(ctx);
    logger.error(err);
    respond_error(status, err)
}

/// Plain-text response carrying the status's reason phrase.
pub fn respond_default(status: StatusCode) -> Response {
    respond_string(status, status.canonical_reason().unwrap_or_default())
}

/// JSON response, newline-terminated.
///
/// If `value` cannot be encoded the failure is logged through the
/// context's logger and the body is left empty; status and content type
/// are kept.
pub fn respond_json<T>(ctx: &Context, status: StatusCode, value: &T) -> Response
where
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_vec(value).map(|mut bytes| {
        bytes.push(b'\n');
        bytes
    });
    json_response(ctx, status, encoded)
}

/// JSON response for a protobuf message, using the protobuf JSON mapping:
/// lowerCamelCase field names, 64-bit integers as strings, default-valued
/// fields omitted. No trailing newline.
///
/// Encode failures are handled as in [`respond_json`].
#[cfg(feature = "proto")]
pub fn respond_json_proto<M>(ctx: &Context, status: StatusCode, message: &M) -> Response
where
    M: ReflectMessage,
{
    let mut bytes = Vec::new();
    let mut serializer = serde_json::Serializer::new(&mut bytes);
    let written = message
        .transcode_to_dynamic()
        .serialize_with_options(&mut serializer, &SerializeOptions::new());
    json_response(ctx, status, written.map(|()| bytes))
}

fn json_response(
    ctx: &Context,
    status: StatusCode,
    encoded: serde_json::Result<Vec<u8>>,
) -> Response {
    let body = match encoded {
        Ok(bytes) => Body::from(bytes),
        Err(err) => {
            let (_, logger) = logging::from_context_safe(ctx);
            logger.error(format_args!("{}: {}", WRITE_CONTEXT, err));
            Body::empty()
        }
    };

    (status, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response()
}
