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

#![allow(dead_code)]

use std::io;
use std::time::Duration;

/// Message of [`some_error`].
pub const SOME_ERROR: &str = "some-error";

/// An arbitrary error for tests that need one but don't care what it says.
pub fn some_error() -> io::Error {
    io::Error::new(io::ErrorKind::Other, SOME_ERROR)
}

pub const WORK: Duration = Duration::from_millis(100);

/// Tolerance for sleeps of [`WORK`].
pub const DELTA: Duration = Duration::from_millis(20);

pub fn assert_near(actual: Duration, expected: Duration, delta: Duration) {
    assert!(
        actual >= expected.saturating_sub(delta) && actual <= expected + delta,
        "expected {:?} +/- {:?}, got {:?}",
        expected,
        delta,
        actual
    );
}
