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

use std::time::Duration;

use super::{StopGuard, Stopwatch, Timer};
use crate::common::errors::TimeError;

/// Time a single run of `operation`.
///
/// Any code can be timed by wrapping it in a closure returning
/// `Result<(), E>`. The returned duration covers the whole run, up to the
/// point of failure when the operation fails. Without an operation the
/// duration is exactly zero and no clock is read.
///
/// ```
/// use std::time::Duration;
///
/// let (elapsed, result) = lapse::timer::time(Some(|| {
///     std::thread::sleep(Duration::from_millis(2));
///     Ok::<(), std::io::Error>(())
/// }));
/// assert!(result.is_ok());
/// assert!(elapsed >= Duration::from_millis(2));
/// ```
pub fn time<F, E>(operation: Option<F>) -> (Duration, Result<(), TimeError>)
where
    F: FnOnce() -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    time_with(Stopwatch::start, operation)
}

/// [`time`] with a caller-chosen timer factory.
///
/// `start` is only called when an operation is present.
pub fn time_with<T, S, F, E>(start: S, operation: Option<F>) -> (Duration, Result<(), TimeError>)
where
    T: Timer,
    S: FnOnce() -> T,
    F: FnOnce() -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    let Some(operation) = operation else {
        return (Duration::ZERO, Err(TimeError::NoOperationSupplied));
    };

    let mut elapsed = Duration::ZERO;
    let outcome = {
        let _guard = StopGuard::new(start(), &mut elapsed);
        operation()
    };

    let result = outcome.map_err(|err| TimeError::OperationFailed(err.into()));
    (elapsed, result)
}
