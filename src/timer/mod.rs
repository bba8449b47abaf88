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

//! Elapsed-time measurement.
//!
//! A timer is started once and read any number of times. Reads never
//! freeze a value: each one reports the time since the start instant.
//!
//! Timing a block is a single line:
//!
//! ```
//! use std::time::Duration;
//!
//! let mut elapsed = Duration::ZERO;
//! {
//!     let _guard = lapse::timer::start().stop_on_drop(&mut elapsed);
//!     std::thread::sleep(Duration::from_millis(1));
//! }
//! assert!(elapsed >= Duration::from_millis(1));
//! ```
//!
//! [`time`] wraps that pattern around a fallible closure.

pub mod execution;
pub mod guard;
pub mod stopwatch;

use std::time::Duration;

pub use execution::{time, time_with};
pub use guard::StopGuard;
pub use stopwatch::{start, Stopwatch};

/// Anything that can report how long it has been running.
pub trait Timer {
    fn elapsed(&self) -> Duration;
}

impl<T: Timer + ?Sized> Timer for &T {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

/// Write the time elapsed on `timer` into `out`.
///
/// Either side may be absent; an absent timer or slot is a no-op and
/// `out` is left untouched.
pub fn stop<T: Timer + ?Sized>(timer: Option<&T>, out: Option<&mut Duration>) {
    if let (Some(timer), Some(out)) = (timer, out) {
        *out = timer.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const WORK: Duration = Duration::from_millis(100);
    const DELTA: Duration = Duration::from_millis(20);

    #[test]
    fn test_stop_absent_timer_leaves_slot_untouched() {
        thread::sleep(Duration::from_millis(5));

        let mut out = Duration::from_secs(7);
        stop::<Stopwatch>(None, Some(&mut out));

        assert_eq!(out, Duration::from_secs(7));
    }

    #[test]
    fn test_stop_absent_timer_and_slot() {
        stop::<Stopwatch>(None, None);
    }

    #[test]
    fn test_stop_absent_slot() {
        let sw = start();
        stop(Some(&sw), None);
    }

    #[test]
    fn test_stop_writes_elapsed() {
        let sw = start();
        thread::sleep(WORK);

        let mut out = Duration::ZERO;
        stop(Some(&sw), Some(&mut out));

        assert!(out >= WORK - DELTA, "elapsed {:?} too short", out);
        assert!(out <= WORK + DELTA, "elapsed {:?} too long", out);
    }

    #[test]
    fn test_stop_through_trait_object() {
        let sw = start();
        let timer: &dyn Timer = &sw;

        let mut out = Duration::MAX;
        stop(Some(timer), Some(&mut out));

        assert!(out < Duration::from_secs(1));
    }
}
