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

use std::time::{Duration, Instant};

use super::{StopGuard, Timer};

/// A timer backed by the monotonic clock.
///
/// The start instant is fixed at creation. Reading never mutates the
/// stopwatch, so it is `Copy` and can be read from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn started_at(&self) -> Instant {
        self.start
    }

    /// Write the elapsed time into `out`, if present.
    pub fn stop(&self, out: Option<&mut Duration>) {
        super::stop(Some(self), out);
    }

    /// Hand the stopwatch to a guard that writes into `out` when dropped.
    pub fn stop_on_drop(self, out: &mut Duration) -> StopGuard<'_, Self> {
        StopGuard::new(self, out)
    }
}

impl Timer for Stopwatch {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Start a new [`Stopwatch`] at the current instant.
pub fn start() -> Stopwatch {
    Stopwatch::start()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_start_records_current_instant() {
        let before = Instant::now();
        let sw = start();
        let after = Instant::now();

        assert!(sw.started_at() >= before);
        assert!(sw.started_at() <= after);
    }

    #[test]
    fn test_immediate_read_is_near_zero() {
        let sw = start();
        assert!(sw.elapsed() < Duration::from_millis(10));
    }

    #[test]
    fn test_reads_are_live_not_frozen() {
        let sw = start();

        let mut first = Duration::ZERO;
        sw.stop(Some(&mut first));
        thread::sleep(Duration::from_millis(15));
        let mut second = Duration::ZERO;
        sw.stop(Some(&mut second));

        assert!(second >= first + Duration::from_millis(15));
    }

    #[test]
    fn test_stop_does_not_change_start() {
        let sw = start();
        let started = sw.started_at();

        sw.stop(None);
        let mut out = Duration::ZERO;
        sw.stop(Some(&mut out));

        assert_eq!(sw.started_at(), started);
    }

    #[test]
    fn test_stopwatch_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stopwatch>();
    }
}
