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

use super::Timer;

/// Writes the timer's elapsed time into `out` when dropped.
///
/// The write happens on every way out of the enclosing scope, including
/// early returns, `?` and unwinding panics.
#[derive(Debug)]
pub struct StopGuard<'a, T: Timer> {
    timer: T,
    out: &'a mut Duration,
}

impl<'a, T: Timer> StopGuard<'a, T> {
    pub fn new(timer: T, out: &'a mut Duration) -> Self {
        Self { timer, out }
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}

impl<T: Timer> Drop for StopGuard<'_, T> {
    fn drop(&mut self) {
        *self.out = self.timer.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::start;
    use std::panic;

    struct Fixed(Duration);

    impl Timer for Fixed {
        fn elapsed(&self) -> Duration {
            self.0
        }
    }

    #[test]
    fn test_guard_writes_on_drop() {
        let mut out = Duration::ZERO;
        {
            let guard = StopGuard::new(Fixed(Duration::from_millis(3)), &mut out);
            assert_eq!(guard.timer().elapsed(), Duration::from_millis(3));
        }
        assert_eq!(out, Duration::from_millis(3));
    }

    #[test]
    fn test_guard_writes_on_early_return() {
        fn work(out: &mut Duration, bail: bool) -> Result<(), &'static str> {
            let _guard = StopGuard::new(Fixed(Duration::from_secs(2)), out);
            if bail {
                return Err("bailed");
            }
            Ok(())
        }

        let mut out = Duration::ZERO;
        assert!(work(&mut out, true).is_err());
        assert_eq!(out, Duration::from_secs(2));
    }

    #[test]
    fn test_guard_writes_during_unwind() {
        let mut out = Duration::ZERO;
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _guard = StopGuard::new(Fixed(Duration::from_millis(9)), &mut out);
            panic!("work blew up");
        }));

        assert!(result.is_err());
        assert_eq!(out, Duration::from_millis(9));
    }

    #[test]
    fn test_stopwatch_stop_on_drop() {
        let mut out = Duration::MAX;
        {
            let _guard = start().stop_on_drop(&mut out);
        }
        assert!(out < Duration::from_secs(1));
    }
}
