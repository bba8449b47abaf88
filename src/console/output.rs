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

//! Console output.
//!
//! `output*` prefix the message with `"> "`, `silent_output*` write it as
//! is. Formatted output is `output(format_args!(..))`.

use std::fmt::Display;
use std::io::{self, Write};

use crate::common::constants::console::PROMPT_PREFIX;

pub fn output_to<W: Write>(w: &mut W, msg: impl Display) -> io::Result<()> {
    write!(w, "{}{}", PROMPT_PREFIX, msg)
}

pub fn outputln_to<W: Write>(w: &mut W, msg: impl Display) -> io::Result<()> {
    writeln!(w, "{}{}", PROMPT_PREFIX, msg)
}

pub fn silent_output_to<W: Write>(w: &mut W, msg: impl Display) -> io::Result<()> {
    write!(w, "{}", msg)
}

pub fn silent_outputln_to<W: Write>(w: &mut W, msg: impl Display) -> io::Result<()> {
    writeln!(w, "{}", msg)
}

fn to_stdout(f: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    f(&mut out)?;
    out.flush()
}

pub fn output(msg: impl Display) -> io::Result<()> {
    to_stdout(|out| output_to(out, msg))
}

pub fn outputln(msg: impl Display) -> io::Result<()> {
    to_stdout(|out| outputln_to(out, msg))
}

pub fn silent_output(msg: impl Display) -> io::Result<()> {
    to_stdout(|out| silent_output_to(out, msg))
}

pub fn silent_outputln(msg: impl Display) -> io::Result<()> {
    to_stdout(|out| silent_outputln_to(out, msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_is_prefixed() {
        assert_eq!(render(|w| output_to(w, "ready")), "> ready");
        assert_eq!(render(|w| outputln_to(w, "ready")), "> ready\n");
    }

    #[test]
    fn test_silent_output_is_bare() {
        assert_eq!(render(|w| silent_output_to(w, "ready")), "ready");
        assert_eq!(render(|w| silent_outputln_to(w, "ready")), "ready\n");
    }

    #[test]
    fn test_formatted_output() {
        let out = render(|w| output_to(w, format_args!("{} of {}", 3, 7)));
        assert_eq!(out, "> 3 of 7");
    }

    #[test]
    fn test_write_failure_is_returned() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = output_to(&mut Broken, "lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
