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

//! Line and masked console input.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::output::{output, outputln, output_to, outputln_to, silent_output, silent_outputln};
use crate::common::constants::console::{
    PRIVATE_INPUT_GLYPH, PRIVATE_SCAN_CONTEXT, PROMPT_CONTEXT, SCAN_CONTEXT,
};
use crate::common::errors::InputError;

/// Read one line holding at most one token.
///
/// An empty line reads as `""`. End of input before any byte is
/// [`InputError::Eof`]; extra tokens are [`InputError::ExpectedNewline`].
pub fn input_from<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(InputError::io(SCAN_CONTEXT))?;
    if read == 0 {
        return Err(InputError::Eof);
    }

    let mut tokens = line.split_whitespace();
    let token = tokens.next().unwrap_or_default().to_string();
    if tokens.next().is_some() {
        return Err(InputError::ExpectedNewline);
    }
    Ok(token)
}

pub fn input() -> Result<String, InputError> {
    input_from(&mut io::stdin().lock())
}

pub fn input_with_prompt_from<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: impl Display,
) -> Result<String, InputError>
where
    R: BufRead,
    W: Write,
{
    output_to(writer, prompt)
        .and_then(|_| writer.flush())
        .map_err(InputError::io(PROMPT_CONTEXT))?;
    input_from(reader)
}

pub fn input_with_promptln_from<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: impl Display,
) -> Result<String, InputError>
where
    R: BufRead,
    W: Write,
{
    outputln_to(writer, prompt)
        .and_then(|_| writer.flush())
        .map_err(InputError::io(PROMPT_CONTEXT))?;
    input_from(reader)
}

pub fn input_with_prompt(prompt: impl Display) -> Result<String, InputError> {
    output(prompt).map_err(InputError::io(PROMPT_CONTEXT))?;
    input()
}

pub fn input_with_promptln(prompt: impl Display) -> Result<String, InputError> {
    outputln(prompt).map_err(InputError::io(PROMPT_CONTEXT))?;
    input()
}

/// Assemble a secret from key presses.
///
/// Enter finishes, Backspace deletes, Ctrl-C interrupts and Ctrl-D on an
/// empty buffer ends input. Key releases and repeats are ignored.
pub fn collect_masked<I>(keys: I) -> Result<String, InputError>
where
    I: IntoIterator<Item = io::Result<KeyEvent>>,
{
    let mut secret = String::new();
    for key in keys {
        let key = key.map_err(InputError::io(PRIVATE_SCAN_CONTEXT))?;
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Char('c') if ctrl => return Err(InputError::Interrupted),
            KeyCode::Char('d') if ctrl && secret.is_empty() => return Err(InputError::Eof),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => secret.push(c),
            KeyCode::Backspace => {
                secret.pop();
            }
            _ => {}
        }
    }
    Err(InputError::Eof)
}

/// Raw mode for as long as the guard lives.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn terminal_keys() -> impl Iterator<Item = io::Result<KeyEvent>> {
    std::iter::from_fn(|| loop {
        match event::read() {
            Ok(Event::Key(key)) => return Some(Ok(key)),
            Ok(_) => continue,
            Err(e) => return Some(Err(e)),
        }
    })
}

/// Read a line from the terminal without echoing it.
pub fn private_input() -> Result<String, InputError> {
    silent_output(PRIVATE_INPUT_GLYPH).map_err(InputError::io(PROMPT_CONTEXT))?;
    let secret = {
        let _raw = RawMode::enable().map_err(InputError::io(PRIVATE_SCAN_CONTEXT))?;
        collect_masked(terminal_keys())
    };
    // raw mode swallowed the Enter
    silent_outputln("").map_err(InputError::io(PROMPT_CONTEXT))?;
    secret
}

pub fn private_input_with_prompt(prompt: impl Display) -> Result<String, InputError> {
    output(prompt).map_err(InputError::io(PROMPT_CONTEXT))?;
    private_input()
}

pub fn private_input_with_promptln(prompt: impl Display) -> Result<String, InputError> {
    outputln(prompt).map_err(InputError::io(PROMPT_CONTEXT))?;
    private_input()
}
