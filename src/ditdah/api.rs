//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! translations, regardless of the UI being used. It dispatches a
//! [`Direction`] to the right conversion and returns structured
//! `Result<CmdResult>` values — no business logic, no I/O, no presentation
//! concerns.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Direction, Mode};

/// The main API facade for ditdah operations.
///
/// Holds the selected [`Mode`]; all UI clients should interact through this
/// API rather than calling the command layer directly.
pub struct MorseApi {
    mode: Mode,
}

impl MorseApi {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Plain text → Morse code.
    pub fn to_morse(&self, input: &str) -> Result<CmdResult> {
        commands::encode::run(self.mode, input)
    }

    /// Morse code → plain text.
    pub fn to_plain_text(&self, input: &str) -> Result<CmdResult> {
        commands::decode::run(self.mode, input)
    }

    pub fn translate(&self, direction: Direction, input: &str) -> Result<CmdResult> {
        match direction {
            Direction::ToMorse => self.to_morse(input),
            Direction::ToPlainText => self.to_plain_text(input),
        }
    }
}
