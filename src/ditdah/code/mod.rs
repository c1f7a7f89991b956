//! # Symbol Tables
//!
//! One immutable table per [`Mode`], each built exactly once on first use via
//! `once_cell::sync::Lazy` from a `const` pair slice. Alongside the forward
//! map (character → code) a reverse map (code → character) is precomputed, so
//! decoding is a constant-time lookup instead of a scan over every entry.
//!
//! Both tables map the space character to `/`, the word separator inside a
//! Morse string. Lookups normalize to ASCII uppercase, so `"sos"` and
//! `"SOS"` encode identically.
//!
//! The tables must be injective (no two characters sharing a code), otherwise
//! reverse lookup would be ambiguous. Construction asserts this over the
//! whole pair slice.

pub mod american;
pub mod international;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::Mode;

/// The token separating encoded words.
pub const WORD_SEPARATOR: &str = "/";

/// A bidirectional character ↔ code mapping.
///
/// Never mutated after construction; shared freely across lookups.
pub struct SymbolTable {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    fn from_pairs(pairs: &'static [(char, &'static str)]) -> Self {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut reverse = HashMap::with_capacity(pairs.len());
        for &(ch, code) in pairs {
            let prev = forward.insert(ch, code);
            assert!(prev.is_none(), "duplicate character in table: {ch:?}");
            let prev = reverse.insert(code, ch);
            assert!(prev.is_none(), "duplicate code in table: {code:?}");
        }
        Self { forward, reverse }
    }

    /// Returns the code for a character, normalizing to uppercase first.
    pub fn code_for(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch.to_ascii_uppercase()).copied()
    }

    /// Reverse lookup: the character a code stands for.
    pub fn char_for(&self, code: &str) -> Option<char> {
        self.reverse.get(code).copied()
    }
}

static INTERNATIONAL: Lazy<SymbolTable> =
    Lazy::new(|| SymbolTable::from_pairs(international::PAIRS));

static AMERICAN: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::from_pairs(american::PAIRS));

impl Mode {
    /// The symbol table for this mode.
    pub fn table(self) -> &'static SymbolTable {
        match self {
            Mode::International => &INTERNATIONAL,
            Mode::American => &AMERICAN,
        }
    }
}
