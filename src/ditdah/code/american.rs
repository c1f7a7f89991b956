//! American (Railroad) Morse code.
//!
//! American Morse uses timing features plain dots and dashes cannot carry, so
//! the codes here transliterate them into single space-free tokens:
//!
//! - `_` marks the intra-character gap (C, O, R, Y, Z, &, …)
//! - `=` is the lengthened dash of the letter L
//! - `==` is the extra-long dash of the digit 0
//!
//! Keeping every code a single token means the word/letter framing works
//! exactly as in international mode.

/// Character/code pairs for the American table.
pub const PAIRS: &[(char, &'static str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', ".._."),
    ('D', "-.."),
    ('E', "."),
    ('F', ".-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', "-.-."),
    ('K', "-.-"),
    ('L', "="),
    ('M', "--"),
    ('N', "-."),
    ('O', "._."),
    ('P', "....."),
    ('Q', "..-."),
    ('R', "._.."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', ".-.."),
    ('Y', ".._.."),
    ('Z', "..._."),
    ('0', "=="),
    ('1', ".--."),
    ('2', "..-.."),
    ('3', "...-."),
    ('4', "....-"),
    ('5', "---"),
    ('6', "......"),
    ('7', "--.."),
    ('8', "-...."),
    ('9', "-..-"),
    ('.', "..--.."),
    (',', ".-.-"),
    ('?', "-..-."),
    ('!', "---."),
    ('&', "._..."),
    (' ', "/"),
];
