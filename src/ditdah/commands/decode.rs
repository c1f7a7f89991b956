use crate::code::WORD_SEPARATOR;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Mode;

/// Translates Morse code back into plain text.
///
/// The input uses `/` between words and spaces between letter codes within a
/// word. Spacing is allowed to be ragged: words are trimmed and empty tokens
/// skipped before lookup. Codes without a table entry are collected and
/// reported, the rest of the input still converts. Case is not recoverable;
/// output is uppercase.
pub fn run(mode: Mode, input: &str) -> Result<CmdResult> {
    let table = mode.table();

    let mut words: Vec<String> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    for word in input.split(WORD_SEPARATOR) {
        let mut letters = String::new();
        for code in word.trim().split(' ').filter(|t| !t.is_empty()) {
            match table.char_for(code) {
                Some(ch) => letters.push(ch),
                None => {
                    if !unknown.iter().any(|u| u == code) {
                        unknown.push(code.to_string());
                    }
                }
            }
        }
        words.push(letters);
    }

    let mut result = CmdResult::default().with_output(words.join(" "));
    if !unknown.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "no character for: {}",
            unknown.join(" ")
        )));
        result = result.with_unknown(unknown);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sos() {
        let result = run(Mode::International, "... --- ...").unwrap();
        assert_eq!(result.output, "SOS");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn decodes_words_separated_by_slash() {
        let result = run(Mode::International, "... --- ... / - . ... -").unwrap();
        assert_eq!(result.output, "SOS TEST");
    }

    #[test]
    fn empty_input_is_empty_output() {
        let result = run(Mode::International, "").unwrap();
        assert_eq!(result.output, "");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn tolerates_ragged_spacing() {
        let result = run(Mode::International, "  ... --- ...   /   - . ... -  ").unwrap();
        assert_eq!(result.output, "SOS TEST");
    }

    #[test]
    fn unknown_codes_are_reported_not_dropped_silently() {
        let result = run(Mode::International, ".- .-.-.-.- -...").unwrap();
        assert_eq!(result.output, "AB");
        assert_eq!(result.unknown, vec![".-.-.-.-".to_string()]);
        assert!(result.messages[0].content.contains(".-.-.-.-"));
    }

    #[test]
    fn american_mode_uses_the_american_table() {
        let result = run(Mode::American, ".._.").unwrap();
        assert_eq!(result.output, "C");
    }

    #[test]
    fn round_trips_through_encode() {
        use crate::commands::encode;

        for input in ["SOS", "HELLO WORLD", "CQ DX 73", "WHAT? YES!", "A B C"] {
            for mode in [Mode::International, Mode::American] {
                let morse = encode::run(mode, input).unwrap();
                assert!(morse.messages.is_empty(), "{input} should fully encode");
                let plain = run(mode, &morse.output).unwrap();
                assert_eq!(plain.output, input.to_uppercase(), "mode {mode:?}");
            }
        }
    }
}
