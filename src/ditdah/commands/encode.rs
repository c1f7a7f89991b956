use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Mode;

/// Translates plain text into Morse code.
///
/// Codes are joined with a single space; the space character encodes as `/`
/// so word boundaries survive the round trip. Output is trimmed: no trailing
/// separator. Characters without a table entry are left out of the output
/// but collected and reported, the rest of the input still converts.
pub fn run(mode: Mode, input: &str) -> Result<CmdResult> {
    let table = mode.table();

    let mut codes: Vec<&str> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    for ch in input.chars() {
        match table.code_for(ch) {
            Some(code) => codes.push(code),
            None => {
                let ch = ch.to_string();
                if !unknown.contains(&ch) {
                    unknown.push(ch);
                }
            }
        }
    }

    let mut result = CmdResult::default().with_output(codes.join(" "));
    if !unknown.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "no morse code for: {}",
            unknown.join(" ")
        )));
        result = result.with_unknown(unknown);
    }
    Ok(result)
}
