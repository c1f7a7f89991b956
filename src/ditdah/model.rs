use std::str::FromStr;

use crate::error::DitdahError;

/// Which code set to translate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    International,
    American,
}

/// Direction of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToMorse,
    ToPlainText,
}

impl FromStr for Direction {
    type Err = DitdahError;

    /// Parses the CLI target values: `morse`/`m` and `plain`/`p`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morse" | "m" => Ok(Direction::ToMorse),
            "plain" | "p" => Ok(Direction::ToPlainText),
            other => Err(DitdahError::InvalidTarget(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_target_spellings() {
        assert_eq!("morse".parse::<Direction>().unwrap(), Direction::ToMorse);
        assert_eq!("m".parse::<Direction>().unwrap(), Direction::ToMorse);
        assert_eq!("plain".parse::<Direction>().unwrap(), Direction::ToPlainText);
        assert_eq!("p".parse::<Direction>().unwrap(), Direction::ToPlainText);
        assert_eq!("MORSE".parse::<Direction>().unwrap(), Direction::ToMorse);
    }

    #[test]
    fn rejects_unrecognized_target() {
        let err = "binary".parse::<Direction>().unwrap_err();
        assert!(matches!(err, DitdahError::InvalidTarget(ref t) if t == "binary"));
    }
}
