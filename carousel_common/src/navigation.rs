//! Navigation commands and parsing of user input into them.
//!
//! Users type one command per line: `n`/`next`, `p`/`prev`/`previous`, a dot number
//! `1`..`5`, or `q`/`quit`. Keywords are matched case-insensitively.

use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::state::DOT_COUNT;

/// A navigation operation on the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Advance to the next quote.
    Next,
    /// Go back to the previous quote.
    Previous,
    /// Select a quote by its 0-based index.
    JumpTo(usize),
}

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the carousel.
    Navigate(Navigation),
    /// Leave the application.
    Quit,
}

#[derive(Debug, Display, EnumString)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    #[strum(serialize = "n", serialize = "next")]
    Next,
    #[strum(serialize = "p", serialize = "prev", serialize = "previous")]
    Previous,
    #[strum(serialize = "q", serialize = "quit")]
    Quit,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(dot) = trimmed.parse::<usize>() {
            return if (1..=DOT_COUNT).contains(&dot) {
                Ok(Input::Navigate(Navigation::JumpTo(dot - 1)))
            } else {
                Err(format!("dot number must be between 1 and {}", DOT_COUNT))
            };
        }
        match Keyword::from_str(trimmed) {
            Ok(Keyword::Next) => Ok(Input::Navigate(Navigation::Next)),
            Ok(Keyword::Previous) => Ok(Input::Navigate(Navigation::Previous)),
            Ok(Keyword::Quit) => Ok(Input::Quit),
            Err(_) => Err(format!("unknown command: {:?}", trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords() {
        assert_eq!("n".parse::<Input>(), Ok(Input::Navigate(Navigation::Next)));
        assert_eq!(" NEXT ".parse::<Input>(), Ok(Input::Navigate(Navigation::Next)));
        assert_eq!("prev".parse::<Input>(), Ok(Input::Navigate(Navigation::Previous)));
        assert_eq!("Previous".parse::<Input>(), Ok(Input::Navigate(Navigation::Previous)));
        assert_eq!("q".parse::<Input>(), Ok(Input::Quit));
    }

    #[test]
    fn dot_numbers_are_one_based() {
        assert_eq!("1".parse::<Input>(), Ok(Input::Navigate(Navigation::JumpTo(0))));
        assert_eq!("5".parse::<Input>(), Ok(Input::Navigate(Navigation::JumpTo(4))));
        assert!("0".parse::<Input>().is_err());
        assert!("6".parse::<Input>().is_err());
    }

    #[test]
    fn rejects_unknown_input() {
        assert!("".parse::<Input>().is_err());
        assert!("jump".parse::<Input>().is_err());
    }
}
