use serde::{Deserialize, Serialize};

/// One compiled unit of a mask pattern.
///
/// Placeholder tokens accept a class of input characters; a `Literal`
/// only ever represents itself and is auto-inserted into masked output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    Digit,
    Letter,
    Wildcard,
    Literal(char),
}

/// Maps the three placeholder classes to the characters that denote them
/// in a pattern string. Any other pattern character compiles to a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    pub digit_char: char,
    pub letter_char: char,
    pub wildcard_char: char,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            digit_char: '#',
            letter_char: 'A',
            wildcard_char: '*',
        }
    }
}

impl MaskToken {
    /// Masked-output step for one input character.
    ///
    /// Returns whether `ch` satisfies the token and what the token emits
    /// into the masked stream. A `Literal` emits its own character even
    /// when `ch` differs; that is what inserts separators the user never
    /// typed. Placeholders emit nothing on a failed predicate.
    pub(super) fn mask_char(&self, ch: char) -> (bool, Option<char>) {
        match self {
            MaskToken::Digit => {
                let matched = ch.is_ascii_digit();
                (matched, matched.then_some(ch))
            }
            MaskToken::Letter => {
                let matched = ch.is_alphabetic();
                (matched, matched.then_some(ch))
            }
            MaskToken::Wildcard => (true, Some(ch)),
            MaskToken::Literal(sym) => (ch == *sym, Some(*sym)),
        }
    }

    /// Unmasked-output step for one input character.
    ///
    /// Same predicate as [`MaskToken::mask_char`], but literals never
    /// contribute to the unmasked stream.
    pub(super) fn read_char(&self, ch: char) -> (bool, Option<char>) {
        match self {
            MaskToken::Digit => {
                let matched = ch.is_ascii_digit();
                (matched, matched.then_some(ch))
            }
            MaskToken::Letter => {
                let matched = ch.is_alphabetic();
                (matched, matched.then_some(ch))
            }
            MaskToken::Wildcard => (true, Some(ch)),
            MaskToken::Literal(sym) => (ch == *sym, None),
        }
    }

    /// The pattern character this token compiled from.
    pub(super) fn placeholder(&self, config: &MaskConfig) -> char {
        match self {
            MaskToken::Digit => config.digit_char,
            MaskToken::Letter => config.letter_char,
            MaskToken::Wildcard => config.wildcard_char,
            MaskToken::Literal(sym) => *sym,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, MaskToken::Literal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{MaskConfig, MaskToken};

    #[test]
    fn digit_token_writes_digit() {
        let (matched, out) = MaskToken::Digit.mask_char('3');
        assert!(matched);
        assert_eq!(out, Some('3'));
    }

    #[test]
    fn digit_token_declines_letter() {
        let (matched, out) = MaskToken::Digit.mask_char('y');
        assert!(!matched);
        assert_eq!(out, None);
    }

    #[test]
    fn letter_token_writes_letter() {
        let (matched, out) = MaskToken::Letter.mask_char('y');
        assert!(matched);
        assert_eq!(out, Some('y'));
    }

    #[test]
    fn letter_token_accepts_non_ascii_letters() {
        let (matched, out) = MaskToken::Letter.mask_char('é');
        assert!(matched);
        assert_eq!(out, Some('é'));
    }

    #[test]
    fn wildcard_token_writes_anything() {
        let (matched, out) = MaskToken::Wildcard.mask_char('%');
        assert!(matched);
        assert_eq!(out, Some('%'));
    }

    #[test]
    fn literal_token_emits_itself_on_mismatch() {
        let (matched, out) = MaskToken::Literal('[').mask_char('3');
        assert!(!matched);
        assert_eq!(out, Some('['));
    }

    #[test]
    fn reading_literal_never_emits() {
        assert_eq!(MaskToken::Literal('[').read_char('['), (true, None));
        assert_eq!(MaskToken::Literal('[').read_char('3'), (false, None));
    }

    #[test]
    fn reading_placeholder_emits_only_on_match() {
        assert_eq!(MaskToken::Digit.read_char('7'), (true, Some('7')));
        assert_eq!(MaskToken::Digit.read_char('x'), (false, None));
        assert_eq!(MaskToken::Wildcard.read_char('x'), (true, Some('x')));
    }

    #[test]
    fn placeholder_round_trips_through_config() {
        let config = MaskConfig::default();
        assert_eq!(MaskToken::Digit.placeholder(&config), '#');
        assert_eq!(MaskToken::Letter.placeholder(&config), 'A');
        assert_eq!(MaskToken::Wildcard.placeholder(&config), '*');
        assert_eq!(MaskToken::Literal('-').placeholder(&config), '-');
    }
}
