use super::model::{MaskConfig, MaskToken};

/// Classifies one pattern character against the configured placeholders.
///
/// Checks run digit, then letter, then wildcard; with a config whose
/// placeholder characters collide the earlier class wins. Anything that
/// matches no placeholder is a literal.
pub(super) fn classify(ch: char, config: &MaskConfig) -> MaskToken {
    if ch == config.digit_char {
        MaskToken::Digit
    } else if ch == config.letter_char {
        MaskToken::Letter
    } else if ch == config.wildcard_char {
        MaskToken::Wildcard
    } else {
        MaskToken::Literal(ch)
    }
}

pub(super) fn parse_mask(mask: &str, config: &MaskConfig) -> Vec<MaskToken> {
    mask.chars().map(|ch| classify(ch, config)).collect()
}
