use super::model::{MaskConfig, MaskToken};

/// Materializes the literal skeleton of a token run: each token mapped
/// back to its representative pattern character.
pub(super) fn render_skeleton(tokens: &[MaskToken], config: &MaskConfig) -> String {
    tokens
        .iter()
        .map(|token| token.placeholder(config))
        .collect()
}

/// Walks input characters against pattern tokens in lockstep, producing
/// the (masked, unmasked) pair.
///
/// One token is settled per iteration. An unmatched literal emits itself
/// without consuming the input character, which stays pending for the
/// next placeholder. A placeholder whose predicate fails emits nothing,
/// and empty emission truncates the walk: the rest of the pattern is
/// abandoned rather than retried against the offending character.
///
/// When input runs out first, `exhaustive` decides whether the masked
/// output is padded with the skeleton of the remaining tokens (static
/// formatting) or left where the input stopped (live typing).
pub(super) fn process(
    input: &str,
    tokens: &[MaskToken],
    config: &MaskConfig,
    exhaustive: bool,
) -> (String, String) {
    let chars: Vec<char> = input.chars().collect();
    let mut masked = String::new();
    let mut unmasked = String::new();
    let mut cursor = 0usize;

    for (idx, token) in tokens.iter().enumerate() {
        let Some(&ch) = chars.get(cursor) else {
            if exhaustive {
                masked.push_str(render_skeleton(&tokens[idx..], config).as_str());
            }
            break;
        };

        let (matched, out) = token.mask_char(ch);
        let Some(out) = out else {
            break;
        };

        masked.push(out);
        if let (_, Some(pure)) = token.read_char(ch) {
            unmasked.push(pure);
        }
        if matched {
            cursor += 1;
        }
    }

    (masked, unmasked)
}
