mod format;
mod model;
mod parser;

pub use model::{MaskConfig, MaskToken};

use unicode_width::UnicodeWidthStr;

/// The two halves of a processed input: the formatted string and the
/// pure data with every literal stripped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskResult {
    pub masked: String,
    pub unmasked: String,
}

/// A compiled mask pattern bound to its placeholder configuration.
///
/// Compilation happens once in the constructor; every method afterwards
/// is a pure function of its arguments, so one `Mask` can be shared
/// across threads and re-invoked on every keystroke with the full
/// current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    tokens: Vec<MaskToken>,
    config: MaskConfig,
}

impl Mask {
    /// Compiles `pattern` with the default placeholders: `#` digit,
    /// `A` letter, `*` wildcard.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        Self::with_config(pattern, MaskConfig::default())
    }

    pub fn with_config(pattern: impl AsRef<str>, config: MaskConfig) -> Self {
        let tokens = parser::parse_mask(pattern.as_ref(), &config);
        Self { tokens, config }
    }

    pub fn phone_us() -> Self {
        Self::new("(###) ###-####")
    }

    pub fn zip_us() -> Self {
        Self::new("#####")
    }

    pub fn date_dmy() -> Self {
        Self::new("##/##/####")
    }

    pub fn time_hm() -> Self {
        Self::new("##:##")
    }

    pub fn credit_card() -> Self {
        Self::new("#### #### #### ####")
    }

    /// Formats `input` against the pattern.
    ///
    /// With `exhaustive` set, the output is padded with the literal
    /// skeleton of any unfilled tail; pass `false` for live typing so
    /// the rendering stops where the input does.
    pub fn mask(&self, input: &str, exhaustive: bool) -> String {
        self.process(input, exhaustive).masked
    }

    /// The pure data half of [`Mask::process`]: accepted input with all
    /// literal separators stripped.
    pub fn unmask(&self, input: &str, exhaustive: bool) -> String {
        self.process(input, exhaustive).unmasked
    }

    /// Runs `input` through the pattern, yielding masked and unmasked
    /// output together.
    ///
    /// Never fails: a character that cannot satisfy its placeholder
    /// truncates both outputs at that point.
    pub fn process(&self, input: &str, exhaustive: bool) -> MaskResult {
        let (masked, unmasked) =
            format::process(input, self.tokens.as_slice(), &self.config, exhaustive);
        MaskResult { masked, unmasked }
    }

    /// The full literal skeleton of the pattern, as rendered for empty
    /// input in exhaustive mode.
    pub fn skeleton(&self) -> String {
        format::render_skeleton(self.tokens.as_slice(), &self.config)
    }

    /// Whether `input` fills every placeholder slot of the pattern.
    pub fn is_complete(&self, input: &str) -> bool {
        let placeholders = self
            .tokens
            .iter()
            .filter(|token| token.is_placeholder())
            .count();
        self.process(input, false).unmasked.chars().count() == placeholders
    }

    /// Terminal cell width of the exhaustive masked rendering of
    /// `input`, for aligning live-formatted fields.
    pub fn display_width(&self, input: &str) -> usize {
        UnicodeWidthStr::width(self.mask(input, true).as_str())
    }

    pub fn tokens(&self) -> &[MaskToken] {
        self.tokens.as_slice()
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
