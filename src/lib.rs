//! Pattern-driven input masking.
//!
//! A mask pattern is a plain string of placeholder characters and
//! literal separators. Compile it once, then feed it the full current
//! input on every keystroke; the engine returns the formatted (masked)
//! string and the pure data (unmasked) string.
//!
//! # Pattern syntax (default config)
//!
//! | Character | Meaning                                   |
//! |-----------|-------------------------------------------|
//! | `#`       | One decimal digit                         |
//! | `A`       | One letter (Unicode alphabetic)           |
//! | `*`       | Any one character                         |
//! | other     | Literal, auto-inserted into masked output |
//!
//! ```
//! use maskform::Mask;
//!
//! let mask = Mask::new("(###) ###-####");
//! assert_eq!(mask.mask("5551234567", true), "(555) 123-4567");
//! assert_eq!(mask.process("555123", false).masked, "(555) 123");
//! ```

pub mod mask;

pub use mask::{Mask, MaskConfig, MaskResult, MaskToken};
