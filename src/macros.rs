//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates a tokenizer rule producing a token kind
//! - `MK_SKIP_PATTERN!` - Creates a tokenizer rule whose matches are discarded
//!
//! These macros keep the rule table in the lexer readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a tokenizer rule that yields a token of the given kind.
///
/// The pattern is anchored to the start of the remaining input.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"\{", TokenKind::OpenCurly)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($pattern:literal, $kind:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $pattern)).unwrap(),
            kind: Some($kind),
        }
    };
}

/// Creates a tokenizer rule for insignificant text (whitespace, comments).
#[macro_export]
macro_rules! MK_SKIP_PATTERN {
    ($pattern:literal) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $pattern)).unwrap(),
            kind: None,
        }
    };
}
