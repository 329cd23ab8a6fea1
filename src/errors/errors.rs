use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A terminal lexical or syntax error, located at a byte offset in the source.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_inner(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Lexical errors come from the tokenizer, everything else from the parser.
    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnrecognisedToken { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedLiteral { .. } => "UnexpectedLiteral",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::UnexpectedPrimary { .. } => "UnexpectedPrimary",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::ChainTooLong { .. } => "ChainTooLong",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while expecting `{}`, is something left unclosed?",
                expected
            )),
            ErrorImpl::UnexpectedToken { token, expected } => {
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, did you miss a semicolon?",
                        token
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, expected `{}`",
                        token, expected
                    ))
                }
            }
            ErrorImpl::UnexpectedLiteral { kind } => {
                ErrorTip::Suggestion(format!("`{}` cannot start a literal", kind))
            }
            ErrorImpl::InvalidAssignmentTarget { operator } => ErrorTip::Suggestion(format!(
                "Only identifiers and member expressions can appear left of `{}`",
                operator
            )),
            ErrorImpl::UnexpectedPrimary { token } => ErrorTip::Suggestion(format!(
                "Expected an expression, found `{}`",
                token
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Constructs may nest at most {} levels, split this into smaller pieces",
                limit
            )),
            ErrorImpl::ChainTooLong { limit } => ErrorTip::Suggestion(format!(
                "A single operator, call or member chain may have at most {} links",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected token \"{remainder}\"")]
    UnrecognisedToken { remainder: String },
    #[error("Unexpected end of input, expected: \"{expected}\"")]
    UnexpectedEndOfInput { expected: TokenKind },
    #[error("Unexpected token: \"{token}\", expected: \"{expected}\"")]
    UnexpectedToken { token: String, expected: TokenKind },
    #[error("Literal: unexpected literal production: \"{kind}\"")]
    UnexpectedLiteral { kind: TokenKind },
    #[error("Invalid left-hand side in assignment expression, operator \"{operator}\"")]
    InvalidAssignmentTarget { operator: String },
    #[error("Unexpected primary expression: \"{token}\"")]
    UnexpectedPrimary { token: String },
    /// Number tokens only ever match `[0-9]+(\.[0-9]+)?`, which `f64` always
    /// accepts, so the parser never raises this for tokenizer output.
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("Nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("Chain exceeds the limit of {limit} links")]
    ChainTooLong { limit: usize },
}
