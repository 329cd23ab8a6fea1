use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PATTERN, MK_SKIP_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// A single tokenizer rule. Rules without a kind match text that is skipped.
pub struct RegexPattern {
    regex: Regex,
    kind: Option<TokenKind>,
}

lazy_static! {
    // Order matters: the first matching rule wins, so specific rules come
    // before general ones (decimals before integers, keywords before identifiers).
    static ref PATTERNS: Vec<RegexPattern> = vec![
        // Whitespace and comments
        MK_SKIP_PATTERN!(r"[\s\x{FEFF}]+"),
        MK_SKIP_PATTERN!(r"//.*"),
        MK_SKIP_PATTERN!(r"/\*(?s:.)*?\*/"),

        // Delimiters
        MK_PATTERN!(r";", TokenKind::Semicolon),
        MK_PATTERN!(r"\{", TokenKind::OpenCurly),
        MK_PATTERN!(r"\}", TokenKind::CloseCurly),
        MK_PATTERN!(r"\(", TokenKind::OpenParen),
        MK_PATTERN!(r"\)", TokenKind::CloseParen),
        MK_PATTERN!(r",", TokenKind::Comma),
        MK_PATTERN!(r"\.", TokenKind::Dot),
        MK_PATTERN!(r"\[", TokenKind::OpenBracket),
        MK_PATTERN!(r"\]", TokenKind::CloseBracket),

        // Keywords
        MK_PATTERN!(r"\blet\b", TokenKind::Let),
        MK_PATTERN!(r"\bif\b", TokenKind::If),
        MK_PATTERN!(r"\belse\b", TokenKind::Else),
        MK_PATTERN!(r"\btrue\b", TokenKind::True),
        MK_PATTERN!(r"\bfalse\b", TokenKind::False),
        MK_PATTERN!(r"\bnull\b", TokenKind::Null),
        MK_PATTERN!(r"\bwhile\b", TokenKind::While),
        MK_PATTERN!(r"\bdo\b", TokenKind::Do),
        MK_PATTERN!(r"\bfor\b", TokenKind::For),
        MK_PATTERN!(r"\bdef\b", TokenKind::Def),
        MK_PATTERN!(r"\breturn\b", TokenKind::Return),
        MK_PATTERN!(r"\bclass\b", TokenKind::Class),
        MK_PATTERN!(r"\bextends\b", TokenKind::Extends),
        MK_PATTERN!(r"\bsuper\b", TokenKind::Super),
        MK_PATTERN!(r"\bnew\b", TokenKind::New),
        MK_PATTERN!(r"\bthis\b", TokenKind::This),

        // Numbers
        MK_PATTERN!(r"[0-9]+\.[0-9]+", TokenKind::Number),
        MK_PATTERN!(r"[0-9]+", TokenKind::Number),

        // Identifiers
        MK_PATTERN!(r"[A-Za-z0-9_]+", TokenKind::Identifier),

        // Operators
        MK_PATTERN!(r"[=!]=", TokenKind::EqualityOperator),
        MK_PATTERN!(r"=", TokenKind::SimpleAssign),
        MK_PATTERN!(r"[*/+\-]=", TokenKind::ComplexAssign),
        MK_PATTERN!(r"[+\-]", TokenKind::AdditiveOperator),
        MK_PATTERN!(r"[*/]", TokenKind::MultiplicativeOperator),
        MK_PATTERN!(r"&&", TokenKind::LogicalAnd),
        MK_PATTERN!(r"\|\|", TokenKind::LogicalOr),
        MK_PATTERN!(r"!", TokenKind::LogicalNot),
        MK_PATTERN!(r"[<>]=?", TokenKind::RelationalOperator),

        // Strings, quotes included
        MK_PATTERN!(r#""[^"]*""#, TokenKind::String),
        MK_PATTERN!(r"'[^']*'", TokenKind::String),
    ];
}

/// Lazily pulls tokens out of a source string, one per call.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    source: String,
    cursor: usize,
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer::default()
    }

    /// Resets the tokenizer to the start of `source`.
    pub fn init(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = 0;
    }

    pub fn is_eof(&self) -> bool {
        self.cursor == self.source.len()
    }

    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.cursor..]
    }

    /// Returns the next significant token, or `None` once the input is exhausted.
    ///
    /// Whitespace and comments are consumed within the same call. Text that no
    /// rule matches is a lexical error carrying the unmatched remainder.
    pub fn get_next_token(&mut self) -> Result<Option<Token>, Error> {
        'scan: while self.has_more_tokens() {
            let start = self.cursor;

            for pattern in PATTERNS.iter() {
                let matched = match pattern.regex.find(self.remainder()) {
                    Some(matched) => matched.end(),
                    None => continue,
                };

                self.cursor += matched;

                let kind = match pattern.kind {
                    Some(kind) => kind,
                    None => continue 'scan,
                };

                let token = MK_TOKEN!(
                    kind,
                    self.source[start..self.cursor].to_string(),
                    Span {
                        start: Position(start),
                        end: Position(self.cursor)
                    }
                );
                trace!(kind = %token.kind, value = %token.value, offset = start, "token");

                return Ok(Some(token));
            }

            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    remainder: self.remainder().to_string(),
                },
                Position(start),
            ));
        }

        Ok(None)
    }
}

/// Drains a fresh tokenizer over `source` into a vector of tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.init(source);

    let mut tokens = vec![];
    while let Some(token) = tokenizer.get_next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
