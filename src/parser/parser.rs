//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! a [`Tokenizer`] on demand and keeps exactly one token of lookahead; every
//! grammar decision is made by inspecting that token's kind, and tokens are
//! only ever consumed through [`Parser::eat`].
//!
//! It maintains a lookup table mapping leading tokens to statement handlers.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt_list,
};

/// Deepest recursion the parser descends into: statements inside statements,
/// expressions inside expressions, stacked unary operators and `new`.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Longest left-folded chain: operands of one binary level, call argument
/// lists, or member accesses.
pub const MAX_CHAIN_LENGTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// One instance parses one source at a time; [`Parser::parse`] resets all
/// state, so an instance can be reused sequentially.
pub struct Parser {
    /// Token source for the current parse
    tokenizer: Tokenizer,
    /// The next unconsumed token, `None` once input is exhausted
    lookahead: Option<Token>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Current recursion depth, bounded by [`MAX_NESTING_DEPTH`]
    depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    /// Creates a new Parser instance with its lookup tables registered.
    pub fn new() -> Self {
        let mut parser = Parser {
            tokenizer: Tokenizer::new(),
            lookahead: None,
            stmt_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses `source` into a [`Program`].
    ///
    /// Parsing is fail-fast: the first lexical or syntax error aborts the
    /// whole parse and no partial tree is returned.
    pub fn parse(&mut self, source: &str) -> Result<Program, Error> {
        debug!(len = source.len(), "parsing source");

        self.tokenizer.init(source);
        self.depth = 0;
        self.lookahead = self.tokenizer.get_next_token()?;

        let program = self.parse_program().map_err(|error| {
            debug!(error = %error, position = error.get_position().0, "parse failed");
            error
        })?;

        debug!(statements = program.body.len(), "parsed program");
        Ok(program)
    }

    /// Program
    ///  : StatementList
    ///  ;
    fn parse_program(&mut self) -> Result<Program, Error> {
        let body = if self.lookahead.is_some() {
            parse_stmt_list(self, None)?
        } else {
            vec![]
        };

        Ok(Program { body })
    }

    /// Returns the lookahead token without consuming it.
    pub fn lookahead(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Returns the kind of the lookahead token.
    pub fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Checks whether the lookahead is a token of the given kind.
    pub fn lookahead_is(&self, kind: TokenKind) -> bool {
        self.lookahead_kind() == Some(kind)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Consumes the lookahead, which must be of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, or an error if the input is exhausted or the
    /// lookahead is of another kind.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: expected_kind,
                    },
                    self.get_position(),
                ))
            }
        };

        if token.kind != expected_kind {
            let error = Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    expected: expected_kind,
                },
                token.span.start,
            );
            self.lookahead = Some(token);
            return Err(error);
        }

        self.lookahead = self.tokenizer.get_next_token()?;

        Ok(token)
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` instead of recursing past
    /// [`MAX_NESTING_DEPTH`].
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    /// Fails with `ChainTooLong` once a chain grows past [`MAX_CHAIN_LENGTH`].
    pub fn check_chain(&self, length: usize) -> Result<(), Error> {
        if length > MAX_CHAIN_LENGTH {
            return Err(Error::new(
                ErrorImpl::ChainTooLong {
                    limit: MAX_CHAIN_LENGTH,
                },
                self.get_position(),
            ));
        }

        Ok(())
    }

    /// Returns the handler registered for the lookahead's kind, if any.
    pub fn get_stmt_handler(&self) -> Option<StmtHandler> {
        self.lookahead_kind()
            .and_then(|kind| self.stmt_lookup.get(&kind).copied())
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the lookahead, or the end of the source when
    /// the input is exhausted.
    pub fn get_position(&self) -> Position {
        match &self.lookahead {
            Some(token) => token.span.start,
            None => Position(self.tokenizer.cursor()),
        }
    }
}

/// Parses Letter source into a [`Program`] with a fresh parser.
///
/// This is the main entry point for parsing.
pub fn parse(source: &str) -> Result<Program, Error> {
    Parser::new().parse(source)
}
