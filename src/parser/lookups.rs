use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Binary precedence levels, loosest first.
///
/// Each level folds one operator class over operands of the next tighter
/// level; below `Multiplicative` operands are unary expressions.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl BindingPower {
    /// The operator token folded at this level.
    pub fn operator(&self) -> TokenKind {
        match self {
            BindingPower::LogicalOr => TokenKind::LogicalOr,
            BindingPower::LogicalAnd => TokenKind::LogicalAnd,
            BindingPower::Equality => TokenKind::EqualityOperator,
            BindingPower::Relational => TokenKind::RelationalOperator,
            BindingPower::Additive => TokenKind::AdditiveOperator,
            BindingPower::Multiplicative => TokenKind::MultiplicativeOperator,
        }
    }

    /// The next tighter level, `None` when operands are unary expressions.
    pub fn next(&self) -> Option<BindingPower> {
        match self {
            BindingPower::LogicalOr => Some(BindingPower::LogicalAnd),
            BindingPower::LogicalAnd => Some(BindingPower::Equality),
            BindingPower::Equality => Some(BindingPower::Relational),
            BindingPower::Relational => Some(BindingPower::Additive),
            BindingPower::Additive => Some(BindingPower::Multiplicative),
            BindingPower::Multiplicative => None,
        }
    }

    /// `&&` and `||` build LogicalExpression nodes instead of BinaryExpression.
    pub fn is_logical(&self) -> bool {
        matches!(self, BindingPower::LogicalOr | BindingPower::LogicalAnd)
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Let, parse_var_stmt);
    parser.stmt(TokenKind::Def, parse_fn_decl_stmt);
    parser.stmt(TokenKind::Class, parse_class_decl_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);

    // Iteration
    parser.stmt(TokenKind::While, parse_iteration_stmt);
    parser.stmt(TokenKind::Do, parse_iteration_stmt);
    parser.stmt(TokenKind::For, parse_iteration_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
