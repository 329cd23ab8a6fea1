//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns Letter
//! source into a [`Program`](crate::ast::ast::Program). It handles:
//!
//! - Statement parsing (blocks, variables, functions, classes, control flow)
//! - Expression parsing by precedence level, from assignment down to literals
//! - Fail-fast error reporting, the first error aborts the parse
//!
//! Statements are dispatched through a lookup table keyed by the leading
//! token; binary expressions are left-folded one precedence level at a time.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
