//! Lexical analysis module for the Letter parser.
//!
//! This module contains the tokenizer that lazily converts source text into
//! tokens for the parser. It handles:
//!
//! - Ordered regex rules, most specific first
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token spans for error reporting
//! - Comments and whitespace skipping

pub mod lexer;
pub mod tokens;
