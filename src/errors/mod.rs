//! Error types and error handling for the parser.
//!
//! This module defines the errors raised while turning Letter source into
//! an AST. It includes:
//!
//! - Error structures carrying the source position of the failure
//! - Lexical and syntax error variants
//! - Human readable tips used by the CLI report

pub mod errors;
