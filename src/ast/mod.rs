/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root, identifiers and shared helpers
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - printer: JSON and S-expression output strategies
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
