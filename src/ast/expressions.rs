use serde::Serialize;

use super::ast::{serialize_number, Identifier};

/// Expression
///
/// Closed set of expression nodes. Every variant wraps a struct that
/// serializes itself with its own `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expr {
    Assignment(AssignmentExpression),
    Logical(LogicalExpression),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Call(CallExpression),
    New(NewExpression),
    Member(MemberExpression),
    Identifier(Identifier),
    This(ThisExpression),
    Super(Super),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
}

impl Expr {
    /// Name of the node, as written in its `type` tag.
    pub fn node_type(&self) -> &'static str {
        match self {
            Expr::Assignment(_) => "AssignmentExpression",
            Expr::Logical(_) => "LogicalExpression",
            Expr::Binary(_) => "BinaryExpression",
            Expr::Unary(_) => "UnaryExpression",
            Expr::Call(_) => "CallExpression",
            Expr::New(_) => "NewExpression",
            Expr::Member(_) => "MemberExpression",
            Expr::Identifier(_) => "Identifier",
            Expr::This(_) => "ThisExpression",
            Expr::Super(_) => "Super",
            Expr::NumericLiteral(_) => "NumericLiteral",
            Expr::StringLiteral(_) => "StringLiteral",
            Expr::BooleanLiteral(_) => "BooleanLiteral",
            Expr::NullLiteral(_) => "NullLiteral",
        }
    }

    /// Only identifiers and member expressions may appear left of an assignment.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Expr::Identifier(_) | Expr::Member(_))
    }
}

// COMPOUND EXPRESSIONS

/// `left = right`, `left += right`, ... Right-associative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// `&&` and `||` chains.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LogicalExpression {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Equality, relational, additive and multiplicative chains.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Prefix `+`, `-` or `!`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// `object.property` when not computed, `object[property]` when computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression {
    pub computed: bool,
    pub object: Box<Expr>,
    pub property: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Super {}

// LITERALS

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NumericLiteral {
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
}

/// String literal with its quotes already stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NullLiteral {
    pub value: (),
}
