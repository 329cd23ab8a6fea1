use std::slice::Iter;

use serde::Serialize;

use super::{ast::Identifier, expressions::Expr};

/// Statement
///
/// Closed set of statement nodes. Every variant wraps a struct that
/// serializes itself with its own `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stmt {
    Empty(EmptyStatement),
    Block(BlockStatement),
    Expression(ExpressionStatement),
    Variable(VariableStatement),
    If(IfStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    Function(FunctionDeclaration),
    Return(ReturnStatement),
    Class(ClassDeclaration),
}

impl Stmt {
    /// Name of the node, as written in its `type` tag.
    pub fn node_type(&self) -> &'static str {
        match self {
            Stmt::Empty(_) => "EmptyStatement",
            Stmt::Block(_) => "BlockStatement",
            Stmt::Expression(_) => "ExpressionStatement",
            Stmt::Variable(_) => "VariableStatement",
            Stmt::If(_) => "IfStatement",
            Stmt::While(_) => "WhileStatement",
            Stmt::DoWhile(_) => "DoWhileStatement",
            Stmt::For(_) => "ForStatement",
            Stmt::Function(_) => "FunctionDeclaration",
            Stmt::Return(_) => "ReturnStatement",
            Stmt::Class(_) => "ClassDeclaration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EmptyStatement {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement {
    pub body: Vec<Stmt>,
}

impl BlockStatement {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    pub expression: Expr,
}

/// `let a = 1, b;`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableStatement {
    pub declarations: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    pub alternate: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct WhileStatement {
    pub test: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement {
    pub body: Box<Stmt>,
    pub test: Expr,
}

/// Initializer clause of a `for` loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    Variables(VariableStatement),
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Box<Stmt>,
}

/// `def name(params) { body }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    pub argument: Option<Expr>,
}

/// `class Id [extends SuperClass] { body }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ClassDeclaration {
    pub id: Identifier,
    #[serde(rename = "superClass")]
    pub super_class: Option<Identifier>,
    pub body: BlockStatement,
}
