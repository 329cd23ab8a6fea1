use serde::{Serialize, Serializer};

use super::{expressions::*, statements::*};

/// Root of every parsed source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// Integral values print as integers (`42`, not `42.0`).
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

pub(crate) fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

macro_rules! node_from {
    ($target:ident, $($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl From<$node> for $target {
                fn from(node: $node) -> Self {
                    $target::$variant(node)
                }
            }
        )*
    };
}

node_from!(
    Expr,
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
);

node_from!(
    Stmt,
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
);
