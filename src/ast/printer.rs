//! Output strategies for a parsed [`Program`].
//!
//! The tree itself is always the canonical enum AST; the output shape is
//! picked per call. `Json` is the record-per-node form, `SExpression` a
//! compact Lisp-like rendering.

use super::{
    ast::{format_number, Identifier, Program},
    expressions::Expr,
    statements::{ForInit, Stmt, VariableStatement},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    SExpression,
}

/// Renders `program` in the requested format.
pub fn render(program: &Program, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(program),
        OutputFormat::SExpression => Ok(to_sexpression(program)),
    }
}

pub fn to_sexpression(program: &Program) -> String {
    begin(program.iter())
}

fn begin<'a>(body: impl Iterator<Item = &'a Stmt>) -> String {
    let parts: Vec<String> = body.filter_map(stmt_to_sexpression).collect();
    list("begin", parts)
}

fn list(head: &str, parts: Vec<String>) -> String {
    if parts.is_empty() {
        format!("({})", head)
    } else {
        format!("({} {})", head, parts.join(" "))
    }
}

fn or_null(part: Option<String>) -> String {
    part.unwrap_or_else(|| String::from("null"))
}

/// Empty statements render to nothing.
fn stmt_to_sexpression(stmt: &Stmt) -> Option<String> {
    let rendered = match stmt {
        Stmt::Empty(_) => return None,
        Stmt::Block(block) => begin(block.iter()),
        Stmt::Expression(stmt) => expr_to_sexpression(&stmt.expression),
        Stmt::Variable(stmt) => variables_to_sexpression(stmt),
        Stmt::If(stmt) => {
            let mut parts = vec![
                expr_to_sexpression(&stmt.test),
                or_null(stmt_to_sexpression(&stmt.consequent)),
            ];
            if let Some(alternate) = &stmt.alternate {
                parts.push(or_null(stmt_to_sexpression(alternate)));
            }
            list("if", parts)
        }
        Stmt::While(stmt) => list(
            "while",
            vec![
                expr_to_sexpression(&stmt.test),
                or_null(stmt_to_sexpression(&stmt.body)),
            ],
        ),
        Stmt::DoWhile(stmt) => list(
            "do-while",
            vec![
                or_null(stmt_to_sexpression(&stmt.body)),
                expr_to_sexpression(&stmt.test),
            ],
        ),
        Stmt::For(stmt) => {
            let init = stmt.init.as_ref().map(|init| match init {
                ForInit::Variables(variables) => variables_to_sexpression(variables),
                ForInit::Expression(expr) => expr_to_sexpression(expr),
            });
            list(
                "for",
                vec![
                    or_null(init),
                    or_null(stmt.test.as_ref().map(expr_to_sexpression)),
                    or_null(stmt.update.as_ref().map(expr_to_sexpression)),
                    or_null(stmt_to_sexpression(&stmt.body)),
                ],
            )
        }
        Stmt::Function(stmt) => {
            let params: Vec<String> = stmt.params.iter().map(|param| param.name.clone()).collect();
            list(
                "def",
                vec![
                    stmt.name.name.clone(),
                    format!("({})", params.join(" ")),
                    begin(stmt.body.iter()),
                ],
            )
        }
        Stmt::Return(stmt) => match &stmt.argument {
            Some(argument) => list("return", vec![expr_to_sexpression(argument)]),
            None => list("return", vec![]),
        },
        Stmt::Class(stmt) => list(
            "class",
            vec![
                stmt.id.name.clone(),
                or_null(stmt.super_class.as_ref().map(|Identifier { name }| name.clone())),
                begin(stmt.body.iter()),
            ],
        ),
    };

    Some(rendered)
}

fn variables_to_sexpression(stmt: &VariableStatement) -> String {
    let mut declarations: Vec<String> = stmt
        .declarations
        .iter()
        .map(|declaration| {
            let mut parts = vec![declaration.id.name.clone()];
            if let Some(init) = &declaration.init {
                parts.push(expr_to_sexpression(init));
            }
            list("var", parts)
        })
        .collect();

    if declarations.len() == 1 {
        declarations.remove(0)
    } else {
        list("begin", declarations)
    }
}

fn expr_to_sexpression(expr: &Expr) -> String {
    match expr {
        Expr::Assignment(expr) => {
            let head = if expr.operator == "=" { "set" } else { expr.operator.as_str() };
            list(
                head,
                vec![expr_to_sexpression(&expr.left), expr_to_sexpression(&expr.right)],
            )
        }
        Expr::Logical(expr) => list(
            &expr.operator,
            vec![expr_to_sexpression(&expr.left), expr_to_sexpression(&expr.right)],
        ),
        Expr::Binary(expr) => list(
            &expr.operator,
            vec![expr_to_sexpression(&expr.left), expr_to_sexpression(&expr.right)],
        ),
        Expr::Unary(expr) => list(&expr.operator, vec![expr_to_sexpression(&expr.argument)]),
        Expr::Call(expr) => list(
            &expr_to_sexpression(&expr.callee),
            expr.arguments.iter().map(expr_to_sexpression).collect(),
        ),
        Expr::New(expr) => {
            let mut parts = vec![expr_to_sexpression(&expr.callee)];
            parts.extend(expr.arguments.iter().map(expr_to_sexpression));
            list("new", parts)
        }
        Expr::Member(expr) => list(
            if expr.computed { "index" } else { "prop" },
            vec![expr_to_sexpression(&expr.object), expr_to_sexpression(&expr.property)],
        ),
        Expr::Identifier(identifier) => identifier.name.clone(),
        Expr::This(_) => String::from("this"),
        Expr::Super(_) => String::from("super"),
        Expr::NumericLiteral(literal) => format_number(literal.value),
        Expr::StringLiteral(literal) => format!("\"{}\"", literal.value),
        Expr::BooleanLiteral(literal) => literal.value.to_string(),
        Expr::NullLiteral(_) => String::from("null"),
    }
}
