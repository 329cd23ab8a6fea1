//! Unit tests for the AST module.
//!
//! Covers the serialized node shape and the S-expression rendering.

use serde_json::json;

use super::{
    ast::{Identifier, Program},
    expressions::{BinaryExpression, Expr, NumericLiteral},
    printer::{render, to_sexpression, OutputFormat},
    statements::{ExpressionStatement, Stmt},
};
use crate::parser::parser::parse;

fn to_json(source: &str) -> serde_json::Value {
    serde_json::to_value(parse(source).unwrap()).unwrap()
}

fn sexpr(source: &str) -> String {
    to_sexpression(&parse(source).unwrap())
}

#[test]
fn test_empty_program_json() {
    assert_eq!(to_json(""), json!({ "type": "Program", "body": [] }));
}

#[test]
fn test_numbers_serialize_as_integers_when_integral() {
    assert_eq!(
        to_json("42; 3.5;"),
        json!({
            "type": "Program",
            "body": [
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "NumericLiteral", "value": 42 }
                },
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "NumericLiteral", "value": 3.5 }
                }
            ]
        })
    );
}

#[test]
fn test_literal_nodes_json() {
    assert_eq!(
        to_json("'hi'; true; null;")["body"],
        json!([
            {
                "type": "ExpressionStatement",
                "expression": { "type": "StringLiteral", "value": "hi" }
            },
            {
                "type": "ExpressionStatement",
                "expression": { "type": "BooleanLiteral", "value": true }
            },
            {
                "type": "ExpressionStatement",
                "expression": { "type": "NullLiteral", "value": null }
            }
        ])
    );
}

#[test]
fn test_this_and_super_json() {
    assert_eq!(
        to_json("super(this);")["body"][0]["expression"],
        json!({
            "type": "CallExpression",
            "callee": { "type": "Super" },
            "arguments": [{ "type": "ThisExpression" }]
        })
    );
}

#[test]
fn test_absent_children_are_null() {
    assert_eq!(
        to_json("let x; if (x) ; return;")["body"],
        json!([
            {
                "type": "VariableStatement",
                "declarations": [
                    {
                        "type": "VariableDeclaration",
                        "id": { "type": "Identifier", "name": "x" },
                        "init": null
                    }
                ]
            },
            {
                "type": "IfStatement",
                "test": { "type": "Identifier", "name": "x" },
                "consequent": { "type": "EmptyStatement" },
                "alternate": null
            },
            { "type": "ReturnStatement", "argument": null }
        ])
    );
}

#[test]
fn test_super_class_field_name() {
    let program = to_json("class A extends B {}");

    assert_eq!(
        program["body"][0],
        json!({
            "type": "ClassDeclaration",
            "id": { "type": "Identifier", "name": "A" },
            "superClass": { "type": "Identifier", "name": "B" },
            "body": { "type": "BlockStatement", "body": [] }
        })
    );
}

#[test]
fn test_node_built_by_hand_serializes_like_parsed() {
    let program = Program {
        body: vec![Stmt::from(ExpressionStatement {
            expression: Expr::from(BinaryExpression {
                operator: String::from("+"),
                left: Box::new(Expr::from(Identifier::new("x"))),
                right: Box::new(Expr::from(NumericLiteral { value: 1.0 })),
            }),
        })],
    };

    assert_eq!(program, parse("x + 1;").unwrap());
    assert_eq!(serde_json::to_value(&program).unwrap(), to_json("x + 1;"));
}

#[test]
fn test_node_type_names() {
    let program = parse("let a = 1; a.b(); def f() {}").unwrap();
    let types: Vec<&str> = program.iter().map(Stmt::node_type).collect();
    assert_eq!(
        types,
        vec!["VariableStatement", "ExpressionStatement", "FunctionDeclaration"]
    );

    match &program.body[1] {
        Stmt::Expression(stmt) => assert_eq!(stmt.expression.node_type(), "CallExpression"),
        other => panic!("unexpected {}", other.node_type()),
    }
}

#[test]
fn test_render_json_is_pretty() {
    let rendered = render(&parse("x;").unwrap(), OutputFormat::Json).unwrap();

    assert!(rendered.starts_with("{\n"));
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value, to_json("x;"));
}

#[test]
fn test_sexpression_expressions() {
    assert_eq!(sexpr("2 + 2 * 2;"), "(begin (+ 2 (* 2 2)))");
    assert_eq!(sexpr("x = y += 1;"), "(begin (set x (+= y 1)))");
    assert_eq!(sexpr("!a && -b;"), "(begin (&& (! a) (- b)))");
    assert_eq!(sexpr("a.b[0];"), "(begin (index (prop a b) 0))");
    assert_eq!(sexpr("foo(1, 'two')();"), "(begin ((foo 1 \"two\")))");
    assert_eq!(sexpr("new P(1.5, null, true);"), "(begin (new P 1.5 null true))");
}

#[test]
fn test_sexpression_statements() {
    assert_eq!(sexpr(""), "(begin)");
    assert_eq!(sexpr(";"), "(begin)");
    assert_eq!(sexpr("let x = 1;"), "(begin (var x 1))");
    assert_eq!(sexpr("let x, y = 2;"), "(begin (begin (var x) (var y 2)))");
    assert_eq!(sexpr("if (x) y; else { z; }"), "(begin (if x y (begin z)))");
    assert_eq!(sexpr("while (x) ;"), "(begin (while x null))");
    assert_eq!(sexpr("do x; while (y);"), "(begin (do-while x y))");
    assert_eq!(
        sexpr("for (let i = 0; ; i += 1) {}"),
        "(begin (for (var i 0) null (+= i 1) (begin)))"
    );
    assert_eq!(
        sexpr("def add(a, b) { return a + b; }"),
        "(begin (def add (a b) (begin (return (+ a b)))))"
    );
    assert_eq!(
        sexpr("class A extends B { def f() { return super(); } }"),
        "(begin (class A B (begin (def f () (begin (return (super)))))))"
    );
    assert_eq!(sexpr("class A {}"), "(begin (class A null (begin)))");
}

#[test]
fn test_render_sexpression() {
    let program = parse("this.x = 1;").unwrap();

    assert_eq!(
        render(&program, OutputFormat::SExpression).unwrap(),
        "(begin (set (prop this x) 1))"
    );
}
