use crate::{
    ast::statements::{
        BlockStatement, ClassDeclaration, DoWhileStatement, EmptyStatement, ExpressionStatement,
        ForInit, ForStatement, FunctionDeclaration, IfStatement, ReturnStatement, Stmt,
        VariableDeclaration, VariableStatement, WhileStatement,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::{parse_assignment_expr, parse_expr, parse_identifier},
};

use super::parser::Parser;

/// Statements until the input is exhausted or the lookahead is `stop`.
/// At least one statement is parsed.
pub fn parse_stmt_list(parser: &mut Parser, stop: Option<TokenKind>) -> Result<Vec<Stmt>, Error> {
    let mut statements = vec![parse_stmt(parser)?];

    while parser.has_tokens() && parser.lookahead_kind() != stop {
        statements.push(parse_stmt(parser)?);
    }

    Ok(statements)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(parse_any_stmt)
}

fn parse_any_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_handler() {
        return handler(parser);
    }

    let expression = parse_expr(parser)?;

    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStatement { expression }))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::Empty(EmptyStatement {}))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `{ StatementList? }`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStatement, Error> {
    parser.eat(TokenKind::OpenCurly)?;

    let body = if parser.has_tokens() && !parser.lookahead_is(TokenKind::CloseCurly) {
        parse_stmt_list(parser, Some(TokenKind::CloseCurly))?
    } else {
        vec![]
    };

    parser.eat(TokenKind::CloseCurly)?;

    Ok(BlockStatement { body })
}

pub fn parse_var_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let variables = parse_var_stmt_init(parser)?;

    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::Variable(variables))
}

/// `let` declarations without the trailing `;`, shared with `for` initializers.
fn parse_var_stmt_init(parser: &mut Parser) -> Result<VariableStatement, Error> {
    parser.eat(TokenKind::Let)?;

    let mut declarations = vec![parse_var_decl(parser)?];
    while parser.lookahead_is(TokenKind::Comma) {
        parser.eat(TokenKind::Comma)?;
        declarations.push(parse_var_decl(parser)?);
    }

    Ok(VariableStatement { declarations })
}

fn parse_var_decl(parser: &mut Parser) -> Result<VariableDeclaration, Error> {
    let id = parse_identifier(parser)?;

    let init = if parser.lookahead_is(TokenKind::Semicolon) || parser.lookahead_is(TokenKind::Comma) {
        None
    } else {
        parser.eat(TokenKind::SimpleAssign)?;
        Some(parse_assignment_expr(parser)?)
    };

    Ok(VariableDeclaration { id, init })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::If)?;

    parser.eat(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    let consequent = Box::new(parse_stmt(parser)?);

    let alternate = if parser.lookahead_is(TokenKind::Else) {
        parser.eat(TokenKind::Else)?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStatement {
        test,
        consequent,
        alternate,
    }))
}

pub fn parse_iteration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.lookahead_kind() {
        Some(TokenKind::Do) => parse_do_while_stmt(parser),
        Some(TokenKind::For) => parse_for_stmt(parser),
        _ => parse_while_stmt(parser),
    }
}

fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::While)?;

    parser.eat(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::While(WhileStatement { test, body }))
}

fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Do)?;

    let body = Box::new(parse_stmt(parser)?);

    parser.eat(TokenKind::While)?;
    parser.eat(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;
    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::DoWhile(DoWhileStatement { body, test }))
}

fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::For)?;
    parser.eat(TokenKind::OpenParen)?;

    let init = if parser.lookahead_is(TokenKind::Semicolon) {
        None
    } else if parser.lookahead_is(TokenKind::Let) {
        Some(ForInit::Variables(parse_var_stmt_init(parser)?))
    } else {
        Some(ForInit::Expression(parse_expr(parser)?))
    };
    parser.eat(TokenKind::Semicolon)?;

    let test = if parser.lookahead_is(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.eat(TokenKind::Semicolon)?;

    let update = if parser.lookahead_is(TokenKind::CloseParen) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.eat(TokenKind::CloseParen)?;

    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::For(ForStatement {
        init,
        test,
        update,
        body,
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Def)?;

    let name = parse_identifier(parser)?;

    parser.eat(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    if !parser.lookahead_is(TokenKind::CloseParen) {
        params.push(parse_identifier(parser)?);
        while parser.lookahead_is(TokenKind::Comma) {
            parser.eat(TokenKind::Comma)?;
            params.push(parse_identifier(parser)?);
        }
    }

    parser.eat(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::Function(FunctionDeclaration { name, params, body }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Return)?;

    let argument = if parser.lookahead_is(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStatement { argument }))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Class)?;

    let id = parse_identifier(parser)?;

    let super_class = if parser.lookahead_is(TokenKind::Extends) {
        parser.eat(TokenKind::Extends)?;
        Some(parse_identifier(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Stmt::Class(ClassDeclaration {
        id,
        super_class,
        body,
    }))
}
