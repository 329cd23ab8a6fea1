use crate::{
    ast::{
        ast::Identifier,
        expressions::{
            AssignmentExpression, BinaryExpression, BooleanLiteral, CallExpression, Expr,
            LogicalExpression, MemberExpression, NewExpression, NullLiteral, NumericLiteral,
            StringLiteral, Super, ThisExpression, UnaryExpression,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// AssignmentExpression
///  : LogicalORExpression
///  | LeftHandSideExpression ASSIGNMENT_OPERATOR AssignmentExpression
///  ;
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_assignment)
}

fn parse_assignment(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_binary_expr(parser, BindingPower::LogicalOr)?;

    let operator_kind = match parser.lookahead_kind() {
        Some(kind) if kind.is_assignment_operator() => kind,
        _ => return Ok(left),
    };

    if !left.is_assignment_target() {
        let operator = parser
            .lookahead()
            .map(|token| token.value.clone())
            .unwrap_or_default();
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget { operator },
            parser.get_position(),
        ));
    }

    let operator = parser.eat(operator_kind)?.value;
    let right = parse_assignment_expr(parser)?;

    Ok(Expr::Assignment(AssignmentExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Left-folds every operator of `bp`'s class over operands of the next
/// tighter level, so `a - b - c` becomes `(a - b) - c`.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let operator_kind = bp.operator();
    let mut left = parse_operand(parser, bp)?;
    let mut length = 0;

    while parser.lookahead_is(operator_kind) {
        length += 1;
        parser.check_chain(length)?;

        let operator = parser.eat(operator_kind)?.value;
        let right = parse_operand(parser, bp)?;

        left = if bp.is_logical() {
            Expr::Logical(LogicalExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            })
        } else {
            Expr::Binary(BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            })
        };
    }

    Ok(left)
}

fn parse_operand(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp.next() {
        Some(next) => parse_binary_expr(parser, next),
        None => parse_unary_expr(parser),
    }
}

/// UnaryExpression
///  : LeftHandSideExpression
///  | ADDITIVE_OPERATOR UnaryExpression
///  | LOGICAL_NOT UnaryExpression
///  ;
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_kind = match parser.lookahead_kind() {
        Some(kind @ (TokenKind::AdditiveOperator | TokenKind::LogicalNot)) => kind,
        _ => return parse_lhs_expr(parser),
    };

    parser.nested(|parser| {
        let operator = parser.eat(operator_kind)?.value;
        let argument = parse_unary_expr(parser)?;

        Ok(Expr::Unary(UnaryExpression {
            operator,
            argument: Box::new(argument),
        }))
    })
}

pub fn parse_lhs_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_call_member_expr(parser)
}

/// CallMemberExpression
///  : MemberExpression
///  | CallExpression
///  ;
pub fn parse_call_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // super is only ever called
    if parser.lookahead_is(TokenKind::Super) {
        let callee = parse_super(parser)?;
        return parse_call_expr(parser, callee);
    }

    let member = parse_member_expr(parser)?;

    if parser.lookahead_is(TokenKind::OpenParen) {
        return parse_call_expr(parser, member);
    }

    Ok(member)
}

/// Wraps `callee` in a call, then keeps wrapping while more argument lists
/// follow: `f(x)()` calls the result of `f(x)`.
pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let mut call = Expr::Call(CallExpression {
        callee: Box::new(callee),
        arguments: parse_arguments(parser)?,
    });

    let mut length = 1;
    while parser.lookahead_is(TokenKind::OpenParen) {
        length += 1;
        parser.check_chain(length)?;

        call = Expr::Call(CallExpression {
            callee: Box::new(call),
            arguments: parse_arguments(parser)?,
        });
    }

    Ok(call)
}

/// `( [AssignmentExpression {, AssignmentExpression}] )`
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.eat(TokenKind::OpenParen)?;

    let mut args = vec![];
    if !parser.lookahead_is(TokenKind::CloseParen) {
        args.push(parse_assignment_expr(parser)?);
        while parser.lookahead_is(TokenKind::Comma) {
            parser.eat(TokenKind::Comma)?;
            args.push(parse_assignment_expr(parser)?);
        }
    }

    parser.eat(TokenKind::CloseParen)?;

    Ok(args)
}

/// MemberExpression
///  : PrimaryExpression
///  | MemberExpression '.' Identifier
///  | MemberExpression '[' Expression ']'
///  ;
pub fn parse_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut object = parse_primary_expr(parser)?;
    let mut length = 0;

    loop {
        object = match parser.lookahead_kind() {
            Some(TokenKind::Dot) => {
                length += 1;
                parser.check_chain(length)?;

                parser.eat(TokenKind::Dot)?;
                let property = parse_identifier(parser)?;

                Expr::Member(MemberExpression {
                    computed: false,
                    object: Box::new(object),
                    property: Box::new(Expr::Identifier(property)),
                })
            }
            Some(TokenKind::OpenBracket) => {
                length += 1;
                parser.check_chain(length)?;

                parser.eat(TokenKind::OpenBracket)?;
                let property = parse_expr(parser)?;
                parser.eat(TokenKind::CloseBracket)?;

                Expr::Member(MemberExpression {
                    computed: true,
                    object: Box::new(object),
                    property: Box::new(property),
                })
            }
            _ => return Ok(object),
        };
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.lookahead_kind() {
        Some(kind) if kind.is_literal() => parse_literal(parser),
        Some(TokenKind::OpenParen) => parse_grouping_expr(parser),
        Some(TokenKind::Identifier) => Ok(Expr::Identifier(parse_identifier(parser)?)),
        Some(TokenKind::This) => parse_this_expr(parser),
        Some(TokenKind::New) => parse_new_expr(parser),
        _ => {
            let token = parser
                .lookahead()
                .map(|token| token.value.clone())
                .unwrap_or_else(|| String::from("end of input"));
            Err(Error::new(
                ErrorImpl::UnexpectedPrimary { token },
                parser.get_position(),
            ))
        }
    }
}

/// Parentheses only group; no node is produced for them.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    Ok(expr)
}

/// `new` nests through its callee (`new new A()()`), so it counts as a level.
pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        parser.eat(TokenKind::New)?;

        let callee = parse_member_expr(parser)?;
        let arguments = parse_arguments(parser)?;

        Ok(Expr::New(NewExpression {
            callee: Box::new(callee),
            arguments,
        }))
    })
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let name = parser.eat(TokenKind::Identifier)?.value;

    Ok(Identifier { name })
}

fn parse_this_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::This)?;

    Ok(Expr::This(ThisExpression {}))
}

fn parse_super(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::Super)?;

    Ok(Expr::Super(Super {}))
}

pub fn parse_literal(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.lookahead_kind() {
        Some(TokenKind::Number) => parse_numeric_literal(parser),
        Some(TokenKind::String) => parse_string_literal(parser),
        Some(TokenKind::True) => parse_boolean_literal(parser, true),
        Some(TokenKind::False) => parse_boolean_literal(parser, false),
        Some(TokenKind::Null) => parse_null_literal(parser),
        Some(kind) => Err(Error::new(
            ErrorImpl::UnexpectedLiteral { kind },
            parser.get_position(),
        )),
        None => Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: TokenKind::Number,
            },
            parser.get_position(),
        )),
    }
}

fn parse_numeric_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::Number)?;

    let value = token.value.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start,
        )
    })?;

    Ok(Expr::NumericLiteral(NumericLiteral { value }))
}

/// Strips the delimiting quotes, which are always single bytes.
fn parse_string_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::String)?;
    let value = token.value[1..token.value.len() - 1].to_string();

    Ok(Expr::StringLiteral(StringLiteral { value }))
}

fn parse_boolean_literal(parser: &mut Parser, expected: bool) -> Result<Expr, Error> {
    parser.eat(if expected {
        TokenKind::True
    } else {
        TokenKind::False
    })?;

    Ok(Expr::BooleanLiteral(BooleanLiteral { value: expected }))
}

fn parse_null_literal(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::Null)?;

    Ok(Expr::NullLiteral(NullLiteral { value: () }))
}
