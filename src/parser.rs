// ABOUTME: Parser module for parsing Mini-LISP token streams into an AST
// Recognizes the grammar's shape only; arity and operand-kind checking belong to the evaluator

use crate::ast::{is_reserved, BuiltinOp, Expr, FunBody, FunNode, Program, Stmt};
use crate::error::InterpreterError;
use crate::lexer::lex;
use crate::token::Token;
use std::rc::Rc;

type ParseResult<T> = Result<T, InterpreterError>;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn advance(&mut self) -> ParseResult<&Token> {
        let tok = self.tokens.get(self.pos).ok_or(InterpreterError::Syntax)?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        match self.advance()? {
            tok if tok == expected => Ok(()),
            _ => Err(InterpreterError::Syntax),
        }
    }

    fn expect_symbol(&mut self) -> ParseResult<String> {
        match self.advance()? {
            Token::Symbol(name) => Ok(name.clone()),
            _ => Err(InterpreterError::Syntax),
        }
    }

    fn expect_var(&mut self) -> ParseResult<String> {
        let name = self.expect_symbol()?;
        if is_reserved(&name) {
            return Err(InterpreterError::Syntax);
        }
        Ok(name)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// True if the parser is positioned at the start of a `(define ...)`.
    fn at_define(&self) -> bool {
        matches!(self.peek(), Some(Token::LParen))
            && matches!(self.peek_at(1), Some(Token::Symbol(s)) if s == "define")
    }

    /// True if the parser is positioned at the start of a
    /// `(print-num ...)` or `(print-bool ...)`.
    fn at_print(&self) -> bool {
        matches!(self.peek(), Some(Token::LParen))
            && matches!(
                self.peek_at(1),
                Some(Token::Symbol(s)) if matches!(BuiltinOp::from_name(s), Some(op) if !op.is_expr_op())
            )
    }

    fn parse_program(&mut self) -> ParseResult<Program> {
        if self.at_eof() {
            // program := stmt+ : at least one statement is required.
            return Err(InterpreterError::Syntax);
        }
        let mut stmts = Vec::new();
        while !self.at_eof() {
            stmts.push(self.parse_stmt()?);
        }
        Ok(Program(stmts))
    }

    fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        tracing::trace!(pos = self.pos, "parsing top-level statement");
        let stmt = if self.at_define() {
            self.advance()?; // '('
            self.advance()?; // 'define'
            let (name, expr) = self.parse_define_tail()?;
            Ok(Stmt::Define(name, expr))
        } else if self.at_print() {
            self.advance()?; // '('
            let op = match self.advance()? {
                Token::Symbol(s) => BuiltinOp::from_name(s).expect("checked by at_print"),
                _ => unreachable!("checked by at_print"),
            };
            let arg = self.parse_expr()?;
            self.expect(&Token::RParen)?;
            Ok(Stmt::Print(op, arg))
        } else {
            Ok(Stmt::Expr(self.parse_expr()?))
        };
        if let Ok(ref parsed) = stmt {
            tracing::debug!(?parsed, "parsed top-level statement");
        }
        stmt
    }

    /// Parses `VAR exp ')'`, assuming `'(' 'define'` has already been consumed.
    fn parse_define_tail(&mut self) -> ParseResult<(String, Expr)> {
        let name = self.expect_var()?;
        let expr = self.parse_expr()?;
        self.expect(&Token::RParen)?;
        Ok((name, expr))
    }

    fn parse_expr(&mut self) -> ParseResult<Expr> {
        match self.advance()? {
            Token::Int(n) => Ok(Expr::IntLiteral(*n)),
            Token::Bool(b) => Ok(Expr::BoolLiteral(*b)),
            Token::Symbol(name) => {
                if is_reserved(name) {
                    // Reserved names (special forms, built-ins) are not
                    // valid standalone expressions — only valid as the
                    // head of the parenthesized form they introduce.
                    Err(InterpreterError::Syntax)
                } else {
                    Ok(Expr::Symbol(name.clone()))
                }
            }
            Token::LParen => self.parse_paren_expr(),
            Token::RParen => Err(InterpreterError::Syntax),
        }
    }

    /// Parses everything after an already-consumed opening `'('` that
    /// introduces an expression (not a `define`).
    fn parse_paren_expr(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Some(Token::Symbol(s)) if s == "if" => {
                self.advance()?;
                self.parse_if_tail()
            }
            Some(Token::Symbol(s)) if s == "fun" => {
                self.advance()?;
                self.parse_fun_tail()
            }
            Some(Token::Symbol(s)) if matches!(BuiltinOp::from_name(s), Some(op) if op.is_expr_op()) => {
                let op = BuiltinOp::from_name(s).expect("checked above");
                self.advance()?;
                let args = self.parse_exprs_until_rparen()?;
                self.expect(&Token::RParen)?;
                Ok(Expr::Builtin(op, args))
            }
            Some(Token::Symbol(s)) if BuiltinOp::from_name(s).is_some() => {
                // print-num / print-bool: valid only as a print_stmt, not
                // nested inside a general expression.
                let _ = s;
                Err(InterpreterError::Syntax)
            }
            Some(Token::Symbol(s)) if s == "define" => {
                // A `define` nested inside an expression position (not a
                // statement or function-body prefix) is not part of the
                // grammar.
                let _ = s;
                Err(InterpreterError::Syntax)
            }
            _ => {
                // Anonymous / variable call head: `(exp exp*)`.
                let callee = self.parse_expr()?;
                let args = self.parse_exprs_until_rparen()?;
                self.expect(&Token::RParen)?;
                Ok(Expr::Call(Box::new(callee), args))
            }
        }
    }

    fn parse_exprs_until_rparen(&mut self) -> ParseResult<Vec<Expr>> {
        let mut exprs = Vec::new();
        while !matches!(self.peek(), Some(Token::RParen) | None) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    /// Parses `exp exp exp ')'`, assuming `'(' 'if'` has already been consumed.
    fn parse_if_tail(&mut self) -> ParseResult<Expr> {
        let test = self.parse_expr()?;
        let then_branch = self.parse_expr()?;
        let else_branch = self.parse_expr()?;
        self.expect(&Token::RParen)?;
        Ok(Expr::If(
            Box::new(test),
            Box::new(then_branch),
            Box::new(else_branch),
        ))
    }

    /// Parses `'(' VAR* ')' fun_body ')'`, assuming `'(' 'fun'` has
    /// already been consumed.
    fn parse_fun_tail(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let mut params = Vec::new();
        while !matches!(self.peek(), Some(Token::RParen) | None) {
            params.push(self.expect_var()?);
        }
        self.expect(&Token::RParen)?;

        let body = self.parse_fun_body()?;
        self.expect(&Token::RParen)?;
        Ok(Expr::Fun(Rc::new(FunNode { params, body })))
    }

    /// `def_stmt* exp` — zero or more local defines, then exactly one
    /// result expression.
    fn parse_fun_body(&mut self) -> ParseResult<FunBody> {
        let mut defines = Vec::new();
        while self.at_define() {
            self.advance()?; // '('
            self.advance()?; // 'define'
            defines.push(self.parse_define_tail()?);
        }
        let result = Box::new(self.parse_expr()?);
        Ok(FunBody { defines, result })
    }
}

/// Parse an entire Mini-LISP source string into a [`Program`].
pub fn parse(source: &str) -> Result<Program, InterpreterError> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(&tokens);
    let program = parser.parse_program()?;
    if !parser.at_eof() {
        return Err(InterpreterError::Syntax);
    }
    Ok(program)
}
