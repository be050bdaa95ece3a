// ABOUTME: Lexer module for tokenizing Mini-LISP source text using nom combinators
// The lexer does not validate program structure, only lexemes

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, multispace0, one_of, satisfy},
    combinator::{map_res, opt, recognize, value},
    sequence::pair,
    IResult, Parser,
};

use crate::error::InterpreterError;
use crate::token::Token;

/// `-?\d+`, but only when the sign is directly adjacent to the digits.
///
/// A grammar-valid run of digits can still overflow `i64` (e.g. twenty
/// nines); `map_res` surfaces that as an ordinary parse failure instead
/// of panicking, so it is reported as a syntax error rather than
/// crashing the process.
fn parse_int(input: &str) -> IResult<&str, Token> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>().map(Token::Int)
    })
    .parse(input)
}

fn parse_bool(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Bool(true), tag("#t")),
        value(Token::Bool(false), tag("#f")),
    ))
    .parse(input)
}

fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// `letter (letter|digit|'-')*`
fn parse_identifier(input: &str) -> IResult<&str, Token> {
    map(
        recognize(pair(
            satisfy(|c: char| c.is_ascii_alphabetic()),
            take_while(is_ident_cont),
        )),
        |s: &str| Token::Symbol(s.to_string()),
    )
    .parse(input)
}

/// The single-character operator names: `+ - * / > < =`.
///
/// `mod`, `and`, `or`, `not` are plain identifiers and already handled
/// by [`parse_identifier`].
fn parse_operator_symbol(input: &str) -> IResult<&str, Token> {
    map(one_of("+-*/><="), |c: char| Token::Symbol(c.to_string())).parse(input)
}

fn parse_paren(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
    ))
    .parse(input)
}

fn parse_token(input: &str) -> IResult<&str, Token> {
    // Order matters: `parse_int` must be tried before `parse_operator_symbol`
    // so that `-5` lexes as one Int token rather than `-` then `5`.
    alt((
        parse_paren,
        parse_bool,
        parse_int,
        parse_identifier,
        parse_operator_symbol,
    ))
    .parse(input)
}

/// Tokenize an entire source string.
pub fn lex(input: &str) -> Result<Vec<Token>, InterpreterError> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0::<_, nom::error::Error<&str>>(remaining)
            .unwrap_or((remaining, ""));
        remaining = rest;

        if remaining.is_empty() {
            break;
        }

        match parse_token(remaining) {
            Ok((rest, token)) => {
                tracing::trace!(?token, "lexed token");
                tokens.push(token);
                remaining = rest;
            }
            Err(_) => return Err(InterpreterError::Syntax),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_parens_and_atoms() {
        let tokens = lex("(+ 1 2)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Symbol("+".to_string()),
                Token::Int(1),
                Token::Int(2),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn rejects_integer_literal_too_large_for_i64_instead_of_panicking() {
        assert!(lex("99999999999999999999").is_err());
    }

    #[test]
    fn lexes_signed_integers_only_when_adjacent() {
        assert_eq!(lex("-5").unwrap(), vec![Token::Int(-5)]);
        assert_eq!(lex("+5").unwrap(), vec![Token::Int(5)]);
        // A bare operator with a space before the digit is two tokens.
        assert_eq!(
            lex("- 5").unwrap(),
            vec![Token::Symbol("-".to_string()), Token::Int(5)]
        );
    }

    #[test]
    fn lexes_booleans() {
        assert_eq!(lex("#t").unwrap(), vec![Token::Bool(true)]);
        assert_eq!(lex("#f").unwrap(), vec![Token::Bool(false)]);
    }

    #[test]
    fn lexes_identifiers_and_reserved_words() {
        let tokens = lex("(define fact-1 (fun (n) n))").unwrap();
        assert!(tokens.contains(&Token::Symbol("define".to_string())));
        assert!(tokens.contains(&Token::Symbol("fact-1".to_string())));
        assert!(tokens.contains(&Token::Symbol("fun".to_string())));
    }

    #[test]
    fn lexes_mod_and_or_not_as_identifiers() {
        let tokens = lex("(mod (and (or (not #t))))").unwrap();
        assert!(tokens.contains(&Token::Symbol("mod".to_string())));
        assert!(tokens.contains(&Token::Symbol("and".to_string())));
        assert!(tokens.contains(&Token::Symbol("or".to_string())));
        assert!(tokens.contains(&Token::Symbol("not".to_string())));
    }

    #[test]
    fn rejects_unknown_characters() {
        assert!(lex("(+ 1 2 @)").is_err());
        assert!(lex("\"hello\"").is_err());
    }

    #[test]
    fn skips_whitespace_between_tokens() {
        let tokens = lex("  ( +   1\n2 )  \t").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Symbol("+".to_string()),
                Token::Int(1),
                Token::Int(2),
                Token::RParen,
            ]
        );
    }
}
