mod token;

pub use token::{Token, TokenKind};

use crate::error::ParseError;
use log::{debug, trace};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "lexer/token.pest"]
struct TokenGrammar;

/// Splits `input` into tokens, always closing the sequence with an
/// [`TokenKind::End`] sentinel positioned at the end of the input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    debug!("Tokenizing: {}", input);
    let statement = TokenGrammar::parse(Rule::statement, input)
        .map_err(|e| {
            let position = match e.location {
                pest::error::InputLocation::Pos(pos) => pos,
                pest::error::InputLocation::Span((start, _)) => start,
            };
            unexpected_character(&input[position..], position)
        })?
        .next()
        .map(Pair::into_inner);

    let mut tokens = Vec::new();
    for pair in statement.into_iter().flatten() {
        match pair.as_rule() {
            Rule::token => {
                let Some(inner) = pair.into_inner().next() else {
                    continue;
                };
                let token = scan_token(inner)?;
                trace!("Scanned {:?}", token);
                tokens.push(token);
            }
            Rule::unknown => {
                let position = pair.as_span().start();
                return Err(unexpected_character(&input[position..], position));
            }
            _ => {}
        }
    }

    tokens.push(Token::end(input.len()));
    Ok(tokens)
}

/// Converts one matched token into a [`Token`] carrying its byte offset.
fn scan_token(pair: Pair<'_, Rule>) -> Result<Token, ParseError> {
    let offset = pair.as_span().start();
    let lexeme = pair.as_str();
    let kind = match pair.as_rule() {
        Rule::number => {
            let value = lexeme
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber { position: offset })?;
            TokenKind::Number(value)
        }
        Rule::malformed_number => {
            let position = pair
                .into_inner()
                .next()
                .map_or(offset, |marker| marker.as_span().start());
            return Err(ParseError::InvalidNumber { position });
        }
        Rule::history_ref => {
            let digits = &lexeme[1..];
            let index = digits
                .parse()
                .map_err(|_| ParseError::HistoryIndexOverflow {
                    index: digits.to_string(),
                    position: offset,
                })?;
            TokenKind::HistoryRef(index)
        }
        Rule::identifier => TokenKind::Identifier,
        Rule::PLUS => TokenKind::Plus,
        Rule::MINUS => TokenKind::Minus,
        Rule::STAR => TokenKind::Star,
        Rule::SLASH => TokenKind::Slash,
        Rule::PERCENT => TokenKind::Percent,
        Rule::CARET => TokenKind::Caret,
        Rule::LPAREN => TokenKind::LParen,
        Rule::RPAREN => TokenKind::RParen,
        Rule::COMMA => TokenKind::Comma,
        Rule::ASSIGN => TokenKind::Assign,
        _ => return Err(unexpected_character(lexeme, offset)),
    };

    Ok(Token::new(kind, lexeme, offset))
}

fn unexpected_character(rest: &str, offset: usize) -> ParseError {
    match rest.chars().next() {
        Some('$') => ParseError::MissingHistoryIndex { position: offset },
        Some(character) => ParseError::UnexpectedCharacter {
            character,
            position: offset,
        },
        None => ParseError::UnexpectedToken {
            lexeme: "<end>".to_string(),
            position: offset,
        },
    }
}
