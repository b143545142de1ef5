use crate::ast::{ASTNode, Operator, MAX_NESTING_DEPTH};
use crate::error::{CalcError, ParseError};
use crate::lexer::{tokenize, Token, TokenKind};
use log::{debug, trace};

/// Recursive-descent parser over a scanned token sequence.
///
/// Binding, tightest first: primary, power (right-associative, right operand
/// may be negated), unary minus, multiplicative, additive.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// `tokens` must end with the [`TokenKind::End`] sentinel, as produced by
    /// [`tokenize`]; one is appended if it is missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::End) {
            let end = tokens
                .last()
                .map_or(0, |t| t.position + t.lexeme.len());
            tokens.push(Token::end(end));
        }
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Scans and parses a single statement.
    pub fn parse_expression(input: &str) -> Result<ASTNode, ParseError> {
        debug!("Parsing expression: {}", input);
        let tokens = tokenize(input)?;
        let ast = Parser::new(tokens).parse_statement()?;
        debug!("Parse result: {:?}", ast);
        Ok(ast)
    }

    /// Parses `name = expression` or a bare expression, then requires the
    /// end of input.
    pub fn parse_statement(&mut self) -> Result<ASTNode, ParseError> {
        let node = if self.check(TokenKind::Identifier) && self.peek().kind == TokenKind::Assign {
            let name = self.advance().lexeme.clone();
            self.advance();
            debug!("Building assignment to {}", name);
            ASTNode::Assignment {
                name,
                value: Box::new(self.parse_additive()?),
            }
        } else {
            self.parse_additive()?
        };

        if !self.check(TokenKind::End) {
            return Err(self.unexpected());
        }
        Ok(node)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek(&self) -> &Token {
        let idx = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Compares kinds only; payloads of numbers and history references are
    /// ignored.
    fn check(&self, kind: TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(&kind)
    }

    /// Moves past the current token and returns it. Never moves past the
    /// sentinel.
    fn advance(&mut self) -> &Token {
        let idx = self.pos;
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if !self.check(kind) {
            return Err(self.unexpected());
        }
        Ok(self.advance())
    }

    fn unexpected(&self) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            lexeme: token.display_lexeme().to_string(),
            position: token.position,
        }
    }

    /// Claims one level of the depth budget; the caller gives it back.
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                position: self.current().position,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_additive(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_multiplicative()?;
        let depth = self.depth;

        loop {
            let operator = match self.current().kind {
                TokenKind::Plus => Operator::Add,
                TokenKind::Minus => Operator::Subtract,
                _ => break,
            };
            self.advance();
            trace!("Additive operator: {}", operator);
            // Each link deepens the left spine of the tree.
            self.descend()?;
            let right = self.parse_multiplicative()?;
            node = ASTNode::binary(node, operator, right);
        }

        self.depth = depth;
        Ok(node)
    }

    fn parse_multiplicative(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_unary()?;
        let depth = self.depth;

        loop {
            let operator = match self.current().kind {
                TokenKind::Star => Operator::Multiply,
                TokenKind::Slash => Operator::Divide,
                TokenKind::Percent => Operator::Modulo,
                _ => break,
            };
            self.advance();
            trace!("Multiplicative operator: {}", operator);
            self.descend()?;
            let right = self.parse_unary()?;
            node = ASTNode::binary(node, operator, right);
        }

        self.depth = depth;
        Ok(node)
    }

    /// Every nested subexpression passes through here, so this is where the
    /// depth budget is charged.
    fn parse_unary(&mut self) -> Result<ASTNode, ParseError> {
        self.descend()?;
        let node = if self.match_token(TokenKind::Minus) {
            ASTNode::negation(self.parse_unary()?)
        } else {
            self.parse_power()?
        };
        self.depth -= 1;
        Ok(node)
    }

    fn parse_power(&mut self) -> Result<ASTNode, ParseError> {
        let node = self.parse_primary()?;

        if self.match_token(TokenKind::Caret) {
            let exponent = self.parse_unary()?;
            return Ok(ASTNode::binary(node, Operator::Power, exponent));
        }

        Ok(node)
    }

    fn parse_primary(&mut self) -> Result<ASTNode, ParseError> {
        trace!("Building primary expression at {:?}", self.current());
        let kind = self.current().kind;
        match kind {
            TokenKind::Number(value) => {
                self.advance();
                Ok(ASTNode::Number(value))
            }
            TokenKind::HistoryRef(index) => {
                self.advance();
                Ok(ASTNode::HistoryRef(index))
            }
            TokenKind::Identifier => {
                let name = self.advance().lexeme.clone();
                if self.match_token(TokenKind::LParen) {
                    self.parse_function_call(name)
                } else {
                    Ok(ASTNode::Identifier(name))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let node = self.parse_additive()?;
                self.expect(TokenKind::RParen)?;
                Ok(node)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parses the argument list after `name(`.
    fn parse_function_call(&mut self, name: String) -> Result<ASTNode, ParseError> {
        let mut args = Vec::new();

        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_additive()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen)?;
        debug!("Building function call {} with {} argument(s)", name, args.len());
        Ok(ASTNode::FunctionCall { name, args })
    }
}

impl std::str::FromStr for ASTNode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Parser::parse_expression(s)?)
    }
}
