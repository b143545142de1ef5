/// Kind of a lexical token. Numeric and history tokens carry their decoded
/// payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    End,
    Number(f64),
    Identifier,
    /// 1-based index into the session history.
    HistoryRef(usize),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
    Assign,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Byte offset of the first character in the source text.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_string(),
            position,
        }
    }

    /// The sentinel closing every token sequence.
    pub fn end(position: usize) -> Self {
        Self {
            kind: TokenKind::End,
            lexeme: String::new(),
            position,
        }
    }

    /// Text used when reporting this token in an error message.
    pub fn display_lexeme(&self) -> &str {
        if self.lexeme.is_empty() {
            "<end>"
        } else {
            &self.lexeme
        }
    }
}
