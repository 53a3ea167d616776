//! Hand-written scanner for the build-file language.
//!
//! The whole input is broken into flat tokens up front; no keywords are
//! recognised here, `SetCompiler` and `gcc` both come out as `String`
//! tokens.  The parser interprets them later.
//
//  Lexical items:
//
//      String    ::= run of [A-Za-z0-9_] | '-' | '.' | '/' | '\' | ':' | '='
//      Symbols   ::= '(' | ')' | ','
//      LineEnd   ::= '\n'       (terminates one command)
//      Spaces, tabs, NULs and '\r' are discarded.
//
//  A line whose first character is the terminator is dropped wholly, so a
//  blank line produces no `LineEnd` token at all.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    String,
    LeftParen,
    RightParen,
    Comma,
    LineEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line.
    pub line: usize,
}

/// Token sequence plus a forward-only cursor.
#[derive(Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenList {
    fn add(&mut self, kind: TokenKind, lexeme: impl Into<String>, line: usize) {
        self.tokens.push(Token {
            kind,
            lexeme: lexeme.into(),
            line,
        });
    }

    /// Returns the current token and moves past it, `None` once exhausted.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned();
        self.current += 1;
        token
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Advances until a `LineEnd` has been consumed or input runs out.
    /// The parser's error recovery: discard the rest of the logical line.
    pub fn skip_line(&mut self) {
        while let Some(token) = self.advance() {
            if token.kind == TokenKind::LineEnd {
                break;
            }
        }
    }
}

fn is_valid_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | '\\' | ':' | '=')
}

/// Scans the full text of one build file.
///
/// Two cursors per line: `start` is where the current token begins, `end`
/// is where the next valid-character run is probed from.  `end` is not
/// pulled back to `start` between tokens; that asymmetry is load-bearing
/// and folds an unrecognised character into the run that follows it
/// instead of rejecting it.
pub fn scan(source: &str) -> TokenList {
    let mut tokens = TokenList::default();

    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let line: Vec<char> = raw.chars().collect();
        // wholly blank line (LF or CRLF): no tokens, not even a LineEnd
        if matches!(line.as_slice(), ['\n'] | ['\r', '\n']) {
            continue;
        }
        let number = index + 1;

        let mut start = 0;
        let mut end = 0;
        while start < line.len() {
            match line[start] {
                '(' => tokens.add(TokenKind::LeftParen, "(", number),
                ')' => tokens.add(TokenKind::RightParen, ")", number),
                ',' => tokens.add(TokenKind::Comma, ",", number),
                '\n' => tokens.add(TokenKind::LineEnd, "\\n", number),
                ' ' | '\t' | '\0' | '\r' => {}
                _ => {
                    while end < line.len() && is_valid_character(line[end]) {
                        end += 1;
                    }
                    let lexeme: String = line[start..end].iter().collect();
                    tokens.add(TokenKind::String, lexeme, number);
                }
            }
            start = end;
            end += 1;
        }
    }

    tokens
}
