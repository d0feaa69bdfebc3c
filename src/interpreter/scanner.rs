use std::collections::HashSet;

use crate::{
    ast::{Token, TokenKind},
    error::ScanError,
};

/// Turns source text into a stream of [`Token`]s, one token at a time.
///
/// The scanner recognizes names (reclassified as keywords when their spelling
/// is in the keyword set supplied at construction), numeric literals,
/// single-character symbols and end-of-line tokens. Spaces and tabs are
/// skipped and `//` starts a comment that runs up to the next newline.
///
/// Exactly one token can be pushed back: after [`push_back`](Self::push_back)
/// the next call to [`next`](Self::next) returns the same token again.
///
/// # Example
/// ```
/// use turtle_logo::{ast::TokenKind, interpreter::scanner::Scanner};
///
/// let mut scanner = Scanner::new("forward 10 // go\n", ["forward"]);
///
/// let token = scanner.next().unwrap();
/// assert_eq!(token.kind(), TokenKind::Keyword);
/// scanner.push_back().unwrap();
/// assert_eq!(scanner.next().unwrap(), token);
///
/// assert_eq!(scanner.next().unwrap().text(), "10");
/// assert_eq!(scanner.next().unwrap().kind(), TokenKind::Eol);
/// assert!(!scanner.has_next());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    chars:       Vec<char>,
    position:    usize,
    line:        usize,
    keywords:    HashSet<String>,
    last:        Option<Token>,
    last_line:   usize,
    pushed_back: bool,
}

/// Progress through a numeric literal.
#[derive(Debug, Default)]
struct NumberState {
    dotted:            bool,
    exponented:        bool,
    last_was_exponent: bool,
    last_was_sign:     bool,
}

impl NumberState {
    const fn dangling(&self) -> bool {
        self.last_was_exponent || self.last_was_sign
    }
}

impl Scanner {
    /// Creates a scanner over `source` that reports the given spellings as
    /// keywords.
    pub fn new<I, S>(source: &str, keywords: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { chars:       source.chars().collect(),
               position:    0,
               line:        1,
               keywords:    keywords.into_iter().map(Into::into).collect(),
               last:        None,
               last_line:   1,
               pushed_back: false, }
    }

    /// The 1-based source line of the token most recently returned by
    /// [`next`](Self::next). An end-of-line token belongs to the line it ends.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.last_line
    }

    /// Whether another token is available.
    ///
    /// Looks past spaces, tabs and a trailing comment without consuming
    /// anything. Input that ends in whitespace, or in a comment with no
    /// newline after it, has no further tokens.
    #[must_use]
    pub fn has_next(&self) -> bool {
        if self.pushed_back {
            return true;
        }
        let position = self.skip_blanks_from(self.position);
        match self.chars.get(position) {
            None => false,
            Some('/') if self.chars.get(position + 1) == Some(&'/') => {
                self.chars[position..].contains(&'\n')
            },
            Some(_) => true,
        }
    }

    /// Returns the next token.
    ///
    /// # Errors
    /// `ScanError::Exhausted` when [`has_next`](Self::has_next) is false.
    pub fn next(&mut self) -> Result<Token, ScanError> {
        if self.pushed_back
           && let Some(token) = &self.last
        {
            self.pushed_back = false;
            return Ok(token.clone());
        }
        if !self.has_next() {
            return Err(ScanError::Exhausted { line: self.line });
        }

        self.position = self.skip_blanks_from(self.position);
        self.last_line = self.line;

        let token = match self.chars[self.position] {
            '/' if self.chars.get(self.position + 1) == Some(&'/') => {
                // has_next guarantees a newline ends the comment
                while self.chars[self.position] != '\n' {
                    self.position += 1;
                }
                self.scan_eol()
            },
            '\n' => self.scan_eol(),
            c if c.is_ascii_alphabetic() || c == '_' || c == '$' => self.scan_name(),
            c if c.is_ascii_digit() || c == '.' => self.scan_number(),
            c => {
                self.position += 1;
                Token::new(TokenKind::Symbol, c)
            },
        };

        self.last = Some(token.clone());
        Ok(token)
    }

    /// Takes back the token just returned by [`next`](Self::next).
    ///
    /// # Errors
    /// `ScanError::IllegalPushBack` when no token has been read yet, or when
    /// the previous call was already a push-back.
    pub fn push_back(&mut self) -> Result<(), ScanError> {
        if self.last.is_none() {
            return Err(ScanError::IllegalPushBack { details: "no token has been read yet" });
        }
        if self.pushed_back {
            return Err(ScanError::IllegalPushBack { details: "the last token was already pushed back" });
        }
        self.pushed_back = true;
        Ok(())
    }

    /// Reads every remaining token.
    ///
    /// # Errors
    /// Never in practice; the signature mirrors [`next`](Self::next).
    pub fn drain_tokens(&mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        while self.has_next() {
            tokens.push(self.next()?);
        }
        Ok(tokens)
    }

    fn skip_blanks_from(&self, mut position: usize) -> usize {
        while matches!(self.chars.get(position), Some(' ' | '\t')) {
            position += 1;
        }
        position
    }

    fn scan_eol(&mut self) -> Token {
        self.position += 1;
        self.line += 1;
        Token::new(TokenKind::Eol, "\n")
    }

    fn scan_name(&mut self) -> Token {
        let start = self.position;
        while let Some(&c) = self.chars.get(self.position)
              && (c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            self.position += 1;
        }
        let text: String = self.chars[start..self.position].iter().collect();
        let kind = if self.keywords.contains(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Name
        };
        Token::new(kind, text)
    }

    /// Scans digits with at most one decimal point and at most one exponent
    /// marker, which may be followed by a single sign. A type suffix ends the
    /// literal. A literal that stops right after its exponent marker or sign
    /// is an `Error` token, and a lone `.` is a `Symbol`.
    fn scan_number(&mut self) -> Token {
        let start = self.position;
        let mut state = NumberState::default();

        while let Some(&c) = self.chars.get(self.position) {
            match c {
                '0'..='9' => {
                    state.last_was_exponent = false;
                    state.last_was_sign = false;
                },
                '.' if !state.dotted && !state.exponented => {
                    state.dotted = true;
                    state.last_was_exponent = false;
                    state.last_was_sign = false;
                },
                'e' | 'E' if !state.exponented => {
                    state.dotted = true;
                    state.exponented = true;
                    state.last_was_exponent = true;
                    state.last_was_sign = false;
                },
                '+' | '-' if state.last_was_exponent => {
                    state.last_was_exponent = false;
                    state.last_was_sign = true;
                },
                'd' | 'D' | 'f' | 'F' | 'l' | 'L'
                    if !state.dangling() && !self.is_lone_dot(start) =>
                {
                    self.position += 1;
                    return Token::number(self.text_from(start));
                },
                _ => break,
            }
            self.position += 1;
        }

        let text = self.text_from(start);
        if state.dangling() {
            Token::new(TokenKind::Error, text)
        } else if text == "." {
            Token::new(TokenKind::Symbol, text)
        } else {
            Token::number(text)
        }
    }

    fn is_lone_dot(&self, start: usize) -> bool {
        self.position - start == 1 && self.chars[start] == '.'
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..self.position].iter().collect()
    }
}
