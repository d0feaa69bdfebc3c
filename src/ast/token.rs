use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier such as `size` or `$tmp`.
    Name,
    /// A numeric literal such as `12`, `.5`, `3e-2` or `7f`.
    Number,
    /// A name that appears in the scanner's keyword set.
    Keyword,
    /// A single punctuation character, or a lone `.`.
    Symbol,
    /// The end of a line (`"\n"`).
    Eol,
    /// A malformed numeric literal with a dangling exponent marker or sign.
    Error,
}

/// A lexical token: a kind plus the exact source text it was read from.
///
/// Tokens are immutable once created. Equality and hashing look at the text
/// only, so a `Name` token `x` equals a `Keyword` token `x`. Parse-tree
/// comparisons rely on this when expected trees are written as plain text.
///
/// # Example
/// ```
/// use turtle_logo::ast::{Token, TokenKind};
///
/// let name = Token::new(TokenKind::Name, "forward");
/// let keyword = Token::new(TokenKind::Keyword, "forward");
/// assert_eq!(name, keyword);
/// assert_eq!(keyword.kind(), TokenKind::Keyword);
/// ```
#[derive(Debug, Clone)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates a keyword token, used for the synthetic nodes the parser adds
    /// (`program`, `block`, `list`, `header`, `color`).
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, text)
    }

    /// Creates a number token.
    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    /// The lexical category.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Reads the numeric value of a number literal.
    ///
    /// A trailing type suffix (`d`, `f`, `l` in either case) is dropped
    /// before conversion. Returns `None` when the text is not a number the
    /// platform float parser accepts, e.g. `.e5`.
    ///
    /// # Example
    /// ```
    /// use turtle_logo::ast::Token;
    ///
    /// assert_eq!(Token::number("2.5f").number_value(), Some(2.5));
    /// assert_eq!(Token::number("1e3").number_value(), Some(1000.0));
    /// assert_eq!(Token::number(".e5").number_value(), None);
    /// ```
    #[must_use]
    pub fn number_value(&self) -> Option<f64> {
        let digits = self.text
                         .strip_suffix(|c: char| matches!(c, 'd' | 'D' | 'f' | 'F' | 'l' | 'L'))
                         .unwrap_or(&self.text);
        digits.parse().ok()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
