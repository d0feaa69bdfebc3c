use crate::{
    ast::{Token, TokenKind, Tree},
    error::ParseError,
    interpreter::scanner::Scanner,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Statement and expression keywords, excluding the color names.
pub const KEYWORDS: [&str; 18] = ["penup", "pendown", "home", "jump", "set", "repeat", "while", "if",
                                  "else", "do", "forward", "right", "left", "face", "color", "def",
                                  "getX", "getY"];

/// Named colors and the RGB components each one expands to.
pub const COLORS: [(&str, [u8; 3]); 15] = [("red", [255, 0, 0]),
                                           ("orange", [255, 128, 0]),
                                           ("yellow", [255, 255, 0]),
                                           ("green", [0, 153, 0]),
                                           ("cyan", [0, 255, 255]),
                                           ("blue", [0, 64, 255]),
                                           ("purple", [128, 0, 255]),
                                           ("magenta", [255, 0, 255]),
                                           ("pink", [250, 175, 190]),
                                           ("olive", [128, 128, 0]),
                                           ("black", [0, 0, 0]),
                                           ("gray", [128, 128, 128]),
                                           ("white", [255, 255, 255]),
                                           ("brown", [128, 64, 0]),
                                           ("tan", [210, 180, 140])];

/// Every spelling the scanner reports as a keyword: [`KEYWORDS`] followed by
/// the color names of [`COLORS`].
pub fn keywords() -> impl Iterator<Item = &'static str> {
    KEYWORDS.into_iter().chain(COLORS.into_iter().map(|(name, _)| name))
}

/// A recursive-descent parser that assembles its tree on an explicit stack.
///
/// Every rule method is named after the grammar rule it recognizes and
/// returns `Ok(true)` when the rule matched. A successful match leaves
/// exactly one new tree on top of the stack; a rule that does not match at
/// all leaves both the stack and the token stream as they were. A rule that
/// matches partially and then fails returns a [`ParseError::Syntax`] carrying
/// a snapshot of the stack.
///
/// Combining rules call [`make_tree`](Self::make_tree), which addresses stack
/// entries by position, `1` being the top.
///
/// # Example
/// ```
/// use turtle_logo::interpreter::parser::core::Parser;
///
/// let mut parser = Parser::new("3 * 12 - 7");
/// assert!(parser.parse_expression().unwrap());
/// assert_eq!(parser.peek().unwrap().to_string(), "-(*(3 12) 7)");
/// ```
#[derive(Debug)]
pub struct Parser {
    pub(super) scanner: Scanner,
    pub(super) stack:   Vec<Tree<Token>>,
}

impl Parser {
    /// Creates a parser over `source` with an empty assembly stack.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { scanner: Scanner::new(source, keywords()),
               stack:   Vec::new(), }
    }

    /// The assembly stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[Tree<Token>] {
        &self.stack
    }

    /// The tree on top of the assembly stack.
    #[must_use]
    pub fn peek(&self) -> Option<&Tree<Token>> {
        self.stack.last()
    }

    /// The underlying scanner, positioned after the last consumed token.
    pub const fn scanner_mut(&mut self) -> &mut Scanner {
        &mut self.scanner
    }

    /// Removes and returns the tree on top of the assembly stack.
    pub fn pop(&mut self) -> Option<Tree<Token>> {
        self.stack.pop()
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := eol? command+ procedure*`
    ///
    /// Blank and comment-only lines before the first command are skipped. On
    /// success the stack top is `program(block(command...) list(def...))`.
    ///
    /// # Errors
    /// - `Syntax` if the program does not start with a command, or if input
    ///   remains after the last procedure.
    /// - Any error raised by the commands and procedures themselves.
    pub fn parse_program(&mut self) -> ParseResult<bool> {
        self.parse_eol()?;

        if !self.parse_command()? {
            return Err(self.error("No <command> at the beginning of <program>"));
        }
        let mut commands = 1;
        while self.parse_command()? {
            commands += 1;
        }
        self.make_root_designated_tree("block", commands)?;

        let mut procedures = 0;
        while self.parse_procedure()? {
            procedures += 1;
        }
        self.make_root_designated_tree("list", procedures)?;

        self.stack.push(Tree::new(Token::keyword("program")));
        self.make_tree(1, &[3, 2])?;

        if self.scanner.has_next() {
            return Err(self.error("No <command> or <procedure> at the end of <program>"));
        }
        Ok(true)
    }

    /// Builds the syntax error for `message` at the scanner's current line.
    pub(super) fn error(&self, message: impl Into<String>) -> ParseError {
        let stack = self.stack
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
        ParseError::Syntax { message: message.into(),
                             line: self.scanner.line(),
                             stack }
    }

    /// Reports a malformed literal met during lookahead.
    pub(super) fn lexical_error(&self, token: &Token) -> ParseError {
        debug_assert_eq!(token.kind(), TokenKind::Error);
        ParseError::Lexical { literal: token.text().to_string(),
                              line:    self.scanner.line(), }
    }
}

/// Parses `source` as a complete program and returns its tree.
///
/// # Errors
/// Returns the first lexical or syntax error met.
///
/// # Example
/// ```
/// use turtle_logo::interpreter::parser::core::parse;
///
/// let tree = parse("penup\nforward 10\n").unwrap();
/// assert_eq!(tree.to_string(), "program(block(penup forward(10)) list)");
///
/// assert!(parse("forward\n").is_err());
/// ```
#[tracing::instrument(level = "debug", skip(source), fields(bytes = source.len()))]
pub fn parse(source: &str) -> ParseResult<Tree<Token>> {
    let mut parser = Parser::new(source);
    parser.parse_program()?;
    let tree = parser.pop()
                     .ok_or_else(|| parser.error("No <program> on the stack after parsing"))?;
    tracing::debug!(commands = tree.first_child().map_or(0, Tree::child_count),
                    procedures = tree.last_child().map_or(0, Tree::child_count),
                    "parsed program");
    Ok(tree)
}
