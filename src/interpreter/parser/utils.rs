use crate::{
    ast::{Token, TokenKind, Tree},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Consumes the next token if it has the given kind and, when `text` is
    /// given, exactly that text.
    ///
    /// On a match the token is pushed onto the stack as a leaf. Otherwise it
    /// is pushed back to the scanner and nothing changes.
    ///
    /// # Errors
    /// `Lexical` if the next token is a malformed numeric literal.
    pub fn next_token_matches(&mut self, kind: TokenKind, text: Option<&str>) -> ParseResult<bool> {
        if !self.scanner.has_next() {
            return Ok(false);
        }
        let token = self.scanner.next()?;
        if token.kind() == TokenKind::Error {
            return Err(self.lexical_error(&token));
        }
        if token.kind() == kind && text.is_none_or(|text| token.text() == text) {
            self.stack.push(Tree::new(token));
            return Ok(true);
        }
        self.scanner.push_back()?;
        Ok(false)
    }

    /// Matches the keyword `name`.
    pub fn parse_keyword(&mut self, name: &str) -> ParseResult<bool> {
        self.next_token_matches(TokenKind::Keyword, Some(name))
    }

    /// Matches the one-character symbol `symbol`.
    pub fn parse_symbol(&mut self, symbol: &str) -> ParseResult<bool> {
        self.next_token_matches(TokenKind::Symbol, Some(symbol))
    }

    /// Matches any name.
    pub fn parse_name(&mut self) -> ParseResult<bool> {
        self.next_token_matches(TokenKind::Name, None)
    }

    /// Matches any numeric literal.
    pub fn parse_number(&mut self) -> ParseResult<bool> {
        self.next_token_matches(TokenKind::Number, None)
    }

    /// Matches a variable, which is any name.
    pub fn parse_variable(&mut self) -> ParseResult<bool> {
        self.parse_name()
    }

    /// Matches one or more end-of-line tokens.
    ///
    /// Line ends carry no meaning in the tree, so nothing is left on the
    /// stack.
    pub fn parse_eol(&mut self) -> ParseResult<bool> {
        if !self.next_token_matches(TokenKind::Eol, None)? {
            return Ok(false);
        }
        self.stack.pop();
        while self.next_token_matches(TokenKind::Eol, None)? {
            self.stack.pop();
        }
        Ok(true)
    }

    /// Replaces the top `child_indices.len() + 1` stack entries with a single
    /// tree.
    ///
    /// The entry at position `root_index` becomes the root and the entries at
    /// `child_indices` become its children, in that order. Position `1` is
    /// the top of the stack.
    ///
    /// # Errors
    /// `Syntax` if a position is out of range or used twice.
    ///
    /// # Example
    /// ```
    /// use turtle_logo::interpreter::parser::core::Parser;
    ///
    /// let mut parser = Parser::new("a - b");
    /// assert!(parser.parse_name().unwrap());
    /// assert!(parser.parse_add_operator().unwrap());
    /// assert!(parser.parse_name().unwrap());
    ///
    /// parser.make_tree(2, &[3, 1]).unwrap();
    /// assert_eq!(parser.stack().len(), 1);
    /// assert_eq!(parser.peek().unwrap().to_string(), "-(a b)");
    /// ```
    pub fn make_tree(&mut self, root_index: usize, child_indices: &[usize]) -> ParseResult<()> {
        let count = child_indices.len() + 1;
        if self.stack.len() < count {
            return Err(self.error(format!("Cannot combine {count} trees from a stack of {}",
                                          self.stack.len())));
        }

        let split = self.stack.len() - count;
        // stack position n lives at slots[count - n]
        let mut slots: Vec<Option<Tree<Token>>> = self.stack.drain(split..).map(Some).collect();

        let mut take = |position: usize| {
            position.checked_sub(1)
                    .and_then(|offset| count.checked_sub(offset + 1))
                    .and_then(|slot| slots.get_mut(slot))
                    .and_then(Option::take)
        };

        let Some(mut root) = take(root_index) else {
            return Err(self.error(format!("Stack position {root_index} is not available as a root")));
        };
        for &index in child_indices {
            let Some(child) = take(index) else {
                return Err(self.error(format!("Stack position {index} is not available as a child")));
            };
            root.add_child(child);
        }

        self.stack.push(root);
        Ok(())
    }

    /// Pushes a keyword leaf named `root` and makes it the parent of the
    /// `count` entries below it, oldest first.
    pub fn make_root_designated_tree(&mut self, root: &str, count: usize) -> ParseResult<()> {
        self.stack.push(Tree::new(Token::keyword(root)));
        let children: Vec<usize> = (2..=count + 1).rev().collect();
        self.make_tree(1, &children)
    }
}
