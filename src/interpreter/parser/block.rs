use crate::{
    ast::{Token, Tree},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Parses a braced block into `block(command...)`.
    ///
    /// Grammar: `block := "{" eol command* "}" eol`
    ///
    /// Both braces must end their line; the braces themselves leave no node
    /// behind.
    ///
    /// # Errors
    /// `Syntax` if a line end is missing after either brace, or if the block
    /// is not closed.
    pub fn parse_block(&mut self) -> ParseResult<bool> {
        if !self.parse_symbol("{")? {
            return Ok(false);
        }
        self.stack.pop();
        if !self.parse_eol()? {
            return Err(self.error("No <eol> after the opening bracket"));
        }

        let mut commands = 0;
        while self.parse_command()? {
            commands += 1;
        }

        if !self.parse_symbol("}")? {
            return Err(self.error("Unclosed bracketed command"));
        }
        self.stack.pop();
        if !self.parse_eol()? {
            return Err(self.error("No <eol> after the closing bracket"));
        }

        self.make_root_designated_tree("block", commands)?;
        Ok(true)
    }

    /// Parses a procedure definition into
    /// `def(header(name list(parameter...)) block(...))`.
    ///
    /// Grammar: `procedure := "def" name name* block`
    ///
    /// # Errors
    /// `Syntax` if `def` is not followed by a name, or the parameters are not
    /// followed by a block.
    pub fn parse_procedure(&mut self) -> ParseResult<bool> {
        if !self.parse_keyword("def")? {
            return Ok(false);
        }
        if !self.parse_name()? {
            return Err(self.error("No <name> after 'def'"));
        }

        let mut parameters = 0;
        while self.parse_variable()? {
            parameters += 1;
        }
        self.make_root_designated_tree("list", parameters)?;
        self.stack.push(Tree::new(Token::keyword("header")));
        self.make_tree(1, &[3, 2])?;

        if !self.parse_block()? {
            return Err(self.error("No <block> at the end of <procedure>"));
        }
        self.make_tree(3, &[2, 1])?;
        Ok(true)
    }
}
