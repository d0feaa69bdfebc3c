use crate::interpreter::parser::core::{ParseResult, Parser};

impl Parser {
    /// Parses a factor with an optional leading sign.
    ///
    /// Grammar: `factor := add_operator? unsigned_factor`
    ///
    /// A sign wraps the factor in a single-child node, so `-a` becomes
    /// `-(a)`. A single-child `+`/`-` node is always a sign; binary operators
    /// always have two children.
    ///
    /// # Errors
    /// `Syntax` if a sign is not followed by a factor.
    pub fn parse_factor(&mut self) -> ParseResult<bool> {
        let signed = self.parse_add_operator()?;
        if self.parse_unsigned_factor()? {
            if signed {
                self.make_tree(2, &[1])?;
            }
            return Ok(true);
        }
        if signed {
            return Err(self.error("Unary sign not followed by a factor"));
        }
        Ok(false)
    }

    /// Parses a primary.
    ///
    /// Grammar: `unsigned_factor := name | number | "getX" | "getY" | "(" expression ")"`
    ///
    /// Parentheses only group; they leave no node behind.
    ///
    /// # Errors
    /// `Syntax` if a parenthesis does not enclose exactly one expression.
    pub fn parse_unsigned_factor(&mut self) -> ParseResult<bool> {
        if self.parse_variable()? || self.parse_number()? {
            return Ok(true);
        }
        if self.parse_keyword("getX")? || self.parse_keyword("getY")? {
            return Ok(true);
        }
        if self.parse_symbol("(")? {
            self.stack.pop();
            if !self.parse_expression()? {
                return Err(self.error("Error in parenthesized expression"));
            }
            if !self.parse_symbol(")")? {
                return Err(self.error("Unclosed parenthetical expression"));
            }
            self.stack.pop();
            return Ok(true);
        }
        Ok(false)
    }
}
