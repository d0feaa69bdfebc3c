use crate::{
    interpreter::parser::core::{ParseResult, Parser},
    util::stack::ensure_sufficient_stack,
};

impl Parser {
    /// Parses an expression.
    ///
    /// Grammar: `expression := term (add_operator unsigned_term)*`
    ///
    /// Each `(operator, operand)` pair folds into a new left-leaning node as
    /// soon as it is read, so `a - b + c` becomes `+(-(a b) c)`. Only the
    /// first term may carry a sign.
    ///
    /// # Errors
    /// `Syntax` if an additive operator is not followed by a term.
    pub fn parse_expression(&mut self) -> ParseResult<bool> {
        ensure_sufficient_stack(|| {
            if !self.parse_term()? {
                return Ok(false);
            }
            while self.parse_add_operator()? {
                if !self.parse_unsigned_term()? {
                    return Err(self.error("Error in expression after '+' or '-'"));
                }
                self.make_tree(2, &[3, 1])?;
            }
            Ok(true)
        })
    }

    /// Parses a term whose first factor may be signed.
    ///
    /// Grammar: `term := factor (multiply_operator factor)*`
    ///
    /// # Errors
    /// `Syntax` if a multiplicative operator is not followed by a factor.
    pub fn parse_term(&mut self) -> ParseResult<bool> {
        if !self.parse_factor()? {
            return Ok(false);
        }
        while self.parse_multiply_operator()? {
            if !self.parse_factor()? {
                return Err(self.error("No term after '*' or '/'"));
            }
            self.make_tree(2, &[3, 1])?;
        }
        Ok(true)
    }

    /// Parses a term that cannot start with a sign, as found after a binary
    /// `+` or `-`.
    ///
    /// Grammar: `unsigned_term := unsigned_factor (multiply_operator unsigned_factor)*`
    pub fn parse_unsigned_term(&mut self) -> ParseResult<bool> {
        if !self.parse_unsigned_factor()? {
            return Ok(false);
        }
        while self.parse_multiply_operator()? {
            if !self.parse_unsigned_factor()? {
                return Err(self.error("No term after '*' or '/'"));
            }
            self.make_tree(2, &[3, 1])?;
        }
        Ok(true)
    }

    /// Parses a comparison of two expressions into `comparator(left right)`.
    ///
    /// Grammar: `condition := expression comparator expression`
    ///
    /// # Errors
    /// `Syntax` if the first expression is not followed by a comparator and a
    /// second expression.
    pub fn parse_condition(&mut self) -> ParseResult<bool> {
        if !self.parse_expression()? {
            return Ok(false);
        }
        if !self.parse_comparator()? {
            return Err(self.error("No <comparator> following <expression>"));
        }
        if !self.parse_expression()? {
            return Err(self.error("No <expression> following <expression> - <comparator>"));
        }
        self.make_tree(2, &[3, 1])?;
        Ok(true)
    }

    /// Matches one of `<`, `=` or `>`.
    pub fn parse_comparator(&mut self) -> ParseResult<bool> {
        Ok(self.parse_symbol("<")? || self.parse_symbol("=")? || self.parse_symbol(">")?)
    }

    /// Matches `+` or `-`.
    pub fn parse_add_operator(&mut self) -> ParseResult<bool> {
        Ok(self.parse_symbol("+")? || self.parse_symbol("-")?)
    }

    /// Matches `*` or `/`.
    pub fn parse_multiply_operator(&mut self) -> ParseResult<bool> {
        Ok(self.parse_symbol("*")? || self.parse_symbol("/")?)
    }
}
