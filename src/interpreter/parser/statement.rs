use crate::{
    ast::{Token, Tree},
    interpreter::parser::core::{COLORS, ParseResult, Parser},
    util::stack::ensure_sufficient_stack,
};

impl Parser {
    /// Parses a single command.
    ///
    /// A command is one of:
    /// - a move (`forward`, `right`, `left`, `face`) followed by an
    ///   expression.
    /// - a named color, or `color` followed by three expressions.
    /// - `penup`, `pendown` or `home`.
    /// - `jump`, `set`, `repeat`, `while`, `if` or `do`.
    ///
    /// Forms are tried in that order; the first one whose leading keyword
    /// matches must then parse completely.
    ///
    /// # Errors
    /// `Syntax` if a command starts but is malformed or does not end its
    /// line.
    pub fn parse_command(&mut self) -> ParseResult<bool> {
        ensure_sufficient_stack(|| {
            if self.parse_move()? {
                if !self.parse_expression()? {
                    return Err(self.error("No <expression> following <move>"));
                }
                self.make_tree(2, &[1])?;
                if !self.parse_eol()? {
                    return Err(self.error("No <eol> following <move> - <expression>"));
                }
                return Ok(true);
            }
            if self.parse_color()? {
                if !self.parse_eol()? {
                    return Err(self.error("No <eol> following <color>"));
                }
                return Ok(true);
            }
            Ok(self.parse_bare_command("penup")?
               || self.parse_bare_command("pendown")?
               || self.parse_bare_command("home")?
               || self.parse_jump()?
               || self.parse_set()?
               || self.parse_repeat()?
               || self.parse_while()?
               || self.parse_if()?
               || self.parse_do()?)
        })
    }

    /// Matches one of the move keywords.
    pub fn parse_move(&mut self) -> ParseResult<bool> {
        Ok(self.parse_keyword("forward")?
           || self.parse_keyword("right")?
           || self.parse_keyword("left")?
           || self.parse_keyword("face")?)
    }

    /// Parses a color into `color(red green blue)`.
    ///
    /// A named color expands right away into its three literal components:
    /// `red` becomes `color(255 0 0)`. Otherwise `color` must be followed by
    /// three expressions. The line end is left to the caller.
    ///
    /// # Errors
    /// `Syntax` if `color` is followed by fewer than three expressions.
    pub fn parse_color(&mut self) -> ParseResult<bool> {
        for (name, components) in COLORS {
            if self.parse_keyword(name)? {
                self.stack.pop();
                let components = components.map(|c| Tree::new(Token::number(c.to_string())));
                self.stack.push(Tree::with_children(Token::keyword("color"), components));
                return Ok(true);
            }
        }

        if !self.parse_keyword("color")? {
            return Ok(false);
        }
        for ordinal in ["first", "second", "third"] {
            if !self.parse_expression()? {
                return Err(self.error(format!("No {ordinal} <expression> following 'color'")));
            }
        }
        self.make_tree(4, &[3, 2, 1])?;
        Ok(true)
    }

    /// Parses a keyword that takes no operands and ends its line.
    fn parse_bare_command(&mut self, keyword: &str) -> ParseResult<bool> {
        if !self.parse_keyword(keyword)? {
            return Ok(false);
        }
        if !self.parse_eol()? {
            return Err(self.error(format!("No <eol> following '{keyword}'")));
        }
        Ok(true)
    }

    /// Parses `jump <expression> <expression> eol` into `jump(x y)`.
    pub fn parse_jump(&mut self) -> ParseResult<bool> {
        if !self.parse_keyword("jump")? {
            return Ok(false);
        }
        if !self.parse_expression()? {
            return Err(self.error("No first <expression> following 'jump'"));
        }
        if !self.parse_expression()? {
            return Err(self.error("No second <expression> following 'jump'"));
        }
        self.make_tree(3, &[2, 1])?;
        if !self.parse_eol()? {
            return Err(self.error("No <eol> at the end of jump sequence"));
        }
        Ok(true)
    }

    /// Parses `set <variable> <expression> eol` into `set(name value)`.
    pub fn parse_set(&mut self) -> ParseResult<bool> {
        if !self.parse_keyword("set")? {
            return Ok(false);
        }
        if !self.parse_variable()? {
            return Err(self.error("No <variable> following 'set'"));
        }
        if !self.parse_expression()? {
            return Err(self.error("No <expression> following 'set' - <variable>"));
        }
        self.make_tree(3, &[2, 1])?;
        if !self.parse_eol()? {
            return Err(self.error("No <eol> at the end of set sequence"));
        }
        Ok(true)
    }

    /// Parses `repeat <expression> <block>` into `repeat(count block)`.
    pub fn parse_repeat(&mut self) -> ParseResult<bool> {
        if !self.parse_keyword("repeat")? {
            return Ok(false);
        }
        if !self.parse_expression()? {
            return Err(self.error("No <expression> following 'repeat'"));
        }
        if !self.parse_block()? {
            return Err(self.error("No <block> at the end of repeat sequence"));
        }
        self.make_tree(3, &[2, 1])?;
        Ok(true)
    }

    /// Parses `while <condition> <block>` into `while(condition block)`.
    pub fn parse_while(&mut self) -> ParseResult<bool> {
        if !self.parse_keyword("while")? {
            return Ok(false);
        }
        if !self.parse_condition()? {
            return Err(self.error("No <condition> following 'while'"));
        }
        if !self.parse_block()? {
            return Err(self.error("No <block> at the end of while sequence"));
        }
        self.make_tree(3, &[2, 1])?;
        Ok(true)
    }

    /// Parses `if <condition> <block> ["else" <block>]` into
    /// `if(condition then)` or `if(condition then otherwise)`.
    ///
    /// The `else` keyword itself leaves no node behind.
    pub fn parse_if(&mut self) -> ParseResult<bool> {
        if !self.parse_keyword("if")? {
            return Ok(false);
        }
        if !self.parse_condition()? {
            return Err(self.error("No <condition> following 'if'"));
        }
        if !self.parse_block()? {
            return Err(self.error("No <block> following 'if'-<condition>"));
        }

        if self.parse_keyword("else")? {
            self.stack.pop();
            if !self.parse_block()? {
                return Err(self.error("No <block> following 'else'"));
            }
            self.make_tree(4, &[3, 2, 1])?;
        } else {
            self.make_tree(3, &[2, 1])?;
        }
        Ok(true)
    }

    /// Parses `do <name> <expression>* eol` into `do(name list(argument...))`.
    pub fn parse_do(&mut self) -> ParseResult<bool> {
        if !self.parse_keyword("do")? {
            return Ok(false);
        }
        if !self.parse_name()? {
            return Err(self.error("No <name> following 'do'"));
        }

        let mut arguments = 0;
        while self.parse_expression()? {
            arguments += 1;
        }
        self.make_root_designated_tree("list", arguments)?;
        self.make_tree(3, &[2, 1])?;

        if !self.parse_eol()? {
            return Err(self.error("No <eol> at the end of do sequence"));
        }
        Ok(true)
    }
}
