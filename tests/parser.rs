use pretty_assertions::assert_eq;
use turtle_logo::{
    ast::{Token, TokenKind, Tree},
    error::ParseError,
    interpreter::{
        parser::core::{Parser, keywords},
        scanner::Scanner,
    },
    parse,
};

/// Reads an expected tree. Token equality ignores kinds, so every value can
/// be a name.
fn tree(description: &str) -> Tree<Token> {
    description.parse::<Tree<String>>()
               .unwrap_or_else(|e| panic!("Bad tree description {description:?}: {e}"))
               .map(&mut |text| Token::new(TokenKind::Name, text))
}

fn assert_stack_top(parser: &Parser, expected: &str) {
    let top = parser.peek().unwrap_or_else(|| panic!("Empty stack, expected {expected}"));
    assert_eq!(*top, tree(expected));
}

fn unconsumed_tokens_should_be(parser: &mut Parser, expected: &str) {
    let actual = parser.scanner_mut().drain_tokens().unwrap();
    let expected = Scanner::new(expected, keywords()).drain_tokens().unwrap();
    assert_eq!(actual, expected);
}

fn assert_syntax_error(result: Result<bool, ParseError>) {
    assert!(matches!(result, Err(ParseError::Syntax { .. })), "expected a syntax error, got {result:?}");
}

#[test]
fn parses_programs() {
    let cases = [("penup \n", "program(block(penup) list)"),
                 ("home \n", "program(block(home) list)"),
                 ("jump (7 * 8 * 8 + 9) dog * 10 + cat\n",
                  "program(block(jump(+(*(*(7 8) 8) 9) +(*(dog 10) cat))) list)"),
                 ("set dog cat + mouse * (6 + 8)\n", "program(block(set(dog +(cat *(mouse +(6 8))))) list)"),
                 ("repeat (77 + 98 * dog){\npenup\n}\n",
                  "program(block(repeat(+(77 *(98 dog)) block(penup))) list)"),
                 ("while (77) = (78){\ncolor 8 8 8\n}\n",
                  "program(block(while(=(77 78) block(color(8 8 8)))) list)"),
                 ("if 77 = 78{\ncolor 8 8 8\n}\n else {\ncolor 8 8 8\n}\n",
                  "program(block(if(=(77 78) block(color(8 8 8)) block(color(8 8 8)))) list)"),
                 ("do john\n", "program(block(do(john list)) list)"),
                 ("do john 8 * j + 9 * 56\n", "program(block(do(john list(+(*(8 j) *(9 56))))) list)"),
                 ("penup \npenup \n", "program(block(penup penup) list)"),
                 ("if 77 = 78{\ncolor 8 8 8\n}\n else {\ncolor 8 8 8\n}\ndo john\n",
                  "program(block(if(=(77 78) block(color(8 8 8)) block(color(8 8 8))) do(john list)) list)"),
                 ("do john 8 * j + 9 * 56\npenup \n",
                  "program(block(do(john list(+(*(8 j) *(9 56)))) penup) list)")];

    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_program().unwrap(), "{source:?}");
        assert_stack_top(&parser, expected);
        assert_eq!(parser.stack().len(), 1);
    }

    let mut parser = Parser::new("do first \n do second 10 \n do first \n pendown \n do second w \n forward w \n left 90 \n");
    assert!(parser.parse_program().unwrap());
}

#[test]
fn parses_programs_with_procedures() {
    let source = "do square 10\n\
                  def square side {\n\
                  repeat 4 {\n\
                  forward side\n\
                  right 90\n\
                  }\n\
                  }\n\
                  def nothing {\n\
                  }\n";
    assert_eq!(parse(source).unwrap(),
               tree("program(block(do(square list(10))) \
                     list(def(header(square list(side)) block(repeat(4 block(forward(side) right(90))))) \
                          def(header(nothing list) block)))"));
}

#[test]
fn skips_blank_and_comment_lines_before_the_first_command() {
    assert_eq!(parse("// title\n\n   \npenup\n").unwrap(), tree("program(block(penup) list)"));
}

#[test]
fn rejects_bad_programs() {
    for source in ["", "\n", "// nothing\n", "def f {\n}\n", "penup\n7\n", "penup\ndef f {\n}\npenup\n", "penup"] {
        let result = parse(source);
        assert!(matches!(result, Err(ParseError::Syntax { .. })), "{source:?} should not parse, got {result:?}");
    }
}

#[test]
fn parses_commands() {
    let cases = [("penup\n", "penup"),
                 ("home \n", "home"),
                 ("jump (7 * 8 * 8 + 9) dog * 10 + cat\n", "jump(+(*(*(7 8) 8) 9) +(*(dog 10) cat))"),
                 ("set dog cat + mouse * (6 + 8)\n", "set(dog +(cat *(mouse +(6 8))))"),
                 ("repeat (77 + 98 * dog){\npenup\n}\n", "repeat(+(77 *(98 dog)) block(penup))"),
                 ("while (77) = (78) {\nred\n}\n", "while(=(77 78) block(color(255 0 0)))"),
                 ("if (77 * u + 8) = 78{\ncolor 8 8 8\n}\n", "if(=(+(*(77 u) 8) 78) block(color(8 8 8)))"),
                 ("do john 8 * j + 9 * 56 13\n", "do(john list(+(*(8 j) *(9 56)) 13))"),
                 ("forward -10 // comment\n", "forward(-(10))"),
                 ("face getX + 1\n\n\n", "face(+(getX 1))")];

    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_command().unwrap(), "{source:?}");
        assert_stack_top(&parser, expected);
        assert!(!parser.scanner_mut().has_next());
    }
}

#[test]
fn commands_must_end_their_line() {
    for source in ["penup home\n", "forward 10", "jump 1\n", "set 4 5\n", "do\n", "color 1 2\n", "red green\n"] {
        assert_syntax_error(Parser::new(source).parse_command());
    }
    assert!(!Parser::new("bogus 10\n").parse_command().unwrap());
}

#[test]
fn parses_procedures() {
    assert_syntax_error(Parser::new("def jhkh k786 {\n}").parse_procedure());
    assert_syntax_error(Parser::new("def 7786 {\n penup \n}\n").parse_procedure());
    assert_syntax_error(Parser::new("def jhkh k786\n").parse_procedure());

    let cases = [("def jhkh k786 {\n}\n", "def(header(jhkh list(k786)) block)"),
                 ("def jhkh k786 {\n penup \n}\n", "def(header(jhkh list(k786)) block(penup))"),
                 ("def jhkh k786 k785 {\n color dog dog dog\n}\n 8",
                  "def(header(jhkh list(k786 k785)) block(color(dog dog dog)))")];
    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_procedure().unwrap());
        assert_stack_top(&parser, expected);
    }
}

#[test]
fn parses_moves() {
    let mut parser = Parser::new("forward right left face");
    for expected in ["forward", "right", "left", "face"] {
        assert!(parser.parse_move().unwrap());
        assert_stack_top(&parser, expected);
    }
    assert!(!parser.parse_move().unwrap());
}

#[test]
fn expands_named_colors() {
    let mut parser = Parser::new("red orange magenta pink tan");
    for expected in ["color(255 0 0)", "color(255 128 0)", "color(255 0 255)", "color(250 175 190)", "color(210 180 140)"] {
        assert!(parser.parse_color().unwrap());
        assert_stack_top(&parser, expected);
    }

    let mut parser = Parser::new("color dog 10 * 6 + 7 51 nocolor");
    assert!(parser.parse_color().unwrap());
    assert_stack_top(&parser, "color(dog +(*(10 6) 7) 51)");
    assert!(!parser.parse_color().unwrap());
    unconsumed_tokens_should_be(&mut parser, "nocolor");
}

#[test]
fn parses_blocks() {
    assert_syntax_error(Parser::new("{penup\n}\n").parse_block());
    assert_syntax_error(Parser::new("{\npenup\n}").parse_block());
    assert_syntax_error(Parser::new("{\npenup\n").parse_block());

    let cases = [("{\n}\n", "block"),
                 ("{\npenup\n}\n", "block(penup)"),
                 ("{\n\n  home\n\n}\n\n", "block(home)"),
                 ("{\nforward dog\n}\n", "block(forward(dog))"),
                 ("{\nforward + dog * cat + dog\n}\n", "block(forward(+(*(+(dog) cat) dog)))"),
                 ("{\nforward + (dog * cat + dog)\n}\n", "block(forward(+(+(*(dog cat) dog))))")];
    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_block().unwrap());
        assert_stack_top(&parser, expected);
    }

    let mut parser = Parser::new("{\npenup\n}\ncat");
    assert!(parser.parse_block().unwrap());
    assert!(!parser.parse_block().unwrap());
    unconsumed_tokens_should_be(&mut parser, "cat");
}

#[test]
fn parses_conditions() {
    let cases = [("+dog = -cat", "=(+(dog) -(cat))"),
                 ("787 * 87 + 6 > 87 * 76 + 9 * 0", ">(+(*(787 87) 6) +(*(87 76) *(9 0)))"),
                 ("def778 = + ((((87 * 6 + 9))))", "=(def778 +(+(*(87 6) 9)))")];
    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_condition().unwrap());
        assert_stack_top(&parser, expected);
    }

    assert_syntax_error(Parser::new("a b").parse_condition());
    assert_syntax_error(Parser::new("a <").parse_condition());
}

#[test]
fn parses_expressions() {
    let cases = [("250", "250"),
                 ("hello", "hello"),
                 ("(xyz + 3)", "+(xyz 3)"),
                 ("a + b + c", "+(+(a b) c)"),
                 ("a + b - c", "-(+(a b) c)"),
                 ("3 * 12 - 7", "-(*(3 12) 7)"),
                 ("12 * 5 - 3 * 4 / 6 + 8", "+(-(*(12 5) /(*(3 4) 6)) 8)"),
                 ("12 * ((5 - 3) * 4) / 6 + (8)", "+(/(*(12 *(-(5 3) 4)) 6) 8)"),
                 ("-a + b", "+(-(a) b)"),
                 ("-a * b + c", "+(*(-(a) b) c)"),
                 ("(-foo + 3) / bar", "/(+(-(foo) 3) bar)"),
                 ("getX - getY", "-(getX getY)")];
    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_expression().unwrap(), "{source:?}");
        assert_stack_top(&parser, expected);
        assert_eq!(parser.stack().len(), 1);
    }

    assert!(!Parser::new("").parse_expression().unwrap());
    assert!(!Parser::new("#").parse_expression().unwrap());
}

#[test]
fn rejects_incomplete_expressions() {
    for source in ["17 +", "22 *", "(3 + 4", "()", "- -3", "4 + -3"] {
        assert_syntax_error(Parser::new(source).parse_expression());
    }
}

#[test]
fn parses_terms() {
    let mut parser = Parser::new("3*12");
    assert!(parser.parse_term().unwrap());
    assert_stack_top(&parser, "*(3 12)");

    let mut parser = Parser::new("-3*12");
    assert!(parser.parse_term().unwrap());
    assert_stack_top(&parser, "*(-(3) 12)");
}

#[test]
fn parses_unsigned_terms() {
    let cases = [("12", "12"), ("3*12", "*(3 12)"), ("u * v * z", "*(*(u v) z)"), ("20 * 3 / 4", "/(*(20 3) 4)")];
    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_unsigned_term().unwrap());
        assert_stack_top(&parser, expected);
    }

    let mut parser = Parser::new("20 * 3 / 4 + 5");
    assert!(parser.parse_unsigned_term().unwrap());
    assert_stack_top(&parser, "/(*(20 3) 4)");
    unconsumed_tokens_should_be(&mut parser, "+ 5");

    let mut parser = Parser::new("-5");
    assert!(!parser.parse_unsigned_term().unwrap());
    unconsumed_tokens_should_be(&mut parser, "-5");
}

#[test]
fn parses_unsigned_factors() {
    let cases = [("12", "12"), ("hello", "hello"), ("(xyz + 3)", "+(xyz 3)"), ("getX", "getX"), ("getY", "getY")];
    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_unsigned_factor().unwrap());
        assert_stack_top(&parser, expected);
    }

    let mut parser = Parser::new("12 * 5");
    assert!(parser.parse_unsigned_factor().unwrap());
    assert_stack_top(&parser, "12");
    unconsumed_tokens_should_be(&mut parser, "* 5");

    let mut parser = Parser::new("17 +");
    assert!(parser.parse_unsigned_factor().unwrap());
    unconsumed_tokens_should_be(&mut parser, "+");

    for source in ["", "#"] {
        let mut parser = Parser::new(source);
        assert!(!parser.parse_unsigned_factor().unwrap());
        assert!(parser.stack().is_empty());
        unconsumed_tokens_should_be(&mut parser, source);
    }
}

#[test]
fn parses_factors() {
    let cases = [("12", "12"), ("hello", "hello"), ("-12", "-(12)"), ("-hello", "-(hello)"), ("+(a)", "+(a)")];
    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        assert!(parser.parse_factor().unwrap());
        assert_stack_top(&parser, expected);
    }
    assert_syntax_error(Parser::new("- *").parse_factor());
}

#[test]
fn matches_operators() {
    let mut parser = Parser::new("< > - <");
    assert!(parser.parse_comparator().unwrap());
    assert_stack_top(&parser, "<");
    assert!(parser.parse_comparator().unwrap());
    assert_stack_top(&parser, ">");
    assert!(!parser.parse_comparator().unwrap());
    assert_stack_top(&parser, ">");
    unconsumed_tokens_should_be(&mut parser, "- <");

    let mut parser = Parser::new("+ - + $");
    for expected in ["+", "-", "+"] {
        assert!(parser.parse_add_operator().unwrap());
        assert_stack_top(&parser, expected);
    }
    assert!(!parser.parse_add_operator().unwrap());
    unconsumed_tokens_should_be(&mut parser, "$");

    let mut parser = Parser::new("* / $");
    assert!(parser.parse_multiply_operator().unwrap());
    assert!(parser.parse_multiply_operator().unwrap());
    assert!(!parser.parse_multiply_operator().unwrap());
    unconsumed_tokens_should_be(&mut parser, "$");
}

#[test]
fn matches_variables() {
    let mut parser = Parser::new("hello   list abc123 header _");
    for _ in 0..5 {
        assert!(parser.parse_variable().unwrap());
    }
    assert!(!parser.parse_variable().unwrap());
}

#[test]
fn line_ends_leave_nothing_on_the_stack() {
    for source in ["+\n+", "+\n\n\n+", "+\n// note\n  \n+"] {
        let mut parser = Parser::new(source);
        assert!(parser.parse_add_operator().unwrap());
        assert!(parser.parse_eol().unwrap());
        assert_eq!(parser.stack().len(), 1);
        assert_stack_top(&parser, "+");
        unconsumed_tokens_should_be(&mut parser, "+");
    }
}

#[test]
fn make_tree_reorders_stack_entries() {
    let mut parser = Parser::new("a b c");
    for _ in 0..3 {
        assert!(parser.parse_name().unwrap());
    }
    parser.make_tree(1, &[2, 3]).unwrap();
    assert_stack_top(&parser, "c(b a)");

    assert!(matches!(parser.make_tree(1, &[2]), Err(ParseError::Syntax { .. })));
}

#[test]
fn syntax_errors_carry_line_and_stack() {
    let err = parse("penup\nset x\n").unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.to_string(),
               "Error on line 2: No <expression> following 'set' - <variable>; stack = [penup, set, x]");
}

#[test]
fn malformed_literals_are_lexical_errors() {
    let err = parse("penup\nforward 1e+\n").unwrap_err();
    assert_eq!(err, ParseError::Lexical { literal: "1e+".to_string(), line: 2 });
    assert_eq!(err.to_string(), "Error on line 2: Malformed number literal '1e+'.");
}
