use pretty_assertions::assert_eq;
use turtle_logo::{
    ast::{Token, TokenKind},
    error::ScanError,
    interpreter::{parser::core::keywords, scanner::Scanner},
};

fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source, keywords()).drain_tokens()
                                    .unwrap_or_else(|e| panic!("Scanning {source:?} failed: {e}"))
}

fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
    scan(source).into_iter()
                .map(|token| (token.kind(), token.text().to_string()))
                .collect()
}

fn single(source: &str) -> (TokenKind, String) {
    let tokens = kinds_and_texts(source);
    assert_eq!(tokens.len(), 1, "expected one token in {source:?}, got {tokens:?}");
    tokens.into_iter().next().unwrap()
}

#[test]
fn classifies_names_keywords_and_symbols() {
    use TokenKind::{Eol, Keyword, Name, Number, Symbol};

    assert_eq!(kinds_and_texts("forward size_2 $x + getX red\n{"),
               vec![(Keyword, "forward".to_string()),
                    (Name, "size_2".to_string()),
                    (Name, "$x".to_string()),
                    (Symbol, "+".to_string()),
                    (Keyword, "getX".to_string()),
                    (Keyword, "red".to_string()),
                    (Eol, "\n".to_string()),
                    (Symbol, "{".to_string())]);

    assert_eq!(kinds_and_texts("list header _"),
               vec![(Name, "list".to_string()),
                    (Name, "header".to_string()),
                    (Name, "_".to_string())]);

    assert_eq!(single("#"), (Symbol, "#".to_string()));
    assert_eq!(single("42"), (Number, "42".to_string()));
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(single("Forward").0, TokenKind::Name);
    assert_eq!(single("getx").0, TokenKind::Name);
}

#[test]
fn scans_well_formed_numbers() {
    for literal in ["12", "3.5", ".5", "7.", "1e10", "1.5E-3", "2e+8", "7f", "2.5d", "3L", "1e5F"] {
        assert_eq!(single(literal), (TokenKind::Number, literal.to_string()));
    }
}

#[test]
fn tags_dangling_exponents_and_signs_as_errors() {
    for literal in ["1e", "1E", "1e+", "2.5e-", ".5E"] {
        assert_eq!(single(literal), (TokenKind::Error, literal.to_string()));
    }

    let tokens = kinds_and_texts("3e x");
    assert_eq!(tokens[0], (TokenKind::Error, "3e".to_string()));
    assert_eq!(tokens[1], (TokenKind::Name, "x".to_string()));
}

#[test]
fn splits_numbers_at_the_first_illegal_character() {
    use TokenKind::{Name, Number, Symbol};

    assert_eq!(kinds_and_texts("1.2.3"),
               vec![(Number, "1.2".to_string()), (Number, ".3".to_string())]);
    assert_eq!(kinds_and_texts("1e5.5"),
               vec![(Number, "1e5".to_string()), (Number, ".5".to_string())]);
    assert_eq!(kinds_and_texts("5fx"),
               vec![(Number, "5f".to_string()), (Name, "x".to_string())]);
    assert_eq!(kinds_and_texts("2e3e4"),
               vec![(Number, "2e3".to_string()), (Name, "e4".to_string())]);
    assert_eq!(kinds_and_texts("4-2"),
               vec![(Number, "4".to_string()), (Symbol, "-".to_string()), (Number, "2".to_string())]);
}

#[test]
fn lone_dot_is_a_symbol() {
    assert_eq!(single("."), (TokenKind::Symbol, ".".to_string()));
    assert_eq!(kinds_and_texts(". f"),
               vec![(TokenKind::Symbol, ".".to_string()), (TokenKind::Name, "f".to_string())]);
}

#[test]
fn comments_run_to_the_end_of_the_line() {
    use TokenKind::{Eol, Keyword, Number};

    assert_eq!(kinds_and_texts("forward 10 // go ahead\nright"),
               vec![(Keyword, "forward".to_string()),
                    (Number, "10".to_string()),
                    (Eol, "\n".to_string()),
                    (Keyword, "right".to_string())]);

    assert_eq!(kinds_and_texts("// only a comment\n"), vec![(Eol, "\n".to_string())]);
}

#[test]
fn trailing_blanks_and_comments_are_not_tokens() {
    let mut scanner = Scanner::new("penup \t // done", keywords());
    assert!(scanner.has_next());
    assert_eq!(scanner.next().unwrap().text(), "penup");
    assert!(!scanner.has_next());

    assert!(!Scanner::new("", keywords()).has_next());
    assert!(!Scanner::new("  \t ", keywords()).has_next());
}

#[test]
fn next_fails_once_input_is_exhausted() {
    let mut scanner = Scanner::new("home", keywords());
    scanner.next().unwrap();
    assert_eq!(scanner.next(), Err(ScanError::Exhausted { line: 1 }));
}

#[test]
fn push_back_returns_the_same_token_again() {
    let mut scanner = Scanner::new("left 90", keywords());

    let first = scanner.next().unwrap();
    scanner.push_back().unwrap();
    assert!(scanner.has_next());
    let again = scanner.next().unwrap();
    assert_eq!(first, again);
    assert_eq!(again.kind(), TokenKind::Keyword);

    assert_eq!(scanner.next().unwrap().text(), "90");
    scanner.push_back().unwrap();
    assert_eq!(scanner.next().unwrap().text(), "90");
    assert!(!scanner.has_next());
}

#[test]
fn illegal_push_backs_fail() {
    let mut scanner = Scanner::new("a b", keywords());
    assert!(matches!(scanner.push_back(), Err(ScanError::IllegalPushBack { .. })));

    scanner.next().unwrap();
    scanner.push_back().unwrap();
    assert!(matches!(scanner.push_back(), Err(ScanError::IllegalPushBack { .. })));

    // the failed call did not disturb the pending token
    assert_eq!(scanner.next().unwrap().text(), "a");
}

#[test]
fn tracks_source_lines() {
    let mut scanner = Scanner::new("a\nb\n\n  c", keywords());
    let mut lines = Vec::new();
    while scanner.has_next() {
        let token = scanner.next().unwrap();
        lines.push((token.text().to_string(), scanner.line()));
    }
    assert_eq!(lines,
               vec![("a".to_string(), 1),
                    ("\n".to_string(), 1),
                    ("b".to_string(), 2),
                    ("\n".to_string(), 2),
                    ("\n".to_string(), 3),
                    ("c".to_string(), 4)]);
}

#[test]
fn rescanning_joined_tokens_gives_the_same_tokens() {
    let sources = ["forward 10\nright 90\n",
                   "set x (3.5e-2 + .25f) * -y\n",
                   "def square side {\n repeat 4 {\n forward side\n right 90\n }\n}\n",
                   "if getX > 1e3 {\n red\n}\nelse {\n color 1 2 3\n}\n",
                   "a$b _c 7L ; # . 4.\n\n\n"];

    for source in sources {
        let tokens = scan(source);
        let joined = tokens.iter()
                           .map(Token::text)
                           .collect::<Vec<_>>()
                           .join(" ");
        let rescanned = scan(&joined);

        assert_eq!(tokens, rescanned, "re-scanning {joined:?}");
        let kinds = |tokens: &[Token]| tokens.iter().map(Token::kind).collect::<Vec<_>>();
        assert_eq!(kinds(&tokens), kinds(&rescanned));
    }
}
