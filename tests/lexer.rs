use arrowlang::{
    error::{LexError, LexWarning},
    interpreter::{
        lexer::{Lexer, Token, TokenKind, TokenValue, tokenize},
        source::Position,
    },
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"))
                    .tokens
                    .iter()
                    .map(|token| token.kind)
                    .collect()
}

fn single(source: &str) -> Token {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"))
                                 .tokens;
    assert_eq!(tokens.len(), 2, "expected one token and Eof for {source:?}");
    tokens[0].clone()
}

#[test]
fn operators_are_read_greedily() {
    use TokenKind::{
        And, Assign, BindFront, Call, Comma, Decorate, Div, Eof, Eq, FuncSign, Gt, Gte, LBlock,
        LFuncType, LParen, Lt, Lte, Minus, Mult, Neq, Not, Or, Plus, RBlock, RFuncType, RParen,
        Semicolon, Wildcard,
    };

    assert_eq!(kinds("->> -> => == != <= >= < > && || :: @ ! + - * / ( ) { } [ ] ; , _"),
               [BindFront, Call, Assign, Eq, Neq, Lte, Gte, Lt, Gt, And, Or, FuncSign, Decorate,
                Not, Plus, Minus, Mult, Div, LParen, RParen, LBlock, RBlock, LFuncType,
                RFuncType, Semicolon, Comma, Wildcard, Eof]);
}

#[test]
fn operators_need_no_whitespace() {
    use TokenKind::{Assign, BindFront, Call, Eof, Identifier, Int, LParen, Minus, RParen};

    assert_eq!(kinds("(x)->>f"), [LParen, Identifier, RParen, BindFront, Identifier, Eof]);
    assert_eq!(kinds("a->b"), [Identifier, Call, Identifier, Eof]);
    assert_eq!(kinds("x-1=>y"), [Identifier, Minus, Int, Assign, Identifier, Eof]);
    assert_eq!(kinds("-->"), [Minus, Call, Eof]);
}

#[test]
fn keywords_are_recognized() {
    use TokenKind::{
        BoolType, Elif, Else, Eof, FltType, For, If, IntType, Mut, Ret, StringType, VoidType,
        While,
    };

    assert_eq!(kinds("int flt string bool void mut ret while for if elif else"),
               [IntType, FltType, StringType, BoolType, VoidType, Mut, Ret, While, For, If, Elif,
                Else, Eof]);
}

#[test]
fn booleans_are_literals() {
    assert_eq!(single("true").value, TokenValue::Bool(true));
    assert_eq!(single("false").value, TokenValue::Bool(false));
    assert_eq!(single("truer").kind, TokenKind::Identifier);
}

#[test]
fn identifiers_keep_their_text() {
    let token = single("snake_case_1");

    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.identifier(), Some("snake_case_1"));
}

#[test]
fn numbers() {
    assert_eq!(single("0").value, TokenValue::Int(0));
    assert_eq!(single("1234567").value, TokenValue::Int(1_234_567));
    assert_eq!(single("3.25").value, TokenValue::Float(3.25));
    assert_eq!(single("0.1").value, TokenValue::Float(0.1));
    assert_eq!(single("7.").value, TokenValue::Float(7.0));
    assert_eq!(single(&i64::MAX.to_string()).value, TokenValue::Int(i64::MAX));
}

#[test]
fn a_number_ends_at_the_first_letter() {
    use TokenKind::{Eof, Identifier, Int};

    assert_eq!(kinds("12abc"), [Int, Identifier, Eof]);
}

#[test]
fn integer_overflow_is_a_warning() {
    let output = tokenize("99999999999999999999 1").unwrap();

    assert_eq!(output.tokens[0].value, TokenValue::Int(i64::MAX));
    assert_eq!(output.tokens[1].value, TokenValue::Int(1));
    assert_eq!(output.warnings,
               [LexWarning::Overflow { position: Position::new(1, 1) }]);
}

#[test]
fn long_identifiers_are_truncated_with_a_warning() {
    let name = "a".repeat(40);
    let output = tokenize(&format!("{name} b")).unwrap();
    let kept = "a".repeat(32);

    assert_eq!(output.tokens[0].identifier(), Some(kept.as_str()));
    assert_eq!(output.tokens[1].identifier(), Some("b"));
    assert_eq!(output.warnings,
               [LexWarning::LengthExceeded { kept,
                                             position: Position::new(1, 1) }]);
}

#[test]
fn an_identifier_of_exactly_the_limit_is_fine() {
    let name = "z".repeat(32);
    let output = tokenize(&name).unwrap();

    assert_eq!(output.tokens[0].identifier(), Some(name.as_str()));
    assert!(output.warnings.is_empty());
}

#[test]
fn strings_and_escapes() {
    assert_eq!(single(r#""hello world""#).value,
               TokenValue::String("hello world".into()));
    assert_eq!(single(r#""a\nb\tc\"d\\e\q""#).value,
               TokenValue::String("a\nb\tc\"d\\eq".into()));
    assert_eq!(single(r#""""#).value, TokenValue::String(String::new()));
}

#[test]
fn unterminated_strings_are_fatal() {
    assert_eq!(tokenize(r#"x "abc"#).unwrap_err(),
               LexError::UnterminatedString { position: Position::new(1, 3) });
    assert_eq!(tokenize("\"ab\ncd\"").unwrap_err(),
               LexError::UnterminatedString { position: Position::new(1, 1) });
}

#[test]
fn unexpected_characters_are_fatal() {
    assert_eq!(tokenize("1 # 2").unwrap_err(),
               LexError::UnexpectedToken { found:    '#',
                                           position: Position::new(1, 3), });
    assert_eq!(tokenize("a = b").unwrap_err(),
               LexError::UnexpectedToken { found:    '=',
                                           position: Position::new(1, 3), });
    assert_eq!(tokenize("a &").unwrap_err(),
               LexError::UnexpectedToken { found:    '&',
                                           position: Position::new(1, 3), });
}

#[test]
fn comments_run_to_the_end_of_the_line() {
    use TokenKind::{Comment, Eof, Int};

    assert_eq!(kinds("1 // ignored -> => \"\n2"), [Int, Comment, Int, Eof]);
    assert_eq!(kinds("// only a comment"), [Comment, Eof]);
}

#[test]
fn positions_are_line_and_column() {
    let tokens = tokenize("a\n  bc => d").unwrap().tokens;
    let positions: Vec<_> = tokens.iter().map(|token| token.position).collect();

    assert_eq!(positions,
               [Position::new(1, 1),
                Position::new(2, 3),
                Position::new(2, 6),
                Position::new(2, 9),
                Position::new(2, 10)]);
}

#[test]
fn eof_repeats() {
    let tokens = tokenize("").unwrap().tokens;

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn an_exhausted_lexer_keeps_returning_eof_at_the_end() {
    let mut lexer = Lexer::new("ab\n");

    assert_eq!(lexer.next_token().unwrap().token.kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token().unwrap().token;
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.position, Position::new(2, 1));
    }
}
