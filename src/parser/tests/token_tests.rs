//! Тесты для типов токенов

use crate::parser::token::{keyword_map, KEYWORD_LIST};
use crate::parser::{Position, Token, TokenType, TokenValue};

#[test]
fn test_keyword_lookup_is_case_insensitive() {
    assert_eq!(TokenType::from_keyword("select"), Some(TokenType::Select));
    assert_eq!(TokenType::from_keyword("Varchar"), Some(TokenType::Varchar));
    assert_eq!(TokenType::from_keyword("nUlL"), Some(TokenType::Null));
    assert_eq!(TokenType::from_keyword("users"), None);
    assert_eq!(TokenType::from_keyword(""), None);
}

#[test]
fn test_keyword_list_matches_map() {
    let map = keyword_map();
    assert_eq!(map.len(), KEYWORD_LIST.len());

    for keyword in KEYWORD_LIST {
        let token_type = map[keyword];
        assert!(token_type.is_keyword());
        // каноническое написание совпадает с Display
        assert_eq!(token_type.to_string(), keyword);
    }
}

#[test]
fn test_token_type_categories() {
    assert!(TokenType::Select.is_keyword());
    assert!(!TokenType::Identifier.is_keyword());

    assert!(TokenType::IntegerLiteral.is_literal());
    assert!(TokenType::FloatLiteral.is_literal());
    assert!(TokenType::StringLiteral.is_literal());
    assert!(!TokenType::Integer.is_literal());

    assert!(TokenType::NotEqual.is_operator());
    assert!(TokenType::Divide.is_operator());
    assert!(!TokenType::Dot.is_operator());

    assert!(TokenType::Dot.is_delimiter());
    assert!(TokenType::Semicolon.is_delimiter());
    assert!(!TokenType::Error.is_delimiter());
}

#[test]
fn test_token_display() {
    let token = Token::new(TokenType::Greater, ">", Position::new(1, 30, 29));
    assert_eq!(token.to_string(), "GREATER_THAN('>') at 1:30");

    let number = Token::new(TokenType::IntegerLiteral, 18i64, Position::new(2, 4, 10));
    assert_eq!(number.to_string(), "INTEGER_LITERAL('18') at 2:4");
}

#[test]
fn test_token_value_accessors() {
    assert_eq!(TokenValue::from("id").as_text(), Some("id"));
    assert_eq!(TokenValue::Integer(7).as_integer(), Some(7));
    assert_eq!(TokenValue::Float(1.5).as_float(), Some(1.5));
    assert_eq!(TokenValue::Integer(7).as_text(), None);
    assert_eq!(TokenValue::from("x").as_float(), None);
}

#[test]
fn test_error_token() {
    let token = Token::error("Unexpected character: '@'", Position::new(1, 8, 7));

    assert!(token.is_error());
    assert_eq!(token.token_type, TokenType::Error);
    assert_eq!(token.text(), Some("Unexpected character: '@'"));
}

#[test]
fn test_position_start() {
    assert_eq!(Position::start(), Position::new(1, 1, 0));
    assert_eq!(Position::default(), Position::start());
    assert_eq!(Position::new(3, 14, 40).to_string(), "3:14");
}

#[test]
fn test_token_serde_round_trip() {
    let tokens = vec![
        Token::new(TokenType::Select, "SELECT", Position::start()),
        Token::new(TokenType::FloatLiteral, 2.5, Position::new(1, 8, 7)),
        Token::error("Unexpected character: '@'", Position::new(1, 12, 11)),
    ];

    let json = serde_json::to_string(&tokens).unwrap();
    let decoded: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, tokens);
}
