//! Интеграционные тесты sqllex
//!
//! Проверяют публичный API: загрузку конфигурации, создание лексера и разбор скриптов

use sqllex::common::{init_logging, LoggingConfig};
use sqllex::{tokenize, Error, Lexer, Position, TokenType, TokenValue, TokenizerConfig};
use tempfile::TempDir;

/// Восстанавливает исходный текст из позиций токенов и проверяет, что между
/// токенами лежат только пробелы и комментарии
#[test]
fn test_tokens_cover_input_in_order() {
    let sql = "SELECT a, b -- pick\nFROM t /* x */ WHERE a <= 10;";
    let tokens = tokenize(sql);

    let offsets: Vec<usize> = tokens.iter().map(|t| t.position.offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);

    let chars: Vec<char> = sql.chars().collect();
    let gap: String = chars[tokens[3].position.offset..tokens[4].position.offset]
        .iter()
        .collect();
    // между "b" и "FROM"
    assert_eq!(tokens[3].token_type, TokenType::Identifier);
    assert_eq!(tokens[4].token_type, TokenType::From);
    assert_eq!(gap, "b -- pick\n");
}

#[test]
fn test_create_table_script() {
    let sql = r#"
CREATE TABLE "Order Items" (
    id INTEGER PRIMARY KEY,
    title VARCHAR(100) NOT NULL,
    price INTEGER
);
INSERT INTO "Order Items" VALUES (1, 'Lamp', 25);
"#;

    let tokens = tokenize(sql);
    assert!(tokens.iter().all(|t| !t.is_error()));

    assert_eq!(tokens[0].token_type, TokenType::Create);
    assert_eq!(tokens[0].position, Position::new(2, 1, 1));
    assert_eq!(tokens[2].value, TokenValue::from("Order Items"));

    let id = tokens.iter().find(|t| t.text() == Some("id")).unwrap();
    assert_eq!(id.position.line, 3);
    assert_eq!(id.position.column, 5);

    let insert = tokens
        .iter()
        .position(|t| t.token_type == TokenType::Insert)
        .unwrap();
    assert_eq!(tokens[insert].position.line, 7);

    let last = tokens.last().unwrap();
    assert_eq!(last.token_type, TokenType::Semicolon);
}

#[test]
fn test_error_stops_batch_but_keeps_prefix() {
    let tokens = tokenize("UPDATE t SET a = 1 WHERE b = $1");

    assert_eq!(tokens.len(), 10);
    let error = tokens.last().unwrap();
    assert!(error.is_error());
    assert_eq!(error.text(), Some("Unexpected character: '$'"));
    assert_eq!(error.position.column, 30);
}

#[test]
fn test_config_file_drives_lexer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sqllex.toml");

    let mut config = TokenizerConfig::default();
    config.lexer.stop_on_error = false;
    config.lexer.max_input_length = Some(64);
    config.logging.level = "debug".to_string();
    config.to_file(&path).unwrap();

    let loaded = TokenizerConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
    init_logging(&loaded.logging).unwrap();

    let mut lexer = Lexer::with_settings("a @ b ? c", loaded.lexer.clone()).unwrap();
    let tokens = lexer.tokenize();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens.iter().filter(|t| t.is_error()).count(), 2);

    let too_long = "x".repeat(65);
    assert!(matches!(
        Lexer::with_settings(&too_long, loaded.lexer),
        Err(Error::Validation { .. })
    ));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = TokenizerConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_init_logging_with_default_config() {
    assert!(init_logging(&LoggingConfig::default()).is_ok());
}

#[test]
fn test_identical_input_identical_output() {
    let sql = "SELECT * FROM t WHERE x <> 'y' OR z != 2.75";
    assert_eq!(tokenize(sql), tokenize(sql));
    assert_eq!(tokenize(sql), Lexer::new(sql).collect::<Vec<_>>());
}
