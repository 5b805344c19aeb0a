//! Общие утилиты для тестирования

use crate::parser::{Lexer, Token, TokenType, TokenValue};

/// Включает логирование в тестах (вывод перехватывается тестовым раннером)
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// Разбивает текст на токены с настройками по умолчанию
pub fn lex(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Типы токенов для входного текста
pub fn token_types(input: &str) -> Vec<TokenType> {
    lex(input).iter().map(|token| token.token_type).collect()
}

/// Проверяет, что вход дает ровно один токен с заданным типом и значением
pub fn assert_single_token(input: &str, token_type: TokenType, value: impl Into<TokenValue>) {
    let expected: TokenValue = value.into();
    let tokens = lex(input);
    assert_eq!(tokens.len(), 1, "expected one token for {:?}, got {:?}", input, tokens);
    assert_eq!(tokens[0].token_type, token_type, "input {:?}", input);
    assert_eq!(tokens[0].value, expected, "input {:?}", input);
}

/// Генератор тестовых SQL запросов
pub struct QueryGenerator {
    counter: usize,
}

impl QueryGenerator {
    /// Создаёт новый генератор
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Генерирует тестовое имя таблицы
    pub fn table_name(&mut self) -> String {
        self.counter += 1;
        format!("test_table_{}", self.counter)
    }

    /// Генерирует многострочный скрипт из `statements` запросов
    pub fn script(&mut self, statements: usize) -> String {
        (0..statements)
            .map(|i| {
                let table = self.table_name();
                format!(
                    "-- statement {}\nINSERT INTO {} VALUES ({}, {}.5, 'row {}');\n/* done */\n",
                    i, table, i, i, i
                )
            })
            .collect()
    }
}

impl Default for QueryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
