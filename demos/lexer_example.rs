//! Пример использования лексического анализатора sqllex

use sqllex::common::init_logging;
use sqllex::{Lexer, TokenType, TokenizerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TokenizerConfig::from_env()?;
    init_logging(&config.logging)?;

    println!("Демонстрация лексического анализатора sqllex\n");

    // 1. Базовый запрос
    show_tokens("SELECT id, name FROM users WHERE age > 18;");

    // 2. Комментарии и позиции
    show_tokens("-- список таблиц\nCREATE TABLE \"Order Items\" (\n  id INTEGER PRIMARY KEY\n);");

    // 3. Ошибка как токен
    show_tokens("SELECT @ FROM table");

    // 4. Потоковое чтение с lookahead
    let mut lexer = Lexer::with_settings("UPDATE t SET x = 2.5 WHERE y != 'z'", config.lexer)?;
    println!("Операторы:");
    while let Some(token) = lexer.next_token() {
        if token.token_type.is_operator() {
            let next = lexer.peek_token();
            println!(
                "   {} перед {}",
                token,
                next.map(|t| t.token_type.to_string())
                    .unwrap_or_else(|| "концом ввода".to_string())
            );
        }
    }

    Ok(())
}

fn show_tokens(sql: &str) {
    println!("{}", sql);
    for token in Lexer::new(sql).tokenize() {
        if token.token_type == TokenType::Error {
            println!("   ошибка: {} в {}", token.value, token.position);
        } else {
            println!("   {}", token);
        }
    }
    println!();
}
