//! sqllex - лексический анализатор SQL на Rust
//!
//! Преобразует исходный текст SQL в последовательность классифицированных токенов
//! с позициями (строка, колонка). Некорректный ввод возвращается как токен ошибки,
//! разбор потока при этом не прерывается.
//!
//! ```
//! use sqllex::parser::{Lexer, TokenType};
//!
//! let tokens = Lexer::new("SELECT id FROM users").tokenize();
//! assert_eq!(tokens[0].token_type, TokenType::Select);
//! assert_eq!(tokens.len(), 4);
//! ```

pub mod common;
pub mod parser;

pub use common::error::{Error, Result};
pub use common::{LexerSettings, TokenizerConfig};
pub use parser::{Lexer, Position, Token, TokenType, TokenValue};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Разбивает текст на токены с настройками по умолчанию
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
