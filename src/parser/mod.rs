//! Лексический анализ SQL для sqllex

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Position, Token, TokenType, TokenValue};
