//! Лексический анализатор SQL для sqllex
//!
//! Преобразует входной SQL текст в последовательность токенов. Пробелы и комментарии
//! пропускаются, нераспознанный символ возвращается как токен ошибки, а не как `Err`,
//! чтобы вызывающий код мог увидеть все токены, прочитанные до сбоя.

use crate::common::{Error, LexerSettings, Result};
use crate::parser::cursor::Cursor;
use crate::parser::token::{Position, Token, TokenType};

/// Лексический анализатор SQL
pub struct Lexer {
    /// Курсор по исходному тексту
    cursor: Cursor,
    /// Настройки лексера
    settings: LexerSettings,
    /// Буфер для lookahead: `Some(None)` означает, что впереди конец ввода
    peeked: Option<Option<Token>>,
}

impl Lexer {
    /// Создает лексический анализатор с настройками по умолчанию
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
            settings: LexerSettings::default(),
            peeked: None,
        }
    }

    /// Создает лексический анализатор с заданными настройками
    pub fn with_settings(input: &str, settings: LexerSettings) -> Result<Self> {
        settings.validate()?;

        let cursor = Cursor::new(input);
        if let Some(limit) = settings.max_input_length {
            if cursor.len() > limit {
                return Err(Error::validation(format!(
                    "Input length {} exceeds the limit of {} characters",
                    cursor.len(),
                    limit
                )));
            }
        }

        Ok(Self {
            cursor,
            settings,
            peeked: None,
        })
    }

    pub fn settings(&self) -> &LexerSettings {
        &self.settings
    }
}

// Подключаем методы из отдельных файлов
include!("lexer_methods.rs");
include!("lexer_readers.rs");
