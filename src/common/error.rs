//! Обработка ошибок для sqllex
//!
//! Ошибки сканирования сюда не относятся: они возвращаются как токены
//! `TokenType::Error`. Этот тип покрывает конфигурацию и окружение лексера.

use thiserror::Error;

/// Основной тип ошибки для sqllex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка разбора файла конфигурации
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Ошибка сериализации конфигурации
    #[error("Configuration write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Ошибка валидации
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Тип результата для sqllex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку валидации
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
