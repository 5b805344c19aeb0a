//! Конфигурация для sqllex
//!
//! Настройки лексера и логирования, загрузка из TOML файла и переменных окружения

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Префикс переменных окружения
pub const ENV_PREFIX: &str = "SQLLEX_";

/// Настройки лексического анализатора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerSettings {
    /// Останавливать `tokenize` на первом токене ошибки
    pub stop_on_error: bool,
    /// Максимальная длина входа в символах
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_input_length: Option<usize>,
    /// Логировать каждый прочитанный токен на уровне trace
    pub trace_tokens: bool,
}

impl Default for LexerSettings {
    fn default() -> Self {
        Self {
            stop_on_error: true,
            max_input_length: None,
            trace_tokens: false,
        }
    }
}

impl LexerSettings {
    /// Валидирует настройки
    pub fn validate(&self) -> Result<()> {
        if self.max_input_length == Some(0) {
            return Err(Error::configuration(
                "max_input_length must be greater than 0",
            ));
        }
        Ok(())
    }

    fn merge(mut self, other: Self) -> Self {
        if !other.stop_on_error {
            self.stop_on_error = other.stop_on_error;
        }
        if other.max_input_length.is_some() {
            self.max_input_length = other.max_input_length;
        }
        if other.trace_tokens {
            self.trace_tokens = other.trace_tokens;
        }
        self
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования (off, error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Уровень логирования в виде фильтра `log`
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level)
            .map_err(|_| Error::configuration(format!("Unknown log level: {}", self.level)))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.level != "info" {
            self.level = other.level;
        }
        self
    }
}

/// Полная конфигурация токенизатора
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub lexer: LexerSettings,
    pub logging: LoggingConfig,
}

impl TokenizerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Разбирает конфигурацию из TOML строки
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TokenizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Загружает конфигурацию через произвольный источник переменных
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = TokenizerConfig::default();
        let var = |name: &str| lookup(format!("{}{}", ENV_PREFIX, name).as_str());

        if let Some(value) = var("STOP_ON_ERROR") {
            config.lexer.stop_on_error = parse_env("STOP_ON_ERROR", &value)?;
        }

        if let Some(value) = var("MAX_INPUT_LENGTH") {
            config.lexer.max_input_length = Some(parse_env("MAX_INPUT_LENGTH", &value)?);
        }

        if let Some(value) = var("TRACE_TOKENS") {
            config.lexer.trace_tokens = parse_env("TRACE_TOKENS", &value)?;
        }

        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Объединяет конфигурацию с другой
    pub fn merge(mut self, other: Self) -> Self {
        self.lexer = self.lexer.merge(other.lexer);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        self.lexer.validate()?;
        self.logging.level_filter()?;
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        Error::configuration(format!(
            "Invalid value for {}{}: {}",
            ENV_PREFIX, name, value
        ))
    })
}
