//! Инициализация логирования для sqllex
//!
//! Лексер пишет через макросы `log`; бэкендом служит `env_logger`.
//! Переменная `RUST_LOG`, если задана, имеет приоритет над уровнем из конфигурации.

use crate::common::{LoggingConfig, Result};

/// Инициализирует глобальный логгер. Повторный вызов ничего не делает.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = config.level_filter()?;

    let env = env_logger::Env::default().default_filter_or(level.to_string());
    let initialized = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_ok();

    if initialized {
        log::debug!("Logging initialized at level {}", level);
    }
    Ok(())
}
