//! Общие типы и утилиты для sqllex

pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use config::*;
pub use error::{Error, Result};
pub use logging::init_logging;
