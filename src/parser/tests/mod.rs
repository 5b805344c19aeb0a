//! Тесты лексического анализа

pub mod token_tests;
