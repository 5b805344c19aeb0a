//! Курсор по исходному тексту
//!
//! Хранит входные символы, индекс текущего символа и позицию (строка, колонка,
//! смещение). Позиция обновляется при каждом потреблении символа: перевод строки
//! увеличивает номер строки и сбрасывает колонку в 1, любой другой символ
//! сдвигает колонку на единицу.

use crate::parser::token::Position;

/// Курсор лексического анализатора
#[derive(Debug, Clone)]
pub struct Cursor {
    /// Исходный текст
    input: Vec<char>,
    /// Индекс текущего символа
    index: usize,
    /// Позиция текущего символа
    position: Position,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            index: 0,
            position: Position::start(),
        }
    }

    /// Текущая позиция
    pub fn position(&self) -> Position {
        self.position
    }

    /// Длина входа в символах
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    /// Текущий символ без продвижения
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.index).copied()
    }

    /// Символ на расстоянии `offset` от текущего
    pub fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.index + offset).copied()
    }

    /// Проверяет, начинается ли остаток входа с `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(i, ch)| self.peek_ahead(i) == Some(ch))
    }

    /// Ищет `pattern` начиная со смещения `from` относительно текущего символа.
    /// Возвращает смещение начала совпадения.
    pub fn find_from(&self, from: usize, pattern: &str) -> Option<usize> {
        let needle: Vec<char> = pattern.chars().collect();
        let start = self.index + from;
        if needle.is_empty() || start > self.input.len() {
            return None;
        }
        self.input[start..]
            .windows(needle.len())
            .position(|window| window == needle.as_slice())
            .map(|found| from + found)
    }

    /// Возвращает текущий символ и продвигает позицию
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += 1;

        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        self.position.offset += 1;

        Some(ch)
    }

    /// Потребляет `count` символов и возвращает их как строку
    pub fn consume(&mut self, count: usize) -> String {
        let mut text = String::with_capacity(count);
        for _ in 0..count {
            match self.advance() {
                Some(ch) => text.push(ch),
                None => break,
            }
        }
        text
    }

    /// Потребляет символы, пока выполняется предикат
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
            text.push(ch);
        }
        text
    }
}
