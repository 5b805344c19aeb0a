//! Токены для SQL лексера sqllex
//!
//! Определяет все типы токенов, которые может распознать лексический анализатор:
//! ключевые слова SQL, идентификаторы, литералы, операторы и разделители.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Номер строки (с 1)
    pub line: usize,
    /// Номер колонки (с 1)
    pub column: usize,
    /// Смещение в символах от начала текста (с 0)
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Значение токена: текст лексемы или декодированный литерал
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenValue {
    /// Текст (ключевые слова, идентификаторы, строки, операторы, сообщения об ошибках)
    Text(String),
    /// Целое число (цифры без знака, минус читается отдельным оператором)
    Integer(i128),
    /// Число с плавающей точкой
    Float(f64),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self {
            TokenValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            TokenValue::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(text.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue::Text(text)
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        TokenValue::Integer(i128::from(value))
    }
}

impl From<i128> for TokenValue {
    fn from(value: i128) -> Self {
        TokenValue::Integer(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Float(value)
    }
}

/// Токен с позицией и значением
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: TokenValue,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<TokenValue>, position: Position) -> Self {
        Self {
            token_type,
            value: value.into(),
            position,
        }
    }

    /// Токен ошибки с сообщением
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self::new(TokenType::Error, TokenValue::Text(message.into()), position)
    }

    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::Error
    }

    /// Текстовое значение токена, если оно есть
    pub fn text(&self) -> Option<&str> {
        self.value.as_text()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.token_type, self.value, self.position)
    }
}

/// Типы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // === Ключевые слова SQL ===
    // DML
    Select,
    From,
    Where,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // DDL
    Create,
    Table,
    Drop,
    Alter,
    Add,
    Primary,
    Key,

    // Типы данных
    Integer,
    Varchar,

    // Логические операторы
    And,
    Or,
    Not,
    Null,

    // === Идентификаторы и литералы ===
    /// Идентификатор (имя таблицы, колонки, etc.)
    Identifier,

    /// Целое число
    IntegerLiteral,

    /// Число с плавающей точкой
    FloatLiteral,

    /// Строковый литерал
    StringLiteral,

    // === Операторы ===
    // Сравнения
    Equal,        // =
    NotEqual,     // <> или !=
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=

    // Арифметические
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /

    // === Разделители ===
    LeftParen,  // (
    RightParen, // )
    Comma,      // ,
    Semicolon,  // ;
    Dot,        // .

    /// Неожиданный символ (ошибка)
    Error,
}

impl TokenType {
    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Select
                | TokenType::From
                | TokenType::Where
                | TokenType::Insert
                | TokenType::Into
                | TokenType::Values
                | TokenType::Update
                | TokenType::Set
                | TokenType::Delete
                | TokenType::Create
                | TokenType::Table
                | TokenType::Drop
                | TokenType::Alter
                | TokenType::Add
                | TokenType::Primary
                | TokenType::Key
                | TokenType::Integer
                | TokenType::Varchar
                | TokenType::And
                | TokenType::Or
                | TokenType::Not
                | TokenType::Null
        )
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenType::IntegerLiteral | TokenType::FloatLiteral | TokenType::StringLiteral
        )
    }

    /// Проверяет, является ли токен оператором
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Equal
                | TokenType::NotEqual
                | TokenType::Less
                | TokenType::Greater
                | TokenType::LessEqual
                | TokenType::GreaterEqual
                | TokenType::Plus
                | TokenType::Minus
                | TokenType::Multiply
                | TokenType::Divide
        )
    }

    /// Проверяет, является ли токен разделителем
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenType::LeftParen
                | TokenType::RightParen
                | TokenType::Comma
                | TokenType::Semicolon
                | TokenType::Dot
        )
    }

    /// Ищет ключевое слово без учета регистра
    pub fn from_keyword(word: &str) -> Option<TokenType> {
        KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Select => "SELECT",
            TokenType::From => "FROM",
            TokenType::Where => "WHERE",
            TokenType::Insert => "INSERT",
            TokenType::Into => "INTO",
            TokenType::Values => "VALUES",
            TokenType::Update => "UPDATE",
            TokenType::Set => "SET",
            TokenType::Delete => "DELETE",
            TokenType::Create => "CREATE",
            TokenType::Table => "TABLE",
            TokenType::Drop => "DROP",
            TokenType::Alter => "ALTER",
            TokenType::Add => "ADD",
            TokenType::Primary => "PRIMARY",
            TokenType::Key => "KEY",
            TokenType::Integer => "INTEGER",
            TokenType::Varchar => "VARCHAR",
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::Not => "NOT",
            TokenType::Null => "NULL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::IntegerLiteral => "INTEGER_LITERAL",
            TokenType::FloatLiteral => "FLOAT",
            TokenType::StringLiteral => "STRING",
            TokenType::Equal => "EQUALS",
            TokenType::NotEqual => "NOT_EQUAL",
            TokenType::Less => "LESS_THAN",
            TokenType::Greater => "GREATER_THAN",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Multiply => "MULTIPLY",
            TokenType::Divide => "DIVIDE",
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::Comma => "COMMA",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Dot => "DOT",
            TokenType::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

lazy_static! {
    /// Карта ключевых слов для быстрого поиска (ключи в верхнем регистре)
    static ref KEYWORDS: HashMap<&'static str, TokenType> = keyword_map();
}

/// Список всех ключевых слов в каноническом написании
pub const KEYWORD_LIST: [&str; 22] = [
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE",
    "TABLE", "DROP", "ALTER", "ADD", "PRIMARY", "KEY", "INTEGER", "VARCHAR", "AND", "OR", "NOT",
    "NULL",
];

/// Карта ключевых слов
pub fn keyword_map() -> HashMap<&'static str, TokenType> {
    let mut map = HashMap::new();

    // DML
    map.insert("SELECT", TokenType::Select);
    map.insert("FROM", TokenType::From);
    map.insert("WHERE", TokenType::Where);
    map.insert("INSERT", TokenType::Insert);
    map.insert("INTO", TokenType::Into);
    map.insert("VALUES", TokenType::Values);
    map.insert("UPDATE", TokenType::Update);
    map.insert("SET", TokenType::Set);
    map.insert("DELETE", TokenType::Delete);

    // DDL
    map.insert("CREATE", TokenType::Create);
    map.insert("TABLE", TokenType::Table);
    map.insert("DROP", TokenType::Drop);
    map.insert("ALTER", TokenType::Alter);
    map.insert("ADD", TokenType::Add);
    map.insert("PRIMARY", TokenType::Primary);
    map.insert("KEY", TokenType::Key);

    // Типы данных
    map.insert("INTEGER", TokenType::Integer);
    map.insert("VARCHAR", TokenType::Varchar);

    // Логические операторы
    map.insert("AND", TokenType::And);
    map.insert("OR", TokenType::Or);
    map.insert("NOT", TokenType::Not);
    map.insert("NULL", TokenType::Null);

    map
}
