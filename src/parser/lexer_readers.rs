// Методы чтения отдельных видов токенов для лексического анализатора

impl Lexer {
    /// Читает идентификатор или ключевое слово.
    ///
    /// Диапазон `[A-Za-z_][A-Za-z0-9_]*` читается один раз, после чего по таблице
    /// ключевых слов решается, какой это токен. Возврат курсора не нужен.
    pub(crate) fn read_identifier_or_keyword(&mut self) -> Token {
        let start_position = self.cursor.position();
        let value = self
            .cursor
            .consume_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');

        match TokenType::from_keyword(&value) {
            Some(keyword_type) => {
                Token::new(keyword_type, value.to_ascii_uppercase(), start_position)
            }
            None => Token::new(TokenType::Identifier, value, start_position),
        }
    }

    /// Читает идентификатор в двойных кавычках (кавычки в значение не входят)
    pub(crate) fn read_quoted_identifier(&mut self) -> Option<Token> {
        let start_position = self.cursor.position();
        let value = self.read_quoted('"')?;
        Some(Token::new(TokenType::Identifier, value, start_position))
    }

    /// Читает строковый литерал в одинарных кавычках (кавычки в значение не входят)
    pub(crate) fn read_string_literal(&mut self) -> Option<Token> {
        let start_position = self.cursor.position();
        let value = self.read_quoted('\'')?;
        Some(Token::new(TokenType::StringLiteral, value, start_position))
    }

    /// Читает текст между парными кавычками без экранирования.
    /// Если закрывающей кавычки нет, ничего не потребляет.
    fn read_quoted(&mut self, quote_char: char) -> Option<String> {
        let end = self.cursor.find_from(1, &quote_char.to_string())?;

        self.cursor.advance();
        let value = self.cursor.consume(end - 1);
        self.cursor.advance();

        Some(value)
    }

    /// Читает числовой литерал: целое или число с плавающей точкой.
    ///
    /// Точка входит в число только если за ней следует цифра, поэтому `123.45`
    /// всегда один токен, а `123.` это целое и точка.
    pub(crate) fn read_number(&mut self) -> Token {
        let start_position = self.cursor.position();
        let integer_part = self.cursor.consume_while(|ch| ch.is_ascii_digit());

        let is_float = self.cursor.peek() == Some('.')
            && self
                .cursor
                .peek_ahead(1)
                .is_some_and(|ch| ch.is_ascii_digit());

        if is_float {
            self.cursor.advance();
            let fraction = self.cursor.consume_while(|ch| ch.is_ascii_digit());
            let text = format!("{}.{}", integer_part, fraction);

            // для строки из цифр parse не падает, но слишком большое число дает inf
            return match text.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Token::new(TokenType::FloatLiteral, value, start_position)
                }
                _ => self.literal_error("Float literal out of range", &text, start_position),
            };
        }

        match integer_part.parse::<i128>() {
            Ok(value) => Token::new(TokenType::IntegerLiteral, value, start_position),
            Err(_) => {
                self.literal_error("Integer literal out of range", &integer_part, start_position)
            }
        }
    }

    /// Читает оператор, предпочитая двухсимвольные варианты
    pub(crate) fn read_operator(&mut self) -> Option<Token> {
        let first = self.cursor.peek()?;
        let second = self.cursor.peek_ahead(1);

        let two_char_type = match (first, second) {
            ('<', Some('=')) => Some(TokenType::LessEqual),
            ('>', Some('=')) => Some(TokenType::GreaterEqual),
            ('<', Some('>')) | ('!', Some('=')) => Some(TokenType::NotEqual),
            _ => None,
        };

        if let Some(token_type) = two_char_type {
            return Some(self.read_two_char_token(token_type));
        }

        let token_type = match first {
            '=' => TokenType::Equal,
            '<' => TokenType::Less,
            '>' => TokenType::Greater,
            '+' => TokenType::Plus,
            '-' => TokenType::Minus,
            '*' => TokenType::Multiply,
            '/' => TokenType::Divide,
            // одиночный '!' не является оператором
            _ => return None,
        };

        Some(self.read_single_char_token(token_type))
    }

    /// Потребляет нераспознанный символ и возвращает токен ошибки
    pub(crate) fn read_unexpected_character(&mut self, unexpected: char) -> Token {
        let start_position = self.cursor.position();
        self.cursor.advance();

        let message = format!("Unexpected character: '{}'", unexpected);
        log::debug!("{} at {}", message, start_position);
        Token::error(message, start_position)
    }

    fn literal_error(&self, reason: &str, literal: &str, position: Position) -> Token {
        let message = format!("{}: {}", reason, literal);
        log::debug!("{} at {}", message, position);
        Token::error(message, position)
    }
}
