// Методы лексического анализатора

impl Lexer {
    /// Возвращает следующий токен или `None` в конце ввода
    pub fn next_token(&mut self) -> Option<Token> {
        // Проверяем буфер lookahead
        if let Some(token) = self.peeked.take() {
            return token;
        }

        self.produce_token()
    }

    /// Возвращает следующий токен без его потребления (lookahead)
    pub fn peek_token(&mut self) -> Option<Token> {
        if let Some(token) = &self.peeked {
            return token.clone();
        }

        let token = self.produce_token();
        self.peeked = Some(token.clone());
        token
    }

    /// Возвращает все токены из входного текста.
    ///
    /// По умолчанию останавливается на первом токене ошибки и включает его последним
    /// элементом. С `stop_on_error = false` читает до конца ввода.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            let is_error = token.is_error();
            tokens.push(token);

            if is_error && self.settings.stop_on_error {
                break;
            }
        }

        log::debug!("Tokenized {} tokens, stopped at {}", tokens.len(), self.cursor.position());
        tokens
    }

    /// Текущая позиция курсора (после уже прочитанного lookahead)
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Проверяет, исчерпан ли ввод: впереди нет ни одного токена,
    /// только пробелы и комментарии. Заполняет буфер lookahead.
    pub fn is_at_end(&mut self) -> bool {
        self.peek_token().is_none()
    }

    // === Вспомогательные методы ===

    /// Пропускает пробелы и комментарии, затем читает один токен
    fn produce_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        let token = self.scan_token()?;
        if self.settings.trace_tokens {
            log::trace!("{}", token);
        }
        Some(token)
    }

    /// Определяет тип токена по первому символу и читает его
    fn scan_token(&mut self) -> Option<Token> {
        let current_char = self.cursor.peek()?;

        let token = match current_char {
            // Ключевые слова и идентификаторы
            'a'..='z' | 'A'..='Z' | '_' => Some(self.read_identifier_or_keyword()),
            '"' => self.read_quoted_identifier(),

            // Числовые литералы
            '0'..='9' => Some(self.read_number()),

            // Строковые литералы
            '\'' => self.read_string_literal(),

            // Операторы
            '=' | '<' | '>' | '!' | '+' | '-' | '*' | '/' => self.read_operator(),

            // Разделители
            '(' => Some(self.read_single_char_token(TokenType::LeftParen)),
            ')' => Some(self.read_single_char_token(TokenType::RightParen)),
            ',' => Some(self.read_single_char_token(TokenType::Comma)),
            ';' => Some(self.read_single_char_token(TokenType::Semicolon)),
            '.' => Some(self.read_single_char_token(TokenType::Dot)),

            _ => None,
        };

        Some(token.unwrap_or_else(|| self.read_unexpected_character(current_char)))
    }

    /// Пропускает пробелы и комментарии, пока они идут подряд
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            let start = self.cursor.position().offset;

            self.skip_whitespace();
            self.skip_line_comment();
            self.skip_block_comment();

            if self.cursor.position().offset == start {
                break;
            }
        }
    }

    /// Пропускает пробел, табуляцию, возврат каретки и перевод строки
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.cursor.peek() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    /// Пропускает однострочный комментарий `--` (перевод строки не потребляется)
    pub(crate) fn skip_line_comment(&mut self) {
        if self.cursor.starts_with("--") {
            self.cursor.consume_while(|ch| ch != '\n');
        }
    }

    /// Пропускает многострочный комментарий `/* ... */`.
    /// Незакрытый комментарий не пропускается.
    pub(crate) fn skip_block_comment(&mut self) {
        if !self.cursor.starts_with("/*") {
            return;
        }

        if let Some(end) = self.cursor.find_from(2, "*/") {
            self.cursor.consume(end + 2);
        }
    }

    /// Читает токен из одного символа
    pub(crate) fn read_single_char_token(&mut self, token_type: TokenType) -> Token {
        let start_position = self.cursor.position();
        let text = self.cursor.consume(1);
        Token::new(token_type, text, start_position)
    }

    /// Читает токен из двух символов
    pub(crate) fn read_two_char_token(&mut self, token_type: TokenType) -> Token {
        let start_position = self.cursor.position();
        let text = self.cursor.consume(2);
        Token::new(token_type, text, start_position)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
