/// Token-stream helpers.
///
/// Low-level primitives shared by every production:
/// - looking at tokens (`current`, `check_*`)
/// - consuming expected tokens (`consume`, `consume_keyword`, `consume_punct`, `consume_op`)
/// - building errors (`error`, `unexpected`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn current(&mut self) -> Token {
        self.lexer.current()
    }

    /// Consume the current token and return it.
    fn advance(&mut self) -> Token {
        self.lexer.consume()
    }

    fn check(&mut self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn check_keyword(&mut self, id: KeywordId) -> bool {
        self.current().kind.is_keyword(id)
    }

    fn check_punct(&mut self, id: PunctuationId) -> bool {
        self.current().kind.is_punctuation(id)
    }

    /// Consume the current token if it is `kind`, otherwise fail with "unexpected token X expected Y".
    fn consume(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind))
        }
    }

    fn consume_keyword(&mut self, id: KeywordId) -> ParseResult<Token> {
        self.consume(TokenKind::Keyword(id))
    }

    fn consume_punct(&mut self, id: PunctuationId) -> ParseResult<Token> {
        self.consume(TokenKind::Punctuation(id))
    }

    fn consume_op(&mut self, id: OperatorId) -> ParseResult<Token> {
        self.consume(TokenKind::Operator(id))
    }

    fn error(&self, message: impl Into<String>, range: SourceRange) -> ParseError {
        ParseError::new(message, range, self.text)
    }

    fn unexpected(&mut self, expected: TokenKind) -> ParseError {
        let found = self.current();
        self.error(format!("unexpected token {} expected {}", found.kind, expected), found.range)
    }

    /// Run `parse` one nesting level deeper, failing instead of recursing past [`MAX_NESTING`].
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            let range = self.current().range;
            return Err(self.error("expression nested too deeply", range));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Return `true` if the current token can begin a statement.
    fn is_at_stmt_start(&mut self) -> bool {
        let kind = self.current().kind;
        kind.is_statement_keyword() || Rule::for_kind(kind).starts_expr()
    }

    /// `identifier`, interned into the source context.
    fn identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.consume(TokenKind::Ident)?;
        let symbol = self.interner.intern(token.literal(self.text));
        Ok(Identifier::new(token.range, symbol))
    }

    /// `identifier (',' identifier)*`
    fn identifiers(&mut self) -> ParseResult<Vec<Identifier>> {
        if !self.check(TokenKind::Ident) {
            let range = self.current().range;
            return Err(self.error("expected identifier", range));
        }
        let mut identifiers = vec![self.identifier()?];
        while self.check_punct(PunctuationId::Comma) {
            self.advance();
            identifiers.push(self.identifier()?);
        }
        Ok(identifiers)
    }
}
