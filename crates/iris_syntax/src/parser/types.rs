/// Type parsing.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// `type = basic-type | name-type | '[' type ',' int-literal ']'`
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_type(&mut self) -> ParseResult<Spanned<Type>> {
        self.nested(Self::type_at_current)
    }

    fn type_at_current(&mut self) -> ParseResult<Spanned<Type>> {
        let token = self.current();
        match token.kind {
            TokenKind::Type(id) => {
                self.advance();
                Ok(Spanned::new(Type::Basic(BasicTypeKind::from(id)), token.range))
            }
            TokenKind::Ident => {
                let identifier = self.identifier()?;
                Ok(Spanned::new(Type::Name(identifier), identifier.range))
            }
            TokenKind::Punctuation(PunctuationId::LBracket) => self.array_type(),
            _ => Err(self.error("expected type", token.range)),
        }
    }

    /// `'[' type ',' int-literal ']'`
    fn array_type(&mut self) -> ParseResult<Spanned<Type>> {
        let start = self.consume_punct(PunctuationId::LBracket)?;
        let element = self.parse_type()?;
        self.consume_punct(PunctuationId::Comma)?;
        let count = self.consume(TokenKind::Int)?;
        let size = count
            .literal(self.text)
            .parse::<usize>()
            .map_err(|_| self.error("array size out of range", count.range))?;
        let end = self.consume_punct(PunctuationId::RBracket)?;
        Ok(Spanned::new(Type::Array(Box::new(element), size), start.range + end.range))
    }
}
