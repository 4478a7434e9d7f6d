/// Declaration parsing: functions and structs.
///
/// ## Notes
/// - A function signature's range runs from `fn` through its return type, or through `)` without one.
/// - Parameter and field lists share the same grouping grammar: `a, b: i32, c: str`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `decl = function-decl | struct-decl`
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_decl(&mut self) -> ParseResult<Spanned<Decl>> {
        let token = self.current();
        match token.kind {
            TokenKind::Keyword(KeywordId::Fn) => self.function_decl(),
            TokenKind::Keyword(KeywordId::Struct) => self.struct_decl(),
            _ => Err(self.error("expected declaration", token.range)),
        }
    }

    /// `'fn' identifier '(' params ')' (':' type)? block`
    fn function_decl(&mut self) -> ParseResult<Spanned<Decl>> {
        let signature = self.function_signature()?;
        let block = self.parse_block()?;
        let range = signature.range + block.range;
        Ok(Spanned::new(Decl::Function(FunctionDecl { signature, block }), range))
    }

    fn function_signature(&mut self) -> ParseResult<Spanned<FunctionSignature>> {
        let start = self.consume_keyword(KeywordId::Fn)?;
        let identifier = self.identifier()?;
        self.consume_punct(PunctuationId::LParen)?;
        let params = self.param_groups()?;
        let mut range = start.range + self.consume_punct(PunctuationId::RParen)?.range;

        let return_type = if self.check_punct(PunctuationId::Colon) {
            self.advance();
            let ty = self.parse_type()?;
            range += ty.range;
            Some(ty)
        } else {
            None
        };

        Ok(Spanned::new(
            FunctionSignature {
                identifier,
                params,
                return_type,
            },
            range,
        ))
    }

    /// `'struct' identifier '{' fields '}'`
    fn struct_decl(&mut self) -> ParseResult<Spanned<Decl>> {
        let start = self.consume_keyword(KeywordId::Struct)?;
        let identifier = self.identifier()?;
        self.consume_punct(PunctuationId::LBrace)?;
        let fields = self.param_groups()?;
        let end = self.consume_punct(PunctuationId::RBrace)?;
        Ok(Spanned::new(
            Decl::Struct(StructDecl { identifier, fields }),
            start.range + end.range,
        ))
    }

    /// `(group (',' group)*)?`; empty unless the list starts with an identifier.
    fn param_groups(&mut self) -> ParseResult<Vec<Spanned<Param>>> {
        let mut groups = Vec::new();
        if !self.check(TokenKind::Ident) {
            return Ok(groups);
        }
        groups.push(self.param_group()?);
        while self.check_punct(PunctuationId::Comma) {
            self.advance();
            groups.push(self.param_group()?);
        }
        Ok(groups)
    }

    /// `identifier-list ':' type`
    fn param_group(&mut self) -> ParseResult<Spanned<Param>> {
        let identifiers = self.identifiers()?;
        self.consume_punct(PunctuationId::Colon)?;
        let ty = self.parse_type()?;
        let range = identifiers
            .first()
            .map_or(ty.range, |first| first.range + ty.range);
        Ok(Spanned::new(Param { identifiers, ty }, range))
    }
}
