/// Statement and block parsing.
///
/// Every statement range covers its leading keyword through the end of its last child, so
/// `let a = 10` spans all of `let a = 10` and `if c { ... } else { ... }` spans both blocks.
impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks & statements
    // ========================================================================

    /// `block = '{' stmt* '}'`
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_block(&mut self) -> ParseResult<Spanned<Block>> {
        self.nested(Self::block_body)
    }

    fn block_body(&mut self) -> ParseResult<Spanned<Block>> {
        let start = self.consume_punct(PunctuationId::LBrace)?;
        let mut stmts = Vec::new();
        while self.is_at_stmt_start() {
            stmts.push(self.parse_stmt()?);
        }
        let end = self.consume_punct(PunctuationId::RBrace)?;
        Ok(Spanned::new(Block { stmts }, start.range + end.range))
    }

    /// `stmt = let | mut | return | if-else | while | expr-stmt`
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_stmt(&mut self) -> ParseResult<Spanned<Stmt>> {
        match self.current().kind {
            TokenKind::Keyword(KeywordId::Let) => self.binding_stmt(KeywordId::Let),
            TokenKind::Keyword(KeywordId::Mut) => self.binding_stmt(KeywordId::Mut),
            TokenKind::Keyword(KeywordId::Ret) => self.return_stmt(),
            TokenKind::Keyword(KeywordId::If) => self.if_else_stmt(),
            TokenKind::Keyword(KeywordId::While) => self.while_stmt(),
            _ => {
                let expr = self.parse_expr(Binding::LOWEST)?;
                let range = expr.range;
                Ok(Spanned::new(Stmt::Expr(expr), range))
            }
        }
    }

    /// `('let' | 'mut') identifier '=' expr`
    fn binding_stmt(&mut self, keyword: KeywordId) -> ParseResult<Spanned<Stmt>> {
        let start = self.consume_keyword(keyword)?;
        let identifier = self.identifier()?;
        self.consume_op(OperatorId::Eq)?;
        let expr = self.parse_expr(Binding::LOWEST)?;
        let range = start.range + expr.range;
        let stmt = if keyword == KeywordId::Mut {
            Stmt::Mut { identifier, expr }
        } else {
            Stmt::Let { identifier, expr }
        };
        Ok(Spanned::new(stmt, range))
    }

    /// `'ret' expr`
    fn return_stmt(&mut self) -> ParseResult<Spanned<Stmt>> {
        let start = self.consume_keyword(KeywordId::Ret)?;
        let expr = self.parse_expr(Binding::LOWEST)?;
        let range = start.range + expr.range;
        Ok(Spanned::new(Stmt::Return(expr), range))
    }

    /// `'if' expr block ('else' block)?`
    fn if_else_stmt(&mut self) -> ParseResult<Spanned<Stmt>> {
        let start = self.consume_keyword(KeywordId::If)?;
        let condition = self.parse_expr(Binding::LOWEST)?;
        let block = self.parse_block()?;
        let then_range = start.range + block.range;
        let then = Spanned::new(IfBody { condition, block }, then_range);

        let orelse = if self.check_keyword(KeywordId::Else) {
            let else_token = self.advance();
            let block = self.parse_block()?;
            let range = else_token.range + block.range;
            Some(Spanned::new(ElseBody { block }, range))
        } else {
            None
        };

        let range = orelse.as_ref().map_or(then_range, |e| then_range + e.range);
        Ok(Spanned::new(Stmt::IfElse { then, orelse }, range))
    }

    /// `'while' expr block`
    fn while_stmt(&mut self) -> ParseResult<Spanned<Stmt>> {
        let start = self.consume_keyword(KeywordId::While)?;
        let condition = self.parse_expr(Binding::LOWEST)?;
        let block = self.parse_block()?;
        let range = start.range + block.range;
        Ok(Spanned::new(Stmt::While { condition, block }, range))
    }
}
