/// How a token begins an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nud {
    Value,
    Name,
    /// Prefix operator; its operand is parsed at [`Binding::Unary`].
    Prefix(UnaryOp),
}

/// How a token continues an already parsed left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Led {
    Binary(BinaryOp),
    MemberSelect,
    Call,
    Assign,
}

/// Pratt rule for one token kind.
///
/// ## Notes
/// - Binding powers and associativity come from the `iris_core` operator and punctuation registries, so the
///   precedence ladder is defined in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rule {
    nud: Option<Nud>,
    led: Option<(Led, Binding, Associativity)>,
}

impl Rule {
    const NONE: Rule = Rule { nud: None, led: None };

    fn for_kind(kind: TokenKind) -> Rule {
        match kind {
            kind if kind.is_literal() => Rule {
                nud: Some(Nud::Value),
                led: None,
            },
            TokenKind::Ident => Rule {
                nud: Some(Nud::Name),
                led: None,
            },
            TokenKind::Operator(id) => Self::for_operator(id),
            TokenKind::Punctuation(id) => Self::for_punctuation(id),
            _ => Rule::NONE,
        }
    }

    fn for_operator(id: OperatorId) -> Rule {
        let info = operators::info_for(id);
        let nud = if info.is_prefix() {
            UnaryOp::from_operator(id).map(Nud::Prefix)
        } else {
            None
        };
        let led = info.binding.filter(|_| info.is_infix()).and_then(|binding| {
            let led = match id {
                OperatorId::Eq => Led::Assign,
                _ => Led::Binary(BinaryOp::from_operator(id)?),
            };
            Some((led, binding, info.associativity))
        });
        Rule { nud, led }
    }

    fn for_punctuation(id: PunctuationId) -> Rule {
        let led = match id {
            PunctuationId::LParen => Led::Call,
            PunctuationId::Dot => Led::MemberSelect,
            _ => return Rule::NONE,
        };
        Rule {
            nud: None,
            led: punctuation::info_for(id)
                .binding
                .map(|binding| (led, binding, Associativity::Left)),
        }
    }

    fn starts_expr(&self) -> bool {
        self.nud.is_some()
    }
}

/// Expression parsing.
///
/// `parse_expr(min)` reads one operand through the current token's nud, then keeps folding infix tokens into it
/// while their binding is above `min` (or equal to it for right-associative `=`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse an expression whose infix operators all bind tighter than `min`.
    ///
    /// Call with [`Binding::LOWEST`] for a complete expression.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn parse_expr(&mut self, min: Binding) -> ParseResult<Spanned<Expr>> {
        self.nested(|parser| parser.expr_from(min))
    }

    fn expr_from(&mut self, min: Binding) -> ParseResult<Spanned<Expr>> {
        let token = self.current();
        let mut left = match Rule::for_kind(token.kind).nud {
            Some(Nud::Value) => self.value()?,
            Some(Nud::Name) => self.name()?,
            Some(Nud::Prefix(op)) => self.prefix(op)?,
            None => return Err(self.error("expected expression", token.range)),
        };

        while let Some((led, binding, associativity)) = Rule::for_kind(self.current().kind).led {
            let applies = match associativity {
                Associativity::Right => binding >= min,
                Associativity::Left | Associativity::None => binding > min,
            };
            if !applies {
                break;
            }
            left = self.led(led, left, binding)?;
        }

        Ok(left)
    }

    fn led(&mut self, led: Led, left: Spanned<Expr>, binding: Binding) -> ParseResult<Spanned<Expr>> {
        match led {
            Led::Binary(op) => {
                let op_token = self.advance();
                let right = self.parse_expr(binding)?;
                let range = left.range + right.range;
                Ok(Spanned::new(
                    Expr::Binary(Box::new(left), Spanned::new(op, op_token.range), Box::new(right)),
                    range,
                ))
            }
            Led::Assign => {
                self.consume_op(OperatorId::Eq)?;
                let value = self.parse_expr(binding)?;
                let range = left.range + value.range;
                Ok(Spanned::new(Expr::Assign(Box::new(left), Box::new(value)), range))
            }
            Led::MemberSelect => {
                self.consume_punct(PunctuationId::Dot)?;
                let select = self.parse_expr(binding)?;
                let range = left.range + select.range;
                Ok(Spanned::new(Expr::MemberSelect(Box::new(left), Box::new(select)), range))
            }
            Led::Call => self.call(left),
        }
    }

    /// `callee '(' (expr (',' expr)*)? ')'`
    fn call(&mut self, callee: Spanned<Expr>) -> ParseResult<Spanned<Expr>> {
        self.consume_punct(PunctuationId::LParen)?;
        let mut args = Vec::new();
        if Rule::for_kind(self.current().kind).starts_expr() {
            args.push(self.parse_expr(Binding::LOWEST)?);
            while self.check_punct(PunctuationId::Comma) {
                self.advance();
                args.push(self.parse_expr(Binding::LOWEST)?);
            }
        }
        let end = self.consume_punct(PunctuationId::RParen)?;
        let range = callee.range + end.range;
        Ok(Spanned::new(Expr::Call(Box::new(callee), args), range))
    }

    fn prefix(&mut self, op: UnaryOp) -> ParseResult<Spanned<Expr>> {
        let op_token = self.advance();
        let operand = self.parse_expr(Binding::Unary)?;
        let range = op_token.range + operand.range;
        Ok(Spanned::new(
            Expr::Unary(Spanned::new(op, op_token.range), Box::new(operand)),
            range,
        ))
    }

    fn name(&mut self) -> ParseResult<Spanned<Expr>> {
        let identifier = self.identifier()?;
        Ok(Spanned::new(Expr::Name(identifier), identifier.range))
    }

    fn value(&mut self) -> ParseResult<Spanned<Expr>> {
        let token = self.advance();
        let literal = token.literal(self.text);
        let value = match token.kind {
            TokenKind::Int => Value::Int(
                literal
                    .parse::<u64>()
                    .map_err(|_| self.error("integer literal out of range", token.range))?,
            ),
            TokenKind::Float => Value::Float(
                literal
                    .parse::<f64>()
                    .map_err(|_| self.error("invalid float literal", token.range))?,
            ),
            TokenKind::Bool => Value::Bool(keywords::from_str(literal) == Some(KeywordId::True)),
            TokenKind::Char => Value::Char(
                literal
                    .chars()
                    .next()
                    .ok_or_else(|| self.error("empty character literal", token.range))?,
            ),
            TokenKind::Str => Value::Str(literal.to_string()),
            _ => return Err(self.error("expected expression", token.range)),
        };
        let range = match token.kind {
            TokenKind::Char => self.quoted_range(token.range, '\''),
            TokenKind::Str => self.quoted_range(token.range, '"'),
            _ => token.range,
        };
        Ok(Spanned::new(Expr::Value(value), range))
    }

    /// Char and string tokens exclude their quotes; the value expression covers them.
    fn quoted_range(&self, body: SourceRange, quote: char) -> SourceRange {
        let closed = self.text.get(body.end()..).is_some_and(|rest| rest.starts_with(quote));
        SourceRange::new(
            body.offset.saturating_sub(1),
            body.size + 1 + usize::from(closed),
            body.line,
            body.column.saturating_sub(1).max(1),
        )
    }
}
