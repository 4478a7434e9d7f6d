/// Parser core types and the module-level entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module.
/// - The parser borrows the [`SourceContext`] mutably for its whole lifetime: it reads the text and interns
///   identifiers as it meets them.
type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of expressions, types and blocks the parser descends into.
const MAX_NESTING: usize = 64;

/// Parser state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    text: &'a str,
    interner: &'a mut Interner,
    /// Current recursion depth, bounded by [`MAX_NESTING`].
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over the text of `context`.
    pub fn new(context: &'a mut SourceContext) -> Self {
        let (text, interner) = context.split();
        Self {
            lexer: Lexer::new(text),
            text,
            interner,
            depth: 0,
        }
    }

    /// Lexical anomalies met by the tokenizer so far.
    ///
    /// Anomalies never stop the parse on their own; an `Unknown` token still fails wherever the grammar does not
    /// accept it.
    pub fn anomalies(&self) -> &[LexAnomaly] {
        self.lexer.anomalies()
    }

    /// `module = decl*`
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_module(&mut self) -> ParseResult<Module> {
        let mut decls = Vec::new();
        while !self.lexer.is_eof() {
            decls.push(self.parse_decl()?);
        }
        tracing::trace!(decls = decls.len(), "parsed module");
        Ok(Module { decls })
    }
}
