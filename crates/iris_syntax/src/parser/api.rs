/// Parse the text of `context` into a [`Module`].
///
/// Identifiers are interned into `context` as they are parsed.
///
/// ## Errors
/// Returns the first syntax error; there is no recovery.
#[tracing::instrument(skip_all, fields(path = %context.path().display(), source_len = context.text().len()))]
pub fn parse(context: &mut SourceContext) -> Result<Module, ParseError> {
    Parser::new(context).parse_module()
}
