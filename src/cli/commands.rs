//! CLI command implementations
//!
//! All command functions return `CliResult` instead of calling `process::exit`, and produce their output as
//! strings so the top-level `run()` decides where it goes.

use std::fs;
use std::path::Path;

use iris_syntax::ast::Module;
use iris_syntax::dump::{dump_module, to_sexpr};
use iris_syntax::lexer::{Lexer, TokenKind};
use iris_syntax::parser::Parser;
use iris_syntax::{LexAnomaly, SourceContext};
use miette::{Diagnostic, NamedSource, Report};

use super::{CliError, CliResult};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// What to print for a processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Parse and print nothing on success.
    Check,
    Tokens,
    Ast,
    Sexpr,
}

/// Result of processing one file.
#[derive(Debug, Default)]
pub struct FileOutput {
    /// Text for stdout.
    pub text: String,
    /// Rendered lexical anomalies, for stderr.
    pub warnings: Vec<String>,
}

/// Read a source file into memory.
pub fn read_source(path: &Path) -> CliResult<String> {
    // Check file size before reading
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Load `path` and produce the output selected by `mode`.
pub fn process_file(path: &Path, mode: OutputMode) -> CliResult<FileOutput> {
    let source = read_source(path)?;
    tracing::debug!(file = %path.display(), bytes = source.len(), ?mode, "processing");
    let mut ctx = SourceContext::new(path, source);
    process_context(&mut ctx, mode)
}

/// Produce the output selected by `mode` for an already loaded source.
pub fn process_context(ctx: &mut SourceContext, mode: OutputMode) -> CliResult<FileOutput> {
    if mode == OutputMode::Tokens {
        return Ok(FileOutput {
            text: dump_tokens(ctx),
            warnings: Vec::new(),
        });
    }

    let (module, anomalies) = parse_context(ctx)?;
    let warnings = anomalies.into_iter().map(|a| render_diagnostic(a, ctx)).collect();
    let text = match mode {
        OutputMode::Ast => dump_module(ctx, &module),
        OutputMode::Sexpr => to_sexpr(&module, ctx.interner()),
        OutputMode::Check | OutputMode::Tokens => String::new(),
    };
    Ok(FileOutput { text, warnings })
}

/// Parse the whole context, keeping the lexical anomalies met along the way.
///
/// A syntax error is rendered against the source and returned as a [`CliError`].
pub fn parse_context(ctx: &mut SourceContext) -> CliResult<(Module, Vec<LexAnomaly>)> {
    let mut parser = Parser::new(ctx);
    let result = parser.parse_module();
    let anomalies = parser.anomalies().to_vec();
    match result {
        Ok(module) => Ok((module, anomalies)),
        Err(err) => Err(CliError::failure(render_diagnostic(err, ctx))),
    }
}

/// One `line:column: 'literal'` line per token, after a header naming the file.
pub fn dump_tokens(ctx: &SourceContext) -> String {
    let mut out = format!("Dumping tokens for {}\n", ctx.path().display());
    let mut lexer = Lexer::new(ctx.text());
    loop {
        let token = lexer.consume();
        if token.kind == TokenKind::Eof {
            break;
        }
        let range = token.range;
        out.push_str(&format!("{}:{}: '{}'\n", range.line, range.column, ctx.literal(range)));
    }
    out
}

/// Render a diagnostic with a labelled snippet of `ctx`'s source.
pub fn render_diagnostic<D>(diagnostic: D, ctx: &SourceContext) -> String
where
    D: Diagnostic + Send + Sync + 'static,
{
    let source = NamedSource::new(ctx.path().display().to_string(), ctx.text().to_string());
    format!("{:?}", Report::new(diagnostic).with_source_code(source))
}
