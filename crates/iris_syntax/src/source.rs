//! Source buffer, source ranges and identifier interning.
//!
//! A [`SourceContext`] owns the text of one translation unit together with its [`Interner`]. Tokens and AST nodes
//! never copy text out of it: they carry [`SourceRange`]s (byte offsets plus the line/column of their start) and
//! interned [`Symbol`]s, and resolve them against the context when text is needed.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

// ============================================================================
// SourceRange
// ============================================================================

/// A half-open byte span of the source buffer plus the line/column of its first character.
///
/// Lines and columns are 1-based and count characters. `size` is in bytes.
///
/// ## Notes
/// - The default range is `{offset: 0, size: 1, line: 1, column: 1}`: the first character of the file.
/// - Parent nodes derive their range from their children with [`SourceRange::join`] (also available as `+`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub offset: usize,
    pub size: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for SourceRange {
    fn default() -> Self {
        Self::new(0, 1, 1, 1)
    }
}

impl SourceRange {
    pub const fn new(offset: usize, size: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            size,
            line,
            column,
        }
    }

    /// One past the last byte covered by this range.
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }

    /// Smallest range covering both `a` and `b`.
    ///
    /// The line/column are taken from whichever range starts first; on a tie they come from `a`.
    ///
    /// ## Examples
    /// ```rust
    /// use iris_syntax::source::SourceRange;
    ///
    /// let a = SourceRange::new(4, 2, 1, 5);
    /// let b = SourceRange::new(0, 1, 1, 1);
    /// assert_eq!(SourceRange::join(a, b), SourceRange::new(0, 6, 1, 1));
    /// ```
    pub fn join(a: SourceRange, b: SourceRange) -> SourceRange {
        let offset = a.offset.min(b.offset);
        let size = a.end().max(b.end()) - offset;
        let start = if b.offset < a.offset { b } else { a };
        SourceRange::new(offset, size, start.line, start.column)
    }

    /// Slice of `buffer` covered by this range.
    ///
    /// Never panics: the part of the range outside the buffer is dropped (the end-of-file token yields `""`), and a
    /// range that does not fall on character boundaries yields `""` as well.
    pub fn literal<'s>(&self, buffer: &'s str) -> &'s str {
        let start = self.offset.min(buffer.len());
        let end = self.end().min(buffer.len());
        buffer.get(start..end).unwrap_or("")
    }

    /// This range with its size clamped so that it lies within a buffer of `len` bytes.
    pub fn clamp_to(&self, len: usize) -> SourceRange {
        let offset = self.offset.min(len);
        let size = self.end().min(len) - offset;
        SourceRange { offset, size, ..*self }
    }
}

impl Add for SourceRange {
    type Output = SourceRange;

    fn add(self, rhs: SourceRange) -> SourceRange {
        SourceRange::join(self, rhs)
    }
}

impl AddAssign for SourceRange {
    fn add_assign(&mut self, rhs: SourceRange) {
        *self = SourceRange::join(*self, rhs);
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<SourceRange> for miette::SourceSpan {
    fn from(range: SourceRange) -> Self {
        miette::SourceSpan::new(range.offset.into(), range.size)
    }
}

// ============================================================================
// Interning
// ============================================================================

/// Interned identifier: a dense index into an [`Interner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only string table assigning dense ids in first-seen order.
#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<Box<str>, Symbol>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the symbol for `text`, assigning the next id if it has not been seen before.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&symbol) = self.map.get(text) {
            return symbol;
        }
        let symbol = Symbol(self.strings.len() as u32);
        let owned: Box<str> = text.into();
        self.strings.push(owned.clone());
        self.map.insert(owned, symbol);
        symbol
    }

    /// Look up `text` without interning it.
    pub fn get(&self, text: &str) -> Option<Symbol> {
        self.map.get(text).copied()
    }

    /// Text of an interned symbol.
    ///
    /// Returns `""` for a symbol that came from another interner.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.strings.get(symbol.index()).map(|s| &**s).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

// ============================================================================
// SourceContext
// ============================================================================

/// One translation unit: path, immutable text and the identifier interner.
///
/// ## Notes
/// - A context is single-threaded state. Parsing several files in parallel needs one context per file.
#[derive(Debug)]
pub struct SourceContext {
    path: PathBuf,
    text: String,
    interner: Interner,
}

impl SourceContext {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            interner: Interner::new(),
        }
    }

    /// Context for text that did not come from a file.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new("<input>", text)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source text covered by `range`.
    pub fn literal(&self, range: SourceRange) -> &str {
        range.literal(&self.text)
    }

    pub fn intern(&mut self, text: &str) -> Symbol {
        self.interner.intern(text)
    }

    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.interner.resolve(symbol)
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Borrow the text and the interner at the same time, as the parser needs both.
    pub fn split(&mut self) -> (&str, &mut Interner) {
        (&self.text, &mut self.interner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_first_character() {
        let range = SourceRange::default();
        assert_eq!(range, SourceRange::new(0, 1, 1, 1));
        assert_eq!(range.end(), 1);
    }

    #[test]
    fn join_takes_position_from_earlier_range() {
        let a = SourceRange::new(10, 3, 2, 4);
        let b = SourceRange::new(2, 1, 1, 3);
        let joined = a + b;
        assert_eq!(joined, SourceRange::new(2, 11, 1, 3));
        assert_eq!(b + a, joined);
    }

    #[test]
    fn join_tie_prefers_first_argument() {
        let a = SourceRange::new(5, 1, 1, 6);
        let b = SourceRange::new(5, 4, 9, 9);
        assert_eq!(SourceRange::join(a, b), SourceRange::new(5, 4, 1, 6));
        assert_eq!(SourceRange::join(b, a), SourceRange::new(5, 4, 9, 9));
    }

    #[test]
    fn join_covers_nested_range() {
        let outer = SourceRange::new(0, 10, 1, 1);
        let inner = SourceRange::new(3, 2, 1, 4);
        assert_eq!(outer + inner, outer);
    }

    #[test]
    fn add_assign_grows_range() {
        let mut range = SourceRange::new(0, 1, 1, 1);
        range += SourceRange::new(4, 0, 1, 5);
        assert_eq!(range, SourceRange::new(0, 4, 1, 1));
    }

    #[test]
    fn literal_is_clamped_to_buffer() {
        let text = "abc";
        assert_eq!(SourceRange::new(1, 2, 1, 2).literal(text), "bc");
        assert_eq!(SourceRange::new(3, 1, 1, 4).literal(text), "");
        assert_eq!(SourceRange::new(2, 5, 1, 3).literal(text), "c");
        assert_eq!(SourceRange::new(7, 1, 1, 8).literal(text), "");
    }

    #[test]
    fn literal_off_char_boundary_is_empty() {
        let text = "é";
        assert_eq!(SourceRange::new(0, 1, 1, 1).literal(text), "");
        assert_eq!(SourceRange::new(0, 2, 1, 1).literal(text), "é");
    }

    #[test]
    fn interning_is_idempotent_and_dense() {
        let mut interner = Interner::new();
        let a = interner.intern("alpha");
        let b = interner.intern("beta");
        assert_eq!(interner.intern("alpha"), a);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.resolve(b), "beta");
        assert_eq!(interner.get("gamma"), None);
    }

    #[test]
    fn context_splits_text_and_interner() {
        let mut ctx = SourceContext::from_text("let x = 1");
        let (text, interner) = ctx.split();
        let sym = interner.intern(&text[4..5]);
        assert_eq!(ctx.resolve(sym), "x");
        assert_eq!(ctx.path(), Path::new("<input>"));
        assert_eq!(ctx.literal(SourceRange::new(0, 3, 1, 1)), "let");
    }
}
