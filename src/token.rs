/// Source location of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Code, whitespace, string literals, inline HTML.
    Structural,
    /// `// ...` or `# ...`, including the line terminator when present.
    LineComment,
    /// `/* ... */`.
    BlockComment,
    /// `/** ... */`.
    DocComment,
}

impl TokenKind {
    /// Whether the stripper removes tokens of this kind.
    #[must_use]
    pub const fn is_removable(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    #[must_use]
    pub const fn is_comment(self) -> bool {
        !matches!(self, Self::Structural)
    }
}

/// A slice of the source with its kind and location.
///
/// `text` is exactly what appeared in the input, delimiters included, so
/// concatenating every token's text reproduces the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}
