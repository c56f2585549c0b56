use crate::token::{Span, Token, TokenKind};

/// Split PHP source into structural and comment tokens.
///
/// The lexer never fails: an unterminated comment, string or heredoc simply
/// runs to the end of the input. Text outside `<?php` / `<?=` ... `?>` is
/// inline HTML and is never scanned for comments.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).tokenize()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Html,
    Php,
}

struct Lexer<'a> {
    src: &'a str,
    input: &'a [u8],
    pos: usize,
    /// Start of the structural run not yet emitted.
    mark: usize,
    line: usize,
    col: usize,
    mode: Mode,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    const fn new(src: &'a str) -> Self {
        Self {
            src,
            input: src.as_bytes(),
            pos: 0,
            mark: 0,
            line: 1,
            col: 1,
            mode: Mode::Html,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token<'a>> {
        while self.pos < self.input.len() {
            match self.mode {
                Mode::Html => self.skip_inline_html(),
                Mode::Php => self.step_php(),
            }
        }
        self.flush_structural();
        self.tokens
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn skip_inline_html(&mut self) {
        while self.pos < self.input.len() {
            if self.input[self.pos] == b'<' && self.peek_at(1) == Some(b'?') {
                if let Some(len) = self.open_tag_len() {
                    self.pos += len;
                    self.mode = Mode::Php;
                    return;
                }
            }
            self.pos += 1;
        }
    }

    /// Length of the PHP open tag at `pos`, if there is one.
    fn open_tag_len(&self) -> Option<usize> {
        if self.peek_at(2) == Some(b'=') {
            return Some(3);
        }
        let name = self.input.get(self.pos + 2..self.pos + 5)?;
        if !name.eq_ignore_ascii_case(b"php") {
            return None;
        }
        match self.peek_at(5) {
            None => Some(5),
            Some(b' ' | b'\t' | b'\n' | b'\r') => Some(6),
            Some(_) => None,
        }
    }

    fn step_php(&mut self) {
        match self.input[self.pos] {
            b'?' if self.peek_at(1) == Some(b'>') => {
                self.pos += 2;
                self.mode = Mode::Html;
            }
            b'#' if self.peek_at(1) != Some(b'[') => self.read_line_comment(1),
            b'/' if self.peek_at(1) == Some(b'/') => self.read_line_comment(2),
            b'/' if self.peek_at(1) == Some(b'*') => self.read_block_comment(),
            quote @ (b'\'' | b'"' | b'`') => self.skip_quoted(quote),
            b'<' if self.input[self.pos..].starts_with(b"<<<") => self.skip_heredoc(),
            _ => self.pos += 1,
        }
    }

    fn read_line_comment(&mut self, opener: usize) {
        let mut end = self.pos + opener;
        while end < self.input.len() {
            match self.input[end] {
                b'\n' => {
                    end += 1;
                    break;
                }
                b'\r' => {
                    end += if self.input.get(end + 1) == Some(&b'\n') {
                        2
                    } else {
                        1
                    };
                    break;
                }
                // `?>` closes PHP mode even inside a line comment.
                b'?' if self.input.get(end + 1) == Some(&b'>') => break,
                _ => end += 1,
            }
        }
        self.push_comment(TokenKind::LineComment, end);
    }

    fn read_block_comment(&mut self) {
        let body = self.pos + 2;
        let end = find(&self.input[body..], b"*/").map_or(self.input.len(), |i| body + i + 2);
        let kind = if self.peek_at(2) == Some(b'*') && self.peek_at(3).is_some_and(|b| b != b'/')
        {
            TokenKind::DocComment
        } else {
            TokenKind::BlockComment
        };
        self.push_comment(kind, end);
    }

    fn skip_quoted(&mut self, quote: u8) {
        let mut i = self.pos + 1;
        while i < self.input.len() {
            match self.input[i] {
                b'\\' => i += 2,
                b if b == quote => {
                    i += 1;
                    break;
                }
                _ => i += 1,
            }
        }
        self.pos = i.min(self.input.len());
    }

    /// Skip a heredoc or nowdoc body. A bare `<<<` that does not introduce
    /// one is stepped over as ordinary code.
    fn skip_heredoc(&mut self) {
        let Some((label, body)) = self.heredoc_header() else {
            self.pos += 3;
            return;
        };

        let mut line_start = body;
        while line_start < self.input.len() {
            let mut k = line_start;
            while matches!(self.input.get(k), Some(b' ' | b'\t')) {
                k += 1;
            }
            if self.input[k..].starts_with(label)
                && !self
                    .input
                    .get(k + label.len())
                    .copied()
                    .is_some_and(is_label_byte)
            {
                self.pos = k + label.len();
                return;
            }
            line_start = match find(&self.input[line_start..], b"\n") {
                Some(i) => line_start + i + 1,
                None => self.input.len(),
            };
        }
        self.pos = self.input.len();
    }

    /// Parse `<<<ID`, `<<<"ID"` or `<<<'ID'` plus its line break. Returns the
    /// label and the offset where the body begins.
    fn heredoc_header(&self) -> Option<(&'a [u8], usize)> {
        let input = self.input;
        let mut i = self.pos + 3;
        while matches!(input.get(i), Some(b' ' | b'\t')) {
            i += 1;
        }
        let quote = match input.get(i).copied() {
            Some(q @ (b'\'' | b'"')) => {
                i += 1;
                Some(q)
            }
            _ => None,
        };

        let start = i;
        if !input
            .get(i)
            .copied()
            .is_some_and(|b| is_label_byte(b) && !b.is_ascii_digit())
        {
            return None;
        }
        while input.get(i).copied().is_some_and(is_label_byte) {
            i += 1;
        }
        let label = &input[start..i];

        if let Some(q) = quote {
            if input.get(i) != Some(&q) {
                return None;
            }
            i += 1;
        }
        match input.get(i) {
            Some(b'\n') => Some((label, i + 1)),
            Some(b'\r') if input.get(i + 1) == Some(&b'\n') => Some((label, i + 2)),
            Some(b'\r') => Some((label, i + 1)),
            _ => None,
        }
    }

    fn push_comment(&mut self, kind: TokenKind, end: usize) {
        self.flush_structural();
        let end = end.min(self.input.len());
        self.push(kind, end);
        self.pos = end;
    }

    fn flush_structural(&mut self) {
        if self.mark < self.pos {
            self.push(TokenKind::Structural, self.pos);
        }
    }

    fn push(&mut self, kind: TokenKind, end: usize) {
        // Token boundaries always sit on ASCII bytes or the end of input,
        // so the slice is on char boundaries.
        let text = &self.src[self.mark..end];
        self.tokens.push(Token {
            kind,
            text,
            span: Span {
                line: self.line,
                column: self.col,
            },
        });
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.mark = end;
    }
}

const fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
