//! Comment removal over a token stream.
//!
//! Removal happens in two passes. Every ordinary comment is first replaced
//! by a marker string, then every line containing a marker is dropped along
//! with its indentation and line terminator. Doc comments pass through
//! untouched.
//!
//! A line that mixes code and an ordinary comment is dropped whole:
//!
//! ```
//! let out = phpdoc_strip::strip_source("<?php\n$x = 1; /* note */ $y = 2;\n$z = 3;\n");
//! assert_eq!(out.text, "<?php\n$z = 3;\n");
//! ```

use tracing::debug;

use crate::lexer::tokenize;
use crate::token::Token;

const MARKER_BASE: &str = "@@phpdoc-strip:removed-comment@@";

/// Rewritten source plus what happened to its comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    /// Ordinary comments removed.
    pub removed: usize,
    /// Doc comments kept.
    pub preserved: usize,
}

impl Stripped {
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.removed > 0
    }
}

/// Remove ordinary comments from a token stream and return the new source.
#[must_use]
pub fn strip(tokens: &[Token<'_>]) -> String {
    rewrite(tokens).text
}

/// Tokenize `input` and strip it.
#[must_use]
pub fn strip_source(input: &str) -> Stripped {
    rewrite(&tokenize(input))
}

/// Remove ordinary comments, keeping counts for reporting.
#[must_use]
pub fn rewrite(tokens: &[Token<'_>]) -> Stripped {
    let source: String = tokens.iter().map(|t| t.text).collect();
    let marker = choose_marker(&source);

    let mut marked = String::with_capacity(source.len());
    let mut removed = 0;
    let mut preserved = 0;

    for token in tokens {
        if token.kind.is_removable() {
            debug!(
                line = token.span.line,
                column = token.span.column,
                kind = ?token.kind,
                "removing comment"
            );
            marked.push_str(&marker);
            marked.push_str(line_terminator(token.text));
            removed += 1;
        } else {
            if token.kind.is_comment() {
                preserved += 1;
            }
            marked.push_str(token.text);
        }
    }

    if removed == 0 {
        return Stripped {
            text: marked,
            removed,
            preserved,
        };
    }

    let text = lines(&marked)
        .filter(|line| !line.contains(marker.as_str()))
        .collect();

    Stripped {
        text,
        removed,
        preserved,
    }
}

/// A marker that does not already occur anywhere in `source`.
fn choose_marker(source: &str) -> String {
    let mut marker = MARKER_BASE.to_string();
    let mut n = 0_usize;
    while source.contains(marker.as_str()) {
        n += 1;
        marker = format!("{MARKER_BASE}{n}@@");
    }
    marker
}

fn line_terminator(text: &str) -> &str {
    if text.ends_with("\r\n") {
        "\r\n"
    } else if text.ends_with('\n') {
        "\n"
    } else if text.ends_with('\r') {
        "\r"
    } else {
        ""
    }
}

/// Split into lines, each keeping its `\n`, `\r\n` or `\r` terminator.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let mut end = start;
        while end < bytes.len() {
            match bytes[end] {
                b'\n' => {
                    end += 1;
                    break;
                }
                b'\r' => {
                    end += if bytes.get(end + 1) == Some(&b'\n') {
                        2
                    } else {
                        1
                    };
                    break;
                }
                _ => end += 1,
            }
        }
        let line = &text[start..end];
        start = end;
        Some(line)
    })
}
