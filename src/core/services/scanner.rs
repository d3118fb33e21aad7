//! Lexical context scanner
//!
//! A single left-to-right pass that classifies every byte of source text as
//! comment, string or plain code, without building an AST. The pass maintains
//! a small state machine whose transitions are driven by the delimiter rules
//! of the selected language family. The result is a gap-free, non-overlapping
//! sequence of context spans that the detector queries by byte offset.
//!
//! This is a best-effort scanner, not a compiler front end: an unterminated
//! string or comment simply closes at end of input.

use crate::core::models::{ContextKind, LanguageFamily, Span};

/// One classified region of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSpan {
    /// Byte range of the region
    pub span: Span,
    /// Context assigned to every byte in the range
    pub kind: ContextKind,
}

/// Queryable index of context spans for one source text
///
/// Spans cover the entire input in order, with no gaps and no overlaps.
#[derive(Debug, Clone, Default)]
pub struct ContextIndex {
    spans: Vec<ContextSpan>,
}

impl ContextIndex {
    /// Context at a byte offset
    ///
    /// Offsets past the end of input report `PlainCode`.
    #[must_use]
    pub fn kind_at(&self, offset: usize) -> ContextKind {
        let idx = self.spans.partition_point(|s| s.span.end <= offset);
        self.spans
            .get(idx)
            .filter(|s| s.span.contains(offset))
            .map_or(ContextKind::PlainCode, |s| s.kind)
    }

    /// All spans in source order
    #[must_use]
    pub fn spans(&self) -> &[ContextSpan] {
        &self.spans
    }
}

/// Scanner state while walking the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Plain code
    Code,
    /// Inside a line comment
    LineComment,
    /// Inside a block comment at the given nesting depth
    BlockComment(u32),
    /// Inside a string opened by the given quote character
    String(char),
}

/// Classify the whole input into context spans
///
/// Single pass, no allocation beyond the output vector. Escaped quotes
/// (backslash immediately before the delimiter) do not terminate a string.
#[must_use]
pub fn scan_contexts(text: &str, family: LanguageFamily) -> ContextIndex {
    let rules = family.rules();
    let mut spans = Vec::new();
    let mut state = State::Code;
    let mut seg_start = 0;
    let mut i = 0;

    let mut close = |spans: &mut Vec<ContextSpan>, start: usize, end: usize, kind: ContextKind| {
        if start < end {
            spans.push(ContextSpan { span: Span::new(start, end), kind });
        }
    };

    while i < text.len() {
        let rest = &text[i..];
        // Safe: i is always on a char boundary
        let c = rest.chars().next().unwrap_or('\0');

        match state {
            State::Code => {
                if let Some(tok) = rules.line_comments.iter().find(|t| rest.starts_with(**t)) {
                    close(&mut spans, seg_start, i, ContextKind::PlainCode);
                    state = State::LineComment;
                    seg_start = i;
                    i += tok.len();
                } else if let Some((open, _)) =
                    rules.block_comment.filter(|(open, _)| rest.starts_with(*open))
                {
                    close(&mut spans, seg_start, i, ContextKind::PlainCode);
                    state = State::BlockComment(1);
                    seg_start = i;
                    i += open.len();
                } else if rules.string_quotes.contains(&c) {
                    close(&mut spans, seg_start, i, ContextKind::PlainCode);
                    state = State::String(c);
                    seg_start = i;
                    i += c.len_utf8();
                } else {
                    i += c.len_utf8();
                }
            },
            State::LineComment => {
                if c == '\n' {
                    close(&mut spans, seg_start, i, ContextKind::LineComment);
                    state = State::Code;
                    seg_start = i;
                }
                i += c.len_utf8();
            },
            State::BlockComment(depth) => {
                let (open, end_tok) = rules.block_comment.unwrap_or(("/*", "*/"));
                if rest.starts_with(end_tok) {
                    i += end_tok.len();
                    if depth <= 1 {
                        close(&mut spans, seg_start, i, ContextKind::BlockComment);
                        state = State::Code;
                        seg_start = i;
                    } else {
                        state = State::BlockComment(depth - 1);
                    }
                } else if rules.block_nesting && rest.starts_with(open) {
                    state = State::BlockComment(depth + 1);
                    i += open.len();
                } else {
                    i += c.len_utf8();
                }
            },
            State::String(quote) => {
                if c == '\\' {
                    // Skip the escape and the escaped character
                    i += c.len_utf8();
                    if let Some(escaped) = text[i..].chars().next() {
                        i += escaped.len_utf8();
                    }
                } else if c == quote {
                    i += c.len_utf8();
                    close(&mut spans, seg_start, i, ContextKind::StringLiteral);
                    state = State::Code;
                    seg_start = i;
                } else {
                    i += c.len_utf8();
                }
            },
        }
    }

    // Unterminated regions close implicitly at EOF
    let eof_kind = match state {
        State::Code => ContextKind::PlainCode,
        State::LineComment => ContextKind::LineComment,
        State::BlockComment(_) => ContextKind::BlockComment,
        State::String(_) => ContextKind::StringLiteral,
    };
    close(&mut spans, seg_start, text.len(), eof_kind);

    ContextIndex { spans }
}
