//! Violation detector
//!
//! Walks grapheme-cluster boundaries of the input so that a multi-code-point
//! emoji (flag, ZWJ family, skin tone sequence) becomes exactly one logical
//! occurrence. Each cluster is looked up in the symbol table; hits are cross-
//! referenced against the context index and turned into violation records.

use unicode_segmentation::UnicodeSegmentation;

use super::scan::ScanOptions;
use super::scanner::ContextIndex;
use crate::core::models::{CodePointSpan, ContextKind, Severity, Violation};
use crate::core::symbols::{self, SymbolTable};

/// Detect all denylisted symbol occurrences in the text
///
/// Output is ordered by ascending (line, column); positions are unique, so
/// there are no ties and no duplicates.
#[must_use]
pub fn detect(
    text: &str,
    index: &ContextIndex,
    table: &SymbolTable,
    options: &ScanOptions,
) -> Vec<Violation> {
    let lines = LineIndex::new(text);
    let mut violations = Vec::new();

    for (offset, grapheme) in text.grapheme_indices(true) {
        // Modifier code points extend the base symbol, they are never the
        // violation themselves.
        let entry = grapheme
            .chars()
            .filter(|c| !symbols::is_modifier(*c))
            .find_map(|c| table.classify(c));
        let Some(entry) = entry else {
            continue;
        };

        let mut context = index.kind_at(offset);
        if context == ContextKind::PlainCode && in_identifier(text, offset, offset + grapheme.len())
        {
            context = ContextKind::Identifier;
        }

        // Identifier escalation wins over everything: symbols in names break
        // tooling, APIs and searchability downstream.
        let severity = if context.escalates() {
            Severity::Critical
        } else {
            options.severity_overrides.apply(context, entry.base_severity)
        };

        let (line, column) = lines.position(offset);

        violations.push(Violation {
            span: CodePointSpan::new(offset, grapheme),
            context,
            category: entry.category,
            severity,
            line,
            column,
            label: entry.label.clone(),
            allowed: options.allowlist.is_allowed(grapheme, context),
            line_content: lines.content(line).trim().to_string(),
        });
    }

    violations
}

/// Whether the span sits inside an identifier-like token
///
/// Heuristic: the cluster is flanked by an identifier character (alphanumeric
/// or underscore) on either side, e.g. `show_📱_notification`.
fn in_identifier(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_some_and(is_ident_char) || after.is_some_and(is_ident_char)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte-offset to (line, column) translation
///
/// Columns are 1-based and counted in characters from the line start, so a
/// symbol after a multibyte character still reports the column a human sees.
#[derive(Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the start of each line
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Build the index for one text
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, starts }
    }

    /// 1-based (line, column) of a byte offset
    #[must_use]
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&s| s <= offset);
        let line_start = self.starts[line - 1];
        let column = self.text[line_start..offset].chars().count() + 1;
        (line, column)
    }

    /// Raw content of a 1-based line, without the trailing newline
    #[must_use]
    pub fn content(&self, line: usize) -> &str {
        let start = self.starts[line - 1];
        let end = self.starts.get(line).map_or(self.text.len(), |&s| s);
        self.text[start..end].trim_end_matches('\n')
    }
}
