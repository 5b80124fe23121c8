/// Token scanning for `{{label}}` occurrences, plus the markdown code-region
/// checks that decide which occurrences get rendered as pills.
use std::collections::BTreeMap;

use crate::color;
use crate::types::{LabelEntry, Token};

/// Scans `text` for `{{label}}` tokens and returns them in document order.
///
/// A token is `{{`, one or more non-`}` characters, then `}}`. When a
/// candidate fails to close, the scan resumes one character later, matching
/// global-regex restart behavior (so `{{{a}}` yields the label `{a`).
pub fn scan(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if !(bytes[i] == b'{' && bytes[i + 1] == b'{') {
            i += 1;
            continue;
        }
        let label_start = i + 2;
        let mut j = label_start;
        while j < bytes.len() && bytes[j] != b'}' {
            j += 1;
        }
        if j > label_start && j + 1 < bytes.len() && bytes[j + 1] == b'}' {
            tokens.push(Token {
                label: text[label_start..j].to_string(),
                start: i,
                end: j + 2,
            });
            i = j + 2;
        } else {
            i += 1;
        }
    }
    tokens
}

/// Tracks ``` fenced code blocks across a line-by-line pass over a document.
#[derive(Default)]
pub struct FenceTracker {
    in_fence: bool,
}

impl FenceTracker {
    /// Feeds the next line. Returns true when the line belongs to a code
    /// region, counting the fence delimiters themselves.
    pub fn is_code_line(&mut self, line: &str) -> bool {
        if line.trim_start().starts_with("```") {
            self.in_fence = !self.in_fence;
            return true;
        }
        self.in_fence
    }
}

/// Byte ranges of `` `inline code` `` spans on a single line. An unpaired
/// backtick opens no span.
pub fn inline_code_spans(line: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;
    for (index, byte) in line.bytes().enumerate() {
        if byte != b'`' {
            continue;
        }
        match open {
            None => open = Some(index),
            Some(start) => {
                spans.push((start, index + 1));
                open = None;
            }
        }
    }
    spans
}

/// Whether the byte range `[start, end)` overlaps any of the given spans.
pub fn overlaps_code(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| start < e && end > s)
}

/// Collects the distinct pill labels in a document with occurrence counts
/// and resolved colors, skipping code regions. Entry keys follow the
/// hashing rules: case variants collapse into one entry only in
/// case-insensitive mode.
pub fn collect_labels(text: &str, case_insensitive: bool) -> Vec<LabelEntry> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut fences = FenceTracker::default();
    for line in text.lines() {
        if fences.is_code_line(line) {
            continue;
        }
        let code_spans = inline_code_spans(line);
        for token in scan(line) {
            if overlaps_code(&code_spans, token.start, token.end) {
                continue;
            }
            let key = if case_insensitive {
                token.label.to_uppercase()
            } else {
                token.label
            };
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(label, count)| {
            let colors = color::resolve_colours(&label, case_insensitive);
            LabelEntry {
                label,
                count,
                colors,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_token() {
        let tokens = scan("before {{todo}} after");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].label, "todo");
        assert_eq!(&"before {{todo}} after"[tokens[0].start..tokens[0].end], "{{todo}}");
    }

    #[test]
    fn finds_adjacent_tokens_in_order() {
        let tokens = scan("{{a}}{{b c}}{{d}}");
        let labels: Vec<&str> = tokens.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["a", "b c", "d"]);
    }

    #[test]
    fn label_stops_at_first_closing_brace() {
        // `[^}]+` cannot swallow a `}`, so `{{a}b}}` never matches
        assert!(scan("{{a}b}}").is_empty());
        // but a leading extra brace lands inside the label
        let tokens = scan("x{{{a}}y");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].label, "{a");
        assert_eq!(tokens[0].start, 1);
        assert_eq!(tokens[0].end, 7);
    }

    #[test]
    fn rejects_empty_and_unterminated_tokens() {
        assert!(scan("{{}}").is_empty());
        assert!(scan("{{open").is_empty());
        assert!(scan("{single}").is_empty());
        assert!(scan("no braces at all").is_empty());
    }

    #[test]
    fn handles_multibyte_labels() {
        let text = "café {{thé vert}} ☕";
        let tokens = scan(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].label, "thé vert");
        assert_eq!(&text[tokens[0].start..tokens[0].end], "{{thé vert}}");
    }

    #[test]
    fn fence_tracker_excludes_fenced_blocks() {
        let mut fences = FenceTracker::default();
        assert!(!fences.is_code_line("text {{a}}"));
        assert!(fences.is_code_line("```rust"));
        assert!(fences.is_code_line("let x = \"{{a}}\";"));
        assert!(fences.is_code_line("```"));
        assert!(!fences.is_code_line("text again"));
    }

    #[test]
    fn inline_code_spans_pair_backticks() {
        let line = "a `b` c `d e` f `unpaired";
        assert_eq!(inline_code_spans(line), vec![(2, 5), (8, 13)]);
    }

    #[test]
    fn tokens_inside_inline_code_overlap() {
        let line = "keep {{a}} skip `{{b}}` keep {{c}}";
        let spans = inline_code_spans(line);
        let kept: Vec<String> = scan(line)
            .into_iter()
            .filter(|t| !overlaps_code(&spans, t.start, t.end))
            .map(|t| t.label)
            .collect();
        assert_eq!(kept, ["a", "c"]);
    }

    #[test]
    fn collect_labels_counts_and_respects_case_mode() {
        let text = "{{todo}} {{TODO}}\n```\n{{ignored}}\n```\n{{todo}}";

        let sensitive = collect_labels(text, false);
        assert_eq!(sensitive.len(), 2);
        assert_eq!(sensitive[0].label, "TODO");
        assert_eq!(sensitive[0].count, 1);
        assert_eq!(sensitive[1].label, "todo");
        assert_eq!(sensitive[1].count, 2);
        assert_ne!(sensitive[0].colors, sensitive[1].colors);

        let insensitive = collect_labels(text, true);
        assert_eq!(insensitive.len(), 1);
        assert_eq!(insensitive[0].label, "TODO");
        assert_eq!(insensitive[0].count, 3);
    }
}
