use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::app::App;
use crate::scanner::{self, FenceTracker};

use super::helpers::{pill_span, scrolled};
use super::theme::Theme;

/// The rendered document: pills substituted for tokens, code regions left
/// verbatim and dimmed.
pub fn build_preview_text(app: &App) -> Text<'_> {
    let mut lines = Vec::new();
    let mut fences = FenceTracker::default();
    for line in app.text.lines() {
        if fences.is_code_line(line) {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Theme::dim()),
            )));
            continue;
        }

        let code_spans = scanner::inline_code_spans(line);
        let mut spans = Vec::new();
        let mut cursor = 0;
        for token in scanner::scan(line) {
            if scanner::overlaps_code(&code_spans, token.start, token.end) {
                continue;
            }
            if token.start > cursor {
                spans.push(Span::raw(line[cursor..token.start].to_string()));
            }
            spans.push(pill_span(&token.label, app.settings.case_insensitive));
            cursor = token.end;
        }
        if cursor < line.len() {
            spans.push(Span::raw(line[cursor..].to_string()));
        }
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        return Text::from("Empty file.");
    }
    scrolled(lines, app.scroll)
}
