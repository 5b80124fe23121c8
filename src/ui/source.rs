use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::App;
use crate::color::resolve_colours;
use crate::scanner::{self, FenceTracker};

use super::helpers::{hex_to_color, scrolled};
use super::theme::Theme;

/// The raw document with token occurrences tinted in their pill foreground
/// color. Tokens stay visible here instead of being replaced, the same way
/// an editing view keeps the delimiters around the text caret.
pub fn build_source_text(app: &App) -> Text<'_> {
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
            let pair = resolve_colours(&token.label, app.settings.case_insensitive);
            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if let Some(foreground) = hex_to_color(&pair.foreground) {
                style = style.fg(foreground);
            }
            spans.push(Span::styled(
                line[token.start..token.end].to_string(),
                style,
            ));
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
