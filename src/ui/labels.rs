use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::App;

use super::helpers::{hex_to_color, pill_span};
use super::theme::Theme;

/// The distinct labels in the document with counts, swatches, and the
/// resolved hex values.
pub fn build_labels_text(app: &App) -> Text<'_> {
    if app.labels.is_empty() {
        return Text::from("No {{label}} tokens found. Press 'r' to reload the file.");
    }

    let mut lines = app
        .labels
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let selected = index == app.selected_label_index;
            let marker_style = if selected {
                Style::default()
                    .fg(Theme::selection_marker())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };
            let swatch_style = hex_to_color(&entry.colors.background)
                .map(|color| Style::default().fg(color))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                pill_span(&entry.label, app.settings.case_insensitive),
                Span::raw("  "),
                Span::styled("███", swatch_style),
                Span::raw(" "),
                Span::styled(
                    format!("{} on {}", entry.colors.foreground, entry.colors.background),
                    Style::default().fg(Theme::dim()),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("x{}", entry.count),
                    Style::default().fg(Theme::accent()),
                ),
            ])
        })
        .collect::<Vec<_>>();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "c: Toggle case-insensitive colors   esc: Back",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}
