use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::App;

pub fn build_help_text(_app: &App) -> Text<'_> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "Tab: Next view",
        "p/s/l: Preview / Source / Labels",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Document"));
    lines.extend(section_lines(&[
        "Up/Down: Scroll",
        "PgUp/PgDn: Scroll by 10",
        "Home: Jump to top",
        "r: Reload file",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Colors"));
    lines.extend(section_lines(&[
        "c: Toggle case-insensitive colors (persisted)",
        "Labels view: Up/Down move selection",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
