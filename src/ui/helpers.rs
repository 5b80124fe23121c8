use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use crate::color::{self, resolve_colours};

/// Converts a `#rrggbb` string into a ratatui color.
pub fn hex_to_color(value: &str) -> Option<Color> {
    color::hex_to_rgb(value).map(|(r, g, b)| Color::Rgb(r, g, b))
}

/// A badge span for a label: uppercased text in the pill foreground on the
/// pill fill.
pub fn pill_span(label: &str, case_insensitive: bool) -> Span<'static> {
    let pair = resolve_colours(label, case_insensitive);
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(background) = hex_to_color(&pair.background) {
        style = style.bg(background);
    }
    if let Some(foreground) = hex_to_color(&pair.foreground) {
        style = style.fg(foreground);
    }
    Span::styled(format!(" {} ", label.to_uppercase()), style)
}

/// Drops the first `scroll` lines so the body starts at the scroll offset.
pub fn scrolled(lines: Vec<Line<'static>>, scroll: usize) -> Text<'static> {
    Text::from(lines.into_iter().skip(scroll).collect::<Vec<_>>())
}
