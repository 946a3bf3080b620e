use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::{App, FocusMode};

use super::theme::Theme;

pub fn build_entry_text(app: &App) -> Text<'_> {
    let active = app.focus == FocusMode::Entry;
    let label_style = if active {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::dim())
    };

    let mut spans = vec![
        Span::styled("  Colors: ", label_style),
        Span::styled(app.input.as_str(), Style::default().fg(Theme::text())),
    ];
    if active {
        spans.push(Span::styled("_", Style::default().fg(Theme::highlight())));
    }

    let mut lines = vec![Line::from(spans)];
    if active {
        lines.push(Line::from(Span::styled(
            "  Paste anything containing 3- or 6-digit hex values, then press Enter",
            Style::default().fg(Theme::dim()),
        )));
    }

    Text::from(lines)
}
