use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<10}"),
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, Style::default().fg(Theme::text())),
    ])
}

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Keyboard Shortcuts",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Entry line",
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(key_line("Enter", "Generate tints and shades"));
    lines.push(key_line("Esc", "Jump to the table, or quit when it is empty"));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Swatch table",
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(key_line("Arrows", "Move the cell selection"));
    lines.push(key_line("Enter/y", "Copy the selected cell's value"));
    lines.push(key_line("m", "Toggle 20%/10% step mode"));
    lines.push(key_line("#", "Toggle the '#' prefix on copied values"));
    lines.push(key_line("x", "Append a random color to the entry line"));
    lines.push(key_line("r", "Regenerate from the entry line"));
    lines.push(key_line("i or /", "Edit the entry line"));
    lines.push(key_line("q", "Quit"));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Tips",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled("  •", Style::default().fg(Theme::dim())),
        Span::styled(
            "  Shorthand like 'abc' expands to 'aabbcc'",
            Style::default().fg(Theme::text()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  •", Style::default().fg(Theme::dim())),
        Span::styled(
            "  The last generated colors are restored on startup",
            Style::default().fg(Theme::text()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  •", Style::default().fg(Theme::dim())),
        Span::styled(
            "  `tintr print` writes the same rows to stdout",
            Style::default().fg(Theme::text()),
        ),
    ]));

    Text::from(lines)
}
