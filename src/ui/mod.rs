mod entry;
mod help;
mod helpers;
mod palette;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView, FocusMode};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Tintr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "tints and shades",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = Vec::new();
    match app.view {
        AppView::Help => body_lines.extend(help::build_help_text().lines),
        AppView::Palette => {
            body_lines.extend(entry::build_entry_text(app).lines);
            body_lines.push(Line::from(""));
            body_lines.extend(palette::build_palette_text(app).lines);
        }
    }
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);
}

fn footer_line(app: &App) -> Line<'_> {
    if let Some(warning) = &app.warning {
        return Line::from(Span::styled(
            format!("  {warning}"),
            Style::default().fg(Theme::warn()).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!("  {status}"),
            Style::default()
                .fg(Theme::success())
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hint = match (app.view, app.focus) {
        (AppView::Help, _) => "?: Close help  q: Quit",
        (_, FocusMode::Entry) => "Type hex colors  Enter: Generate  Esc: Table/Quit",
        (_, FocusMode::Table) => {
            "Arrows: Select  Enter/y: Copy  m: Mode  #: Prefix  x: Random  i: Edit  ?: Help  q: Quit"
        }
    };
    Line::from(Span::styled(
        format!("  {hint}"),
        Style::default().fg(Theme::dim()),
    ))
}
