use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use crate::app::{App, FocusMode};
use crate::ramp;
use crate::swatch;

use super::helpers::{is_dark, to_terminal_color};
use super::theme::Theme;

/// Width of one table column, swatch and value cells alike.
const CELL_WIDTH: usize = 6;

pub fn build_palette_text(app: &App) -> Text<'_> {
    let Some(palette) = &app.palette else {
        return Text::from(Line::from(Span::styled(
            "  No palette yet. Enter some colors above.",
            Style::default().fg(Theme::dim()),
        )));
    };

    let table_focused = app.focus == FocusMode::Table;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(
            "  Mode: {}   Copy prefix: {}",
            app.mode.label(),
            if app.copy_with_hashtag { "#" } else { "none" }
        ),
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(header_line(app));

    for (row_index, base) in palette.iter().enumerate() {
        let sequence = ramp::display_sequence(base, app.mode);
        let cells = swatch::swatch_row(&sequence, app.copy_with_hashtag);

        let mut swatch_spans = vec![Span::raw("  ")];
        for (col_index, cell) in cells.iter().enumerate() {
            let selected =
                table_focused && row_index == app.selected_row && col_index == app.selected_col;
            let marker = if is_dark(&cell.color) {
                Color::White
            } else {
                Color::Black
            };
            let content = if selected {
                format!("{:^width$}", "◆", width = CELL_WIDTH)
            } else {
                " ".repeat(CELL_WIDTH)
            };
            swatch_spans.push(Span::styled(
                content,
                Style::default().bg(to_terminal_color(&cell.color)).fg(marker),
            ));
            swatch_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(swatch_spans));

        let mut value_spans = vec![Span::raw("  ")];
        for (col_index, value) in swatch::value_row(&sequence).into_iter().enumerate() {
            let selected =
                table_focused && row_index == app.selected_row && col_index == app.selected_col;
            let style = if selected {
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD)
            } else if col_index == app.mode.steps() as usize {
                // the base color's own column
                Style::default().fg(Theme::text())
            } else {
                Style::default().fg(Theme::dim())
            };
            value_spans.push(Span::styled(
                format!("{value:<width$}", width = CELL_WIDTH),
                style,
            ));
            value_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(value_spans));
        lines.push(Line::from(""));
    }

    Text::from(lines)
}

fn header_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for label in swatch::headers(app.mode) {
        spans.push(Span::styled(
            format!("{label:<width$}", width = CELL_WIDTH),
            Style::default().fg(Theme::dim()),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
