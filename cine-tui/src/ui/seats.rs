//! Seat map rendering
//!
//! Draws the auditorium grid with one cell per seat, a legend, and the
//! running total for the current selection.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use libcinescope::booking::SeatStatus;
use libcinescope::state::theme::Palette;
use libcinescope::types::Movie;

use crate::app::AppState;
use crate::ui::to_color;

/// Render the seat selection screen
pub fn render_seat_selection(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    movie: &Movie,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),   // seat grid
            Constraint::Length(3), // legend + total
            Constraint::Length(2), // footer
        ])
        .split(area);

    let booking = &state.booking;
    let mut lines = vec![Line::from(Span::styled(
        "SCREEN",
        Style::default().fg(to_color(palette.text_muted)),
    ))];
    lines.push(Line::from(""));

    for (row_index, row) in booking.seat_map.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2 + 1);
        // Narrow rows get padding so the aisle shows up
        if row.len() < 8 {
            spans.push(Span::raw("      "));
        }
        for (col_index, seat_id) in row.iter().enumerate() {
            let status = booking.seat_map.status(seat_id, &booking.selection);
            let symbol = match status {
                SeatStatus::Selected => "[x]",
                SeatStatus::Unavailable => " # ",
                SeatStatus::Vip => " v ",
                SeatStatus::Available => " o ",
            };
            let mut style = match status {
                SeatStatus::Selected => Style::default()
                    .fg(to_color(palette.accent))
                    .add_modifier(Modifier::BOLD),
                SeatStatus::Unavailable => Style::default().fg(to_color(palette.unavailable)),
                SeatStatus::Vip => Style::default().fg(to_color(palette.vip)),
                SeatStatus::Available => Style::default().fg(to_color(palette.text)),
            };
            if row_index == booking.cursor_row && col_index == booking.cursor_col {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} - pick your seats ", movie.title)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(grid, chunks[0]);

    let summary = Line::from(vec![
        Span::styled(" o ", Style::default().fg(to_color(palette.text))),
        Span::raw("available  "),
        Span::styled(" v ", Style::default().fg(to_color(palette.vip))),
        Span::raw("vip  "),
        Span::styled(" # ", Style::default().fg(to_color(palette.unavailable))),
        Span::raw("taken  "),
        Span::styled("[x]", Style::default().fg(to_color(palette.accent))),
        Span::raw("selected   "),
        Span::styled(
            format!(
                "{} seats, total {} {}",
                booking.selection.len(),
                booking.total(),
                booking.prices.currency,
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        "arrows move | Space toggle | Enter pay | Esc back",
        Style::default().fg(to_color(palette.text_muted)),
    )))
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(hints, chunks[2]);
}
