//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Colors come from the theme palette so light/dark switching restyles
//! every screen at once.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use libcinescope::booking::{showtimes, upcoming_dates};
use libcinescope::state::theme::{Palette, Rgb};
use libcinescope::types::{Movie, MovieCategory};

use crate::app::{AppState, Screen};

pub mod seats;

/// Map a palette color onto the terminal
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, search_input: &tui_textarea::TextArea) {
    let area = frame.size();
    let palette = state.theme.palette();

    match &state.screen {
        Screen::Home => render_home(frame, area, state, &palette),
        Screen::Search => render_search(frame, area, state, &palette, search_input),
        Screen::MovieDetail { movie } => render_detail(frame, area, state, &palette, movie),
        Screen::SeatBooking { movie } => render_seat_booking(frame, area, state, &palette, movie),
        Screen::SeatSelection { movie, .. } => {
            seats::render_seat_selection(frame, area, state, &palette, movie)
        }
        Screen::Payment { booking } => render_payment(frame, area, &palette, booking),
        Screen::Receipt { receipt } => render_receipt(frame, area, &palette, receipt),
    }

    if let Some(ref error) = state.movies.error {
        render_error_overlay(frame, area, &palette, error);
    }
}

fn movie_list_items<'a>(movies: &'a [Movie], palette: &Palette) -> Vec<ListItem<'a>> {
    movies
        .iter()
        .map(|movie| {
            let year = movie
                .release_date
                .as_deref()
                .and_then(|d| d.split('-').next())
                .unwrap_or("????");
            ListItem::new(Line::from(vec![
                Span::styled(&movie.title, Style::default().fg(to_color(palette.text))),
                Span::styled(
                    format!("  ({})  {:.1}", year, movie.vote_average),
                    Style::default().fg(to_color(palette.text_muted)),
                ),
            ]))
        })
        .collect()
}

fn footer<'a>(text: &'a str, palette: &Palette, loading: bool) -> Paragraph<'a> {
    let line = if loading {
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(to_color(palette.accent)),
        ))
    } else {
        Line::from(Span::styled(
            text,
            Style::default().fg(to_color(palette.text_muted)),
        ))
    };
    Paragraph::new(line).block(Block::default().borders(Borders::TOP))
}

/// Category tabs, movie list, genre strip
fn render_home(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // category tabs
            Constraint::Min(3),    // movie list
            Constraint::Length(3), // genre strip
            Constraint::Length(2), // footer
        ])
        .split(area);

    let titles: Vec<Line> = MovieCategory::ALL
        .iter()
        .map(|c| Line::from(c.to_string()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.home.category_index)
        .block(Block::default().borders(Borders::ALL).title(" Cinescope "))
        .highlight_style(
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let collection = state.movies.collection(state.home.category());
    let items = movie_list_items(&collection.movies, palette);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.home.selected.min(
        collection.movies.len().saturating_sub(1),
    )));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let mut genre_spans: Vec<Span> = Vec::with_capacity(state.movies.genres.len() * 2);
    for (i, tile) in state.movies.genres.iter().enumerate() {
        if i > 0 {
            genre_spans.push(Span::styled(
                " | ",
                Style::default().fg(to_color(palette.text_muted)),
            ));
        }
        let style = if i == state.home.genre_index {
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(to_color(palette.text_muted))
        };
        genre_spans.push(Span::styled(tile.name.clone(), style));
    }
    let genres = Paragraph::new(Line::from(genre_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Genres (g load, [/] pick, Space browse) "),
    );
    frame.render_widget(genres, chunks[2]);

    frame.render_widget(
        footer(
            "←/→ category | ↑/↓ select | Enter details | n more | / search | t theme | q quit",
            palette,
            state.movies.loading,
        ),
        chunks[3],
    );
}

/// Search input above the results list
fn render_search(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    search_input: &tui_textarea::TextArea,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // query input
            Constraint::Min(3),    // results
            Constraint::Length(2), // footer
        ])
        .split(area);

    frame.render_widget(search_input.widget(), chunks[0]);

    let collection = &state.movies.search_results;
    let items = movie_list_items(&collection.movies, palette);
    let title = format!(" Results ({}) ", collection.total_results);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.search.selected.min(
        collection.movies.len().saturating_sub(1),
    )));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    frame.render_widget(
        footer(
            "Enter search | ↑/↓ select | → open | Ctrl+N more | Esc back",
            palette,
            state.movies.loading,
        ),
        chunks[2],
    );
}

/// Full details for the selected movie
fn render_detail(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette, movie: &Movie) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // The details fetch fills in runtime, genres, and tagline
    if let Some(details) = state.movies.selected.as_ref().filter(|d| d.id == movie.id) {
        if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
            lines.push(Line::from(Span::styled(
                tagline.to_string(),
                Style::default().fg(to_color(palette.text_muted)),
            )));
            lines.push(Line::from(""));
        }
        let genres: Vec<String> = details.genres.iter().map(|g| g.name.clone()).collect();
        let runtime = details
            .runtime
            .map(|m| format!("{}m", m))
            .unwrap_or_else(|| "?".to_string());
        lines.push(Line::from(format!(
            "{} | {} | {:.1} ({} votes)",
            genres.join(", "),
            runtime,
            details.vote_average,
            details.vote_count,
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(details.overview.clone()));
    } else {
        lines.push(Line::from(movie.overview.clone()));
    }

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .style(Style::default().fg(to_color(palette.text)))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[0]);

    frame.render_widget(
        footer("Enter/b book seats | Esc back", palette, state.movies.loading),
        chunks[1],
    );
}

/// Date strip and showtime list
fn render_seat_booking(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    movie: &Movie,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // dates
            Constraint::Min(3),    // showtimes
            Constraint::Length(2), // footer
        ])
        .split(area);

    let dates: Vec<Span> = upcoming_dates(state.booking.today)
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let label = format!(" {} ", date.format("%a %d"));
            if i == state.booking.date_index {
                Span::styled(
                    label,
                    Style::default()
                        .fg(to_color(palette.accent))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(to_color(palette.text_muted)))
            }
        })
        .collect();
    let date_strip = Paragraph::new(Line::from(dates)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} - pick a date ", movie.title)),
    );
    frame.render_widget(date_strip, chunks[0]);

    let items: Vec<ListItem> = showtimes()
        .iter()
        .map(|s| {
            ListItem::new(format!(
                "{}  {}  {}$ + {} bonus",
                s.time, s.hall, s.price, s.bonus
            ))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Showtimes "))
        .highlight_style(
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.booking.showtime_index));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    frame.render_widget(
        footer(
            "←/→ date | ↑/↓ showtime | Enter seats | Esc back",
            palette,
            false,
        ),
        chunks[2],
    );
}

/// Booking summary awaiting the mock payment
fn render_payment(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    booking: &libcinescope::booking::BookingSummary,
) {
    let lines = vec![
        Line::from(Span::styled(
            booking.movie_title.clone(),
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} at {} ({})",
            booking.date, booking.showtime.time, booking.showtime.hall
        )),
        Line::from(format!("Seats: {}", booking.seats.join(", "))),
        Line::from(""),
        Line::from(Span::styled(
            format!("Total: {} {}", booking.total, booking.currency),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter to pay | Esc back"),
    ];

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Payment "))
        .style(Style::default().fg(to_color(palette.text)))
        .alignment(Alignment::Center);
    frame.render_widget(body, area);
}

/// Confirmation after the mock payment succeeded
fn render_receipt(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    receipt: &libcinescope::booking::PaymentReceipt,
) {
    let lines = vec![
        Line::from(Span::styled(
            "Booking confirmed",
            Style::default()
                .fg(to_color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(receipt.movie_title.clone()),
        Line::from(format!("Seats: {}", receipt.seats.join(", "))),
        Line::from(format!("Paid: {} {}", receipt.total, receipt.currency)),
        Line::from(""),
        Line::from(Span::styled(
            format!("Confirmation: {}", receipt.confirmation),
            Style::default().fg(to_color(palette.text_muted)),
        )),
        Line::from(""),
        Line::from("Enter to return home"),
    ];

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Receipt "))
        .style(Style::default().fg(to_color(palette.text)))
        .alignment(Alignment::Center);
    frame.render_widget(body, area);
}

/// Error banner with retry hint
fn render_error_overlay(frame: &mut Frame, area: Rect, palette: &Palette, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "r retry | Esc dismiss",
            Style::default().fg(to_color(palette.text_muted)),
        )),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
