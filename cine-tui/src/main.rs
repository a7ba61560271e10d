//! cine-tui - Terminal UI for Cinescope
//!
//! Walks the whole flow: category browsing, search, movie details,
//! date/showtime selection, seat picking, and the mock payment.

use cine_tui::{
    app::{event::EventHandler, reduce, Action, AppState, FetchRequest, Screen},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};
use crossterm::event::{KeyCode, KeyModifiers};
use libcinescope::booking::confirm_payment;
use libcinescope::types::MovieCategory;

fn main() -> Result<()> {
    // Logs go to stderr; redirect with 2>cine-tui.log to keep the screen clean
    libcinescope::logging::init_default();

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut cine_tui::terminal::Tui) -> Result<()> {
    let mut state = AppState::new();

    let services = ServiceHandle::new()?;
    let results_rx = services.results();

    // Search input is a stateful widget owned by the loop
    let mut textarea = tui_textarea::TextArea::default();
    textarea.set_placeholder_text("Search movies... (Enter to search, Esc to go back)");

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Seed the home screen
    state = reduce(
        state,
        Action::Fetch(FetchRequest::Category {
            category: MovieCategory::Upcoming,
            page: 1,
            append: false,
        }),
    );

    loop {
        textarea.set_block(
            ratatui::widgets::Block::default()
                .title(" Search ")
                .borders(ratatui::widgets::Borders::ALL),
        );

        terminal.draw(|frame| {
            ui::render(frame, &state, &textarea);
        })?;

        let tui_event = event_handler.next()?;

        // Route printable keys to the search input while it has focus
        let action = match tui_event {
            cine_tui::app::event::TuiEvent::Key(key) => {
                let in_search = state.screen == Screen::Search;
                let is_reserved = matches!(
                    (key.code, key.modifiers),
                    (KeyCode::Esc, _)
                        | (KeyCode::Enter, _)
                        | (KeyCode::Up, _)
                        | (KeyCode::Down, _)
                        | (KeyCode::Right, _)
                        | (KeyCode::Char('n'), KeyModifiers::CONTROL)
                );

                if in_search && !is_reserved {
                    textarea.input(key);
                    let query = textarea.lines().join(" ");
                    Action::SearchInputChanged(query)
                } else {
                    Action::Key(key)
                }
            }
            other => other.into(),
        };

        state = reduce(state, action);

        // Commit catalog results that arrived since the last frame
        while let Ok(movie_action) = results_rx.try_recv() {
            state = reduce(state, Action::Movies(movie_action));
        }

        // Execute queued side effects
        if let Some(request) = state.pending_fetch.take() {
            services.dispatch(request);
        }
        if let Some(booking) = state.pending_payment.take() {
            let receipt = confirm_payment(&booking);
            state = reduce(state, Action::PaymentConfirmed { booking, receipt });
        }

        // Keep the textarea in sync when the query is cleared elsewhere
        if state.search.query.is_empty() && !textarea.is_empty() {
            textarea = tui_textarea::TextArea::default();
            textarea.set_placeholder_text("Search movies... (Enter to search, Esc to go back)");
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
