//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State` with no side effects. Fetches and the mock
//! payment are queued in `pending_fetch` / `pending_payment`; the main
//! loop drains those and performs the actual work through the service
//! layer, feeding results back as `Action::Movies(..)`.

use crossterm::event::{KeyCode, KeyModifiers};
use libcinescope::booking::{upcoming_dates, showtimes, BookingSummary};
use libcinescope::state::{movies, theme, MovieAction, ThemeAction};

use super::actions::{Action, FetchRequest, Screen};
use super::state::AppState;

/// Pure reducer function
///
/// Takes current state and an action, returns new state. Deterministic:
/// no I/O, no clock reads, no randomness.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::Navigate(screen) => {
            let previous = std::mem::replace(&mut state.screen, screen);
            state.nav_stack.push(previous);
            state
        }

        Action::Back => {
            // Leaving seat selection abandons the picked seats
            if matches!(state.screen, Screen::SeatSelection { .. }) {
                state.booking.selection.clear();
                state.booking.cursor_row = 0;
                state.booking.cursor_col = 0;
            }
            if let Some(previous) = state.nav_stack.pop() {
                state.screen = previous;
            }
            state
        }

        Action::Quit => {
            state.should_quit = true;
            state
        }

        Action::ToggleTheme => {
            state.theme = theme::reduce(state.theme, ThemeAction::Toggle);
            state
        }

        // === Fetching ===
        Action::Fetch(request) => queue_fetch(state, request),

        Action::Retry => {
            if let Some(request) = state.last_fetch.clone() {
                state.movies = movies::reduce(state.movies, MovieAction::ClearError);
                queue_fetch(state, request)
            } else {
                state
            }
        }

        Action::Movies(movie_action) => {
            state.movies = movies::reduce(state.movies, movie_action);
            state
        }

        // === Search ===
        Action::SearchInputChanged(query) => {
            state.search.query = query;
            state
        }

        Action::SearchSubmitted => {
            let query = state.search.query.trim().to_string();
            if query.is_empty() {
                return state;
            }
            state.search.selected = 0;
            queue_fetch(
                state,
                FetchRequest::Search {
                    query,
                    page: 1,
                    append: false,
                },
            )
        }

        // === Booking ===
        Action::ToggleSeat(seat_id) => {
            let map = state.booking.seat_map.clone();
            state.booking.selection.toggle(&map, &seat_id);
            state
        }

        Action::PaymentConfirmed { booking: _, receipt } => {
            state.booking.selection.clear();
            state.booking.cursor_row = 0;
            state.booking.cursor_col = 0;
            let previous = std::mem::replace(&mut state.screen, Screen::Receipt { receipt });
            state.nav_stack.push(previous);
            state
        }
    }
}

/// Record a fetch for retry, queue it for the main loop, flip loading
fn queue_fetch(mut state: AppState, request: FetchRequest) -> AppState {
    let append = matches!(
        request,
        FetchRequest::Category { append: true, .. } | FetchRequest::Search { append: true, .. }
    );
    if !append {
        state.movies = movies::reduce(state.movies, MovieAction::SetLoading(true));
    }
    state.last_fetch = Some(request.clone());
    state.pending_fetch = Some(request);
    state
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
/// Printable characters never reach here while the search input has focus;
/// the main loop routes those to the textarea.
fn handle_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            return reduce(state, Action::ToggleTheme);
        }

        // Dismiss the error banner before navigating back
        (KeyCode::Esc, _) if state.movies.error.is_some() => {
            return reduce(state, Action::Movies(MovieAction::ClearError));
        }

        (KeyCode::Esc, _) => {
            return reduce(state, Action::Back);
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) if state.movies.error.is_some() => {
            return reduce(state, Action::Retry);
        }

        _ => {}
    }

    // Screen-specific keybindings
    match state.screen.clone() {
        Screen::Home => handle_home_key(state, key),
        Screen::Search => handle_search_key(state, key),
        Screen::MovieDetail { movie } => match key.code {
            KeyCode::Enter | KeyCode::Char('b') => {
                reduce(state, Action::Navigate(Screen::SeatBooking { movie }))
            }
            _ => state,
        },
        Screen::SeatBooking { movie } => handle_seat_booking_key(state, key, movie),
        Screen::SeatSelection {
            movie,
            showtime_index,
            date,
        } => handle_seat_selection_key(state, key, movie, showtime_index, date),
        Screen::Payment { booking } => match key.code {
            KeyCode::Enter => {
                let mut state = state;
                state.pending_payment = Some(booking);
                state
            }
            _ => state,
        },
        Screen::Receipt { .. } => match key.code {
            KeyCode::Enter => {
                // The flow is done; unwind straight to home
                let mut state = state;
                state.nav_stack.clear();
                state.screen = Screen::Home;
                state
            }
            _ => state,
        },
    }
}

fn handle_home_key(mut state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    use libcinescope::types::MovieCategory;

    let category_count = MovieCategory::ALL.len();

    match key.code {
        KeyCode::Right | KeyCode::Tab => {
            state.home.category_index = (state.home.category_index + 1) % category_count;
            state.home.selected = 0;
            let category = state.home.category();
            fetch_category_if_empty(state, category)
        }
        KeyCode::Left => {
            state.home.category_index =
                (state.home.category_index + category_count - 1) % category_count;
            state.home.selected = 0;
            let category = state.home.category();
            fetch_category_if_empty(state, category)
        }
        KeyCode::Down => {
            let len = state.movies.collection(state.home.category()).movies.len();
            if len > 0 && state.home.selected + 1 < len {
                state.home.selected += 1;
            }
            state
        }
        KeyCode::Up => {
            state.home.selected = state.home.selected.saturating_sub(1);
            state
        }
        KeyCode::Char('n') => {
            let category = state.home.category();
            let collection = state.movies.collection(category);
            if collection.has_more() {
                let page = collection.current_page + 1;
                reduce(
                    state,
                    Action::Fetch(FetchRequest::Category {
                        category,
                        page,
                        append: true,
                    }),
                )
            } else {
                state
            }
        }
        KeyCode::Char('/') => reduce(state, Action::Navigate(Screen::Search)),
        KeyCode::Char('g') => reduce(state, Action::Fetch(FetchRequest::Genres)),
        KeyCode::Char(']') => {
            let len = state.movies.genres.len();
            if len > 0 && state.home.genre_index + 1 < len {
                state.home.genre_index += 1;
            }
            state
        }
        KeyCode::Char('[') => {
            state.home.genre_index = state.home.genre_index.saturating_sub(1);
            state
        }
        // Browse the highlighted genre; results land in the search list
        KeyCode::Char(' ') => {
            let genre_id = state
                .movies
                .genres
                .get(state.home.genre_index)
                .map(|tile| tile.id);
            match genre_id {
                Some(genre_id) => {
                    state.search.selected = 0;
                    state.search.query.clear();
                    let state = reduce(state, Action::Navigate(Screen::Search));
                    reduce(
                        state,
                        Action::Fetch(FetchRequest::Discover { genre_id, page: 1 }),
                    )
                }
                None => state,
            }
        }
        KeyCode::Enter => {
            let category = state.home.category();
            let movie = state
                .movies
                .collection(category)
                .movies
                .get(state.home.selected)
                .cloned();
            match movie {
                Some(movie) => {
                    let movie_id = movie.id;
                    let state = reduce(state, Action::Navigate(Screen::MovieDetail { movie }));
                    reduce(state, Action::Fetch(FetchRequest::Details { movie_id }))
                }
                None => state,
            }
        }
        _ => state,
    }
}

fn fetch_category_if_empty(
    state: AppState,
    category: libcinescope::types::MovieCategory,
) -> AppState {
    if state.movies.collection(category).movies.is_empty() {
        reduce(
            state,
            Action::Fetch(FetchRequest::Category {
                category,
                page: 1,
                append: false,
            }),
        )
    } else {
        state
    }
}

fn handle_search_key(mut state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, KeyModifiers::NONE) => reduce(state, Action::SearchSubmitted),

        // Next page of results
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            let collection = &state.movies.search_results;
            if collection.has_more() && !state.search.query.trim().is_empty() {
                let request = FetchRequest::Search {
                    query: state.search.query.trim().to_string(),
                    page: collection.current_page + 1,
                    append: true,
                };
                reduce(state, Action::Fetch(request))
            } else {
                state
            }
        }

        (KeyCode::Down, _) => {
            let len = state.movies.search_results.movies.len();
            if len > 0 && state.search.selected + 1 < len {
                state.search.selected += 1;
            }
            state
        }
        (KeyCode::Up, _) => {
            state.search.selected = state.search.selected.saturating_sub(1);
            state
        }

        // Open the selected result
        (KeyCode::Right, _) => {
            let movie = state
                .movies
                .search_results
                .movies
                .get(state.search.selected)
                .cloned();
            match movie {
                Some(movie) => {
                    let movie_id = movie.id;
                    let state = reduce(state, Action::Navigate(Screen::MovieDetail { movie }));
                    reduce(state, Action::Fetch(FetchRequest::Details { movie_id }))
                }
                None => state,
            }
        }

        _ => state,
    }
}

fn handle_seat_booking_key(
    mut state: AppState,
    key: crossterm::event::KeyEvent,
    movie: libcinescope::types::Movie,
) -> AppState {
    match key.code {
        KeyCode::Right => {
            if state.booking.date_index + 1 < upcoming_dates(state.booking.today).len() {
                state.booking.date_index += 1;
            }
            state
        }
        KeyCode::Left => {
            state.booking.date_index = state.booking.date_index.saturating_sub(1);
            state
        }
        KeyCode::Down => {
            if state.booking.showtime_index + 1 < showtimes().len() {
                state.booking.showtime_index += 1;
            }
            state
        }
        KeyCode::Up => {
            state.booking.showtime_index = state.booking.showtime_index.saturating_sub(1);
            state
        }
        KeyCode::Enter => {
            let date = upcoming_dates(state.booking.today)[state.booking.date_index];
            let showtime_index = state.booking.showtime_index;
            reduce(
                state,
                Action::Navigate(Screen::SeatSelection {
                    movie,
                    showtime_index,
                    date,
                }),
            )
        }
        _ => state,
    }
}

fn handle_seat_selection_key(
    mut state: AppState,
    key: crossterm::event::KeyEvent,
    movie: libcinescope::types::Movie,
    showtime_index: usize,
    date: chrono::NaiveDate,
) -> AppState {
    let row_count = state.booking.seat_map.rows().len();

    match key.code {
        KeyCode::Down => {
            if state.booking.cursor_row + 1 < row_count {
                state.booking.cursor_row += 1;
                clamp_cursor_col(&mut state);
            }
            state
        }
        KeyCode::Up => {
            state.booking.cursor_row = state.booking.cursor_row.saturating_sub(1);
            clamp_cursor_col(&mut state);
            state
        }
        KeyCode::Right => {
            let row_len = state
                .booking
                .seat_map
                .rows()
                .get(state.booking.cursor_row)
                .map(Vec::len)
                .unwrap_or(0);
            if state.booking.cursor_col + 1 < row_len {
                state.booking.cursor_col += 1;
            }
            state
        }
        KeyCode::Left => {
            state.booking.cursor_col = state.booking.cursor_col.saturating_sub(1);
            state
        }
        KeyCode::Char(' ') => {
            let seat = state.booking.seat_under_cursor().map(str::to_string);
            match seat {
                Some(seat_id) => reduce(state, Action::ToggleSeat(seat_id)),
                None => state,
            }
        }
        KeyCode::Enter => {
            if state.booking.selection.is_empty() {
                return state;
            }
            let showtime = showtimes()[showtime_index].clone();
            let booking = BookingSummary::new(
                movie.id,
                movie.title.clone(),
                showtime,
                date,
                &state.booking.seat_map,
                &state.booking.prices,
                &state.booking.selection,
            );
            reduce(state, Action::Navigate(Screen::Payment { booking }))
        }
        _ => state,
    }
}

/// Keep the seat cursor inside the current row (row 3 is wider)
fn clamp_cursor_col(state: &mut AppState) {
    let row_len = state
        .booking
        .seat_map
        .rows()
        .get(state.booking.cursor_row)
        .map(Vec::len)
        .unwrap_or(0);
    if row_len > 0 && state.booking.cursor_col >= row_len {
        state.booking.cursor_col = row_len - 1;
    }
}
