//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to state transitions
//! through the reducer.

use cine_tui::app::{reduce, Action, AppState, FetchRequest, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libcinescope::catalog::MockCatalog;
use libcinescope::state::MovieAction;
use libcinescope::types::{GenreTile, MovieCategory, Page};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

fn seeded_home() -> AppState {
    let page = Page {
        page: 1,
        results: vec![
            MockCatalog::movie(1, "Dune"),
            MockCatalog::movie(2, "Dune: Part Two"),
        ],
        total_pages: 3,
        total_results: 6,
    };
    reduce(
        AppState::new(),
        Action::Movies(MovieAction::SetList {
            category: MovieCategory::Upcoming,
            page,
        }),
    )
}

#[test]
fn test_q_quits_application() {
    let state = press(AppState::new(), KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_t_toggles_theme() {
    let state = AppState::new();
    assert!(state.theme.dark_mode);

    let state = press(state, KeyCode::Char('t'));
    assert!(!state.theme.dark_mode);

    let state = press(state, KeyCode::Char('t'));
    assert!(state.theme.dark_mode);
}

#[test]
fn test_tab_cycles_categories_and_fetches() {
    let state = AppState::new();
    assert_eq!(state.home.category(), MovieCategory::Upcoming);

    let state = press(state, KeyCode::Tab);
    assert_eq!(state.home.category(), MovieCategory::Popular);
    // Empty collection triggers a fetch
    assert_eq!(
        state.pending_fetch,
        Some(FetchRequest::Category {
            category: MovieCategory::Popular,
            page: 1,
            append: false,
        })
    );
}

#[test]
fn test_left_wraps_around_categories() {
    let state = press(AppState::new(), KeyCode::Left);
    assert_eq!(state.home.category(), MovieCategory::NowPlaying);
}

#[test]
fn test_up_down_move_selection_within_bounds() {
    let state = seeded_home();
    assert_eq!(state.home.selected, 0);

    let state = press(state, KeyCode::Down);
    assert_eq!(state.home.selected, 1);

    // Only two movies loaded
    let state = press(state, KeyCode::Down);
    assert_eq!(state.home.selected, 1);

    let state = press(state, KeyCode::Up);
    let state = press(state, KeyCode::Up);
    assert_eq!(state.home.selected, 0);
}

#[test]
fn test_enter_opens_detail_and_fetches_it() {
    let state = press(seeded_home(), KeyCode::Enter);

    match &state.screen {
        Screen::MovieDetail { movie } => assert_eq!(movie.title, "Dune"),
        other => panic!("unexpected screen: {other:?}"),
    }
    assert_eq!(
        state.pending_fetch,
        Some(FetchRequest::Details { movie_id: 1 })
    );
}

#[test]
fn test_n_appends_next_page() {
    let state = press(seeded_home(), KeyCode::Char('n'));
    assert_eq!(
        state.pending_fetch,
        Some(FetchRequest::Category {
            category: MovieCategory::Upcoming,
            page: 2,
            append: true,
        })
    );
}

#[test]
fn test_n_stops_at_last_page() {
    let mut state = seeded_home();
    state.movies.upcoming.current_page = 3; // total_pages is 3

    let state = press(state, KeyCode::Char('n'));
    assert!(state.pending_fetch.is_none());
}

#[test]
fn test_slash_opens_search() {
    let state = press(AppState::new(), KeyCode::Char('/'));
    assert_eq!(state.screen, Screen::Search);
    assert_eq!(state.nav_stack, vec![Screen::Home]);
}

#[test]
fn test_g_fetches_genres() {
    let state = press(AppState::new(), KeyCode::Char('g'));
    assert_eq!(state.pending_fetch, Some(FetchRequest::Genres));
}

fn seeded_genres() -> AppState {
    let tiles = vec![
        GenreTile {
            id: 28,
            name: "Action".to_string(),
            backdrop_path: None,
        },
        GenreTile {
            id: 35,
            name: "Comedy".to_string(),
            backdrop_path: None,
        },
    ];
    reduce(AppState::new(), Action::Movies(MovieAction::SetGenres(tiles)))
}

#[test]
fn test_genre_cursor_stays_in_bounds() {
    let mut state = seeded_genres();
    for _ in 0..5 {
        state = press(state, KeyCode::Char(']'));
    }
    assert_eq!(state.home.genre_index, 1);

    for _ in 0..5 {
        state = press(state, KeyCode::Char('['));
    }
    assert_eq!(state.home.genre_index, 0);
}

#[test]
fn test_space_browses_highlighted_genre() {
    let state = press(seeded_genres(), KeyCode::Char(']'));
    let state = press(state, KeyCode::Char(' '));

    assert_eq!(state.screen, Screen::Search);
    assert_eq!(
        state.pending_fetch,
        Some(FetchRequest::Discover {
            genre_id: 35,
            page: 1,
        })
    );
}

#[test]
fn test_space_is_inert_without_genres() {
    let state = press(AppState::new(), KeyCode::Char(' '));
    assert_eq!(state.screen, Screen::Home);
    assert!(state.pending_fetch.is_none());
}

#[test]
fn test_esc_goes_back() {
    let state = press(AppState::new(), KeyCode::Char('/'));
    let state = press(state, KeyCode::Esc);
    assert_eq!(state.screen, Screen::Home);
}

#[test]
fn test_esc_dismisses_error_first() {
    let state = press(AppState::new(), KeyCode::Char('/'));
    let state = reduce(state, Action::Movies(MovieAction::SetError("boom".into())));

    let state = press(state, KeyCode::Esc);
    assert_eq!(state.movies.error, None);
    assert_eq!(state.screen, Screen::Search);
}

#[test]
fn test_r_retries_only_after_error() {
    let state = reduce(AppState::new(), Action::Fetch(FetchRequest::Genres));
    let mut state = state;
    state.pending_fetch = None;

    // No error yet: r is inert on the home screen
    let state = press(state, KeyCode::Char('r'));
    assert!(state.pending_fetch.is_none());

    let state = reduce(state, Action::Movies(MovieAction::SetError("boom".into())));
    let state = press(state, KeyCode::Char('r'));
    assert_eq!(state.pending_fetch, Some(FetchRequest::Genres));
    assert_eq!(state.movies.error, None);
}
