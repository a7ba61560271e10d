//! Application state
//!
//! Single source of truth for the TUI. All transitions happen through the
//! reducer (see `reducer.rs`); the movie and theme sub-states are reduced
//! by the library's own reducers.

use libcinescope::booking::{PriceTable, SeatMap, SeatSelection};
use libcinescope::state::{MovieState, ThemeState};
use libcinescope::types::MovieCategory;

use super::actions::{FetchRequest, Screen};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Screen currently shown
    pub screen: Screen,

    /// Screens beneath the current one; `Back` pops
    pub nav_stack: Vec<Screen>,

    /// Browsing results, reduced by the library reducer
    pub movies: MovieState,

    /// Light/dark palette selection
    pub theme: ThemeState,

    /// Home screen state
    pub home: HomeState,

    /// Search screen state
    pub search: SearchState,

    /// Seat booking state, shared by the booking screens
    pub booking: BookingState,

    /// Last fetch issued, re-dispatched by `Retry`
    pub last_fetch: Option<FetchRequest>,

    /// Fetch queued by the reducer for the main loop to execute
    pub pending_fetch: Option<FetchRequest>,

    /// Payment queued by the reducer for the main loop to execute
    pub pending_payment: Option<libcinescope::booking::BookingSummary>,

    /// UI configuration
    pub config: UiConfig,
}

/// Home screen state: category tabs, list cursor, genre cursor
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// Index into `MovieCategory::ALL`
    pub category_index: usize,

    /// Cursor in the current category's movie list
    pub selected: usize,

    /// Cursor in the genre strip (meaningful once genres are loaded)
    pub genre_index: usize,
}

impl HomeState {
    pub fn category(&self) -> MovieCategory {
        MovieCategory::ALL[self.category_index % MovieCategory::ALL.len()]
    }
}

/// Search screen state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current query text (mirrors the textarea)
    pub query: String,

    /// Cursor in the results list
    pub selected: usize,
}

/// Booking flow state
#[derive(Debug, Clone)]
pub struct BookingState {
    pub seat_map: SeatMap,
    pub prices: PriceTable,
    pub selection: SeatSelection,

    /// First bookable date; the strip shows this day and the six after it
    pub today: chrono::NaiveDate,

    /// Cursor over the date strip
    pub date_index: usize,

    /// Cursor over the showtime list
    pub showtime_index: usize,

    /// Seat cursor (zero-based row, column within that row)
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            seat_map: SeatMap::default(),
            prices: PriceTable::default(),
            selection: SeatSelection::new(),
            today: chrono::Local::now().date_naive(),
            date_index: 0,
            showtime_index: 0,
            cursor_row: 0,
            cursor_col: 0,
        }
    }
}

impl BookingState {
    /// Seat id under the cursor
    pub fn seat_under_cursor(&self) -> Option<&str> {
        self.seat_map
            .rows()
            .get(self.cursor_row)
            .and_then(|row| row.get(self.cursor_col))
            .map(String::as_str)
    }

    /// Total price of the current selection
    pub fn total(&self) -> u32 {
        libcinescope::booking::total(&self.seat_map, &self.prices, &self.selection)
    }
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let tick_rate_ms = std::env::var("CINE_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self { tick_rate_ms }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Home,
            nav_stack: Vec::new(),
            movies: MovieState::default(),
            theme: ThemeState::default(),
            home: HomeState::default(),
            search: SearchState::default(),
            booking: BookingState::default(),
            last_fetch: None,
            pending_fetch: None,
            pending_payment: None,
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }
}
