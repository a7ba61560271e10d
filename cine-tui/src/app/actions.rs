//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Fetch requests are
//! actions too: the reducer records them (for retry) and flips the loading
//! flag, while the actual network call happens in the main loop via the
//! service layer. Results come back as `Action::Movies(..)`.

use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use libcinescope::booking::{BookingSummary, PaymentReceipt};
use libcinescope::state::MovieAction;
use libcinescope::types::{Movie, MovieCategory};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Push a screen onto the navigation stack
    Navigate(Screen),

    /// Pop back to the previous screen
    Back,

    /// Quit the application
    Quit,

    /// Flip between the light and dark palette
    ToggleTheme,

    // === Fetching ===
    /// Request a fetch; the service layer performs it
    Fetch(FetchRequest),

    /// Re-dispatch the last fetch after a failure
    Retry,

    /// A catalog result or failure, committed through the movie reducer
    Movies(MovieAction),

    // === Search ===
    /// Search input content changed
    SearchInputChanged(String),

    /// Submit the current search query
    SearchSubmitted,

    // === Booking ===
    /// Toggle the seat under the cursor
    ToggleSeat(String),

    /// Payment confirmed with a receipt (produced outside the reducer)
    PaymentConfirmed {
        booking: BookingSummary,
        receipt: PaymentReceipt,
    },
}

/// Screen identifier; variants carry the data the screen needs
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Category tabs + movie list + genre tiles
    Home,

    /// Search input + results
    Search,

    /// Full details for one movie
    MovieDetail { movie: Movie },

    /// Date and showtime picker
    SeatBooking { movie: Movie },

    /// Seat map grid
    SeatSelection {
        movie: Movie,
        showtime_index: usize,
        date: NaiveDate,
    },

    /// Mock payment over a finished booking
    Payment { booking: BookingSummary },

    /// Confirmation after the mock payment
    Receipt { receipt: PaymentReceipt },
}

/// A fetch the service layer knows how to perform.
///
/// Kept in state as `last_fetch` so a failed request can be retried.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    Category {
        category: MovieCategory,
        page: u32,
        append: bool,
    },
    Search {
        query: String,
        page: u32,
        append: bool,
    },
    Discover {
        genre_id: u64,
        page: u32,
    },
    Details {
        movie_id: u64,
    },
    Genres,
}
