//! Seat map, pricing, and the mocked payment flow
//!
//! The auditorium layout, showtimes, and pricing are fixtures; there is no
//! shared inventory and no overbooking check. Everything here is pure over
//! in-memory state, and "payment" always succeeds without persisting
//! anything.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::config::BookingConfig;

/// Price class of a seat, a pure function of its row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatTier {
    Regular,
    Vip,
}

/// Render state of one seat, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Selected,
    Unavailable,
    Vip,
    Available,
}

/// Fixed auditorium layout.
///
/// Ten rows with an aisle gap: row 3 spans seats A..H, every other row
/// C..H. Seat ids are row number plus letter ("3F"). A fixed set of seats
/// is unavailable regardless of anything else.
#[derive(Debug, Clone)]
pub struct SeatMap {
    rows: Vec<Vec<String>>,
    unavailable: HashSet<String>,
    vip_row_start: usize,
}

const ROW_COUNT: u32 = 10;

const UNAVAILABLE_SEATS: [&str; 6] = ["2C", "3F", "5A", "6D", "7G", "8B"];

impl Default for SeatMap {
    fn default() -> Self {
        let mut rows = Vec::with_capacity(ROW_COUNT as usize);
        for row_number in 1..=ROW_COUNT {
            let letters = if row_number == 3 { 'A'..='H' } else { 'C'..='H' };
            rows.push(
                letters
                    .map(|letter| format!("{}{}", row_number, letter))
                    .collect(),
            );
        }

        Self {
            rows,
            unavailable: UNAVAILABLE_SEATS.iter().map(|s| s.to_string()).collect(),
            vip_row_start: BookingConfig::default().vip_row_start,
        }
    }
}

impl SeatMap {
    pub fn with_vip_row_start(mut self, vip_row_start: usize) -> Self {
        self.vip_row_start = vip_row_start;
        self
    }

    /// Seat ids per row, front of the auditorium first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Tier for a zero-based row index
    pub fn tier_for_row(&self, row_index: usize) -> SeatTier {
        if row_index >= self.vip_row_start {
            SeatTier::Vip
        } else {
            SeatTier::Regular
        }
    }

    /// Zero-based row index of a seat id, if the seat exists
    pub fn row_of(&self, seat_id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|s| s == seat_id))
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.row_of(seat_id).is_some()
    }

    pub fn is_unavailable(&self, seat_id: &str) -> bool {
        self.unavailable.contains(seat_id)
    }

    /// Render state of a seat given the current selection.
    ///
    /// Selected wins over unavailable, unavailable over VIP, VIP over
    /// available. Availability is checked before tier, so a blocked seat
    /// renders as taken even when it sits in a VIP row.
    pub fn status(&self, seat_id: &str, selection: &SeatSelection) -> SeatStatus {
        if selection.contains(seat_id) {
            return SeatStatus::Selected;
        }
        if self.is_unavailable(seat_id) {
            return SeatStatus::Unavailable;
        }
        match self.row_of(seat_id).map(|i| self.tier_for_row(i)) {
            Some(SeatTier::Vip) => SeatStatus::Vip,
            _ => SeatStatus::Available,
        }
    }
}

/// The seats picked so far, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatSelection {
    seats: Vec<String>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seats(&self) -> &[String] {
        &self.seats
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seats.iter().any(|s| s == seat_id)
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Select the seat if unselected, deselect it otherwise.
    ///
    /// Refused (returns false) for unavailable seats and seat ids not in
    /// the map.
    pub fn toggle(&mut self, map: &SeatMap, seat_id: &str) -> bool {
        if map.is_unavailable(seat_id) || !map.contains(seat_id) {
            return false;
        }
        if let Some(pos) = self.seats.iter().position(|s| s == seat_id) {
            self.seats.remove(pos);
        } else {
            self.seats.push(seat_id.to_string());
        }
        true
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }
}

/// Per-tier prices, taken from `[booking]` config
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    pub regular: u32,
    pub vip: u32,
    pub currency: String,
}

impl From<&BookingConfig> for PriceTable {
    fn from(config: &BookingConfig) -> Self {
        Self {
            regular: config.regular_price,
            vip: config.vip_price,
            currency: config.currency.clone(),
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::from(&BookingConfig::default())
    }
}

impl PriceTable {
    pub fn price_for(&self, tier: SeatTier) -> u32 {
        match tier {
            SeatTier::Regular => self.regular,
            SeatTier::Vip => self.vip,
        }
    }
}

/// Sum of the selected seats' tier prices; an empty selection costs 0
pub fn total(map: &SeatMap, prices: &PriceTable, selection: &SeatSelection) -> u32 {
    selection
        .seats()
        .iter()
        .filter_map(|seat| map.row_of(seat))
        .map(|row| prices.price_for(map.tier_for_row(row)))
        .sum()
}

/// One bookable screening slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showtime {
    pub time: &'static str,
    pub hall: &'static str,
    pub price: u32,
    pub bonus: u32,
}

/// The static showtime fixtures offered for every movie and date
pub fn showtimes() -> Vec<Showtime> {
    vec![
        Showtime {
            time: "12:30",
            hall: "Cinetech + Hall 1",
            price: 50,
            bonus: 2500,
        },
        Showtime {
            time: "13:30",
            hall: "Cinetech",
            price: 75,
            bonus: 300,
        },
        Showtime {
            time: "15:30",
            hall: "Cinetech + Hall 2",
            price: 60,
            bonus: 2800,
        },
    ]
}

/// The next seven bookable dates, starting today
pub fn upcoming_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|offset| today + Duration::days(offset)).collect()
}

/// Everything the payment step needs, passed by value between screens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub movie_id: u64,
    pub movie_title: String,
    pub showtime: Showtime,
    pub date: NaiveDate,
    pub seats: Vec<String>,
    pub total: u32,
    pub currency: String,
}

impl BookingSummary {
    pub fn new(
        movie_id: u64,
        movie_title: String,
        showtime: Showtime,
        date: NaiveDate,
        map: &SeatMap,
        prices: &PriceTable,
        selection: &SeatSelection,
    ) -> Self {
        Self {
            movie_id,
            movie_title,
            showtime,
            date,
            seats: selection.seats().to_vec(),
            total: total(map, prices, selection),
            currency: prices.currency.clone(),
        }
    }
}

/// Outcome of the mocked payment step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub confirmation: String,
    pub movie_title: String,
    pub seats: Vec<String>,
    pub total: u32,
    pub currency: String,
}

/// "Charge" the booking. Always succeeds, persists nothing.
pub fn confirm_payment(summary: &BookingSummary) -> PaymentReceipt {
    PaymentReceipt {
        confirmation: Uuid::new_v4().to_string(),
        movie_title: summary.movie_title.clone(),
        seats: summary.seats.clone(),
        total: summary.total,
        currency: summary.currency.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shape() {
        let map = SeatMap::default();
        assert_eq!(map.rows().len(), 10);
        // Row 3 (index 2) spans the aisle
        assert_eq!(map.rows()[2].len(), 8);
        assert_eq!(map.rows()[2][0], "3A");
        for (i, row) in map.rows().iter().enumerate() {
            if i != 2 {
                assert_eq!(row.len(), 6, "row index {i}");
                assert!(row[0].ends_with('C'));
            }
        }
    }

    #[test]
    fn test_tier_threshold_every_row() {
        let map = SeatMap::default();
        for row_index in 0..map.rows().len() {
            let expected = if row_index >= 8 {
                SeatTier::Vip
            } else {
                SeatTier::Regular
            };
            assert_eq!(map.tier_for_row(row_index), expected, "row index {row_index}");
        }
    }

    #[test]
    fn test_row_of() {
        let map = SeatMap::default();
        assert_eq!(map.row_of("1C"), Some(0));
        assert_eq!(map.row_of("3A"), Some(2));
        assert_eq!(map.row_of("10H"), Some(9));
        assert_eq!(map.row_of("1A"), None);
        assert_eq!(map.row_of("11C"), None);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let map = SeatMap::default();
        let mut selection = SeatSelection::new();

        assert!(selection.toggle(&map, "4D"));
        assert!(selection.contains("4D"));
        assert!(selection.toggle(&map, "4D"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_refuses_unavailable_and_unknown() {
        let map = SeatMap::default();
        let mut selection = SeatSelection::new();

        assert!(!selection.toggle(&map, "3F"));
        assert!(!selection.toggle(&map, "2C"));
        assert!(!selection.toggle(&map, "1A"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_preserves_order() {
        let map = SeatMap::default();
        let mut selection = SeatSelection::new();
        selection.toggle(&map, "4D");
        selection.toggle(&map, "1C");
        selection.toggle(&map, "9E");
        assert_eq!(selection.seats(), ["4D", "1C", "9E"]);
    }

    #[test]
    fn test_total_mixes_tiers() {
        let map = SeatMap::default();
        let prices = PriceTable::default();
        let mut selection = SeatSelection::new();

        assert_eq!(total(&map, &prices, &selection), 0);

        selection.toggle(&map, "4D"); // regular, 50
        selection.toggle(&map, "9E"); // vip, 150
        selection.toggle(&map, "10H"); // vip, 150
        assert_eq!(total(&map, &prices, &selection), 350);

        selection.toggle(&map, "9E");
        assert_eq!(total(&map, &prices, &selection), 200);
    }

    #[test]
    fn test_status_precedence() {
        let map = SeatMap::default();
        let mut selection = SeatSelection::new();
        selection.toggle(&map, "9E");

        assert_eq!(map.status("9E", &selection), SeatStatus::Selected);
        assert_eq!(map.status("3F", &selection), SeatStatus::Unavailable);
        assert_eq!(map.status("10H", &selection), SeatStatus::Vip);
        assert_eq!(map.status("4D", &selection), SeatStatus::Available);
    }

    #[test]
    fn test_unavailable_wins_over_vip_tier() {
        // Lower the threshold so row 2 is VIP; 2C is in the fixed
        // unavailable set and must still render as taken
        let map = SeatMap::default().with_vip_row_start(1);
        let selection = SeatSelection::new();

        assert_eq!(map.tier_for_row(1), SeatTier::Vip);
        assert_eq!(map.status("2C", &selection), SeatStatus::Unavailable);
        assert!(!SeatSelection::new().toggle(&map, "2C"));
    }

    #[test]
    fn test_custom_vip_threshold() {
        let map = SeatMap::default().with_vip_row_start(5);
        assert_eq!(map.tier_for_row(4), SeatTier::Regular);
        assert_eq!(map.tier_for_row(5), SeatTier::Vip);
    }

    #[test]
    fn test_showtime_fixtures() {
        let slots = showtimes();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].time, "12:30");
        assert_eq!(slots[0].hall, "Cinetech + Hall 1");
        assert_eq!(slots[1].price, 75);
        assert_eq!(slots[2].bonus, 2800);
    }

    #[test]
    fn test_upcoming_dates_seven_consecutive() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
        let dates = upcoming_dates(today);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], today);
        // Crosses the month boundary
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_booking_summary_and_payment() {
        let map = SeatMap::default();
        let prices = PriceTable::default();
        let mut selection = SeatSelection::new();
        selection.toggle(&map, "4D");
        selection.toggle(&map, "9E");

        let summary = BookingSummary::new(
            634649,
            "Spider-Man: No Way Home".to_string(),
            showtimes()[0].clone(),
            NaiveDate::from_ymd_opt(2024, 3, 30).unwrap(),
            &map,
            &prices,
            &selection,
        );
        assert_eq!(summary.total, 200);
        assert_eq!(summary.seats, ["4D", "9E"]);

        let receipt = confirm_payment(&summary);
        assert_eq!(receipt.total, 200);
        assert_eq!(receipt.seats, summary.seats);
        assert!(!receipt.confirmation.is_empty());

        // Each payment gets its own confirmation id
        let other = confirm_payment(&summary);
        assert_ne!(receipt.confirmation, other.confirmation);
    }
}
