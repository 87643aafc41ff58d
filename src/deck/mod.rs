// src/deck/mod.rs
// The vocabulary deck: rows as they come out of the CSV, and cards as they sit in the database.

pub mod loader;

use chrono::NaiveDateTime;

/// Timestamp layout used by the review app for `age`, `ctime` and `statistics.time`,
/// e.g. 03:01:2021:18:07:13.
pub const REVIEW_TIME_FORMAT: &str = "%m:%d:%Y:%H:%M:%S";

/// One validated data row of the source CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub popularity: i64, // Frequency rank, 1 is the most common word
    pub front: String,
    pub back: String,
}

/// The most recent `statistics` row for a card, mirrored onto `cards` so the
/// review app can pick due cards without scanning the history.
/// Everything is empty (or zero for the counters) until the first review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentStats {
    pub sintvl: Option<i64>,   // Days until the card is due; 0 means again this session
    pub iintvl: Option<i64>,   // Seconds since the previous viewing
    pub nrev: i64,             // Number of reviews so far
    pub time: Option<NaiveDateTime>,
    pub sess_count: Option<i64>,
    pub vtime: Option<i64>,    // Seconds spent looking at the card
    pub rdr: Option<bool>,     // Remembered or not
    pub card_sess_count: i64,  // Sessions this card has appeared in
    pub riar: i64,             // Remembered in a row
}

/// Represents a single row of the `cards` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub popularity: i64,
    // Either the word itself or the path of its rendered image.
    pub front: String,
    pub back: String,
    // When the user first saw the card; None if it has never been shown.
    pub age: Option<NaiveDateTime>,
    pub current: CurrentStats,
    pub fin_sess: Option<bool>,
    // Deck the card was in when the app closed mid-session. None once fin_sess is set.
    pub deck: Option<i64>,
}

impl Card {
    /// True until the review app logs the first review for this card.
    pub fn is_new(&self) -> bool {
        self.age.is_none() && self.current.nrev == 0
    }
}
