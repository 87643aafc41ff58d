// src/storage/schema.rs
// The two tables the review app works from. Created empty; the app owns every change after seeding.

use rusqlite::Connection;

use crate::error::Result;

// One row per card. Leading c's mean "current": each c-column mirrors the
// latest statistics row for the card, so the app can pick due cards without
// walking the history.
//   popularity       frequency rank, 1 is the most common word; identifies the card
//   front            the word, or the path of its rendered image
//   back             definitions, paragraph breaks stored as char(13, 13)
//   age              when the card was first seen (MM:dd:yyyy:HH:mm:ss); NULL if never
//   csintvl          days until due; 0 selects the card for review
//   fin_sess         0 if the app closed before the card's review finished, 1 otherwise
//   deck             NULL when fin_sess is 1, else the deck the card was sitting in
const CREATE_CARDS: &str = "CREATE TABLE IF NOT EXISTS cards (
    popularity       INTEGER NOT NULL UNIQUE,
    front            TEXT,
    back             TEXT,
    age              TEXT,
    csintvl          INTEGER,
    ciintvl          INTEGER,
    cnrev            INTEGER DEFAULT 0,
    ctime            TEXT,
    csess_count      INTEGER,
    cvtime           INTEGER,
    crdr             INTEGER,
    ccard_sess_count INTEGER DEFAULT 0,
    criar            INTEGER DEFAULT 0,
    fin_sess         INTEGER,
    deck             INTEGER
)";

// Append-only review log, one row per review.
//   sintvl           days until the next review; 0 means again this session
//   iintvl           seconds since the card was last seen; NULL on first viewing
//   nrev             times the card has been seen, this review included
//   rdr              1 remembered, 0 not
//   vtime            seconds spent looking at the card
//   sess_count       session the review happened in
//   card_sess_count  sessions the card has appeared in
//   riar             remembered in a row
const CREATE_STATISTICS: &str = "CREATE TABLE IF NOT EXISTS statistics (
    popularity       INTEGER REFERENCES cards (popularity),
    sintvl           INTEGER,
    iintvl           INTEGER,
    nrev             INTEGER DEFAULT 0,
    time             TEXT,
    rdr              INTEGER,
    vtime            INTEGER,
    sess_count       INTEGER,
    card_sess_count  INTEGER DEFAULT 0,
    riar             INTEGER DEFAULT 0
)";

/// Creates `cards` and `statistics` if they don't already exist.
/// Safe to run against a database that already has them.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_CARDS, [])?;
    conn.execute(CREATE_STATISTICS, [])?;
    Ok(())
}
