// src/storage/db.rs
// Manages the SQLite database the review app reads its cards from.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, Row};

use super::schema;
use crate::deck::{Card, CardRow, CurrentStats, REVIEW_TIME_FORMAT};
use crate::error::{Result, SeedError};
use crate::render::image_path;

/// A paragraph break the way it is typed into the CSV: backslash-n, twice.
pub const PARAGRAPH_BREAK: &str = "\\n\\n";
/// A paragraph break the way it is stored in `cards.back`: char(13, 13).
/// SQLite has no escape for newlines in the review app's queries, so two
/// carriage returns stand in for them.
pub const STORED_PARAGRAPH_BREAK: &str = "\r\r";

pub fn encode_paragraph_breaks(text: &str) -> String {
    text.replace(PARAGRAPH_BREAK, STORED_PARAGRAPH_BREAK)
}

#[cfg(test)]
pub fn decode_paragraph_breaks(text: &str) -> String {
    text.replace(STORED_PARAGRAPH_BREAK, PARAGRAPH_BREAK)
}

/// What goes into `cards.front`.
#[derive(Debug, Clone, Copy)]
pub enum FrontMode<'a> {
    /// The front text as-is.
    Text,
    /// The path of the row's rendered image in this directory.
    Images(&'a Path),
}

pub struct DatabaseManager {
    conn: Connection,
    name: String,
}

impl DatabaseManager {
    /// Opens (creating if needed) the database file and makes sure both tables exist.
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::create_schema(&conn)?;
        register_functions(&conn)?;

        let name = path.display().to_string();
        let full_path = fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path));
        log::info!("'{}' created", name);
        log::info!("Path to DB file: {}", full_path.display());

        Ok(DatabaseManager { conn, name })
    }

    #[cfg(test)]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Inserts one card per row, in order, then converts the paragraph breaks in
    /// every `back`. All of it happens in one transaction: the first bad row
    /// rolls back everything inserted before it.
    /// Returns the number of cards inserted.
    pub fn populate<I>(&mut self, rows: I, mode: FrontMode<'_>) -> Result<usize>
    where
        I: IntoIterator<Item = Result<CardRow>>,
    {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut insert = tx.prepare("INSERT INTO cards (popularity, front, back) VALUES (?1, ?2, ?3)")?;
            for (index, row) in rows.into_iter().enumerate() {
                let row = row?;
                let front = match mode {
                    FrontMode::Text => row.front,
                    FrontMode::Images(dir) => {
                        let path = image_path(dir, index);
                        if !path.is_file() {
                            return Err(SeedError::MissingImage { index, path });
                        }
                        path.to_string_lossy().into_owned()
                    }
                };
                insert.execute(params![row.popularity, front, row.back])?;
                inserted += 1;
            }
        }

        // Once over the whole table after the bulk insert, not per row.
        tx.execute("UPDATE cards SET back = encode_paragraph_breaks(back)", [])?;
        tx.commit()?;

        log::info!("'{}' populated with {} cards", self.name, inserted);
        Ok(inserted)
    }

    /// Every card in insertion order, `back` exactly as stored.
    pub fn cards(&self) -> Result<Vec<Card>> {
        let mut stmt = self.conn.prepare(
            "SELECT popularity, front, back, age, csintvl, ciintvl, cnrev, ctime, csess_count,
                    cvtime, crdr, ccard_sess_count, criar, fin_sess, deck
             FROM cards ORDER BY rowid",
        )?;
        let cards_iter = stmt.query_map([], |row| {
            Ok(Card {
                popularity: row.get(0)?,
                front: row.get(1)?,
                back: row.get(2)?,
                age: review_time(row, 3)?,
                current: CurrentStats {
                    sintvl: row.get(4)?,
                    iintvl: row.get(5)?,
                    nrev: row.get::<_, Option<i64>>(6)?.unwrap_or(0),
                    time: review_time(row, 7)?,
                    sess_count: row.get(8)?,
                    vtime: row.get(9)?,
                    rdr: row.get(10)?,
                    card_sess_count: row.get::<_, Option<i64>>(11)?.unwrap_or(0),
                    riar: row.get::<_, Option<i64>>(12)?.unwrap_or(0),
                },
                fin_sess: row.get(13)?,
                deck: row.get(14)?,
            })
        })?;

        let mut cards = Vec::new();
        for card in cards_iter {
            cards.push(card?);
        }
        Ok(cards)
    }

    /// Number of rows in `statistics`.
    pub fn review_count(&self) -> Result<i64> {
        let count = self.conn.query_row("SELECT COUNT(*) FROM statistics", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Makes `encode_paragraph_breaks` callable from SQL on this connection, so the bulk
/// update and the Rust helper can never disagree about the stored form.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "encode_paragraph_breaks",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|text| encode_paragraph_breaks(&text)))
        },
    )
}

fn review_time(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDateTime>> {
    let Some(text) = row.get::<_, Option<String>>(idx)? else {
        return Ok(None);
    };
    NaiveDateTime::parse_from_str(&text, REVIEW_TIME_FORMAT)
        .map(Some)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
