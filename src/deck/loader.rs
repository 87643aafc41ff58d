// src/deck/loader.rs
// Reads the vocabulary CSV. The file is always UTF-16, which is how the
// word lists were exported in the first place.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use csv::{StringRecord, StringRecordsIntoIter};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use super::CardRow;
use crate::error::{Result, SeedError};

/// A lazy pass over the data rows of a CSV, header already skipped.
/// It can be walked once; open the file again for another pass.
pub struct RowReader {
    records: StringRecordsIntoIter<Cursor<String>>,
}

impl RowReader {
    fn from_text(text: String) -> Self {
        // `flexible` lets rows carry extra trailing fields; short rows are caught in `parse_record`.
        // Blank lines are skipped by the reader and never become rows.
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(text));
        RowReader { records: reader.into_records() }
    }
}

impl Iterator for RowReader {
    type Item = Result<CardRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        Some(parse_record(&record))
    }
}

/// Opens a UTF-16 CSV laid out as popularity,front,back and returns its data rows.
pub fn open(path: &Path) -> Result<RowReader> {
    let bytes = fs::read(path)?;
    let text = decode_utf16(&bytes)?;
    Ok(RowReader::from_text(text))
}

/// Reads every row up front. Rendering and populating both walk this one
/// sequence, so they can't disagree about how many rows there are or in what order.
pub fn load_rows(path: &Path) -> Result<Vec<CardRow>> {
    let rows = open(path)?.collect::<Result<Vec<_>>>()?;
    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Decodes UTF-16 text. The byte order comes from the BOM, little-endian when there is none.
/// Malformed input (an odd trailing byte, an unpaired surrogate) is an error rather than U+FFFD.
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) if encoding == UTF_16LE || encoding == UTF_16BE => (encoding, bom_len),
        _ => (UTF_16LE, 0),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(|text| text.into_owned())
        .ok_or_else(|| SeedError::Encoding(format!("malformed {} input", encoding.name())))
}

fn parse_record(record: &StringRecord) -> Result<CardRow> {
    let line = record.position().map_or(0, |pos| pos.line());

    if record.len() < 3 {
        return Err(SeedError::MalformedRow {
            line,
            reason: format!("expected popularity,front,back but found {} field(s)", record.len()),
        });
    }

    let rank = &record[0];
    let popularity = rank.trim().parse::<i64>().map_err(|_| SeedError::MalformedRow {
        line,
        reason: format!("popularity {:?} is not an integer", rank),
    })?;

    Ok(CardRow {
        popularity,
        front: record[1].to_string(),
        back: record[2].to_string(),
    })
}
