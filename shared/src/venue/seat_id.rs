//! Seat identifier parsing
//!
//! Seat ids encode their position as `<section>-<row>-<column>`, e.g.
//! `A-1-03`. The parsed form backs the seat-details presentation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeatIdError {
    #[error("malformed seat id: {0}")]
    Malformed(String),
}

/// Parsed seat identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatId {
    pub section: String,
    pub row: u32,
    pub col: u32,
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(section), Some(row), Some(col), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SeatIdError::Malformed(s.to_string()));
        };

        if section.is_empty() {
            return Err(SeatIdError::Malformed(s.to_string()));
        }

        let row: u32 = row
            .parse()
            .map_err(|_| SeatIdError::Malformed(s.to_string()))?;
        let col: u32 = col
            .parse()
            .map_err(|_| SeatIdError::Malformed(s.to_string()))?;

        Ok(SeatId {
            section: section.to_string(),
            row,
            col,
        })
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns are zero-padded to two digits in the fixture
        write!(f, "{}-{}-{:02}", self.section, self.row, self.col)
    }
}
