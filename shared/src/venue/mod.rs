//! Venue data model
//!
//! - **model**: Venue/Section/Row/Seat structures and seat statuses
//! - **seat_id**: `<section>-<row>-<column>` identifier parsing
//! - **fixture**: the static default venue definition

pub mod fixture;
pub mod model;
pub mod seat_id;

pub use fixture::default_venue;
pub use model::{MapSize, PriceTier, Row, Seat, SeatStatus, Section, Transform, Venue};
pub use seat_id::{SeatId, SeatIdError};
