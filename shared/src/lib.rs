//! Shared data model for the seat-booking core
//!
//! Venue structure (sections, rows, seats), seat statuses, price tiers,
//! seat-identifier parsing, and the static venue fixture. These types are
//! consumed by the booking engine and by whatever owns the UI layer.

pub mod venue;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use venue::{
    MapSize, PriceTier, Row, Seat, SeatId, SeatIdError, SeatStatus, Section, Transform, Venue,
    default_venue,
};
