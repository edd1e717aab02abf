//! Venue structure types
//!
//! Field names serialize in camelCase so the persisted JSON blobs keep the
//! original `venueData`/`selectedSeats` layout.

use serde::{Deserialize, Serialize};

/// Seat status as stored on the seat itself.
///
/// "selected" is intentionally not a variant: selection is derived from
/// membership in the selection set, never merged into the seat record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to select
    Available,
    /// Held pending payment (set by a Reserve action)
    Reserved,
    /// Finalized (set by a Pay action) — terminal short of a full reset
    Sold,
    /// Blocked by an external process; present in the fixture, never
    /// produced by this client
    Held,
}

impl SeatStatus {
    /// Only available seats may enter the selection set.
    pub fn is_selectable(self) -> bool {
        matches!(self, SeatStatus::Available)
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SeatStatus::Available => "available",
            SeatStatus::Reserved => "reserved",
            SeatStatus::Sold => "sold",
            SeatStatus::Held => "held",
        };
        write!(f, "{}", s)
    }
}

/// Price tier: integer 1-3 classifying a seat's price category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PriceTier(pub u8);

impl PriceTier {
    pub const STANDARD: PriceTier = PriceTier(1);
    pub const PREMIUM: PriceTier = PriceTier(2);
    pub const VIP: PriceTier = PriceTier(3);

    /// Display name for the seat-details popup.
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Standard",
            2 => "Premium",
            3 => "VIP",
            _ => "Unknown",
        }
    }
}

/// A single seat. Owned exclusively by its row; looked up by scanning,
/// never by a secondary index (venue size is small).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Unique across the whole venue: `<section>-<row>-<column>`
    pub id: String,
    pub col: u32,
    /// Layout coordinate (presentation only)
    pub x: i32,
    /// Layout coordinate (presentation only)
    pub y: i32,
    pub price_tier: PriceTier,
    pub status: SeatStatus,
}

/// A row of seats. The index is unique within its section, not globally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub index: u32,
    pub seats: Vec<Seat>,
}

/// Section placement on the map (presentation only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub x: i32,
    pub y: i32,
    pub scale: f32,
}

/// A venue section. Purely structural; never mutated directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub label: String,
    pub transform: Transform,
    pub rows: Vec<Row>,
}

/// Map dimensions (used only for layout).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

/// The full venue: created from the fixture or restored from storage,
/// mutated in place when seat statuses change, never destroyed (reset
/// restores it to the fixture).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub venue_id: String,
    pub name: String,
    pub map: MapSize,
    pub sections: Vec<Section>,
}

impl Venue {
    /// Iterate all seats in section/row/column order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .flat_map(|r| r.seats.iter())
    }

    /// Iterate all seats mutably.
    pub fn seats_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.rows.iter_mut())
            .flat_map(|r| r.seats.iter_mut())
    }

    /// Look up a seat by identifier (linear scan).
    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats().find(|s| s.id == id)
    }

    /// Look up a seat mutably by identifier.
    pub fn seat_mut(&mut self, id: &str) -> Option<&mut Seat> {
        self.seats_mut().find(|s| s.id == id)
    }

    pub fn seat_count(&self) -> usize {
        self.seats().count()
    }
}
