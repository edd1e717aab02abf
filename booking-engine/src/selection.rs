//! The selection set
//!
//! An ordered, duplicate-free sequence of full seat snapshots. "Selected"
//! is derived from membership here and never written onto the seat record,
//! so a seat's stored status stays one of available/reserved/sold/held.
//! The capacity bound is enforced by the transition layer.

use serde::{Deserialize, Serialize};
use shared::venue::Seat;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Selection {
    seats: Vec<Seat>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from restored seat snapshots, dropping duplicates
    /// while preserving order.
    pub fn from_seats(seats: Vec<Seat>) -> Self {
        let mut selection = Self::new();
        for seat in seats {
            selection.add(seat);
        }
        selection
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seats.iter().any(|s| s.id == seat_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    pub fn seat_ids(&self) -> Vec<String> {
        self.seats.iter().map(|s| s.id.clone()).collect()
    }

    /// Append a seat snapshot. Duplicates are ignored; returns whether the
    /// seat was actually added.
    pub fn add(&mut self, seat: Seat) -> bool {
        if self.contains(&seat.id) {
            return false;
        }
        self.seats.push(seat);
        true
    }

    /// Remove a seat by id, returning its snapshot if it was selected.
    pub fn remove(&mut self, seat_id: &str) -> Option<Seat> {
        let idx = self.seats.iter().position(|s| s.id == seat_id)?;
        Some(self.seats.remove(idx))
    }

    /// Drop entries that fail the given predicate (used to re-establish
    /// invariants over restored state). Returns the removed seats.
    pub fn retain_with(&mut self, mut keep: impl FnMut(&Seat) -> bool) -> Vec<Seat> {
        let mut dropped = Vec::new();
        self.seats.retain(|seat| {
            if keep(seat) {
                true
            } else {
                dropped.push(seat.clone());
                false
            }
        });
        dropped
    }

    /// Truncate to at most `capacity` entries, returning the overflow.
    pub fn truncate(&mut self, capacity: usize) -> Vec<Seat> {
        if self.seats.len() <= capacity {
            return Vec::new();
        }
        self.seats.split_off(capacity)
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }
}
