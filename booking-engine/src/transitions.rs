//! Seat state machine
//!
//! Pure transition functions over `(&mut Venue, &mut Selection)`. Guards
//! are checked up front and bulk transitions run as a single pass over the
//! venue, so every operation is all-or-nothing by construction — there is
//! no external system that can reject a confirmed transition halfway.

use crate::error::{BookingError, BookingResult};
use crate::selection::Selection;
use shared::venue::{Seat, SeatStatus, Venue, default_venue};

/// Result of a seat click at the state-machine level.
#[derive(Debug, Clone, PartialEq)]
pub enum SeatToggle {
    /// The seat was selected and has been removed from the selection.
    /// No capacity check and no confirmation are needed on removal.
    Removed(Seat),
    /// The seat passed every guard and may be added to the selection once
    /// the caller's confirmation step completes.
    Candidate(Seat),
}

/// Guard chain for selecting/deselecting a seat.
///
/// - unknown id → `SeatNotFound`
/// - stored status not available → `SeatUnavailable` (warning, no change)
/// - already selected → removed immediately
/// - selection at capacity → `SelectionFull` (warning, no change)
/// - otherwise → candidate snapshot, to be added after confirmation
pub fn toggle_seat(
    venue: &Venue,
    selection: &mut Selection,
    seat_id: &str,
    capacity: usize,
) -> BookingResult<SeatToggle> {
    let seat = venue
        .seat(seat_id)
        .ok_or_else(|| BookingError::SeatNotFound(seat_id.to_string()))?;

    if !seat.status.is_selectable() {
        return Err(BookingError::SeatUnavailable {
            id: seat.id.clone(),
            status: seat.status,
        });
    }

    if let Some(removed) = selection.remove(seat_id) {
        return Ok(SeatToggle::Removed(removed));
    }

    if selection.len() >= capacity {
        return Err(BookingError::SelectionFull { capacity });
    }

    Ok(SeatToggle::Candidate(seat.clone()))
}

/// Bulk-transition every selected seat to `reserved` and clear the
/// selection. Returns the affected seat ids.
pub fn reserve_selection(venue: &mut Venue, selection: &mut Selection) -> BookingResult<Vec<String>> {
    transition_selection(venue, selection, SeatStatus::Reserved)
}

/// Bulk-transition every selected seat to `sold` and clear the selection.
/// Sold is terminal: nothing short of a full reset moves a seat back.
pub fn sell_selection(venue: &mut Venue, selection: &mut Selection) -> BookingResult<Vec<String>> {
    transition_selection(venue, selection, SeatStatus::Sold)
}

fn transition_selection(
    venue: &mut Venue,
    selection: &mut Selection,
    target: SeatStatus,
) -> BookingResult<Vec<String>> {
    if selection.is_empty() {
        return Err(BookingError::NothingSelected);
    }

    // Single pass over the venue; the selection is cleared in the same
    // logical transaction so it never references a non-available seat.
    for seat in venue.seats_mut() {
        if selection.contains(&seat.id) {
            seat.status = target;
        }
    }

    let ids = selection.seat_ids();
    selection.clear();
    Ok(ids)
}

/// Restore the venue to its fixture definition and empty the selection,
/// regardless of current state. The only operation that moves seats
/// backward from sold/reserved; destructive, no undo.
pub fn reset_venue(venue: &mut Venue, selection: &mut Selection) {
    *venue = default_venue();
    selection.clear();
}
