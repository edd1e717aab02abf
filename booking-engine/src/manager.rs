//! BookingManager - interaction orchestration around the state machine
//!
//! Sequences user-facing confirmation prompts around the pure transitions,
//! enforces the selection capacity and mutual exclusion between actions,
//! owns the simulated payment delay, and persists state after every
//! confirmed mutation (save-on-change).
//!
//! # Action Flow
//!
//! ```text
//! select_seat(id)
//!     ├─ 1. Guard chain (availability, toggle, capacity)
//!     ├─ 2. Seat-details confirmation (UserPrompt)
//!     ├─ 3. Selection mutation
//!     └─ 4. Save-on-change (best-effort)
//!
//! pay()
//!     ├─ 1. Empty-selection guard
//!     ├─ 2. Payment confirmation (UserPrompt)
//!     ├─ 3. Processing state + simulated delay
//!     ├─ 4. Bulk sold transition + selection clear (one step)
//!     └─ 5. Save-on-change
//! ```
//!
//! The manager is an explicit context object: it owns the venue, the
//! selection and the store, with load-on-init and save-on-change hooks.
//! There is no ambient global state.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::BookingConfig;
use crate::error::{BookingError, BookingResult};
use crate::selection::Selection;
use crate::storage::StateStore;
use crate::transitions::{self, SeatToggle};
use shared::venue::{Seat, SeatId, SeatStatus, Venue, default_venue};

/// User-facing confirmation dialogs. Presentation is out of scope; the
/// core only needs the confirmed/cancelled result.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Seat-details popup shown before adding a seat to the selection.
    async fn confirm_seat(&self, seat: &Seat, price: u32) -> bool;
    /// Booking summary shown before reserving the selection.
    async fn confirm_booking(&self, seats: &[Seat], total: u32) -> bool;
    /// Payment summary shown before the simulated payment.
    async fn confirm_payment(&self, seats: &[Seat], total: u32) -> bool;
    /// Destructive-reset warning.
    async fn confirm_reset(&self) -> bool;
}

/// Result of a seat click.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Seat confirmed and added to the selection.
    Added { seat_id: String, price: u32 },
    /// Seat was already selected and has been toggled out.
    Removed { seat_id: String },
    /// User declined the confirmation; nothing changed.
    Declined,
}

/// Summary of a completed reserve/pay action.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub seat_ids: Vec<String>,
    pub total: u32,
}

/// Data backing the seat-details popup.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatDetails {
    pub position: SeatId,
    pub tier_label: &'static str,
    pub price: u32,
    pub status: SeatStatus,
}

/// Clears the payment-processing flag on drop, including when the
/// in-flight `pay` future is dropped mid-delay. Without it a cancelled
/// payment would leave the flag set and lock out every later action.
struct ProcessingGuard<'a>(&'a mut bool);

impl<'a> ProcessingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

pub struct BookingManager<P: UserPrompt> {
    venue: Venue,
    selection: Selection,
    store: StateStore,
    config: BookingConfig,
    prompt: P,
    processing_payment: bool,
    save_suppressed_until: Option<Instant>,
}

impl<P: UserPrompt> BookingManager<P> {
    /// Load-on-init: venue from storage (falling back to the fixture) and
    /// selection from storage (falling back to empty). Restored selection
    /// entries that no longer reference an available seat are dropped so
    /// the selection invariant holds across blob skew, and the selection
    /// is truncated to the configured capacity.
    pub fn open(store: StateStore, config: BookingConfig, prompt: P) -> BookingResult<Self> {
        let venue = match store.load_venue()? {
            Some(venue) => {
                info!(venue_id = %venue.venue_id, "Venue restored from storage");
                venue
            }
            None => {
                info!("No stored venue, using fixture defaults");
                default_venue()
            }
        };

        let mut selection = store.load_selection()?.unwrap_or_default();
        let dropped = selection.retain_with(|seat| {
            venue
                .seat(&seat.id)
                .is_some_and(|s| s.status.is_selectable())
        });
        if !dropped.is_empty() {
            warn!(
                dropped = ?dropped.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
                "Dropped restored selection entries for non-available seats"
            );
        }
        let overflow = selection.truncate(config.max_selected);
        if !overflow.is_empty() {
            warn!(
                overflow = overflow.len(),
                capacity = config.max_selected,
                "Restored selection exceeded capacity, truncated"
            );
        }

        Ok(Self {
            venue,
            selection,
            store,
            config,
            prompt,
            processing_payment: false,
            save_suppressed_until: None,
        })
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Total price of the current selection, recomputed on demand.
    pub fn total(&self) -> u32 {
        self.config.prices.total_of(self.selection.iter())
    }

    /// True while the simulated payment delay is running.
    pub fn is_payment_processing(&self) -> bool {
        self.processing_payment
    }

    /// Seat details for the confirmation popup: parsed position, tier
    /// name, price and current status.
    pub fn seat_details(&self, seat_id: &str) -> BookingResult<SeatDetails> {
        let seat = self
            .venue
            .seat(seat_id)
            .ok_or_else(|| BookingError::SeatNotFound(seat_id.to_string()))?;
        Ok(SeatDetails {
            position: seat.id.parse()?,
            tier_label: seat.price_tier.label(),
            price: self.config.prices.price_of(seat.price_tier),
            status: seat.status,
        })
    }

    /// Toggle a seat in or out of the selection.
    ///
    /// Clicking a non-available seat or overflowing the capacity aborts
    /// with a warning-level guard error and no state change. Adding a seat
    /// goes through the seat-details confirmation first.
    pub async fn select_seat(&mut self, seat_id: &str) -> BookingResult<SelectOutcome> {
        self.ensure_not_processing()?;

        let toggle = transitions::toggle_seat(
            &self.venue,
            &mut self.selection,
            seat_id,
            self.config.max_selected,
        )
        .inspect_err(|e| {
            if e.is_user_guard() {
                warn!(seat_id, warning = %e, "Seat selection rejected");
            }
        })?;

        match toggle {
            SeatToggle::Removed(seat) => {
                info!(seat_id = %seat.id, selected = self.selection.len(), "Seat deselected");
                self.persist();
                Ok(SelectOutcome::Removed { seat_id: seat.id })
            }
            SeatToggle::Candidate(seat) => {
                let price = self.config.prices.price_of(seat.price_tier);
                if !self.prompt.confirm_seat(&seat, price).await {
                    debug!(seat_id = %seat.id, "Seat selection declined by user");
                    return Ok(SelectOutcome::Declined);
                }

                let seat_id = seat.id.clone();
                self.selection.add(seat);
                info!(
                    seat_id = %seat_id,
                    price,
                    selected = self.selection.len(),
                    "Seat added to selection"
                );
                self.persist();
                Ok(SelectOutcome::Added { seat_id, price })
            }
        }
    }

    /// Reserve every selected seat (available → reserved) and clear the
    /// selection as one transaction. Returns `None` when the user cancels
    /// the confirmation.
    pub async fn reserve(&mut self) -> BookingResult<Option<Receipt>> {
        self.ensure_not_processing()?;
        let (seats, total) = self.selection_summary()?;

        if !self.prompt.confirm_booking(&seats, total).await {
            debug!("Booking cancelled by user");
            return Ok(None);
        }

        let seat_ids = transitions::reserve_selection(&mut self.venue, &mut self.selection)?;
        info!(count = seat_ids.len(), total, "Selection reserved");
        self.persist();
        Ok(Some(Receipt { seat_ids, total }))
    }

    /// Pay for every selected seat (→ sold, terminal) and clear the
    /// selection. The sold transition happens only after the simulated
    /// payment delay completes, never before. Returns `None` when the
    /// user cancels the confirmation.
    pub async fn pay(&mut self) -> BookingResult<Option<Receipt>> {
        self.ensure_not_processing()?;
        let (seats, total) = self.selection_summary()?;

        if !self.prompt.confirm_payment(&seats, total).await {
            debug!("Payment cancelled by user");
            return Ok(None);
        }

        // Simulated external payment processing; seat mutation must wait
        // for it to complete. The guard unwinds the flag if the caller
        // drops this future mid-delay, so a cancelled payment leaves the
        // manager in its pre-payment state.
        info!(count = seats.len(), total, "Payment processing started");
        {
            let _processing = ProcessingGuard::engage(&mut self.processing_payment);
            tokio::time::sleep(self.config.payment_delay).await;
        }

        let seat_ids = transitions::sell_selection(&mut self.venue, &mut self.selection)?;

        info!(count = seat_ids.len(), total, "Payment completed, seats sold");
        self.persist();
        Ok(Some(Receipt { seat_ids, total }))
    }

    /// Empty the selection without touching seat statuses. Returns how
    /// many seats were removed.
    pub fn clear_selection(&mut self) -> BookingResult<usize> {
        self.ensure_not_processing()?;
        let removed = self.selection.len();
        self.selection.clear();
        info!(removed, "Selection cleared");
        self.persist();
        Ok(removed)
    }

    /// Destructive full reset: clear both storage blobs, restore the
    /// fixture venue and empty the selection. Returns whether the user
    /// confirmed. The save-suppression window keeps the save-on-change
    /// hook from resurrecting the pre-reset snapshot; a new reset re-arms
    /// it.
    pub async fn reset_all(&mut self) -> BookingResult<bool> {
        self.ensure_not_processing()?;

        if !self.prompt.confirm_reset().await {
            debug!("Reset cancelled by user");
            return Ok(false);
        }

        // Clear storage first, then restore defaults in memory. The
        // contract is: after reset, persisted state is the default state,
        // with no resurrection of the prior snapshot.
        self.store.clear_all()?;
        self.save_suppressed_until = Some(Instant::now() + self.config.reset_suppress);

        transitions::reset_venue(&mut self.venue, &mut self.selection);
        info!("All seat data reset to fixture defaults");
        self.persist();
        Ok(true)
    }

    fn ensure_not_processing(&self) -> BookingResult<()> {
        // &mut self already serializes callers; this guard is
        // defense-in-depth mirroring the UI's disabled state.
        if self.processing_payment {
            return Err(BookingError::PaymentInProgress);
        }
        Ok(())
    }

    fn selection_summary(&self) -> BookingResult<(Vec<Seat>, u32)> {
        if self.selection.is_empty() {
            warn!("Action rejected: no seats selected");
            return Err(BookingError::NothingSelected);
        }
        let seats: Vec<Seat> = self.selection.iter().cloned().collect();
        let total = self.config.prices.total_of(seats.iter());
        Ok((seats, total))
    }

    /// Save-on-change hook. Best-effort: failures are logged and never
    /// surfaced to the user or rolled back. Skipped while the post-reset
    /// suppression window is open.
    fn persist(&mut self) {
        if let Some(until) = self.save_suppressed_until {
            if Instant::now() < until {
                debug!("Save-on-change suppressed after reset");
                return;
            }
            self.save_suppressed_until = None;
        }

        if let Err(e) = self.store.save_venue(&self.venue) {
            error!(error = %e, "Failed to persist venue state");
        }
        if let Err(e) = self.store.save_selection(&self.selection) {
            error!(error = %e, "Failed to persist selection");
        }
    }
}
