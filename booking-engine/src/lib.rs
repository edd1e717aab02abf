//! Seat-booking core for a single-venue booking demo
//!
//! This crate implements the seat-state transition model behind the seating
//! chart UI, independent of any rendering:
//!
//! - **storage**: redb-based persistence for the venue and the selection
//! - **selection**: the ordered, duplicate-free set of chosen seats
//! - **transitions**: the seat state machine (toggle, reserve, sell, reset)
//! - **pricing**: price-tier lookup and selection totals
//! - **manager**: the interaction orchestrator around the state machine
//!
//! # Action Flow
//!
//! ```text
//! user action → BookingManager guard checks → UserPrompt confirmation
//!       ↓                                            ↓
//!   warning (no change)                    bulk transition (all-or-nothing)
//!                                                    ↓
//!                                          StateStore save-on-change
//! ```
//!
//! All state mutations happen in direct response to discrete user actions;
//! the only background behavior is the simulated payment delay and the
//! short save-suppression window after a full reset.

pub mod config;
pub mod error;
pub mod manager;
pub mod pricing;
pub mod selection;
pub mod storage;
pub mod transitions;

// Re-exports
pub use config::BookingConfig;
pub use error::{BookingError, BookingResult};
pub use manager::{BookingManager, Receipt, SeatDetails, SelectOutcome, UserPrompt};
pub use pricing::PriceTable;
pub use selection::Selection;
pub use storage::{StateStore, StorageError};

// Re-export shared types for convenience
pub use shared::venue::{Seat, SeatId, SeatStatus, Venue, default_venue};
