//! Booking engine error types
//!
//! Guard violations (seat unavailable, capacity exceeded, empty selection)
//! are non-fatal: the operation aborts with no state change and the UI
//! surfaces them as warnings. Storage failures are the only errors that
//! carry a technical cause.

use crate::storage::StorageError;
use shared::venue::{SeatIdError, SeatStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Seat not found: {0}")]
    SeatNotFound(String),

    #[error("Seat {id} is not available (currently {status})")]
    SeatUnavailable { id: String, status: SeatStatus },

    #[error("At most {capacity} seats can be selected at a time")]
    SelectionFull { capacity: usize },

    #[error("No seats selected")]
    NothingSelected,

    #[error("A payment is already being processed")]
    PaymentInProgress,

    #[error(transparent)]
    InvalidSeatId(#[from] SeatIdError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl BookingError {
    /// True for guard violations that should be shown to the user as a
    /// warning rather than treated as a fault.
    pub fn is_user_guard(&self) -> bool {
        matches!(
            self,
            BookingError::SeatUnavailable { .. }
                | BookingError::SelectionFull { .. }
                | BookingError::NothingSelected
                | BookingError::PaymentInProgress
        )
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_classification() {
        assert!(
            BookingError::SeatUnavailable {
                id: "A-1-03".to_string(),
                status: SeatStatus::Sold,
            }
            .is_user_guard()
        );
        assert!(BookingError::SelectionFull { capacity: 8 }.is_user_guard());
        assert!(BookingError::NothingSelected.is_user_guard());
        assert!(!BookingError::SeatNotFound("A-9-99".to_string()).is_user_guard());
    }

    #[test]
    fn test_messages_name_the_seat() {
        let err = BookingError::SeatUnavailable {
            id: "A-1-03".to_string(),
            status: SeatStatus::Sold,
        };
        assert_eq!(err.to_string(), "Seat A-1-03 is not available (currently sold)");
    }
}
