//! Booking engine configuration
//!
//! Fixed configuration external to the core: selection capacity, the price
//! tier table, the reset save-suppression window and the simulated payment
//! delay. Defaults match the original demo; environment variables can
//! override the numeric knobs.

use crate::pricing::PriceTable;
use std::time::Duration;

/// Maximum number of concurrently selected seats
pub const DEFAULT_MAX_SELECTED: usize = 8;
/// Save-suppression window armed after a full reset
pub const DEFAULT_RESET_SUPPRESS_MS: u64 = 100;
/// Simulated payment-processing delay
pub const DEFAULT_PAYMENT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub max_selected: usize,
    pub reset_suppress: Duration,
    pub payment_delay: Duration,
    pub prices: PriceTable,
}

impl BookingConfig {
    pub fn from_env() -> Self {
        Self {
            max_selected: std::env::var("MAX_SELECTED_SEATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_SELECTED),
            reset_suppress: Duration::from_millis(
                std::env::var("RESET_SUPPRESS_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_RESET_SUPPRESS_MS),
            ),
            payment_delay: Duration::from_millis(
                std::env::var("PAYMENT_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_PAYMENT_DELAY_MS),
            ),
            prices: PriceTable::default(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_selected: DEFAULT_MAX_SELECTED,
            reset_suppress: Duration::from_millis(DEFAULT_RESET_SUPPRESS_MS),
            payment_delay: Duration::from_millis(DEFAULT_PAYMENT_DELAY_MS),
            prices: PriceTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BookingConfig::default();
        assert_eq!(config.max_selected, 8);
        assert_eq!(config.reset_suppress, Duration::from_millis(100));
        assert_eq!(config.payment_delay, Duration::from_millis(2000));
    }
}
