//! Price-tier lookup and selection totals
//!
//! The tier table is fixed external configuration, not user-mutable.
//! Totals are recomputed on demand, never cached.

use shared::venue::{PriceTier, Seat};
use std::collections::BTreeMap;
use tracing::warn;

/// Fixed mapping from price tier to a whole-unit monetary amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<u8, u32>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            prices: BTreeMap::from([(1, 250), (2, 350), (3, 500)]),
        }
    }
}

impl PriceTable {
    /// Price for a tier. Every seat's tier is drawn from the fixed tier
    /// set, so a miss is unreachable for fixture data; a tier missing
    /// from the table must never price a seat at zero, so it charges
    /// the highest configured price and logs the mismatch.
    pub fn price_of(&self, tier: PriceTier) -> u32 {
        match self.prices.get(&tier.0) {
            Some(&price) => price,
            None => {
                warn!(tier = tier.0, "Price tier missing from table, charging highest price");
                self.prices.values().copied().max().unwrap_or(0)
            }
        }
    }

    /// Sum of tier prices over the given seats: order-independent, zero
    /// for an empty selection.
    pub fn total_of<'a>(&self, seats: impl IntoIterator<Item = &'a Seat>) -> u32 {
        seats
            .into_iter()
            .map(|seat| self.price_of(seat.price_tier))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::venue::SeatStatus;

    fn seat(id: &str, tier: PriceTier) -> Seat {
        Seat {
            id: id.to_string(),
            col: 1,
            x: 50,
            y: 40,
            price_tier: tier,
            status: SeatStatus::Available,
        }
    }

    #[test]
    fn test_default_tier_prices() {
        let table = PriceTable::default();
        assert_eq!(table.price_of(PriceTier::STANDARD), 250);
        assert_eq!(table.price_of(PriceTier::PREMIUM), 350);
        assert_eq!(table.price_of(PriceTier::VIP), 500);
    }

    #[test]
    fn test_unknown_tier_charges_highest_price() {
        let table = PriceTable::default();
        assert_eq!(table.price_of(PriceTier(9)), 500);
    }

    #[test]
    fn test_total_is_zero_for_empty_selection() {
        let table = PriceTable::default();
        assert_eq!(table.total_of(std::iter::empty::<&Seat>()), 0);
    }

    #[test]
    fn test_total_is_order_independent() {
        let table = PriceTable::default();
        let a = seat("A-1-01", PriceTier::STANDARD);
        let b = seat("A-1-02", PriceTier::PREMIUM);
        let c = seat("A-1-03", PriceTier::VIP);

        let forward = table.total_of([&a, &b, &c]);
        let backward = table.total_of([&c, &b, &a]);
        assert_eq!(forward, backward);
        assert_eq!(forward, 1100);
    }

    #[test]
    fn test_two_standard_seats_total_500() {
        let table = PriceTable::default();
        let seats = [
            seat("A-1-01", PriceTier::STANDARD),
            seat("A-1-02", PriceTier::STANDARD),
        ];
        assert_eq!(table.total_of(seats.iter()), 500);
    }
}
