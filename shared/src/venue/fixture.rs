//! Static venue fixture
//!
//! The default state of the Metropolis Arena demo venue: one section with
//! 5 rows of 7 standard-tier seats. A handful of seats start out sold,
//! reserved or held so every status is exercised out of the box. Reset
//! restores the venue to exactly this definition.

use super::model::{MapSize, PriceTier, Row, Seat, SeatStatus, Section, Transform, Venue};

const SECTION_ID: &str = "A";
const ROWS: u32 = 5;
const SEATS_PER_ROW: u32 = 7;

/// Pre-set statuses, indexed by [row - 1][col - 1]. Seats not listed as
/// sold/reserved/held are available.
const STATUSES: [[SeatStatus; SEATS_PER_ROW as usize]; ROWS as usize] = {
    use SeatStatus::*;
    [
        [Available, Available, Sold, Available, Reserved, Available, Available],
        [Available, Held, Available, Available, Sold, Available, Available],
        [Available, Available, Reserved, Available, Available, Held, Available],
        [Sold, Available, Available, Held, Available, Available, Reserved],
        [Available, Available, Reserved, Sold, Available, Available, Available],
    ]
};

/// Build the default venue. Always returns a fresh, fully-owned value so
/// callers can mutate it freely.
pub fn default_venue() -> Venue {
    let rows = (1..=ROWS)
        .map(|row| Row {
            index: row,
            seats: (1..=SEATS_PER_ROW)
                .map(|col| Seat {
                    id: format!("{}-{}-{:02}", SECTION_ID, row, col),
                    col,
                    x: (col * 50) as i32,
                    y: (row * 50 - 10) as i32,
                    price_tier: PriceTier::STANDARD,
                    status: STATUSES[(row - 1) as usize][(col - 1) as usize],
                })
                .collect(),
        })
        .collect();

    Venue {
        venue_id: "arena-01".to_string(),
        name: "Metropolis Arena".to_string(),
        map: MapSize {
            width: 1024,
            height: 768,
        },
        sections: vec![Section {
            id: SECTION_ID.to_string(),
            label: format!("Section - {}", SECTION_ID),
            transform: Transform {
                x: 0,
                y: 0,
                scale: 1.0,
            },
            rows,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_dimensions() {
        let venue = default_venue();
        assert_eq!(venue.venue_id, "arena-01");
        assert_eq!(venue.name, "Metropolis Arena");
        assert_eq!(venue.map.width, 1024);
        assert_eq!(venue.map.height, 768);
        assert_eq!(venue.sections.len(), 1);
        assert_eq!(venue.seat_count(), 35);
    }

    #[test]
    fn test_fixture_preset_statuses() {
        let venue = default_venue();
        assert_eq!(venue.seat("A-1-03").unwrap().status, SeatStatus::Sold);
        assert_eq!(venue.seat("A-1-05").unwrap().status, SeatStatus::Reserved);
        assert_eq!(venue.seat("A-2-02").unwrap().status, SeatStatus::Held);
        assert_eq!(venue.seat("A-4-01").unwrap().status, SeatStatus::Sold);
        assert_eq!(venue.seat("A-4-07").unwrap().status, SeatStatus::Reserved);
        assert_eq!(venue.seat("A-5-04").unwrap().status, SeatStatus::Sold);
        assert_eq!(venue.seat("A-1-01").unwrap().status, SeatStatus::Available);
    }

    #[test]
    fn test_fixture_seat_ids_zero_padded() {
        let venue = default_venue();
        let row1: Vec<&str> = venue.sections[0].rows[0]
            .seats
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            row1,
            vec!["A-1-01", "A-1-02", "A-1-03", "A-1-04", "A-1-05", "A-1-06", "A-1-07"]
        );
    }

    #[test]
    fn test_fixture_all_standard_tier() {
        let venue = default_venue();
        assert!(venue.seats().all(|s| s.price_tier == PriceTier::STANDARD));
    }

    #[test]
    fn test_fixture_is_deterministic() {
        assert_eq!(default_venue(), default_venue());
    }

    #[test]
    fn test_fixture_json_round_trip() {
        let venue = default_venue();
        let json = serde_json::to_string(&venue).unwrap();
        let restored: Venue = serde_json::from_str(&json).unwrap();
        assert_eq!(venue, restored);
    }
}
