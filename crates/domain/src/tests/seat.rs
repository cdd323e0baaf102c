// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, SeatId, Section};

#[test]
fn test_section_parses_a_and_b() {
    assert_eq!("A".parse::<Section>().unwrap(), Section::A);
    assert_eq!("B".parse::<Section>().unwrap(), Section::B);
}

#[test]
fn test_section_rejects_anything_else() {
    for input in ["C", "a", "", "AB", "1"] {
        let result: Result<Section, DomainError> = input.parse();
        assert!(
            matches!(result, Err(DomainError::InvalidSection(_))),
            "expected '{input}' to be rejected"
        );
    }
}

#[test]
fn test_section_display_is_the_letter() {
    assert_eq!(Section::A.to_string(), "A");
    assert_eq!(Section::B.to_string(), "B");
}

#[test]
fn test_seat_id_parses_section_and_ordinal() {
    let seat: SeatId = "A3".parse().unwrap();
    assert_eq!(seat.section(), Section::A);
    assert_eq!(seat.number(), 3);

    let seat: SeatId = "B10".parse().unwrap();
    assert_eq!(seat.section(), Section::B);
    assert_eq!(seat.number(), 10);
}

#[test]
fn test_seat_id_display_round_trips() {
    let seat: SeatId = SeatId::new(Section::B, 7);
    assert_eq!(seat.to_string(), "B7");
    assert_eq!(seat.to_string().parse::<SeatId>().unwrap(), seat);
}

#[test]
fn test_seat_id_rejects_unknown_section_letter() {
    for input in ["C3", "Z1", "", "3A"] {
        let result: Result<SeatId, DomainError> = input.parse();
        assert!(
            matches!(result, Err(DomainError::InvalidSeatSection(_))),
            "expected '{input}' to fail on its section letter"
        );
    }
}

#[test]
fn test_seat_id_rejects_bad_ordinal() {
    for input in ["A", "Axx", "A-1", "A0", "B1.5"] {
        let result: Result<SeatId, DomainError> = input.parse();
        assert!(
            matches!(result, Err(DomainError::InvalidSeatNumber(_))),
            "expected '{input}' to fail on its ordinal"
        );
    }
}

#[test]
fn test_seat_id_lowercase_section_is_rejected() {
    // Seat identifiers are case-sensitive, matching the rendered form.
    let result: Result<SeatId, DomainError> = "a3".parse();
    assert!(matches!(result, Err(DomainError::InvalidSeatSection(_))));
}
