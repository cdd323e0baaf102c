// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, apply};
use railseat_domain::{SeatId, Traveler};

pub fn create_test_traveler(email: &str) -> Traveler {
    Traveler::new(
        String::from("John"),
        String::from("Doe"),
        String::from(email),
    )
}

pub fn purchase_command(email: &str) -> Command {
    Command::PurchaseTicket {
        origin: String::from("London"),
        destination: String::from("Paris"),
        traveler: create_test_traveler(email),
        price_paid: 20.0,
    }
}

/// Applies a purchase that is expected to succeed and returns the new state.
pub fn purchase(state: &State, email: &str) -> State {
    apply(state, purchase_command(email)).unwrap().new_state
}

/// Applies a removal that is expected to succeed and returns the new state.
pub fn remove(state: &State, email: &str) -> State {
    apply(
        state,
        Command::RemoveUser {
            email: String::from(email),
        },
    )
    .unwrap()
    .new_state
}

/// Applies a seat change that is expected to succeed and returns the new state.
pub fn move_to(state: &State, email: &str, seat: &str) -> State {
    let new_seat: SeatId = seat.parse().unwrap();
    apply(
        state,
        Command::ModifySeat {
            email: String::from(email),
            new_seat,
        },
    )
    .unwrap()
    .new_state
}

/// Asserts that receipts and seat occupancy agree: every receipt's seat is
/// occupied by that receipt's email, occupied slots and receipts are in
/// one-to-one correspondence, and neither section exceeds its capacity.
pub fn assert_consistent(state: &State) {
    for (email, receipt) in &state.receipts {
        let occupant: Option<&str> = state
            .section(receipt.seat.section())
            .occupant(receipt.seat.number());
        assert_eq!(
            occupant,
            Some(email.as_str()),
            "receipt for '{email}' does not match its slot"
        );
        assert_eq!(&receipt.traveler.email, email, "receipt keyed under the wrong email");
    }

    let occupied: usize = state.section_a.occupied_count() + state.section_b.occupied_count();
    assert_eq!(
        occupied,
        state.receipts.len(),
        "occupied slots and receipts diverge"
    );

    assert!(state.section_a.occupied_count() <= usize::from(state.section_a.capacity()));
    assert!(state.section_b.occupied_count() <= usize::from(state.section_b.capacity()));
}
