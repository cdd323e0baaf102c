// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use railseat_domain::{DomainError, Receipt, SeatId, Section, Traveler};

/// Applies a command to the current state, producing a new state and the
/// receipt the command settled on.
///
/// Every rule is checked before anything is cloned or mutated: on error the
/// input state is untouched and no new state exists. The caller makes the
/// transition visible by installing `new_state` while still holding whatever
/// lock guards the shared state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the settled receipt
/// * `Err(CoreError)` if the command violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - The command violates a domain rule
pub fn apply(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::PurchaseTicket {
            origin,
            destination,
            traveler,
            price_paid,
        } => purchase_ticket(state, origin, destination, traveler, price_paid),
        Command::RemoveUser { email } => remove_user(state, &email),
        Command::ModifySeat { email, new_seat } => modify_seat(state, &email, new_seat),
    }
}

/// Picks the seat a new purchase is assigned, in fixed priority order: the
/// lowest vacated hole in section A, then the lowest vacated hole in B, then
/// a fresh slot in A, then a fresh slot in B.
fn select_seat(state: &State) -> Result<SeatId, CoreError> {
    if let Some(number) = state.section_a.lowest_hole() {
        return Ok(SeatId::new(Section::A, number));
    }
    if let Some(number) = state.section_b.lowest_hole() {
        return Ok(SeatId::new(Section::B, number));
    }
    if let Some(number) = state.section_a.next_fresh() {
        return Ok(SeatId::new(Section::A, number));
    }
    if let Some(number) = state.section_b.next_fresh() {
        return Ok(SeatId::new(Section::B, number));
    }
    Err(CoreError::DomainViolation(DomainError::NoSeatsAvailable))
}

fn purchase_ticket(
    state: &State,
    origin: String,
    destination: String,
    traveler: Traveler,
    price_paid: f64,
) -> Result<TransitionResult, CoreError> {
    // Rule: one receipt per traveler email
    if state.receipts.contains_key(&traveler.email) {
        return Err(CoreError::DomainViolation(DomainError::AlreadyPurchased {
            email: traveler.email,
        }));
    }

    let seat: SeatId = select_seat(state)?;

    let mut new_state: State = state.clone();
    new_state
        .section_mut(seat.section())
        .occupy(seat.number(), traveler.email.clone());

    let receipt: Receipt = Receipt {
        origin,
        destination,
        traveler,
        price_paid,
        seat,
    };
    new_state
        .receipts
        .insert(receipt.traveler.email.clone(), receipt.clone());

    Ok(TransitionResult { new_state, receipt })
}

fn remove_user(state: &State, email: &str) -> Result<TransitionResult, CoreError> {
    let Some(receipt) = state.receipt(email) else {
        return Err(CoreError::DomainViolation(DomainError::ReceiptNotFound {
            email: email.to_string(),
        }));
    };
    let receipt: Receipt = receipt.clone();

    // Vacating leaves a hole; ordinals of the remaining occupants never shift.
    let mut new_state: State = state.clone();
    new_state
        .section_mut(receipt.seat.section())
        .vacate(receipt.seat.number());
    new_state.receipts.remove(email);

    Ok(TransitionResult { new_state, receipt })
}

fn modify_seat(
    state: &State,
    email: &str,
    new_seat: SeatId,
) -> Result<TransitionResult, CoreError> {
    let Some(current) = state.receipt(email) else {
        return Err(CoreError::DomainViolation(DomainError::ReceiptNotFound {
            email: email.to_string(),
        }));
    };

    if current.seat == new_seat {
        return Err(CoreError::DomainViolation(DomainError::SeatUnchanged {
            seat: new_seat,
        }));
    }

    let target = state.section(new_seat.section());
    if !target.in_range(new_seat.number()) {
        return Err(CoreError::DomainViolation(DomainError::InvalidSeatNumber(
            format!(
                "seat {new_seat} is out of range; section {} has {} seats",
                new_seat.section(),
                target.capacity()
            ),
        )));
    }

    // A slot occupied by this traveler under a different seat id cannot exist;
    // the same-seat case was already rejected above.
    if target
        .occupant(new_seat.number())
        .is_some_and(|occupant| occupant != email)
    {
        return Err(CoreError::DomainViolation(DomainError::SeatTaken {
            seat: new_seat,
        }));
    }

    let old_seat: SeatId = current.seat;

    // One transaction: the old slot is freed and the new slot taken in the
    // same state swap, so no other operation can observe the halfway point.
    let mut new_state: State = state.clone();
    new_state
        .section_mut(old_seat.section())
        .vacate(old_seat.number());
    new_state
        .section_mut(new_seat.section())
        .occupy(new_seat.number(), email.to_string());

    let receipt: Receipt = Receipt {
        seat: new_seat,
        ..current.clone()
    };
    new_state.receipts.insert(email.to_string(), receipt.clone());

    Ok(TransitionResult { new_state, receipt })
}
