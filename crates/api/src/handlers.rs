// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The five reservation operations exposed at the API boundary.
//!
//! Write operations translate their request into a core command, apply it,
//! and hand back the response together with the new state the caller must
//! install. Read operations borrow the state and produce a response directly.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    GetReceiptRequest, ModifySeatRequest, ModifySeatResponse, PurchaseTicketRequest,
    ReceiptResponse, RemoveUserRequest, RemoveUserResponse, SeatOccupant, SectionRosterRequest,
    SectionRosterResponse,
};
use railseat::{Command, State, TransitionResult, apply};
use railseat_domain::{DomainError, Receipt, SeatId, Section, Traveler};

/// The result of an API operation that mutates state.
///
/// Write operations return both the response and the state the caller must
/// install to make the transition visible.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: State,
}

/// Validates that an email field is usable as the receipt key.
///
/// Identity fields are otherwise opaque pass-through data; only the key
/// itself must be non-empty.
fn require_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        tracing::warn!("Request rejected: empty email");
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: String::from("Email cannot be empty"),
        });
    }
    Ok(())
}

/// Converts a stored receipt into its API representation.
fn receipt_to_response(receipt: &Receipt) -> ReceiptResponse {
    ReceiptResponse {
        origin: receipt.origin.clone(),
        destination: receipt.destination.clone(),
        first_name: receipt.traveler.first_name.clone(),
        last_name: receipt.traveler.last_name.clone(),
        email: receipt.traveler.email.clone(),
        price_paid: receipt.price_paid,
        seat: receipt.seat.to_string(),
    }
}

/// Purchases a ticket via the API boundary.
///
/// This function:
/// - Rejects an empty email
/// - Translates the API request into a core command
/// - Applies the command to the current state
/// - Returns the stored receipt with the new state on success
///
/// # Arguments
///
/// * `state` - The current reservation state
/// * `request` - The API request to purchase a ticket
///
/// # Returns
///
/// * `Ok(ApiResult<ReceiptResponse>)` on success
/// * `Err(ApiError)` if the request is invalid or a domain rule is violated
///
/// # Errors
///
/// Returns an error if:
/// - The email is empty
/// - The email already holds a receipt
/// - Both sections are at capacity
pub fn purchase_ticket(
    state: &State,
    request: PurchaseTicketRequest,
) -> Result<ApiResult<ReceiptResponse>, ApiError> {
    require_email(&request.email)?;

    let traveler: Traveler = Traveler::new(request.first_name, request.last_name, request.email);
    let command: Command = Command::PurchaseTicket {
        origin: request.origin,
        destination: request.destination,
        traveler,
        price_paid: request.price_paid,
    };

    let transition: TransitionResult = apply(state, command).map_err(translate_core_error)?;

    let response: ReceiptResponse = receipt_to_response(&transition.receipt);
    Ok(ApiResult {
        response,
        new_state: transition.new_state,
    })
}

/// Looks up a traveler's receipt.
///
/// This is a read-only operation; the returned receipt is a copy.
///
/// # Arguments
///
/// * `state` - The current reservation state
/// * `request` - The lookup request
///
/// # Errors
///
/// Returns an error if the email is empty or holds no receipt.
pub fn get_receipt(
    state: &State,
    request: &GetReceiptRequest,
) -> Result<ReceiptResponse, ApiError> {
    require_email(&request.email)?;

    state.receipt(&request.email).map_or_else(
        || {
            Err(translate_domain_error(DomainError::ReceiptNotFound {
                email: request.email.clone(),
            }))
        },
        |receipt| Ok(receipt_to_response(receipt)),
    )
}

/// Lists the occupied seats of a section in ascending seat order.
///
/// This is a read-only operation. Vacant slots are skipped.
///
/// # Arguments
///
/// * `state` - The current reservation state
/// * `request` - The roster request
///
/// # Errors
///
/// Returns an error if the requested section is not `A` or `B`.
pub fn list_section(
    state: &State,
    request: &SectionRosterRequest,
) -> Result<SectionRosterResponse, ApiError> {
    let section: Section = request
        .section
        .parse()
        .map_err(translate_domain_error)?;

    let occupants: Vec<SeatOccupant> = state
        .roster(section)
        .into_iter()
        .map(|assignment| SeatOccupant {
            first_name: assignment.traveler.first_name,
            last_name: assignment.traveler.last_name,
            email: assignment.traveler.email,
            seat: assignment.seat.to_string(),
        })
        .collect();

    Ok(SectionRosterResponse {
        section: section.to_string(),
        occupants,
    })
}

/// Removes a traveler via the API boundary.
///
/// The traveler's seat becomes a reusable hole and their receipt is deleted;
/// both happen in the same transition.
///
/// # Arguments
///
/// * `state` - The current reservation state
/// * `request` - The removal request
///
/// # Errors
///
/// Returns an error if the email is empty or holds no receipt.
pub fn remove_user(
    state: &State,
    request: RemoveUserRequest,
) -> Result<ApiResult<RemoveUserResponse>, ApiError> {
    require_email(&request.email)?;

    let command: Command = Command::RemoveUser {
        email: request.email.clone(),
    };
    let transition: TransitionResult = apply(state, command).map_err(translate_core_error)?;

    let freed_seat: String = transition.receipt.seat.to_string();
    let response: RemoveUserResponse = RemoveUserResponse {
        email: request.email,
        message: format!("Removed traveler from seat {freed_seat}"),
        freed_seat,
    };
    Ok(ApiResult {
        response,
        new_state: transition.new_state,
    })
}

/// Moves a traveler to a specific seat via the API boundary.
///
/// This function:
/// - Rejects an empty email
/// - Parses the requested seat string
/// - Applies the seat change as one core transition
/// - Returns the updated assignment with the new state on success
///
/// # Arguments
///
/// * `state` - The current reservation state
/// * `request` - The seat change request
///
/// # Errors
///
/// Returns an error if:
/// - The email is empty or holds no receipt
/// - The seat string names no section, or its ordinal is invalid or out of
///   range
/// - The requested seat equals the current seat
/// - The requested seat is occupied by a different traveler
pub fn modify_seat(
    state: &State,
    request: ModifySeatRequest,
) -> Result<ApiResult<ModifySeatResponse>, ApiError> {
    require_email(&request.email)?;

    let new_seat: SeatId = request
        .new_seat
        .parse()
        .map_err(translate_domain_error)?;

    let command: Command = Command::ModifySeat {
        email: request.email.clone(),
        new_seat,
    };
    let transition: TransitionResult = apply(state, command).map_err(translate_core_error)?;

    let seat: String = transition.receipt.seat.to_string();
    let response: ModifySeatResponse = ModifySeatResponse {
        email: request.email,
        message: format!("Moved traveler to seat {seat}"),
        seat,
    };
    Ok(ApiResult {
        response,
        new_state: transition.new_state,
    })
}
