// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request to purchase a ticket.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseTicketRequest {
    /// Where the journey starts.
    pub origin: String,
    /// Where the journey ends.
    pub destination: String,
    /// The traveler's first name.
    pub first_name: String,
    /// The traveler's last name.
    pub last_name: String,
    /// The traveler's email address.
    pub email: String,
    /// The price paid.
    pub price_paid: f64,
}

/// API request to look up a traveler's receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetReceiptRequest {
    /// The traveler's email address.
    pub email: String,
}

/// A traveler's stored receipt, as returned by the API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReceiptResponse {
    /// Where the journey starts.
    pub origin: String,
    /// Where the journey ends.
    pub destination: String,
    /// The traveler's first name.
    pub first_name: String,
    /// The traveler's last name.
    pub last_name: String,
    /// The traveler's email address.
    pub email: String,
    /// The price paid.
    pub price_paid: f64,
    /// The assigned seat, e.g. `A3`.
    pub seat: String,
}

/// API request to list the occupied seats of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRosterRequest {
    /// The section letter, `A` or `B`.
    pub section: String,
}

/// One occupied seat in a section roster response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatOccupant {
    /// The occupant's first name.
    pub first_name: String,
    /// The occupant's last name.
    pub last_name: String,
    /// The occupant's email address.
    pub email: String,
    /// The occupied seat, e.g. `A3`.
    pub seat: String,
}

/// API response listing the occupied seats of a section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionRosterResponse {
    /// The section letter.
    pub section: String,
    /// The occupants in ascending seat order. Vacant slots are skipped.
    pub occupants: Vec<SeatOccupant>,
}

/// API request to remove a traveler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveUserRequest {
    /// The traveler's email address.
    pub email: String,
}

/// API response for a successful removal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoveUserResponse {
    /// The removed traveler's email address.
    pub email: String,
    /// The seat the removal freed for reuse.
    pub freed_seat: String,
    /// A success message.
    pub message: String,
}

/// API request to move a traveler to a specific seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifySeatRequest {
    /// The traveler's email address.
    pub email: String,
    /// The requested seat, e.g. `B2`.
    pub new_seat: String,
}

/// API response for a successful seat change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModifySeatResponse {
    /// The traveler's email address.
    pub email: String,
    /// The seat the traveler now holds.
    pub seat: String,
    /// A success message.
    pub message: String,
}
