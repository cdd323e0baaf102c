// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, get_receipt, list_section, modify_seat, purchase_ticket, remove_user,
};
pub use request_response::{
    GetReceiptRequest, ModifySeatRequest, ModifySeatResponse, PurchaseTicketRequest,
    ReceiptResponse, RemoveUserRequest, RemoveUserResponse, SeatOccupant, SectionRosterRequest,
    SectionRosterResponse,
};
