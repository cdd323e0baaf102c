// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::PurchaseTicketRequest;
use crate::{ApiResult, ReceiptResponse, purchase_ticket};
use railseat::State;

pub fn create_test_state() -> State {
    State::new(5, 5)
}

pub fn create_purchase_request(email: &str) -> PurchaseTicketRequest {
    PurchaseTicketRequest {
        origin: String::from("London"),
        destination: String::from("Paris"),
        first_name: String::from("John"),
        last_name: String::from("Doe"),
        email: String::from(email),
        price_paid: 20.0,
    }
}

/// Purchases a ticket that is expected to succeed and returns the new state.
pub fn purchase(state: &State, email: &str) -> State {
    let result: ApiResult<ReceiptResponse> =
        purchase_ticket(state, create_purchase_request(email)).unwrap();
    result.new_state
}
