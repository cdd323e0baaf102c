// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seat::SeatId;
use serde::{Deserialize, Serialize};

/// The purchasing traveler's profile.
///
/// Profile fields are stored and returned verbatim. The email address is the
/// uniqueness key for "has this person already purchased".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traveler {
    /// The traveler's first name.
    pub first_name: String,
    /// The traveler's last name.
    pub last_name: String,
    /// The traveler's email address.
    pub email: String,
}

impl Traveler {
    /// Creates a traveler profile.
    ///
    /// # Arguments
    ///
    /// * `first_name` - The traveler's first name
    /// * `last_name` - The traveler's last name
    /// * `email` - The traveler's email address
    #[must_use]
    pub const fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
        }
    }
}

/// A purchase receipt.
///
/// Exactly one receipt exists per traveler email at any time, and its seat
/// always matches the slot that traveler occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Where the journey starts.
    pub origin: String,
    /// Where the journey ends.
    pub destination: String,
    /// The purchasing traveler.
    pub traveler: Traveler,
    /// The price paid. Stored verbatim; never computed on.
    pub price_paid: f64,
    /// The assigned seat.
    pub seat: SeatId,
}
