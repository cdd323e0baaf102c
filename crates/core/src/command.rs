// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use railseat_domain::{SeatId, Traveler};

/// A command represents caller intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Purchase a ticket, assigning the best available seat.
    PurchaseTicket {
        /// Where the journey starts.
        origin: String,
        /// Where the journey ends.
        destination: String,
        /// The purchasing traveler.
        traveler: Traveler,
        /// The price paid, stored verbatim.
        price_paid: f64,
    },
    /// Remove a traveler, vacating their seat and deleting their receipt.
    RemoveUser {
        /// The traveler's email.
        email: String,
    },
    /// Move a traveler to a specific seat.
    ModifySeat {
        /// The traveler's email.
        email: String,
        /// The requested seat.
        new_seat: SeatId,
    },
}
