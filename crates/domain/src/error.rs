// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seat::SeatId;

/// Errors that can occur while operating the reservation store.
///
/// Each variant is a distinct, caller-visible failure kind. None of them is
/// retried internally; an operation that fails leaves no visible change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The traveler already holds a receipt.
    AlreadyPurchased {
        /// The email that already purchased.
        email: String,
    },
    /// Both sections are at capacity.
    NoSeatsAvailable,
    /// No receipt exists for the given email.
    ReceiptNotFound {
        /// The email with no receipt.
        email: String,
    },
    /// A section other than A or B was requested.
    InvalidSection(String),
    /// A seat identifier names a section other than A or B.
    InvalidSeatSection(String),
    /// A seat identifier's ordinal is not a number in `[1, capacity]`.
    InvalidSeatNumber(String),
    /// The requested seat is occupied by a different traveler.
    SeatTaken {
        /// The contested seat.
        seat: SeatId,
    },
    /// The requested seat is the traveler's current seat.
    SeatUnchanged {
        /// The seat the traveler already holds.
        seat: SeatId,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyPurchased { email } => {
                write!(f, "Traveler '{email}' has already purchased a ticket")
            }
            Self::NoSeatsAvailable => {
                write!(f, "No seats available in either section")
            }
            Self::ReceiptNotFound { email } => {
                write!(f, "No receipt found for traveler '{email}'")
            }
            Self::InvalidSection(msg) => write!(f, "Invalid section: {msg}"),
            Self::InvalidSeatSection(msg) => write!(f, "Invalid seat section: {msg}"),
            Self::InvalidSeatNumber(msg) => write!(f, "Invalid seat number: {msg}"),
            Self::SeatTaken { seat } => {
                write!(f, "Seat {seat} is occupied by another traveler")
            }
            Self::SeatUnchanged { seat } => {
                write!(f, "Traveler already holds seat {seat}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
