// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use railseat::CoreError;
use railseat_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::AlreadyPurchased { email } => ApiError::DomainRuleViolation {
            rule: String::from("one_ticket_per_traveler"),
            message: format!("Traveler '{email}' has already purchased a ticket"),
        },
        DomainError::NoSeatsAvailable => ApiError::DomainRuleViolation {
            rule: String::from("section_capacity"),
            message: String::from("No seats available in either section"),
        },
        DomainError::ReceiptNotFound { email } => ApiError::ResourceNotFound {
            resource_type: String::from("Receipt"),
            message: format!("No receipt found for traveler '{email}'"),
        },
        DomainError::InvalidSection(msg) => ApiError::InvalidInput {
            field: String::from("section"),
            message: msg,
        },
        DomainError::InvalidSeatSection(msg) | DomainError::InvalidSeatNumber(msg) => {
            ApiError::InvalidInput {
                field: String::from("seat"),
                message: msg,
            }
        }
        DomainError::SeatTaken { seat } => ApiError::DomainRuleViolation {
            rule: String::from("seat_vacancy"),
            message: format!("Seat {seat} is occupied by another traveler"),
        },
        DomainError::SeatUnchanged { seat } => ApiError::DomainRuleViolation {
            rule: String::from("seat_must_differ"),
            message: format!("Traveler already holds seat {seat}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
