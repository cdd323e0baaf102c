// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A seating section of the train.
///
/// The train carries exactly two sections, `A` and `B`. Section A is always
/// preferred when a seat is assigned automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Section A.
    A,
    /// Section B.
    B,
}

impl Section {
    /// Converts this section to its letter representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            _ => Err(DomainError::InvalidSection(format!(
                "'{s}' is not a section; sections are A and B"
            ))),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A seat identifier: a section letter plus a 1-based ordinal, e.g. `A3`.
///
/// Ordinals are fixed for the lifetime of a slot. Vacating a seat never
/// renumbers the seats around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId {
    /// The section the seat belongs to.
    section: Section,
    /// The 1-based ordinal within the section.
    number: u8,
}

impl SeatId {
    /// Creates a seat identifier.
    ///
    /// # Arguments
    ///
    /// * `section` - The section the seat belongs to
    /// * `number` - The 1-based ordinal within the section
    #[must_use]
    pub const fn new(section: Section, number: u8) -> Self {
        Self { section, number }
    }

    /// The section this seat belongs to.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// The 1-based ordinal of this seat within its section.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }
}

impl FromStr for SeatId {
    type Err = DomainError;

    /// Parses a seat string such as `A3`.
    ///
    /// The first character must name a section; the remainder must be a
    /// positive integer. Whether the ordinal fits the section's capacity is
    /// not known here and is checked where the capacity is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let section: Section = match s.get(..1) {
            Some("A") => Section::A,
            Some("B") => Section::B,
            _ => {
                return Err(DomainError::InvalidSeatSection(format!(
                    "seat '{s}' does not name section A or B"
                )));
            }
        };

        let number: u8 = s[1..].parse().map_err(|_| {
            DomainError::InvalidSeatNumber(format!(
                "seat '{s}' does not end in a seat number"
            ))
        })?;
        if number == 0 {
            return Err(DomainError::InvalidSeatNumber(format!(
                "seat '{s}' uses ordinal 0; seat ordinals start at 1"
            )));
        }

        Ok(Self { section, number })
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.section, self.number)
    }
}
