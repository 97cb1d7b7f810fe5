//! Crate-level error types.

use std::fmt;

use crate::strand::BeadInstanceId;

/// Errors produced by the beadloop crate.
#[derive(Debug)]
pub enum BeadloopError {
    /// Adding a bead would push the loop past its maximum circumference.
    CapacityExceeded {
        /// Circumference (cm) the loop would have after the rejected add.
        total_cm: f32,
    },
    /// A bead prototype failed validation (bad diameter, price, or id).
    InvalidBead(String),
    /// An operation referenced a bead instance not on the strand.
    NoSuchBead(BeadInstanceId),
    /// Design save / order creation attempted without a signed-in user.
    NotSignedIn,
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Persistence collaborator failure.
    Store(String),
}

impl fmt::Display for BeadloopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { total_cm } => {
                write!(f, "loop capacity exceeded: {total_cm:.1} cm")
            }
            Self::InvalidBead(msg) => write!(f, "invalid bead: {msg}"),
            Self::NoSuchBead(id) => {
                write!(f, "no bead with instance id {id} on the strand")
            }
            Self::NotSignedIn => write!(f, "no signed-in user"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Store(msg) => write!(f, "store error: {msg}"),
        }
    }
}

impl std::error::Error for BeadloopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BeadloopError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
