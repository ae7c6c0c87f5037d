use thiserror::Error;

use crate::unit::Unit;

#[derive(Debug, Error)]
pub enum MilestoneError {
    /// The birth date could not be read.
    #[error("invalid birth date {input:?}: {reason}")]
    InvalidBirthInput { input: String, reason: String },

    /// The birth instant lies after the evaluation instant.
    #[error("birth date {birth} is after {now}")]
    FutureBirthDate { birth: String, now: String },

    /// Adding the target to the birth instant leaves chrono's date range.
    #[error("{target} {unit} from the birth date is out of range")]
    OutOfRange { unit: Unit, target: i64 },

    /// A unit name that matches none of the supported units.
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, MilestoneError>;
