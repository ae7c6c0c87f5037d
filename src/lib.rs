//! Elapsed time since a birth date, counted in years down to seconds, and
//! the dates on which round-number milestones in each unit fall.

pub mod birth;
pub mod config;
pub mod elapsed;
pub mod engine;
pub mod error;
pub mod options;
pub mod projection;
pub mod render;
pub mod svg;
pub mod unit;

pub use engine::{MilestoneEngine, MilestoneRecord, RecordOrder, Selections};
pub use error::{MilestoneError, Result};
pub use unit::Unit;
