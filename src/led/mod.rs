//! Flashlight LED subsystem.
//!
//! - **pattern**: the fixed power level → line table
//! - **driver**: owns the output pins and applies patterns to them

pub mod driver;
pub mod pattern;

pub use driver::{LedLine, PinDriver};
pub use pattern::{lines_for_level, Line, LineSet, LINE_COUNT};
