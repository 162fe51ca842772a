//! Stability truth tables for three-valued Life cells.
//!
//! During a search, a cell may be known to be on, known to be off, or unknown.
//! Given how many of its neighbors are known to be on and how many are unknown,
//! this crate decides which neighbor counts the cell can never reach,
//! and writes the answer for every such combination as a truth table
//! for a two-level logic minimizer.
//!
//! ```
//! use lifestable_lib::Config;
//!
//! let table = Config::default().table().unwrap();
//! assert_eq!(table.len(), 130);
//! ```

mod cells;
mod config;
mod cover;
mod error;
mod minimize;
mod row;
mod stable;
mod table;

pub use cells::{AchievableRange, Classification, NeighborSummary};
pub use config::{Config, MAX_KNOWN_ON, MAX_NEIGHBORS};
pub use cover::{Cover, Cube};
pub use error::Error;
pub use minimize::Minimizer;
pub use row::{
    encode_row, OutputBit, TruthRow, CLASS_BITS, FLAG_BITS, INPUT_BITS, KNOWN_ON_BITS,
    OUTPUT_BITS, UNKNOWN_BITS,
};
pub use stable::{analyze, in_domain, StabilityResult, StableOptions};
pub use table::{TruthTable, INPUT_LABELS, OUTPUT_LABELS};
