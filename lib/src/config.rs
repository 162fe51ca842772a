//! Table configuration.

use crate::{
    error::Error,
    row::{KNOWN_ON_BITS, UNKNOWN_BITS},
    table::TruthTable,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest number of known living cells that is enumerated.
///
/// The center cell is counted, so a living center with more than 6 living
/// cells in its 3×3 block already has too many neighbors.
pub const MAX_KNOWN_ON: u8 = 6;

/// The number of cells in a 3×3 block, center included.
pub const MAX_NEIGHBORS: u8 = 9;

/// Table configuration.
///
/// The table will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The largest number of known living cells.
    #[educe(Default = 6)]
    pub max_known_on: u8,

    /// The neighborhood size.
    ///
    /// The number of known living cells plus the number of unknown cells
    /// never exceeds this number.
    #[educe(Default = 9)]
    pub max_neighbors: u8,

    /// Whether to name the inputs and outputs with `.ilb` and `.ob` lines.
    #[educe(Default = true)]
    pub labels: bool,

    /// The minimizer program.
    #[educe(Default = "espresso")]
    pub espresso: String,

    /// Extra arguments passed to the minimizer.
    pub espresso_args: Vec<String>,
}

impl Config {
    /// Sets up a new configuration with given bounds.
    pub fn new(max_known_on: u8, max_neighbors: u8) -> Self {
        Config {
            max_known_on,
            max_neighbors,
            ..Config::default()
        }
    }

    /// Sets whether to print labels.
    pub fn set_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the minimizer program.
    pub fn set_espresso<S: ToString>(mut self, espresso: S) -> Self {
        self.espresso = espresso.to_string();
        self
    }

    /// Sets the extra arguments of the minimizer.
    pub fn set_espresso_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.espresso_args = args.into_iter().map(|s| s.to_string()).collect();
        self
    }

    /// Checks that the bounds fit in the fields of the table.
    pub fn check(&self) -> Result<(), Error> {
        if u32::from(self.max_known_on) >= 1 << KNOWN_ON_BITS {
            return Err(Error::BoundTooLarge {
                name: "max_known_on",
                value: self.max_known_on,
                bits: KNOWN_ON_BITS,
            });
        }
        if u32::from(self.max_neighbors) >= 1 << UNKNOWN_BITS {
            return Err(Error::BoundTooLarge {
                name: "max_neighbors",
                value: self.max_neighbors,
                bits: UNKNOWN_BITS,
            });
        }
        if self.max_known_on > self.max_neighbors {
            return Err(Error::KnownOnExceedsNeighbors(
                self.max_known_on,
                self.max_neighbors,
            ));
        }
        Ok(())
    }

    /// Creates the truth table from the configuration.
    /// Returns an error if the bounds are invalid.
    pub fn table(&self) -> Result<TruthTable, Error> {
        self.check()?;
        Ok(TruthTable::enumerate(self))
    }
}
