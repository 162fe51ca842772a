//! Cells and their partially known neighborhoods.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What is currently known about the state of a cell.
///
/// The discriminant is the 2-bit code of the cell in the truth table.
/// The high bit says that the cell is unknown, the low bit that it is on,
/// so the two bits read as `stateunk stateon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Classification {
    /// The cell is known to be dead.
    Off = 0b00,
    /// The cell is known to be alive.
    On = 0b01,
    /// The state of the cell is unknown.
    Unknown = 0b10,
}

impl Classification {
    /// All classifications, in the order their rows are emitted.
    pub const ALL: [Classification; 3] = [
        Classification::Off,
        Classification::On,
        Classification::Unknown,
    ];

    /// The 2-bit code of the classification.
    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Displays the classification the way cells are drawn in a pattern:
///
/// * **Off** cells are represented by `.`;
/// * **On** cells are represented by `o`;
/// * **Unknown** cells are represented by `?`.
impl Display for Classification {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let c = match self {
            Classification::Off => '.',
            Classification::On => 'o',
            Classification::Unknown => '?',
        };
        write!(f, "{}", c)
    }
}

/// Partial knowledge of the neighborhood of a cell.
///
/// The counts themselves are exact; only which of the unknown neighbors
/// will turn out to be alive is uncertain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeighborSummary {
    /// Number of neighbors known to be alive.
    pub known_on: u8,
    /// Number of neighbors whose states are unknown.
    pub unknown: u8,
}

impl NeighborSummary {
    /// Creates a new summary.
    pub fn new(known_on: u8, unknown: u8) -> Self {
        NeighborSummary { known_on, unknown }
    }

    /// The interval of true living-neighbor counts of a cell with the given
    /// classification, once every unknown neighbor is resolved.
    pub fn range(self, classification: Classification) -> AchievableRange {
        let known_on = i32::from(self.known_on);
        let unknown = i32::from(self.unknown);
        match classification {
            // A living center is counted in `known_on` but is not its own neighbor.
            Classification::On => AchievableRange::new(known_on - 1, known_on - 1 + unknown),
            Classification::Off => AchievableRange::new(known_on, known_on + unknown),
            // An unknown center is one of the `unknown` cells.
            Classification::Unknown => AchievableRange::new(known_on, known_on + unknown - 1),
        }
    }
}

/// A closed interval `[lower, upper]` of neighbor counts.
///
/// The interval is empty when `lower > upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AchievableRange {
    /// The smallest possible count.
    pub lower: i32,
    /// The largest possible count.
    pub upper: i32,
}

impl AchievableRange {
    /// Creates a new interval.
    pub fn new(lower: i32, upper: i32) -> Self {
        AchievableRange { lower, upper }
    }

    /// Whether the interval contains no count at all.
    pub fn is_empty(self) -> bool {
        self.lower > self.upper
    }

    /// Whether `count` is a possible neighbor count.
    #[inline]
    pub fn contains(self, count: i32) -> bool {
        self.lower <= count && count <= self.upper
    }
}
