//! Deciding which neighbor counts a partially known cell can never reach.
//!
//! In a still life, a living cell must have 2 or 3 living neighbors,
//! and a dead cell must not have exactly 3. The counts at which this
//! changes are the *boundaries*. If a boundary lies outside the range of
//! achievable neighbor counts, the cell is stable with respect to it,
//! no matter how its unknown neighbors are eventually resolved.

use crate::{
    cells::{AchievableRange, Classification, NeighborSummary},
    row::{KNOWN_ON_BITS, UNKNOWN_BITS},
};
use from_variants::FromVariants;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// For each boundary, whether it is impossible to reach.
///
/// The fields are listed in the order of the output bits of the table.
/// `live*` are the survival boundaries of a living cell, `dead*` the
/// boundaries of a dead cell other than the birth count 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StableOptions {
    /// A living cell never has exactly 2 living neighbors.
    pub live2: bool,
    /// A living cell never has exactly 3 living neighbors.
    pub live3: bool,
    /// A dead cell never has 0 living neighbors.
    pub dead0: bool,
    /// A dead cell never has exactly 1 living neighbor.
    pub dead1: bool,
    /// A dead cell never has exactly 2 living neighbors.
    pub dead2: bool,
    /// A dead cell never has exactly 4 living neighbors.
    pub dead4: bool,
    /// A dead cell never has exactly 5 living neighbors.
    pub dead5: bool,
    /// A dead cell never has exactly 6 living neighbors.
    pub dead6: bool,
}

impl StableOptions {
    /// Stable with respect to every boundary.
    ///
    /// Boundaries that a classification does not test start from here.
    pub const ALL: Self = StableOptions {
        live2: true,
        live3: true,
        dead0: true,
        dead1: true,
        dead2: true,
        dead4: true,
        dead5: true,
        dead6: true,
    };

    /// Checks the survival boundaries against a range.
    fn live(range: AchievableRange) -> Self {
        StableOptions {
            live2: !range.contains(2),
            live3: !range.contains(3),
            ..Self::ALL
        }
    }

    /// Checks the dead-cell boundaries against a range.
    fn dead(range: AchievableRange) -> Self {
        StableOptions {
            dead0: !range.contains(0),
            dead1: !range.contains(1),
            dead2: !range.contains(2),
            dead4: !range.contains(4),
            dead5: !range.contains(5),
            dead6: !range.contains(6),
            ..Self::ALL
        }
    }

    /// The flags in output-bit order.
    pub fn to_array(self) -> [bool; 8] {
        [
            self.live2, self.live3, self.dead0, self.dead1, self.dead2, self.dead4, self.dead5,
            self.dead6,
        ]
    }
}

/// The outcome of analyzing one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromVariants)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StabilityResult {
    /// The stable flags of a reachable combination.
    Stable(StableOptions),
    /// The combination never occurs, or can never tell us anything.
    ///
    /// The minimizer is free to choose any output for it.
    #[from_variants(skip)]
    Abort,
}

impl StabilityResult {
    /// Whether the result is [`Abort`](StabilityResult::Abort).
    pub fn is_abort(self) -> bool {
        self == StabilityResult::Abort
    }

    /// The stable flags, or `None` for an aborted result.
    pub fn options(self) -> Option<StableOptions> {
        match self {
            StabilityResult::Stable(options) => Some(options),
            StabilityResult::Abort => None,
        }
    }
}

/// Whether the counts fit in the input fields of the table.
pub fn in_domain(known_on: u8, unknown: u8) -> bool {
    u32::from(known_on) < 1 << KNOWN_ON_BITS
        && u32::from(known_on) + u32::from(unknown) < 1 << UNKNOWN_BITS
}

/// Analyzes a cell with `known_on` living neighbors and `unknown`
/// unknown neighbors.
///
/// Any counts that fit the input fields are accepted: up to 7 known living
/// cells, and up to 15 cells in total. A 3×3 block has only 9 cells, but
/// larger neighborhoods can be configured, so totals from 10 to 15 still
/// give a result.
///
/// # Panics
///
/// Panics if the counts do not fit in the input fields of the table.
/// The enumeration never produces such counts.
pub fn analyze(classification: Classification, known_on: u8, unknown: u8) -> StabilityResult {
    assert!(
        in_domain(known_on, unknown),
        "neighbor counts out of range: {} known on, {} unknown",
        known_on,
        unknown
    );
    let range = NeighborSummary::new(known_on, unknown).range(classification);

    match classification {
        Classification::On => {
            if range.upper < 2 || range.lower > 3 {
                return StabilityResult::Abort;
            }
            StableOptions::live(range).into()
        }
        Classification::Off => {
            // Pinned to the birth count: nothing useful can be said.
            if range.lower == 3 && range.upper == 3 {
                return StabilityResult::Abort;
            }
            if range.lower > 6 {
                return StabilityResult::Abort;
            }
            StableOptions::dead(range).into()
        }
        Classification::Unknown => {
            if range.lower > 6 {
                return StabilityResult::Abort;
            }
            let live = StableOptions::live(range);
            StableOptions {
                live2: live.live2,
                live3: live.live3,
                ..StableOptions::dead(range)
            }
            .into()
        }
    }
}
