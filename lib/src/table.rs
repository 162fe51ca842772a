//! The whole truth table, in [Berkeley PLA](https://user.engineering.uiowa.edu/~switchin/OldSwitching/espresso.5.html) format.

use crate::{
    cells::Classification,
    config::Config,
    row::{encode_row, TruthRow, INPUT_BITS, OUTPUT_BITS},
    stable::analyze,
};
use log::{debug, info};
use std::fmt::{self, Display, Formatter};

/// Names of the input bits, in table order.
pub const INPUT_LABELS: [&str; INPUT_BITS] = [
    "stateunk", "stateon", "on2", "on1", "on0", "unk3", "unk2", "unk1", "unk0",
];

/// Names of the output bits, in table order.
pub const OUTPUT_LABELS: [&str; OUTPUT_BITS] = [
    "live2", "live3", "dead0", "dead1", "dead2", "dead4", "dead5", "dead6", "abort",
];

/// The classifications that can occur with the given counts.
///
/// A cell cannot be on without a known living cell in its neighborhood
/// (the cell itself is counted), nor unknown without an unknown one.
fn applicable(known_on: u8, unknown: u8) -> impl Iterator<Item = Classification> {
    Classification::ALL
        .into_iter()
        .filter(move |&classification| match classification {
            Classification::Off => true,
            Classification::On => known_on > 0,
            Classification::Unknown => unknown > 0,
        })
}

/// The truth table handed to the minimizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    /// Whether to print `.ilb` and `.ob` lines.
    labels: bool,
    /// The rows, in enumeration order.
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Enumerates every combination of counts allowed by the configuration.
    ///
    /// The number of known living cells is the outer loop. For each pair of
    /// counts the rows are emitted in the order off, on, unknown.
    pub(crate) fn enumerate(config: &Config) -> Self {
        let mut rows = Vec::new();
        for known_on in 0..=config.max_known_on {
            for unknown in 0..=config.max_neighbors - known_on {
                let start = rows.len();
                for classification in applicable(known_on, unknown) {
                    let result = analyze(classification, known_on, unknown);
                    rows.push(encode_row(classification, known_on, unknown, result));
                }
                debug!(
                    "{} known on, {} unknown: {} rows",
                    known_on,
                    unknown,
                    rows.len() - start
                );
            }
        }
        info!(
            "Enumerated {} rows ({} aborted)",
            rows.len(),
            rows.iter().filter(|row| row.result.is_abort()).count()
        );
        TruthTable {
            labels: config.labels,
            rows,
        }
    }

    /// The rows, in enumeration order.
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `.ilb` and `.ob` lines are printed.
    pub fn has_labels(&self) -> bool {
        self.labels
    }

    /// Finds the row of a combination, if it was enumerated.
    pub fn row(&self, classification: Classification, known_on: u8, unknown: u8) -> Option<&TruthRow> {
        self.rows.iter().find(|row| {
            row.classification == classification && row.known_on == known_on && row.unknown == unknown
        })
    }
}

/// Prints the table in PLA format, ended by `.e`.
impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, ".i {}", INPUT_BITS)?;
        writeln!(f, ".o {}", OUTPUT_BITS)?;
        if self.labels {
            writeln!(f, ".ilb {}", INPUT_LABELS.join(" "))?;
            writeln!(f, ".ob {}", OUTPUT_LABELS.join(" "))?;
        }
        writeln!(f, ".type fr")?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        writeln!(f, ".e")
    }
}
