//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Note that an aborted row is not an error: it is a perfectly valid
/// [`StabilityResult`](crate::StabilityResult).
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// The bound {name} = {value} does not fit in a {bits}-bit field.
    BoundTooLarge {
        /// Name of the bound.
        name: &'static str,
        /// The offending value.
        value: u8,
        /// Width of the field it has to fit in.
        bits: u32,
    },
    /// The maximal number of known living neighbors ({0}) exceeds the neighborhood size ({1}).
    KnownOnExceedsNeighbors(u8, u8),
    /// I/O error: {0}.
    Io(String),
    /// The minimizer `{0}` failed: {1}.
    MinimizerFailed(String, String),
    /// Invalid PLA at line {line}: {reason}.
    ParsePla {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// The cover has {0} inputs and {1} outputs, but the table has {2} inputs and {3} outputs.
    WidthMismatch(usize, usize, usize, usize),
    /// The cover disagrees with row {row} (`{inputs}`) at output {output}.
    CoverMismatch {
        /// 0-indexed position of the row in the table.
        row: usize,
        /// The input bits of the row.
        inputs: String,
        /// 0-indexed position of the output bit.
        output: usize,
    },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
