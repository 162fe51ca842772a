//! Encoding a single analyzed cell as a row of the truth table.

use crate::{cells::Classification, stable::StabilityResult};
use auto_enums::auto_enum;
use std::{
    fmt::{self, Display, Formatter},
    iter,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of the classification field.
pub const CLASS_BITS: u32 = 2;
/// Width of the known-living-neighbors field.
pub const KNOWN_ON_BITS: u32 = 3;
/// Width of the unknown-neighbors field.
pub const UNKNOWN_BITS: u32 = 4;
/// Total number of input bits of a row.
pub const INPUT_BITS: usize = (CLASS_BITS + KNOWN_ON_BITS + UNKNOWN_BITS) as usize;
/// Number of stable flags of a row.
pub const FLAG_BITS: usize = 8;
/// Total number of output bits of a row: the flags, then the abort bit.
pub const OUTPUT_BITS: usize = FLAG_BITS + 1;

/// A truth-table output value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputBit {
    /// `0`.
    Zero,
    /// `1`.
    One,
    /// `-`: the minimizer may choose either value.
    DontCare,
}

impl OutputBit {
    /// The concrete value, or `None` for a don't-care.
    pub fn value(self) -> Option<bool> {
        match self {
            OutputBit::Zero => Some(false),
            OutputBit::One => Some(true),
            OutputBit::DontCare => None,
        }
    }
}

impl From<bool> for OutputBit {
    fn from(b: bool) -> Self {
        if b {
            OutputBit::One
        } else {
            OutputBit::Zero
        }
    }
}

impl Display for OutputBit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let c = match self {
            OutputBit::Zero => '0',
            OutputBit::One => '1',
            OutputBit::DontCare => '-',
        };
        write!(f, "{}", c)
    }
}

/// The output bits of a result, flags first and the abort bit last.
#[auto_enum(Iterator)]
fn output_bits(result: StabilityResult) -> impl Iterator<Item = OutputBit> {
    match result {
        StabilityResult::Stable(options) => options
            .to_array()
            .into_iter()
            .map(OutputBit::from)
            .chain(iter::once(OutputBit::Zero)),
        StabilityResult::Abort => iter::repeat(OutputBit::DontCare)
            .take(FLAG_BITS)
            .chain(iter::once(OutputBit::One)),
    }
}

/// One row of the truth table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruthRow {
    /// The classification of the cell.
    pub classification: Classification,
    /// Number of neighbors known to be alive.
    pub known_on: u8,
    /// Number of unknown neighbors.
    pub unknown: u8,
    /// The analyzed result the outputs are encoded from.
    pub result: StabilityResult,
    /// The output bits.
    pub outputs: [OutputBit; OUTPUT_BITS],
}

impl TruthRow {
    /// The input bits packed into an integer, the first input in the highest bit.
    pub fn input_word(&self) -> u16 {
        u16::from(self.classification.bits()) << (KNOWN_ON_BITS + UNKNOWN_BITS)
            | u16::from(self.known_on) << UNKNOWN_BITS
            | u16::from(self.unknown)
    }

    /// The input bits, in table order.
    pub fn inputs(&self) -> [bool; INPUT_BITS] {
        let word = self.input_word();
        let mut inputs = [false; INPUT_BITS];
        for (i, input) in inputs.iter_mut().enumerate() {
            *input = word >> (INPUT_BITS - 1 - i) & 1 == 1;
        }
        inputs
    }

    /// The input bits as a string of `0` and `1`.
    pub fn input_string(&self) -> String {
        format!(
            "{:0cw$b}{:0kw$b}{:0uw$b}",
            self.classification.bits(),
            self.known_on,
            self.unknown,
            cw = CLASS_BITS as usize,
            kw = KNOWN_ON_BITS as usize,
            uw = UNKNOWN_BITS as usize,
        )
    }

    /// The output bits as a string of `0`, `1` and `-`.
    pub fn output_string(&self) -> String {
        self.outputs.iter().map(ToString::to_string).collect()
    }
}

/// Prints the row as `<inputs> <outputs>`.
impl Display for TruthRow {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.input_string(), self.output_string())
    }
}

/// Encodes an analyzed cell as a row.
///
/// An aborted result has don't-care flags and the abort bit set,
/// so it never constrains the minimized circuit.
pub fn encode_row(
    classification: Classification,
    known_on: u8,
    unknown: u8,
    result: StabilityResult,
) -> TruthRow {
    debug_assert!(u32::from(known_on) < 1 << KNOWN_ON_BITS);
    debug_assert!(u32::from(unknown) < 1 << UNKNOWN_BITS);

    let mut outputs = [OutputBit::DontCare; OUTPUT_BITS];
    for (slot, bit) in outputs.iter_mut().zip(output_bits(result)) {
        *slot = bit;
    }
    TruthRow {
        classification,
        known_on,
        unknown,
        result,
        outputs,
    }
}
