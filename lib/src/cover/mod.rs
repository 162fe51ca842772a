//! Minimized covers produced by the minimizer.
//!
//! A cover is a list of cubes. Each cube is a product of input literals,
//! and drives some of the outputs. An output is `1` exactly when some cube
//! driving it matches the inputs.

use crate::{
    error::Error,
    row::{INPUT_BITS, OUTPUT_BITS},
    table::{TruthTable, INPUT_LABELS, OUTPUT_LABELS},
};
use log::info;

mod parse;
mod render;

/// A product term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    /// The literal of each input.
    ///
    /// `Some(b)` means the input must equal `b`, `None` means any value.
    pub inputs: Vec<Option<bool>>,

    /// Whether the cube drives each output.
    pub outputs: Vec<bool>,
}

impl Cube {
    /// Whether the cube matches the given inputs.
    pub fn matches(&self, inputs: &[bool]) -> bool {
        self.inputs
            .iter()
            .zip(inputs)
            .all(|(literal, &input)| literal.map_or(true, |b| b == input))
    }
}

/// A sum-of-products cover with multiple outputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    /// Number of inputs.
    pub(crate) num_inputs: usize,
    /// Number of outputs.
    pub(crate) num_outputs: usize,
    /// Names of the inputs, from the `.ilb` line.
    pub(crate) input_labels: Option<Vec<String>>,
    /// Names of the outputs, from the `.ob` line.
    pub(crate) output_labels: Option<Vec<String>>,
    /// The cubes.
    pub(crate) cubes: Vec<Cube>,
}

impl Cover {
    /// Number of inputs.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Number of outputs.
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// The cubes.
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Names of the inputs.
    ///
    /// Falls back to the table's names when the cover has the table's width,
    /// and to `x0`, `x1`, ... otherwise.
    pub fn input_labels(&self) -> Vec<String> {
        labels_or_default(
            &self.input_labels,
            self.num_inputs,
            &INPUT_LABELS,
            "x",
        )
    }

    /// Names of the outputs.
    ///
    /// Falls back to the table's names when the cover has the table's width,
    /// and to `y0`, `y1`, ... otherwise.
    pub fn output_labels(&self) -> Vec<String> {
        labels_or_default(
            &self.output_labels,
            self.num_outputs,
            &OUTPUT_LABELS,
            "y",
        )
    }

    /// Evaluates every output for the given inputs.
    pub fn eval(&self, inputs: &[bool]) -> Vec<bool> {
        let mut outputs = vec![false; self.num_outputs];
        for cube in self.cubes.iter().filter(|cube| cube.matches(inputs)) {
            for (output, &driven) in outputs.iter_mut().zip(&cube.outputs) {
                *output |= driven;
            }
        }
        outputs
    }

    /// Checks that the cover implements the table.
    ///
    /// Every concrete output bit of every row must agree with the cover.
    /// Don't-care bits are not checked.
    pub fn verify(&self, table: &TruthTable) -> Result<(), Error> {
        if self.num_inputs != INPUT_BITS || self.num_outputs != OUTPUT_BITS {
            return Err(Error::WidthMismatch(
                self.num_inputs,
                self.num_outputs,
                INPUT_BITS,
                OUTPUT_BITS,
            ));
        }
        for (index, row) in table.rows().iter().enumerate() {
            let outputs = self.eval(&row.inputs());
            for (output, (expected, &actual)) in row.outputs.iter().zip(&outputs).enumerate() {
                if expected.value().map_or(false, |b| b != actual) {
                    return Err(Error::CoverMismatch {
                        row: index,
                        inputs: row.input_string(),
                        output,
                    });
                }
            }
        }
        info!(
            "The cover ({} cubes) agrees with all {} rows",
            self.cubes.len(),
            table.len()
        );
        Ok(())
    }
}

fn labels_or_default(
    labels: &Option<Vec<String>>,
    width: usize,
    table_labels: &[&str],
    prefix: &str,
) -> Vec<String> {
    match labels {
        Some(labels) => labels.clone(),
        None if width == table_labels.len() => {
            table_labels.iter().map(|s| s.to_string()).collect()
        }
        None => (0..width).map(|i| format!("{}{}", prefix, i)).collect(),
    }
}
