//! Rendering covers as bit-sliced update statements.

use super::{Cover, Cube};
use std::fmt::{self, Display, Formatter, Write};

impl Cube {
    /// The product term, e.g. `(~stateunk) & on1`.
    ///
    /// A cube without literals is always true, and renders as `~0`.
    fn product(&self, input_labels: &[String]) -> String {
        let literals: Vec<String> = self
            .inputs
            .iter()
            .zip(input_labels)
            .filter_map(|(literal, name)| match literal {
                Some(true) => Some(name.clone()),
                Some(false) => Some(format!("(~{})", name)),
                None => None,
            })
            .collect();
        if literals.is_empty() {
            String::from("~0")
        } else {
            literals.join(" & ")
        }
    }
}

impl Cover {
    /// Renders the cover as statements on bit-sliced words,
    /// one statement for each cube driving each output:
    ///
    /// ```plaintext
    /// live2 |= (~stateunk) & on1 ;
    /// ```
    ///
    /// The statements are grouped by output, in output order.
    pub fn render_bitwise(&self) -> String {
        let input_labels = self.input_labels();
        let output_labels = self.output_labels();
        let mut str = String::new();
        for (output, name) in output_labels.iter().enumerate() {
            for cube in self.cubes.iter().filter(|cube| cube.outputs[output]) {
                writeln!(str, "{} |= {} ;", name, cube.product(&input_labels)).unwrap();
            }
        }
        str
    }
}

/// Prints the cube as `<inputs> <outputs>`.
impl Display for Cube {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for literal in &self.inputs {
            let c = match literal {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            f.write_char(c)?;
        }
        f.write_char(' ')?;
        for &driven in &self.outputs {
            f.write_char(if driven { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Prints the cover in PLA format, ended by `.e`.
impl Display for Cover {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, ".i {}", self.num_inputs)?;
        writeln!(f, ".o {}", self.num_outputs)?;
        if let Some(labels) = &self.input_labels {
            writeln!(f, ".ilb {}", labels.join(" "))?;
        }
        if let Some(labels) = &self.output_labels {
            writeln!(f, ".ob {}", labels.join(" "))?;
        }
        writeln!(f, ".p {}", self.cubes.len())?;
        for cube in &self.cubes {
            writeln!(f, "{}", cube)?;
        }
        writeln!(f, ".e")
    }
}
