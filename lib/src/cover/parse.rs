//! Parsing covers in PLA format.

use super::{Cover, Cube};
use crate::error::Error;
use log::debug;
use std::str::FromStr;

fn parse_count(token: Option<&str>, line: usize) -> Result<usize, Error> {
    let token = token.ok_or_else(|| Error::ParsePla {
        line,
        reason: String::from("missing number"),
    })?;
    token.parse().map_err(|_| Error::ParsePla {
        line,
        reason: format!("invalid number `{}`", token),
    })
}

fn parse_inputs(part: &str, line: usize) -> Result<Vec<Option<bool>>, Error> {
    part.chars()
        .map(|c| match c {
            '0' => Ok(Some(false)),
            '1' => Ok(Some(true)),
            '-' | '2' => Ok(None),
            _ => Err(Error::ParsePla {
                line,
                reason: format!("invalid input literal `{}`", c),
            }),
        })
        .collect()
}

fn parse_outputs(part: &str, line: usize) -> Result<Vec<bool>, Error> {
    part.chars()
        .map(|c| match c {
            '1' | '4' => Ok(true),
            '0' | '-' | '~' | '2' | '3' => Ok(false),
            _ => Err(Error::ParsePla {
                line,
                reason: format!("invalid output value `{}`", c),
            }),
        })
        .collect()
}

/// Parses a cover in [Berkeley PLA](https://user.engineering.uiowa.edu/~switchin/OldSwitching/espresso.5.html) format.
///
/// Only the on-set is read: an output value of `1` means the cube drives
/// the output, anything else means it does not.
impl FromStr for Cover {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut num_inputs = None;
        let mut num_outputs = None;
        let mut declared_cubes = None;
        let mut cover = Cover::default();

        for (index, line) in s.lines().enumerate() {
            let line_no = index + 1;
            let err = |reason: &str| Error::ParsePla {
                line: line_no,
                reason: reason.to_string(),
            };
            let content = line.split('#').next().unwrap_or_default().trim();
            let mut tokens = content.split_whitespace();
            let first = match tokens.next() {
                Some(first) => first,
                None => continue,
            };

            if let Some(directive) = first.strip_prefix('.') {
                match directive {
                    "i" => num_inputs = Some(parse_count(tokens.next(), line_no)?),
                    "o" => num_outputs = Some(parse_count(tokens.next(), line_no)?),
                    "p" => declared_cubes = Some(parse_count(tokens.next(), line_no)?),
                    "ilb" => cover.input_labels = Some(tokens.map(String::from).collect()),
                    "ob" => cover.output_labels = Some(tokens.map(String::from).collect()),
                    "e" | "end" => break,
                    _ => debug!("Ignoring `.{}` at line {}", directive, line_no),
                }
                continue;
            }

            let (inputs, outputs) = match (num_inputs, num_outputs) {
                (Some(inputs), Some(outputs)) => (inputs, outputs),
                _ => return Err(err("cube before `.i` and `.o`")),
            };
            let input_part = first;
            let output_part = tokens.next().ok_or_else(|| err("missing output part"))?;
            if tokens.next().is_some() {
                return Err(err("trailing characters after cube"));
            }

            let cube = Cube {
                inputs: parse_inputs(input_part, line_no)?,
                outputs: parse_outputs(output_part, line_no)?,
            };
            if cube.inputs.len() != inputs {
                return Err(err("wrong number of inputs"));
            }
            if cube.outputs.len() != outputs {
                return Err(err("wrong number of outputs"));
            }
            cover.cubes.push(cube);
        }

        let last_line = s.lines().count();
        let err = |reason: &str| Error::ParsePla {
            line: last_line,
            reason: reason.to_string(),
        };
        cover.num_inputs = num_inputs.ok_or_else(|| err("missing `.i`"))?;
        cover.num_outputs = num_outputs.ok_or_else(|| err("missing `.o`"))?;
        if matches!(&cover.input_labels, Some(labels) if labels.len() != cover.num_inputs) {
            return Err(err("`.ilb` does not match `.i`"));
        }
        if matches!(&cover.output_labels, Some(labels) if labels.len() != cover.num_outputs) {
            return Err(err("`.ob` does not match `.o`"));
        }
        if let Some(declared) = declared_cubes {
            if declared != cover.cubes.len() {
                return Err(err(&format!(
                    "`.p` declares {} cubes, found {}",
                    declared,
                    cover.cubes.len()
                )));
            }
        }
        Ok(cover)
    }
}
