//! Running the external two-level minimizer.

use crate::{config::Config, cover::Cover, error::Error, table::TruthTable};
use log::{debug, info, warn};
use std::{
    io::{ErrorKind, Write},
    process::{Command, Stdio},
};

/// Runs an [Espresso](https://en.wikipedia.org/wiki/Espresso_heuristic_logic_minimizer)-compatible
/// program on a truth table.
///
/// The program reads the table in PLA format from its standard input,
/// and writes the minimized cover to its standard output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimizer {
    program: String,
    args: Vec<String>,
}

impl Minimizer {
    /// A minimizer running `program` with `args`.
    pub fn new<S: ToString>(program: S, args: Vec<String>) -> Self {
        Minimizer {
            program: program.to_string(),
            args,
        }
    }

    /// The minimizer set in the configuration.
    pub fn from_config(config: &Config) -> Self {
        Minimizer::new(&config.espresso, config.espresso_args.clone())
    }

    /// Minimizes the table and parses the result.
    pub fn minimize(&self, table: &TruthTable) -> Result<Cover, Error> {
        info!("Running `{}` on {} rows", self.program, table.len());
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::MinimizerFailed(self.program.clone(), e.to_string()))?;

        {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                Error::MinimizerFailed(self.program.clone(), String::from("no stdin"))
            })?;
            // A minimizer that exits early closes the pipe; its exit status says why.
            match stdin.write_all(table.to_string().as_bytes()) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("`{}` closed its input early", self.program)
                }
                result => result?,
            }
        }

        let output = child.wait_with_output()?;
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            warn!("{}: {}", self.program, line);
        }
        if !output.status.success() {
            return Err(Error::MinimizerFailed(
                self.program.clone(),
                output.status.to_string(),
            ));
        }

        let cover: Cover = String::from_utf8_lossy(&output.stdout).parse()?;
        info!("Minimized to {} cubes", cover.cubes().len());
        Ok(cover)
    }
}
