//! Producing the requested output.

use crate::args::{Args, Emit};
use lifestable_lib::{Cover, Error, Minimizer};
use log::info;
use std::fs;

/// The text asked for by the arguments.
fn output_text(args: &Args) -> Result<String, Error> {
    let table = args.config.table()?;

    if let Some(path) = &args.check {
        let cover: Cover = fs::read_to_string(path)?.parse()?;
        cover.verify(&table)?;
        return Ok(format!(
            "{}: {} cubes, agrees with all {} rows\n",
            path.display(),
            cover.cubes().len(),
            table.len()
        ));
    }

    match args.emit {
        Emit::Table => Ok(table.to_string()),
        Emit::Cover | Emit::Bitwise => {
            let cover = Minimizer::from_config(&args.config).minimize(&table)?;
            cover.verify(&table)?;
            if args.emit == Emit::Cover {
                Ok(cover.to_string())
            } else {
                Ok(cover.render_bitwise())
            }
        }
    }
}

/// Builds the table, and prints or writes what was asked for.
pub(crate) fn run(args: Args) -> Result<(), Error> {
    let text = output_text(&args)?;
    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifestable_lib::Config;
    use std::error::Error as StdError;
    use tempfile::tempdir;

    fn args(config: Config, emit: Emit) -> Args {
        Args {
            config,
            emit,
            check: None,
            output: None,
        }
    }

    #[test]
    fn table_to_file() -> Result<(), Box<dyn StdError>> {
        let dir = tempdir()?;
        let path = dir.path().join("table.pla");
        let config = Config::new(1, 1).set_labels(false);
        let mut args = args(config.clone(), Emit::Table);
        args.output = Some(path.clone());
        run(args)?;
        assert_eq!(fs::read_to_string(&path)?, config.table()?.to_string());
        Ok(())
    }

    #[test]
    fn check_agreeing_cover() -> Result<(), Box<dyn StdError>> {
        let dir = tempdir()?;
        let path = dir.path().join("cover.pla");
        let config = Config::new(1, 1);
        fs::write(&path, config.table()?.to_string())?;
        let mut args = args(config, Emit::Table);
        args.check = Some(path.clone());
        assert_eq!(
            output_text(&args)?,
            format!("{}: 5 cubes, agrees with all 5 rows\n", path.display())
        );
        Ok(())
    }

    #[test]
    fn check_disagreeing_cover() -> Result<(), Box<dyn StdError>> {
        let dir = tempdir()?;
        let path = dir.path().join("cover.pla");
        fs::write(&path, ".i 9\n.o 9\n000000000 000000000\n.e\n")?;
        let mut args = args(Config::new(1, 1), Emit::Table);
        args.check = Some(path);
        assert_eq!(
            output_text(&args),
            Err(Error::CoverMismatch {
                row: 0,
                inputs: String::from("000000000"),
                output: 0,
            })
        );
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn bitwise_through_minimizer() -> Result<(), Box<dyn StdError>> {
        let config = Config::new(1, 1).set_espresso("cat");
        let text = output_text(&args(config, Emit::Bitwise))?;
        assert_eq!(
            text.lines().next(),
            Some(
                "live2 |= (~stateunk) & (~stateon) & (~on2) & (~on1) & (~on0) \
                 & (~unk3) & (~unk2) & (~unk1) & (~unk0) ;"
            )
        );
        Ok(())
    }
}
