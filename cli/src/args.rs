//! Parsing command-line arguments.

use clap::{
    error::{Error, ErrorKind},
    value_parser, Arg, ArgAction, Command,
};
use lifestable_lib::Config;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// What to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Emit {
    /// The truth table in PLA format.
    Table,
    /// The minimized cover in PLA format.
    Cover,
    /// The minimized cover as bit-sliced statements.
    Bitwise,
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) emit: Emit,
    pub(crate) check: Option<PathBuf>,
    pub(crate) output: Option<PathBuf>,
}

/// Formats of configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

fn parse_config(text: &str, format: Format) -> Result<Config, String> {
    match format {
        Format::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    }
}

fn load_config(path: &Path) -> Result<Config, Error> {
    let invalid = |message: String| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid config file '{}': {}\n", path.display(), message),
        )
    };
    let format = Format::from_path(path)
        .ok_or_else(|| invalid(String::from("expected a .toml, .json or .yaml file")))?;
    let text = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    parse_config(&text, format).map_err(invalid)
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            "Stability truth tables for three-valued Life cells\n\
             \n\
             A cell is either on, off, or unknown. For every count of known living \n\
             cells and unknown cells around it, decides which neighbor counts it \n\
             can never reach, and prints the result as a truth table for the \n\
             Espresso logic minimizer.\n\
             \n\
             Inputs: stateunk stateon on2 on1 on0 unk3 unk2 unk1 unk0\n\
             Outputs: live2 live3 dead0 dead1 dead2 dead4 dead5 dead6 abort\n",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     The format (TOML, JSON or YAML) is chosen by the extension.\n\
                     Other options override the values in the file.\n",
                )
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("MAXON")
                .help("Largest number of known living cells")
                .long("max-on")
                .value_name("N")
                .value_parser(value_parser!(u8).range(0..8)),
        )
        .arg(
            Arg::new("MAXNBHD")
                .help("Neighborhood size")
                .long_help(
                    "Neighborhood size\n\
                     The number of known living cells plus the number of unknown \
                     cells never exceeds this number.\n",
                )
                .long("max-neighbors")
                .value_name("N")
                .value_parser(value_parser!(u8).range(0..16)),
        )
        .arg(
            Arg::new("NOLABELS")
                .help("Omits the .ilb and .ob lines")
                .long("no-labels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("EMIT")
                .help("What to print")
                .long_help(
                    "What to print\n\
                     \"table\" is the truth table.\n\
                     \"cover\" runs the minimizer and prints the minimized cover.\n\
                     \"bitwise\" runs the minimizer and prints the cover as \
                     statements on bit-sliced words.\n\
                     The minimized cover is always checked against the table.\n",
                )
                .short('e')
                .long("emit")
                .value_parser(["table", "cover", "bitwise"])
                .default_value("table"),
        )
        .arg(
            Arg::new("ESPRESSO")
                .help("The minimizer program")
                .long("espresso")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("CHECK")
                .help("Checks a minimized cover against the table")
                .long("check")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("EMIT"),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Writes the result to a file")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(std::env::args_os())?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        if let Some(&max_known_on) = matches.get_one::<u8>("MAXON") {
            config.max_known_on = max_known_on;
        }
        if let Some(&max_neighbors) = matches.get_one::<u8>("MAXNBHD") {
            config.max_neighbors = max_neighbors;
        }
        if matches.get_flag("NOLABELS") {
            config.labels = false;
        }
        if let Some(espresso) = matches.get_one::<String>("ESPRESSO") {
            config.espresso = espresso.clone();
        }

        if let Err(e) = config.check() {
            return Err(command.error(ErrorKind::InvalidValue, e.to_string()));
        }

        let emit = match matches.get_one::<String>("EMIT").map(String::as_str) {
            Some("cover") => Emit::Cover,
            Some("bitwise") => Emit::Bitwise,
            _ => Emit::Table,
        };

        Ok(Args {
            config,
            emit,
            check: matches.get_one::<PathBuf>("CHECK").cloned(),
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn formats() {
        assert_eq!(Format::from_path(Path::new("a.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("a.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.txt")), None);
        assert_eq!(Format::from_path(Path::new("toml")), None);
    }

    #[test]
    fn partial_configs() {
        let config = parse_config("max_known_on = 4\nlabels = false\n", Format::Toml).unwrap();
        assert_eq!(config, Config::new(4, 9).set_labels(false));

        let config = parse_config(r#"{"espresso": "/opt/espresso"}"#, Format::Json).unwrap();
        assert_eq!(config, Config::default().set_espresso("/opt/espresso"));

        let config =
            parse_config("max_neighbors: 8\nespresso_args: [-Dexact]\n", Format::Yaml).unwrap();
        assert_eq!(config, Config::new(6, 8).set_espresso_args(["-Dexact"]));
    }

    #[test]
    fn bad_types() {
        assert!(parse_config("max_known_on = \"six\"\n", Format::Toml).is_err());
        assert!(parse_config("{\"max_neighbors\": -1}", Format::Json).is_err());
    }

    #[test]
    fn check_conflicts_with_emit() {
        let result = command().try_get_matches_from([
            "lifestable",
            "--check",
            "a.pla",
            "--emit",
            "cover",
        ]);
        assert!(result.is_err());
        let result = command().try_get_matches_from(["lifestable", "--check", "a.pla"]);
        assert!(result.is_ok());
    }
}
