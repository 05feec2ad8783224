use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::ConvertError;

/// Field separator used when none is given on the command line.
pub const DEFAULT_DELIMITER: &str = "þ";

#[derive(Parser)]
#[command(
    name = "thorn2csv",
    version,
    about = "Convert a delimited text file into a fully quoted CSV file"
)]
struct Cli {
    #[arg(value_name = "SOURCE_FILE", help = "Path to the delimited source file")]
    source: PathBuf,

    #[arg(
        value_name = "DELIMITER",
        default_value = DEFAULT_DELIMITER,
        help = "Single character separating fields in the source file"
    )]
    delimiter: String,

    #[arg(
        value_name = "DESTINATION_FILE",
        help = "Output path, defaults to <SOURCE_FILE>.csv"
    )]
    destination: Option<PathBuf>,
}

/// Everything one conversion needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub delimiter: String,
    pub destination: PathBuf,
}

impl Config {
    /// Resolve a configuration from a full argument list, program name first.
    ///
    /// Nothing is checked beyond presence of the source path; an unusable
    /// delimiter or path is reported by the loader or writer.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::MissingRequiredArgument => ConvertError::MissingArgument("SOURCE_FILE"),
            _ => ConvertError::Usage(err),
        })?;

        let source = cli.source;
        let destination = cli
            .destination
            .unwrap_or_else(|| default_destination(&source));

        Ok(Config {
            source,
            delimiter: cli.delimiter,
            destination,
        })
    }
}

/// `data.txt` becomes `data.txt.csv`; the existing extension is kept.
pub fn default_destination(source: &Path) -> PathBuf {
    let mut destination = source.as_os_str().to_os_string();
    destination.push(".csv");
    PathBuf::from(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    #[test]
    fn source_only_uses_defaults() {
        let config = Config::from_args(["thorn2csv", "data.txt"]).unwrap();

        assert_eq!(
            config,
            Config {
                source: PathBuf::from("data.txt"),
                delimiter: "þ".to_string(),
                destination: PathBuf::from("data.txt.csv"),
            }
        );
    }

    #[test]
    fn explicit_delimiter_keeps_default_destination() {
        let config = Config::from_args(["thorn2csv", "in.tsv", "\t"]).unwrap();

        assert_eq!(config.delimiter, "\t");
        assert_eq!(config.destination, PathBuf::from("in.tsv.csv"));
    }

    #[test]
    fn all_positionals() {
        let config = Config::from_args(["thorn2csv", "in.txt", "|", "out/result.csv"]).unwrap();

        assert_eq!(config.source, PathBuf::from("in.txt"));
        assert_eq!(config.delimiter, "|");
        assert_eq!(config.destination, PathBuf::from("out/result.csv"));
    }

    #[test]
    fn delimiter_length_is_not_checked_here() {
        let config = Config::from_args(["thorn2csv", "in.txt", "||"]).unwrap();
        assert_eq!(config.delimiter, "||");
    }

    #[test]
    fn missing_source_is_missing_argument() {
        let result = Config::from_args(["thorn2csv"]);

        match result {
            Err(ConvertError::MissingArgument(name)) => assert_eq!(name, "SOURCE_FILE"),
            other => panic!("expected MissingArgument, got {:?}", other),
        }
    }

    #[test]
    fn extra_positional_is_a_usage_error() {
        let result = Config::from_args(["thorn2csv", "a", ",", "b", "c"]);
        assert!(matches!(result, Err(ConvertError::Usage(_))));
    }

    #[test]
    fn default_destination_appends_suffix() {
        assert_that(&default_destination(Path::new("dir/export.dat")))
            .is_equal_to(PathBuf::from("dir/export.dat.csv"));
        assert_that(&default_destination(Path::new("noext")))
            .is_equal_to(PathBuf::from("noext.csv"));
    }
}
