use std::path::PathBuf;

use crate::domain::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    SummaryCsv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: OutputFormat,
}

impl Config {
    /// Parses `<actions.csv> [--json]`; `args` excludes the program name.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut output = OutputFormat::default();

        for arg in args {
            match arg.as_str() {
                "--json" => output = OutputFormat::Json,
                flag if flag.starts_with("--") => {
                    return Err(Error::Config(format!("unknown flag {}", flag)));
                }
                path if input.is_none() => input = Some(PathBuf::from(path)),
                extra => {
                    return Err(Error::Config(format!("unexpected argument {}", extra)));
                }
            }
        }

        let input = input.ok_or_else(|| {
            Error::Config("usage: trip_ledger <actions.csv> [--json]".to_string())
        })?;

        Ok(Self { input, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn path_only_defaults_to_csv_summary() {
        let config = Config::from_args(args(&["trip.csv"])).unwrap();
        assert_eq!(config.input, PathBuf::from("trip.csv"));
        assert_eq!(config.output, OutputFormat::SummaryCsv);
    }

    #[test]
    fn json_flag_in_any_position() {
        let config = Config::from_args(args(&["--json", "trip.csv"])).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn rejects_missing_path_and_unknown_flags() {
        assert!(matches!(Config::from_args(args(&[])), Err(Error::Config(_))));
        assert!(matches!(
            Config::from_args(args(&["trip.csv", "--pdf"])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_args(args(&["a.csv", "b.csv"])),
            Err(Error::Config(_))
        ));
    }
}
