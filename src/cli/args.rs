use clap::Parser;
use std::path::PathBuf;

use crate::core::counter::DEFAULT_COUNTER_FILE;

/// Collect missing-person records and render them on an interactive map
#[derive(Parser, Debug)]
#[command(name = "missing-persons-mapper")]
#[command(
    about = "Collect missing-person records and render them on an interactive map",
    long_about = None
)]
pub struct CliArgs {
    /// CSV file to import records from instead of prompting interactively
    #[arg(
        long = "input",
        value_name = "FILE",
        help = "CSV file with columns name,latitude,longitude,postal_code,place,country"
    )]
    pub input: Option<PathBuf>,

    /// Directory the numbered map file is saved into
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for the saved map (default: current directory)"
    )]
    pub output_dir: PathBuf,

    /// Path of the persistent run counter file
    #[arg(
        long = "counter-file",
        value_name = "FILE",
        default_value = DEFAULT_COUNTER_FILE,
        help = "Run counter path used to number output files across runs"
    )]
    pub counter_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.input, None);
        assert_eq!(parsed.output_dir, PathBuf::from("."));
        assert_eq!(parsed.counter_file, PathBuf::from("output_counter.txt"));
    }

    #[rstest]
    #[case::input(
        &["program", "--input", "records.csv"],
        Some("records.csv"), ".", "output_counter.txt"
    )]
    #[case::output_dir(
        &["program", "--output-dir", "maps"],
        None, "maps", "output_counter.txt"
    )]
    #[case::counter_file(
        &["program", "--counter-file", "state/counter.txt"],
        None, ".", "state/counter.txt"
    )]
    #[case::all_options(
        &["program", "--input", "records.csv", "--output-dir", "maps", "--counter-file", "c.txt"],
        Some("records.csv"), "maps", "c.txt"
    )]
    fn test_option_parsing(
        #[case] args: &[&str],
        #[case] input: Option<&str>,
        #[case] output_dir: &str,
        #[case] counter_file: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input, input.map(PathBuf::from));
        assert_eq!(parsed.output_dir, PathBuf::from(output_dir));
        assert_eq!(parsed.counter_file, PathBuf::from(counter_file));
    }

    #[rstest]
    #[case::unknown_flag(&["program", "--unknown"])]
    #[case::missing_value(&["program", "--input"])]
    #[case::stray_positional(&["program", "records.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
