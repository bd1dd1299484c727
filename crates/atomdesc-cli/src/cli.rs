use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "atomdesc",
    version,
    about = "Computes per-atom descriptors, Sybyl atom types and topological SPAN metrics for every molecule in an SD file.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Input SD file with one or more molecule records.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the annotated SD file.
    #[arg(value_name = "OUTPUT_SDF")]
    pub output_sdf: PathBuf,

    /// Path for the per-atom CSV table (hydrogens excluded).
    #[arg(value_name = "OUTPUT_CSV")]
    pub output_csv: PathBuf,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Comma-separated descriptor names, in output column order.
    /// Overrides `descriptors.include` from the config file.
    #[arg(short, long, value_name = "NAME,...", value_delimiter = ',')]
    pub descriptors: Option<Vec<String>>,

    /// Text written for values that are undefined for an atom.
    #[arg(long, value_name = "TEXT")]
    pub na_marker: Option<String>,

    /// Quote CSV fields that contain delimiters (titles with commas).
    #[arg(long, overrides_with = "no_quote_titles")]
    pub quote_titles: bool,

    /// Write CSV fields unquoted, even if the config file enables quoting.
    #[arg(long, overrides_with = "quote_titles")]
    pub no_quote_titles: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Quoting choice made on the command line, if any.
    pub fn quote_titles_override(&self) -> Option<bool> {
        if self.quote_titles {
            Some(true)
        } else if self.no_quote_titles {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_positionals() {
        let cli = Cli::try_parse_from(["atomdesc", "in.sdf", "out.sdf", "out.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.sdf"));
        assert_eq!(cli.output_sdf, PathBuf::from("out.sdf"));
        assert_eq!(cli.output_csv, PathBuf::from("out.csv"));
        assert!(cli.descriptors.is_none());
        assert!(!cli.quote_titles);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["atomdesc", "in.sdf", "out.sdf"]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["atomdesc", "a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn descriptor_list_is_split_on_commas() {
        let cli = Cli::try_parse_from([
            "atomdesc",
            "in.sdf",
            "out.sdf",
            "out.csv",
            "-d",
            "AtomDegree,PartialSigmaCharge",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            cli.descriptors,
            Some(vec![
                "AtomDegree".to_string(),
                "PartialSigmaCharge".to_string()
            ])
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn last_quoting_flag_wins() {
        let cli = Cli::try_parse_from(["atomdesc", "a", "b", "c"]).unwrap();
        assert_eq!(cli.quote_titles_override(), None);
        let cli =
            Cli::try_parse_from(["atomdesc", "a", "b", "c", "--quote-titles", "--no-quote-titles"])
                .unwrap();
        assert_eq!(cli.quote_titles_override(), Some(false));
        let cli =
            Cli::try_parse_from(["atomdesc", "a", "b", "c", "--no-quote-titles", "--quote-titles"])
                .unwrap();
        assert_eq!(cli.quote_titles_override(), Some(true));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["atomdesc", "a", "b", "c", "-q", "-v"]);
        assert!(result.is_err());
    }
}
