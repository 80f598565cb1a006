use clap::error::ErrorKind;
use clap::Parser;
use fingerprinter::cli::{run_fingerprint, FingerprintOptions};
use fingerprinter::export::Format;
use fingerprinter::logging::LogSettings;
use fingerprinter::pipeline::Classifier;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROFILE: &str = env!("FINGERPRINTER_PROFILE");
const GIT_HASH: &str = env!("FINGERPRINTER_GIT_HASH");

#[derive(Parser)]
#[command(name = "fingerprinter")]
#[command(author, about = "Generate a structured fingerprint of a file", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// The file to fingerprint (required unless --version is given)
    file: Option<PathBuf>,

    /// Write the fingerprint to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print diagnostic logging
    #[arg(short, long)]
    verbose: bool,

    /// A note to add to the fingerprint
    #[arg(short, long)]
    note: Option<String>,

    /// Output format (json, yaml, xml, txt)
    #[arg(short, long)]
    format: Option<String>,

    /// Base64-encode the serialized fingerprint (also accepted as -bo)
    #[arg(short = 'b', long = "base64_output", alias = "base64-output")]
    base64_output: bool,

    /// Media type detection (magic, file)
    #[arg(long, default_value = "magic", value_parser = parse_classifier)]
    classifier: Classifier,
}

fn parse_classifier(s: &str) -> Result<Classifier, String> {
    s.parse().map_err(|e| format!("{}", e))
}

/// Rewrite the two-letter `-bo` flag, which clap cannot declare, to its long form
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                arg
            } else if arg == "-bo" {
                OsString::from("--base64_output")
            } else {
                arg
            }
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if cli.version {
        println!("fingerprinter {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    // Validate the format before touching any file
    let format = match cli.format.as_deref().map(str::parse::<Format>).transpose() {
        Ok(format) => format.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(file) = cli.file else {
        use clap::CommandFactory;
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "the file to fingerprint is required")
            .exit();
    };

    let options = FingerprintOptions {
        note: cli.note,
        format,
        base64_output: cli.base64_output,
        output: cli.output,
        classifier: cli.classifier,
    };

    let result = LogSettings::new(cli.verbose).scope(|| run_fingerprint(&file, &options));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_normalize_short_base64_flag() {
        let args = normalize_args(os(&["fingerprinter", "-bo", "input.txt"]));
        assert_eq!(args, os(&["fingerprinter", "--base64_output", "input.txt"]));
    }

    #[test]
    fn test_normalize_stops_at_separator() {
        let args = normalize_args(os(&["fingerprinter", "--", "-bo"]));
        assert_eq!(args, os(&["fingerprinter", "--", "-bo"]));
    }

    #[test]
    fn test_cli_parses_all_options() {
        let cli = Cli::parse_from(normalize_args(os(&[
            "fingerprinter",
            "input.txt",
            "-o",
            "out.yaml",
            "-v",
            "-n",
            "a note",
            "-f",
            "yaml",
            "-bo",
        ])));
        assert_eq!(cli.file, Some(PathBuf::from("input.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.yaml")));
        assert!(cli.verbose);
        assert_eq!(cli.note.as_deref(), Some("a note"));
        assert_eq!(cli.format.as_deref(), Some("yaml"));
        assert!(cli.base64_output);
        assert_eq!(cli.classifier, Classifier::Magic);
    }

    #[test]
    fn test_cli_file_optional_with_version() {
        let cli = Cli::parse_from(os(&["fingerprinter", "-V"]));
        assert!(cli.version);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
