//! email-reflow CLI - rewrap an email body read from stdin.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use email_reflow::{DEFAULT_LINE_LENGTH, DecodeMode, ReflowConfig, reflow_reader};
use tracing::{Level, debug};

fn main() {
    if let Err(err) = try_main() {
        let _ = writeln!(io::stderr(), "{err:?}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = cli.config();
    debug!(line_length = config.line_length, decode = %config.decode, "starting reflow");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    reflow_reader(stdin, stdout, &config).context("failed to reflow stdin")?;
    Ok(())
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Reflow an email body so every line fits, keeping '>' quote levels."
)]
struct Cli {
    /// Maximum line length, quote prefix included
    #[arg(
        short = 'l',
        long = "line_length",
        visible_alias = "line-length",
        value_name = "LENGTH",
        env = "EMAIL_REFLOW_LINE_LENGTH",
        default_value_t = DEFAULT_LINE_LENGTH,
        value_parser = parse_line_length
    )]
    line_length: usize,

    /// What to do with bytes that are not valid UTF-8
    #[arg(long, value_enum, default_value_t = DecodeOption::Drop)]
    decode: DecodeOption,

    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DecodeOption {
    Strict,
    Drop,
    Replace,
}

impl From<DecodeOption> for DecodeMode {
    fn from(option: DecodeOption) -> Self {
        match option {
            DecodeOption::Strict => Self::Strict,
            DecodeOption::Drop => Self::Drop,
            DecodeOption::Replace => Self::Replace,
        }
    }
}

impl Cli {
    fn config(&self) -> ReflowConfig {
        ReflowConfig::with_line_length(self.line_length).decode(self.decode.into())
    }

    const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn parse_line_length(value: &str) -> std::result::Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a whole number"))?;
    if length == 0 {
        return Err("line length must be at least 1".into());
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["email-reflow"]).unwrap();
        let config = cli.config();
        assert_eq!(config.line_length, DEFAULT_LINE_LENGTH);
        assert_eq!(config.decode, DecodeMode::Drop);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_short_and_long_length_flags() {
        let short = Cli::try_parse_from(["email-reflow", "-l", "40"]).unwrap();
        let long = Cli::try_parse_from(["email-reflow", "--line_length=50"]).unwrap();
        let alias = Cli::try_parse_from(["email-reflow", "--line-length", "60"]).unwrap();
        assert_eq!(short.line_length, 40);
        assert_eq!(long.line_length, 50);
        assert_eq!(alias.line_length, 60);
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(Cli::try_parse_from(["email-reflow", "-l", "abc"]).is_err());
        assert!(Cli::try_parse_from(["email-reflow", "-l", "0"]).is_err());
        assert!(Cli::try_parse_from(["email-reflow", "-l", "-5"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let err = Cli::try_parse_from(["email-reflow", "--width", "10"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_decode_option() {
        let cli = Cli::try_parse_from(["email-reflow", "--decode", "strict"]).unwrap();
        assert_eq!(cli.config().decode, DecodeMode::Strict);
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["email-reflow", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
        let cli = Cli::try_parse_from(["email-reflow", "-q"]).unwrap();
        assert_eq!(cli.log_level(), Level::ERROR);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
