//! CLI argument definitions for the records tool.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use records_model::{ErrorPolicy, SortStyle};

#[derive(Parser)]
#[command(
    name = "records",
    version,
    about = "Load person records from delimited files and print them sorted",
    long_about = "Load person records from delimited files and print them sorted.\n\n\
                  Each line holds five fields separated by a pipe, a comma or a space:\n\
                  last name, first name, gender, favorite color, date of birth (YYYY-MM-DD)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read record files (or standard input) and print the records sorted.
    Sort(SortArgs),

    /// List the available sort styles.
    Styles,

    /// Serve the record endpoints over HTTP until interrupted.
    Serve(ServeArgs),
}

#[derive(Parser)]
pub struct SortArgs {
    /// Record files to read. Standard input is read when none are given.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// How to sort the records.
    #[arg(long = "sort", value_enum, default_value = "gender-lastname-asc")]
    pub sort: SortStyleArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: OutputFormatArg,

    /// Stop at the first problem instead of reporting all of them.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,
}

impl SortArgs {
    pub fn policy(&self) -> ErrorPolicy {
        if self.fail_fast {
            ErrorPolicy::FailFast
        } else {
            ErrorPolicy::Accumulate
        }
    }
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long = "addr", value_name = "ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,
}

/// CLI sort style choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortStyleArg {
    /// Gender, then last name ascending.
    #[value(name = "gender-lastname-asc")]
    GenderLastNameAsc,
    /// Date of birth ascending.
    #[value(name = "birthdate-asc")]
    BirthdateAsc,
    /// Last name descending.
    #[value(name = "lastname-desc")]
    LastNameDesc,
}

impl From<SortStyleArg> for SortStyle {
    fn from(arg: SortStyleArg) -> Self {
        match arg {
            SortStyleArg::GenderLastNameAsc => SortStyle::GenderLastNameAsc,
            SortStyleArg::BirthdateAsc => SortStyle::BirthdateAsc,
            SortStyleArg::LastNameDesc => SortStyle::LastNameDesc,
        }
    }
}

/// CLI output format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One comma-separated record per line.
    Plain,
    /// Bordered table.
    Table,
    /// JSON array of records.
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
